// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Load Candidates
//!
//! Input records for the truck loading search. A [`LoadCandidate`] names a
//! stored package together with the attributes the search branches on: its
//! size, its priority, and its tracking number.
//!
//! Candidates carry a deterministic total order (largest size first, then
//! highest priority, then lowest tracking number) so that sorting a candidate
//! list always yields the same exploration order for the same input.

use gantry_core::utils::index::{TypedIndex, TypedIndexTag};
use gantry_model::ids::PackageId;

/// Tag type for candidate positions in the sorted exploration order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct CandidateIndexTag;

impl TypedIndexTag for CandidateIndexTag {
    const NAME: &'static str = "Candidate";
}

/// Index of a candidate in the loader's sorted exploration order.
///
/// Candidate indices are positions in a per-search ordering and are not
/// stable across searches; use [`LoadCandidate::package`] to refer back to
/// the warehouse.
pub type CandidateIndex = TypedIndex<CandidateIndexTag>;

/// A package offered to the truck loading search.
///
/// The `package` identifier ties the candidate back to the warehouse ledger,
/// while `tracking` is the externally visible tracking number used as the
/// deterministic tie-breaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadCandidate<T> {
    // Field order keeps the two `T` values (8 bytes for i64) in front of
    // the usize-sized package index to minimize padding.
    size: T,
    priority: T,
    tracking: u64,
    package: PackageId,
}

impl<T> LoadCandidate<T> {
    /// Creates a new `LoadCandidate`.
    #[inline(always)]
    pub fn new(package: PackageId, tracking: u64, size: T, priority: T) -> Self {
        Self {
            size,
            priority,
            tracking,
            package,
        }
    }

    /// Returns the warehouse ledger identifier of the package.
    #[inline(always)]
    pub fn package(&self) -> PackageId {
        self.package
    }

    /// Returns the tracking number of the package.
    #[inline(always)]
    pub fn tracking(&self) -> u64 {
        self.tracking
    }
}

impl<T> LoadCandidate<T>
where
    T: Copy,
{
    /// Returns the size of the package.
    #[inline(always)]
    pub fn size(&self) -> T {
        self.size
    }

    /// Returns the priority of the package.
    #[inline(always)]
    pub fn priority(&self) -> T {
        self.priority
    }
}

impl<T> PartialOrd for LoadCandidate<T>
where
    T: PartialOrd + Ord,
{
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for LoadCandidate<T>
where
    T: Ord,
{
    /// Exploration order: descending size, then descending priority, then
    /// ascending tracking number, then the package identifier as the final
    /// tie-breaker.
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .size
            .cmp(&self.size)
            .then_with(|| other.priority.cmp(&self.priority))
            .then_with(|| self.tracking.cmp(&other.tracking))
            .then_with(|| self.package.cmp(&other.package))
    }
}

impl<T> std::fmt::Display for LoadCandidate<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Candidate(package: {}, tracking: {}, size: {}, priority: {})",
            self.package, self.tracking, self.size, self.priority
        )
    }
}
