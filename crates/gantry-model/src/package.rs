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

//! # Package Attributes and Lifecycle
//!
//! A package is identified by its tracking number and carries a positive size
//! plus an optional priority used only as a deterministic tie-break during
//! loading candidate ordering. The lifecycle state machine is:
//!
//! ```text
//! Arrived -> Stored -> Loaded <-> Stored (rollback) -> Shipped
//! ```
//!
//! The attributes here are immutable; the warehouse controller owns the
//! state transitions.

use gantry_core::num::storage_numeric::StorageNumeric;

/// The lifecycle state of a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageState {
    /// Registered and waiting in the intake queue (or escalated).
    Arrived,
    /// Bound to a bin; its size is reserved against that bin.
    Stored,
    /// Committed to the staged truck; the bin reservation is retained so a
    /// rollback restores the exact prior state.
    Loaded,
    /// Departed with the truck; terminal.
    Shipped,
}

impl std::fmt::Display for PackageState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PackageState::Arrived => "Arrived",
            PackageState::Stored => "Stored",
            PackageState::Loaded => "Loaded",
            PackageState::Shipped => "Shipped",
        };
        write!(f, "{}", name)
    }
}

/// The immutable attributes of a package.
///
/// # Examples
///
/// ```rust
/// use gantry_model::package::Package;
///
/// let plain = Package::new(1, 12i64);
/// assert_eq!(plain.priority(), 0);
///
/// let urgent = Package::with_priority(2, 12i64, 5);
/// assert_eq!(urgent.priority(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Package<T> {
    tracking: u64,
    size: T,
    priority: T,
}

impl<T> Package<T>
where
    T: StorageNumeric,
{
    /// Creates a package with the default (zero) priority.
    #[inline]
    pub fn new(tracking: u64, size: T) -> Self {
        Self {
            tracking,
            size,
            priority: T::ZERO,
        }
    }

    /// Creates a package with an explicit priority. Higher priorities are
    /// preferred among equally sized loading candidates.
    #[inline]
    pub fn with_priority(tracking: u64, size: T, priority: T) -> Self {
        Self {
            tracking,
            size,
            priority,
        }
    }

    /// Returns the tracking number.
    #[inline]
    pub fn tracking(&self) -> u64 {
        self.tracking
    }

    /// Returns the package size.
    #[inline]
    pub fn size(&self) -> T {
        self.size
    }

    /// Returns the priority (zero when none was assigned).
    #[inline]
    pub fn priority(&self) -> T {
        self.priority
    }
}

impl<T> std::fmt::Display for Package<T>
where
    T: StorageNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PKG-{}(size: {})", self.tracking, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_priority_to_zero() {
        let package = Package::new(1, 12i64);
        assert_eq!(package.tracking(), 1);
        assert_eq!(package.size(), 12);
        assert_eq!(package.priority(), 0);
    }

    #[test]
    fn test_with_priority() {
        let package = Package::with_priority(2, 7i64, 3);
        assert_eq!(package.priority(), 3);
    }

    #[test]
    fn test_state_display() {
        assert_eq!(format!("{}", PackageState::Arrived), "Arrived");
        assert_eq!(format!("{}", PackageState::Stored), "Stored");
        assert_eq!(format!("{}", PackageState::Loaded), "Loaded");
        assert_eq!(format!("{}", PackageState::Shipped), "Shipped");
    }

    #[test]
    fn test_package_display() {
        let package = Package::new(9, 40i64);
        assert_eq!(format!("{}", package), "PKG-9(size: 40)");
    }
}
