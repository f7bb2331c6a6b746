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

//! # Bin Record
//!
//! The per-bin storage record tracked by the bin index: a fixed identifier,
//! a fixed capacity, the current usage, and an opaque location code. The
//! capacity is immutable for the lifetime of the bin; only usage changes,
//! and only through the index's checked `reserve`/`release` operations.

use crate::ids::BinId;
use gantry_core::num::storage_numeric::StorageNumeric;

/// A single storage bin.
///
/// Invariant: `T::ZERO <= usage <= capacity` at all times. The record itself
/// cannot be constructed or mutated outside the bin index, which enforces
/// the invariant on every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinRecord<T> {
    id: BinId,
    capacity: T,
    usage: T,
    location: String,
}

impl<T> BinRecord<T>
where
    T: StorageNumeric,
{
    /// Creates a new bin record with zero usage.
    ///
    /// In debug builds, panics if the capacity is not positive. Release
    /// callers are expected to validate through seed loading first.
    #[inline]
    pub(crate) fn new(id: BinId, capacity: T, location: String) -> Self {
        debug_assert!(
            capacity > T::ZERO,
            "called `BinRecord::new` with non-positive capacity: {}",
            capacity
        );
        Self {
            id,
            capacity,
            usage: T::ZERO,
            location,
        }
    }

    /// Returns the bin identifier.
    #[inline]
    pub fn id(&self) -> BinId {
        self.id
    }

    /// Returns the fixed capacity of the bin.
    #[inline]
    pub fn capacity(&self) -> T {
        self.capacity
    }

    /// Returns the current usage of the bin.
    #[inline]
    pub fn usage(&self) -> T {
        self.usage
    }

    /// Returns the available capacity (capacity minus usage).
    #[inline]
    pub fn available(&self) -> T {
        debug_assert!(
            self.usage >= T::ZERO && self.usage <= self.capacity,
            "bin usage out of bounds: the capacity is {} but the usage is {}",
            self.capacity,
            self.usage
        );
        self.capacity - self.usage
    }

    /// Returns the opaque location code of the bin.
    #[inline]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns `true` if nothing is stored in the bin.
    #[inline]
    pub fn is_unused(&self) -> bool {
        self.usage == T::ZERO
    }

    /// Overwrites the usage. Callers must have verified the bin invariant.
    #[inline]
    pub(crate) fn set_usage(&mut self, usage: T) {
        debug_assert!(
            usage >= T::ZERO && usage <= self.capacity,
            "bin usage out of bounds: the capacity is {} but the usage is {}",
            self.capacity,
            usage
        );
        self.usage = usage;
    }
}

impl<T> std::fmt::Display for BinRecord<T>
where
    T: StorageNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(location: {}, usage: {}/{})",
            self.id, self.location, self.usage, self.capacity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: usize, capacity: i64) -> BinRecord<i64> {
        BinRecord::new(BinId::new(id), capacity, format!("L{}", id))
    }

    #[test]
    fn test_new_record_is_unused() {
        let bin = record(1, 50);
        assert_eq!(bin.id(), BinId::new(1));
        assert_eq!(bin.capacity(), 50);
        assert_eq!(bin.usage(), 0);
        assert_eq!(bin.available(), 50);
        assert_eq!(bin.location(), "L1");
        assert!(bin.is_unused());
    }

    #[test]
    fn test_set_usage_updates_available() {
        let mut bin = record(2, 100);
        bin.set_usage(40);
        assert_eq!(bin.usage(), 40);
        assert_eq!(bin.available(), 60);
        assert!(!bin.is_unused());
    }

    #[test]
    fn test_display() {
        let mut bin = record(3, 150);
        bin.set_usage(12);
        assert_eq!(format!("{}", bin), "Bin(3)(location: L3, usage: 12/150)");
    }
}
