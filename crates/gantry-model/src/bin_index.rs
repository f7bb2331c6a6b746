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

//! # Bin Index (Best-Fit Allocation)
//!
//! The capacity-sorted view over all storage bins. The index answers
//! best-fit queries (the bin with the smallest available capacity that still
//! satisfies a requested size) and performs the checked `reserve`/`release`
//! mutations that keep every bin inside its capacity invariant.
//!
//! ## Motivation
//!
//! Best-fit placement degenerates to a linear scan when bins are kept in an
//! unordered list, and the sort key (available capacity) changes on every
//! mutation. The index therefore maintains an ordered set keyed by
//! `(available, id)` alongside the dense bin records: queries and mutations
//! are `O(log N)`, and the identifier component makes ties deterministic
//! (lowest bin identifier wins).
//!
//! ## Highlights
//!
//! - `from_seed` bulk-loads and validates the full bin layout before the
//!   first query (fail-fast: duplicates and non-positive capacities are
//!   rejected).
//! - `find_best_fit` never returns a bin whose available capacity is below
//!   the requested size.
//! - `reserve` and `release` are checked even for trusted callers; a failed
//!   check mutates nothing.
//!
//! ## Usage
//!
//! ```rust
//! use gantry_model::bin_index::BinIndex;
//! use gantry_model::ids::BinId;
//! use gantry_model::seed::SeedBin;
//!
//! let index = BinIndex::from_seed(vec![
//!     SeedBin::new(BinId::new(1), 10i64, "A1"),
//!     SeedBin::new(BinId::new(2), 20i64, "A2"),
//!     SeedBin::new(BinId::new(3), 15i64, "B1"),
//! ])
//! .unwrap();
//!
//! // Smallest available capacity that still fits 12 is bin 3 (15).
//! let best = index.find_best_fit(12).unwrap();
//! assert_eq!(best, BinId::new(3));
//! ```

use std::collections::BTreeSet;

use crate::bin::BinRecord;
use crate::error::BinIndexError;
use crate::ids::BinId;
use crate::seed::{SeedBin, SeedError};
use gantry_core::num::ops::checked_arithmetic::{CheckedAddVal, CheckedSubVal};
use gantry_core::num::ops::saturating_arithmetic::SaturatingAddVal;
use gantry_core::num::storage_numeric::StorageNumeric;

/// The capacity-sorted bin index.
///
/// Bin records are stored densely, ordered by identifier; the ordered
/// `(available, id)` set is kept in lock-step by every mutation. Bins are
/// created once at initialization and never removed during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinIndex<T> {
    /// All bins, sorted ascending by identifier.
    records: Vec<BinRecord<T>>,
    /// Ordered view keyed by (available capacity, identifier).
    by_availability: BTreeSet<(T, BinId)>,
}

impl<T> BinIndex<T>
where
    T: StorageNumeric,
{
    /// Bulk-loads the initial bin layout and establishes the sorted
    /// structure before the first query.
    ///
    /// The input order is arbitrary. Fails with [`SeedError::DuplicateBin`]
    /// if two records share an identifier and with
    /// [`SeedError::InvalidCapacity`] if a capacity is not positive.
    pub fn from_seed(seed: Vec<SeedBin<T>>) -> Result<Self, SeedError<T>> {
        let mut records = Vec::with_capacity(seed.len());
        for entry in seed {
            let (id, capacity, location) = entry.into_parts();
            if capacity <= T::ZERO {
                return Err(SeedError::InvalidCapacity { bin: id, capacity });
            }
            records.push(BinRecord::new(id, capacity, location));
        }
        records.sort_unstable_by_key(|r| r.id());
        for pair in records.windows(2) {
            if pair[0].id() == pair[1].id() {
                return Err(SeedError::DuplicateBin { bin: pair[0].id() });
            }
        }
        let by_availability = records.iter().map(|r| (r.available(), r.id())).collect();
        Ok(Self {
            records,
            by_availability,
        })
    }

    /// Returns the number of bins in the index.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the index holds no bins.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record for the given bin, if it exists.
    #[inline]
    pub fn bin(&self, bin: BinId) -> Option<&BinRecord<T>> {
        self.slot_of(bin).map(|slot| &self.records[slot])
    }

    /// Returns `true` if the bin is part of the index.
    #[inline]
    pub fn contains(&self, bin: BinId) -> bool {
        self.slot_of(bin).is_some()
    }

    /// Iterates over all bin records in ascending identifier order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &BinRecord<T>> {
        self.records.iter()
    }

    /// Returns the bin with the smallest available capacity that is still
    /// at least `size`. Ties are broken by the lowest bin identifier.
    ///
    /// Fails with [`BinIndexError::NotFound`] when no bin fits and with
    /// [`BinIndexError::InvalidAmount`] for a non-positive size.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gantry_model::bin_index::BinIndex;
    /// use gantry_model::ids::BinId;
    /// use gantry_model::seed::default_seed;
    ///
    /// let index = BinIndex::from_seed(default_seed()).unwrap();
    /// assert_eq!(index.find_best_fit(60).unwrap(), BinId::new(2));
    /// ```
    pub fn find_best_fit(&self, size: T) -> Result<BinId, BinIndexError<T>> {
        if size <= T::ZERO {
            return Err(BinIndexError::InvalidAmount { amount: size });
        }
        self.by_availability
            .range((size, BinId::new(0))..)
            .next()
            .map(|&(_, bin)| bin)
            .ok_or(BinIndexError::NotFound { size })
    }

    /// Increases the usage of a bin by `amount`.
    ///
    /// Fails with [`BinIndexError::Overflow`] if the new usage would exceed
    /// the bin capacity. The check runs even when the caller previously
    /// queried `find_best_fit`; a failed reserve mutates nothing.
    pub fn reserve(&mut self, bin: BinId, amount: T) -> Result<(), BinIndexError<T>> {
        if amount <= T::ZERO {
            return Err(BinIndexError::InvalidAmount { amount });
        }
        let slot = self
            .slot_of(bin)
            .ok_or(BinIndexError::UnknownBin { bin })?;
        let record = &self.records[slot];
        let new_usage = match record.usage().checked_add_val(amount) {
            Some(usage) if usage <= record.capacity() => usage,
            _ => {
                return Err(BinIndexError::Overflow {
                    bin,
                    capacity: record.capacity(),
                    usage: record.usage(),
                    amount,
                });
            }
        };
        self.update_usage(slot, new_usage);
        Ok(())
    }

    /// Decreases the usage of a bin by `amount`.
    ///
    /// Fails with [`BinIndexError::Underflow`] if the new usage would drop
    /// below zero. A failed release mutates nothing.
    pub fn release(&mut self, bin: BinId, amount: T) -> Result<(), BinIndexError<T>> {
        if amount <= T::ZERO {
            return Err(BinIndexError::InvalidAmount { amount });
        }
        let slot = self
            .slot_of(bin)
            .ok_or(BinIndexError::UnknownBin { bin })?;
        let record = &self.records[slot];
        let new_usage = match record.usage().checked_sub_val(amount) {
            Some(usage) if usage >= T::ZERO => usage,
            _ => {
                return Err(BinIndexError::Underflow {
                    bin,
                    usage: record.usage(),
                    amount,
                });
            }
        };
        self.update_usage(slot, new_usage);
        Ok(())
    }

    /// Locates a bin record by identifier via binary search.
    #[inline]
    fn slot_of(&self, bin: BinId) -> Option<usize> {
        self.records.binary_search_by(|r| r.id().cmp(&bin)).ok()
    }

    /// Writes the new usage and moves the bin inside the ordered view.
    fn update_usage(&mut self, slot: usize, new_usage: T) {
        let old_key = (self.records[slot].available(), self.records[slot].id());
        let removed = self.by_availability.remove(&old_key);
        debug_assert!(
            removed,
            "ordered view out of sync for {}",
            self.records[slot].id()
        );
        self.records[slot].set_usage(new_usage);
        let new_key = (self.records[slot].available(), self.records[slot].id());
        let inserted = self.by_availability.insert(new_key);
        debug_assert!(
            inserted,
            "ordered view already contains {:?}",
            new_key
        );
    }
}

impl<T> std::fmt::Display for BinIndex<T>
where
    T: StorageNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let available = self
            .records
            .iter()
            .fold(T::ZERO, |acc, r| acc.saturating_add_val(r.available()));
        write!(
            f,
            "BinIndex(bins: {}, available: {})",
            self.records.len(),
            available
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bi(id: usize) -> BinId {
        BinId::new(id)
    }

    // The three-bin layout exercised throughout: capacities 10, 20, 15.
    fn index() -> BinIndex<i64> {
        BinIndex::from_seed(vec![
            SeedBin::new(bi(1), 10, "A1"),
            SeedBin::new(bi(2), 20, "A2"),
            SeedBin::new(bi(3), 15, "B1"),
        ])
        .expect("seed must load")
    }

    #[test]
    fn test_from_seed_accepts_unsorted_input() {
        let index = BinIndex::from_seed(vec![
            SeedBin::new(bi(5), 500i64, "C1"),
            SeedBin::new(bi(1), 50, "A1"),
            SeedBin::new(bi(3), 150, "B1"),
        ])
        .expect("seed must load");
        let ids: Vec<BinId> = index.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![bi(1), bi(3), bi(5)]);
    }

    #[test]
    fn test_from_seed_rejects_duplicate_bin() {
        let result = BinIndex::from_seed(vec![
            SeedBin::new(bi(1), 10i64, "A1"),
            SeedBin::new(bi(1), 20, "A2"),
        ]);
        assert_eq!(result.unwrap_err(), SeedError::DuplicateBin { bin: bi(1) });
    }

    #[test]
    fn test_from_seed_rejects_non_positive_capacity() {
        let result = BinIndex::from_seed(vec![SeedBin::new(bi(7), 0i64, "A1")]);
        assert_eq!(
            result.unwrap_err(),
            SeedError::InvalidCapacity {
                bin: bi(7),
                capacity: 0
            }
        );
    }

    #[test]
    fn test_best_fit_picks_smallest_sufficient_bin() {
        let index = index();
        // 15 is the smallest capacity that still fits 12.
        assert_eq!(index.find_best_fit(12).unwrap(), bi(3));
        assert_eq!(index.find_best_fit(10).unwrap(), bi(1));
        assert_eq!(index.find_best_fit(16).unwrap(), bi(2));
    }

    #[test]
    fn test_best_fit_prefers_lowest_id_on_tie() {
        let index = BinIndex::from_seed(vec![
            SeedBin::new(bi(4), 10i64, "B2"),
            SeedBin::new(bi(2), 10, "A2"),
        ])
        .expect("seed must load");
        assert_eq!(index.find_best_fit(5).unwrap(), bi(2));
    }

    #[test]
    fn test_best_fit_not_found() {
        let index = index();
        assert_eq!(
            index.find_best_fit(25).unwrap_err(),
            BinIndexError::NotFound { size: 25 }
        );
    }

    #[test]
    fn test_best_fit_rejects_non_positive_size() {
        let index = index();
        assert_eq!(
            index.find_best_fit(0).unwrap_err(),
            BinIndexError::InvalidAmount { amount: 0 }
        );
    }

    #[test]
    fn test_best_fit_tracks_usage() {
        let mut index = index();
        index.reserve(bi(3), 12).unwrap();
        // Bin 3 now offers 3; a second 12 must land on bin 2.
        assert_eq!(index.find_best_fit(12).unwrap(), bi(2));
        // And the residual 3 on bin 3 is still the tightest fit for 3.
        assert_eq!(index.find_best_fit(3).unwrap(), bi(3));
    }

    #[test]
    fn test_reserve_overflow_is_checked() {
        let mut index = index();
        let err = index.reserve(bi(3), 20).unwrap_err();
        assert_eq!(
            err,
            BinIndexError::Overflow {
                bin: bi(3),
                capacity: 15,
                usage: 0,
                amount: 20
            }
        );
        // A failed reserve mutates nothing.
        assert_eq!(index.bin(bi(3)).unwrap().usage(), 0);
        assert_eq!(index.find_best_fit(12).unwrap(), bi(3));
    }

    #[test]
    fn test_release_underflow_is_checked() {
        let mut index = index();
        let err = index.release(bi(1), 1).unwrap_err();
        assert_eq!(
            err,
            BinIndexError::Underflow {
                bin: bi(1),
                usage: 0,
                amount: 1
            }
        );
        assert_eq!(index.bin(bi(1)).unwrap().usage(), 0);
    }

    #[test]
    fn test_reserve_release_round_trip() {
        let mut index = index();
        index.reserve(bi(3), 12).unwrap();
        assert_eq!(index.bin(bi(3)).unwrap().usage(), 12);
        index.release(bi(3), 12).unwrap();
        assert_eq!(index.bin(bi(3)).unwrap().usage(), 0);
        // The best-fit answer is restored exactly.
        assert_eq!(index.find_best_fit(12).unwrap(), bi(3));
    }

    #[test]
    fn test_unknown_bin() {
        let mut index = index();
        assert_eq!(
            index.reserve(bi(9), 1).unwrap_err(),
            BinIndexError::UnknownBin { bin: bi(9) }
        );
        assert_eq!(
            index.release(bi(9), 1).unwrap_err(),
            BinIndexError::UnknownBin { bin: bi(9) }
        );
        assert!(index.bin(bi(9)).is_none());
        assert!(!index.contains(bi(9)));
    }

    #[test]
    fn test_usage_stays_inside_bounds_across_sequences() {
        let mut index = index();
        index.reserve(bi(2), 7).unwrap();
        index.reserve(bi(2), 7).unwrap();
        // Third reserve would exceed the capacity of 20.
        assert!(index.reserve(bi(2), 7).is_err());
        index.release(bi(2), 14).unwrap();
        for record in index.iter() {
            assert!(record.usage() >= 0);
            assert!(record.usage() <= record.capacity());
        }
        assert_eq!(index.bin(bi(2)).unwrap().usage(), 0);
    }

    #[test]
    fn test_display() {
        let mut index = index();
        index.reserve(bi(1), 4).unwrap();
        assert_eq!(format!("{}", index), "BinIndex(bins: 3, available: 41)");
    }

    #[test]
    fn test_empty_index() {
        let index: BinIndex<i64> = BinIndex::from_seed(Vec::new()).expect("empty seed is valid");
        assert!(index.is_empty());
        assert_eq!(
            index.find_best_fit(1).unwrap_err(),
            BinIndexError::NotFound { size: 1 }
        );
    }
}
