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

//! # Package Ledger
//!
//! The controller's registry of every package it has ever received. Records
//! are stored column-wise and addressed by [`PackageId`], a dense index
//! assigned in arrival order. A hash map resolves externally visible
//! tracking numbers to ledger identifiers for the lifetime of the *active*
//! package; retiring a package on truck departure frees its tracking number
//! for reuse while the historical record stays in place.
//!
//! The ledger stores states but does not police transitions; the controller
//! owns the state machine.

use crate::error::WarehouseError;
use gantry_core::num::storage_numeric::StorageNumeric;
use gantry_model::ids::{BinId, PackageId};
use gantry_model::package::{Package, PackageState};
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// Column-wise registry of packages, addressed by [`PackageId`].
#[derive(Debug, Clone)]
pub struct PackageLedger<T> {
    packages: Vec<Package<T>>,
    states: Vec<PackageState>,
    bins: Vec<Option<BinId>>,
    by_tracking: FxHashMap<u64, PackageId>,
}

impl<T> PackageLedger<T> {
    /// Creates an empty ledger.
    #[inline]
    pub fn new() -> Self {
        Self {
            packages: Vec::new(),
            states: Vec::new(),
            bins: Vec::new(),
            by_tracking: FxHashMap::default(),
        }
    }

    /// Creates an empty ledger with space for `capacity` packages.
    #[inline]
    pub fn preallocated(capacity: usize) -> Self {
        Self {
            packages: Vec::with_capacity(capacity),
            states: Vec::with_capacity(capacity),
            bins: Vec::with_capacity(capacity),
            by_tracking: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }
}

impl<T> Default for PackageLedger<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PackageLedger<T>
where
    T: StorageNumeric,
{
    /// Returns the number of registered packages, retired ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Returns `true` if no package was ever registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Registers a new package in the `Arrived` state and returns its
    /// ledger identifier.
    ///
    /// Rejects a tracking number that is already bound to an active package;
    /// a failed registration mutates nothing.
    pub fn register(&mut self, package: Package<T>) -> Result<PackageId, WarehouseError<T>> {
        let id = PackageId::new(self.packages.len());
        match self.by_tracking.entry(package.tracking()) {
            Entry::Occupied(_) => Err(WarehouseError::DuplicateTracking {
                tracking: package.tracking(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(id);
                self.packages.push(package);
                self.states.push(PackageState::Arrived);
                self.bins.push(None);
                Ok(id)
            }
        }
    }

    /// Resolves a tracking number to the identifier of the active package
    /// carrying it.
    #[inline]
    pub fn lookup(&self, tracking: u64) -> Option<PackageId> {
        self.by_tracking.get(&tracking).copied()
    }

    /// Returns the immutable attributes of a package.
    #[inline]
    pub fn package(&self, id: PackageId) -> &Package<T> {
        debug_assert!(
            id.get() < self.packages.len(),
            "called `PackageLedger::package` with an unregistered identifier: {}",
            id
        );
        &self.packages[id.get()]
    }

    /// Returns the lifecycle state of a package.
    #[inline]
    pub fn state(&self, id: PackageId) -> PackageState {
        debug_assert!(
            id.get() < self.states.len(),
            "called `PackageLedger::state` with an unregistered identifier: {}",
            id
        );
        self.states[id.get()]
    }

    /// Overwrites the lifecycle state of a package.
    #[inline]
    pub fn set_state(&mut self, id: PackageId, state: PackageState) {
        debug_assert!(
            id.get() < self.states.len(),
            "called `PackageLedger::set_state` with an unregistered identifier: {}",
            id
        );
        self.states[id.get()] = state;
    }

    /// Returns the bin a package is bound to, if any.
    #[inline]
    pub fn bin(&self, id: PackageId) -> Option<BinId> {
        debug_assert!(
            id.get() < self.bins.len(),
            "called `PackageLedger::bin` with an unregistered identifier: {}",
            id
        );
        self.bins[id.get()]
    }

    /// Returns the bin a stored or loaded package is bound to.
    ///
    /// # Panics
    ///
    /// Panics if the package has no bin binding.
    #[inline]
    pub fn bound_bin(&self, id: PackageId) -> BinId {
        self.bin(id)
            .expect("called `PackageLedger::bound_bin` on a package with no bin binding")
    }

    /// Binds a package to a bin. The package must be unbound.
    #[inline]
    pub fn bind_bin(&mut self, id: PackageId, bin: BinId) {
        debug_assert!(
            id.get() < self.bins.len(),
            "called `PackageLedger::bind_bin` with an unregistered identifier: {}",
            id
        );
        debug_assert!(
            self.bins[id.get()].is_none(),
            "called `PackageLedger::bind_bin` on a package that is already bound"
        );
        self.bins[id.get()] = Some(bin);
    }

    /// Retires a package on truck departure: marks it `Shipped`, drops the
    /// bin binding, and frees its tracking number for reuse. The historical
    /// record stays addressable by identifier.
    pub fn retire(&mut self, id: PackageId) {
        debug_assert!(
            id.get() < self.packages.len(),
            "called `PackageLedger::retire` with an unregistered identifier: {}",
            id
        );
        self.states[id.get()] = PackageState::Shipped;
        self.bins[id.get()] = None;
        self.by_tracking.remove(&self.packages[id.get()].tracking());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    #[test]
    fn test_register_assigns_dense_ids_in_arrival_order() {
        let mut ledger = PackageLedger::<IntegerType>::new();
        let first = ledger.register(Package::new(10, 5)).unwrap();
        let second = ledger.register(Package::new(20, 7)).unwrap();

        assert_eq!(first, PackageId::new(0));
        assert_eq!(second, PackageId::new(1));
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.state(first), PackageState::Arrived);
        assert_eq!(ledger.package(second).size(), 7);
    }

    #[test]
    fn test_register_rejects_duplicate_tracking() {
        let mut ledger = PackageLedger::<IntegerType>::new();
        ledger.register(Package::new(10, 5)).unwrap();
        let error = ledger.register(Package::new(10, 9)).unwrap_err();

        assert_eq!(error, WarehouseError::DuplicateTracking { tracking: 10 });
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_lookup_resolves_active_tracking() {
        let mut ledger = PackageLedger::<IntegerType>::new();
        let id = ledger.register(Package::new(42, 3)).unwrap();

        assert_eq!(ledger.lookup(42), Some(id));
        assert_eq!(ledger.lookup(43), None);
    }

    #[test]
    fn test_bind_and_state_round_trip() {
        let mut ledger = PackageLedger::<IntegerType>::new();
        let id = ledger.register(Package::new(1, 12)).unwrap();

        ledger.bind_bin(id, BinId::new(3));
        ledger.set_state(id, PackageState::Stored);

        assert_eq!(ledger.bin(id), Some(BinId::new(3)));
        assert_eq!(ledger.bound_bin(id), BinId::new(3));
        assert_eq!(ledger.state(id), PackageState::Stored);
    }

    #[test]
    fn test_retire_frees_the_tracking_number() {
        let mut ledger = PackageLedger::<IntegerType>::new();
        let id = ledger.register(Package::new(5, 8)).unwrap();
        ledger.bind_bin(id, BinId::new(1));
        ledger.set_state(id, PackageState::Loaded);

        ledger.retire(id);

        assert_eq!(ledger.state(id), PackageState::Shipped);
        assert_eq!(ledger.bin(id), None);
        assert_eq!(ledger.lookup(5), None);

        // The number can be reused by a fresh package.
        let reused = ledger.register(Package::new(5, 2)).unwrap();
        assert_eq!(ledger.lookup(5), Some(reused));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_preallocated_starts_empty() {
        let ledger = PackageLedger::<IntegerType>::preallocated(16);
        assert!(ledger.is_empty());
        assert_eq!(ledger.lookup(1), None);
    }
}
