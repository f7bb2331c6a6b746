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

//! # Warehouse Controller
//!
//! The single coordination point of the warehouse. The controller owns the
//! bin index, the package ledger, the intake queue, the loading history and
//! the truck loading engine; every mutation passes through its `&mut self`
//! entry points, so compound operations (find a bin, then reserve it;
//! select a load, then commit it) are atomic with respect to other callers.
//!
//! ## Package lifecycle
//!
//! ```text
//! Arrived -> Stored -> Loaded <-> Stored (rollback) -> Shipped
//! ```
//!
//! Committing a load keeps the package's bin usage reserved
//! (committed-to-load): the package sits on the staged truck while the bin
//! still accounts for it, so rolling the load back only re-binds the
//! package without touching bin occupancy. Usage is released when the truck
//! departs, which also retires the shipped packages and clears the history.
//!
//! ## Event emission
//!
//! Every store, load and rollback is reported to the shipment log sink with
//! a sequence number from a single monotonic counter that is never reset.
//! A load commit shares one sequence number between its rollback record and
//! its `LOADED` shipment event, since both describe the same transition.
//! Sink failures are counted and logged, never propagated: the in-memory
//! state stays authoritative.

use crate::{
    error::WarehouseError,
    history::LoadingHistory,
    intake::IntakeQueue,
    ledger::PackageLedger,
    report::{DepartureReport, IntakeDrainReport, IntakeOutcome, LoadReport, RollbackReport},
    sink::ShipmentLogSink,
    status::WarehouseStatus,
};
use chrono::Utc;
use gantry_core::num::storage_numeric::StorageNumeric;
use gantry_loader::{
    candidate::LoadCandidate,
    loader::TruckLoader,
    monitor::{load_search_monitor::LoadSearchMonitor, no_op::NoOperationMonitor},
};
use gantry_model::{
    bin_index::BinIndex,
    error::BinIndexError,
    event::{LoadEvent, ShipmentEvent, ShipmentStatus},
    ids::{BinId, PackageId},
    package::{Package, PackageState},
    seed::{SeedBin, SeedError},
};

/// What to do with a package no bin can hold.
///
/// Either way the package is handled explicitly; it is never dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NoFitPolicy {
    /// Return the package to the back of the intake queue.
    #[default]
    Requeue,
    /// Park the package in the escalation buffer until the caller requeues
    /// it explicitly.
    Escalate,
}

/// The warehouse coordination facade.
///
/// Constructed once from seed data and passed by reference to all callers.
/// The controller is `Send`; callers that share it across threads wrap it
/// in their own exclusive lock.
#[derive(Debug)]
pub struct WarehouseController<T, S> {
    bins: BinIndex<T>,
    ledger: PackageLedger<T>,
    intake: IntakeQueue,
    history: LoadingHistory<T>,
    escalated: Vec<PackageId>,
    loader: TruckLoader<T>,
    sink: S,
    policy: NoFitPolicy,
    next_sequence: u64,
    sink_failures: u64,
}

impl<T, S> WarehouseController<T, S>
where
    T: StorageNumeric,
    S: ShipmentLogSink,
{
    /// Creates a controller over the seeded bins with the default
    /// [`NoFitPolicy::Requeue`] policy.
    pub fn new(seed: Vec<SeedBin<T>>, sink: S) -> Result<Self, SeedError<T>> {
        Self::with_policy(seed, sink, NoFitPolicy::default())
    }

    /// Creates a controller over the seeded bins with an explicit no-fit
    /// policy.
    pub fn with_policy(
        seed: Vec<SeedBin<T>>,
        sink: S,
        policy: NoFitPolicy,
    ) -> Result<Self, SeedError<T>> {
        let bins = BinIndex::from_seed(seed)?;
        Ok(Self {
            bins,
            ledger: PackageLedger::new(),
            intake: IntakeQueue::new(),
            history: LoadingHistory::new(),
            escalated: Vec::new(),
            loader: TruckLoader::new(),
            sink,
            policy,
            next_sequence: 1,
            sink_failures: 0,
        })
    }

    /// Returns the configured no-fit policy.
    #[inline]
    pub fn policy(&self) -> NoFitPolicy {
        self.policy
    }

    /// Returns the bin index.
    #[inline]
    pub fn bins(&self) -> &BinIndex<T> {
        &self.bins
    }

    /// Returns the number of packages waiting in the intake queue.
    #[inline]
    pub fn intake_len(&self) -> usize {
        self.intake.len()
    }

    /// Returns the number of staged load events.
    #[inline]
    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    /// Returns the shipment log sink.
    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the number of events the sink failed to append.
    #[inline]
    pub fn sink_failures(&self) -> u64 {
        self.sink_failures
    }

    /// Registers a package with the default (zero) priority and enqueues it
    /// for bin assignment.
    pub fn receive_package(
        &mut self,
        tracking: u64,
        size: T,
    ) -> Result<PackageId, WarehouseError<T>> {
        self.receive_package_with_priority(tracking, size, T::ZERO)
    }

    /// Registers a package with an explicit loading priority and enqueues
    /// it for bin assignment.
    ///
    /// Rejects non-positive sizes and tracking numbers already carried by
    /// an active package; a rejected package is not enqueued.
    pub fn receive_package_with_priority(
        &mut self,
        tracking: u64,
        size: T,
        priority: T,
    ) -> Result<PackageId, WarehouseError<T>> {
        if size <= T::ZERO {
            return Err(WarehouseError::InvalidSize { tracking, size });
        }
        let id = self
            .ledger
            .register(Package::with_priority(tracking, size, priority))?;
        self.intake.enqueue(id);
        Ok(id)
    }

    /// Takes one package from the front of the intake queue and stores it
    /// in the best-fitting bin.
    ///
    /// When no bin has enough available capacity, the configured
    /// [`NoFitPolicy`] decides between requeueing and escalating; both are
    /// explicit outcomes. An empty queue yields
    /// [`IntakeOutcome::QueueEmpty`].
    pub fn process_intake(&mut self) -> Result<IntakeOutcome, WarehouseError<T>> {
        let Some(id) = self.intake.dequeue() else {
            return Ok(IntakeOutcome::QueueEmpty);
        };
        let package = self.ledger.package(id);
        let tracking = package.tracking();
        let size = package.size();

        match self.bins.find_best_fit(size) {
            Ok(bin) => {
                self.bins.reserve(bin, size)?;
                self.ledger.bind_bin(id, bin);
                self.ledger.set_state(id, PackageState::Stored);
                let sequence = self.advance_sequence();
                self.emit(sequence, tracking, bin, ShipmentStatus::Stored);
                Ok(IntakeOutcome::Stored { tracking, bin })
            }
            Err(BinIndexError::NotFound { .. }) => match self.policy {
                NoFitPolicy::Requeue => {
                    self.intake.enqueue(id);
                    Ok(IntakeOutcome::Requeued { tracking })
                }
                NoFitPolicy::Escalate => {
                    self.escalated.push(id);
                    Ok(IntakeOutcome::Escalated { tracking })
                }
            },
            Err(error) => Err(WarehouseError::Bins(error)),
        }
    }

    /// Processes every package queued at call time exactly once.
    ///
    /// A package the no-fit policy returns to the queue is counted as
    /// requeued but not processed again within the same drain.
    pub fn drain_intake(&mut self) -> Result<IntakeDrainReport, WarehouseError<T>> {
        let pending = self.intake.len();
        let mut report = IntakeDrainReport::default();
        for _ in 0..pending {
            match self.process_intake()? {
                IntakeOutcome::Stored { .. } => report.stored += 1,
                IntakeOutcome::Requeued { .. } => report.requeued += 1,
                IntakeOutcome::Escalated { .. } => report.escalated += 1,
                IntakeOutcome::QueueEmpty => break,
            }
        }
        Ok(report)
    }

    /// Selects and commits the best load for a truck of the given capacity.
    pub fn load_truck(&mut self, truck_capacity: T) -> Result<LoadReport<T>, WarehouseError<T>> {
        self.load_truck_with_monitor(truck_capacity, NoOperationMonitor::new())
    }

    /// Selects and commits the best load for a truck of the given capacity,
    /// reporting search events to the monitor.
    ///
    /// All currently stored packages are candidates. Each selected package
    /// transitions to `Loaded` and pushes a rollback record; its bin usage
    /// stays reserved until the truck departs.
    pub fn load_truck_with_monitor<M>(
        &mut self,
        truck_capacity: T,
        monitor: M,
    ) -> Result<LoadReport<T>, WarehouseError<T>>
    where
        M: LoadSearchMonitor<T>,
    {
        // 1. Gather all stored packages as candidates.
        let mut candidates = Vec::with_capacity(self.ledger.len());
        for index in 0..self.ledger.len() {
            let id = PackageId::new(index);
            if self.ledger.state(id) == PackageState::Stored {
                let package = self.ledger.package(id);
                candidates.push(LoadCandidate::new(
                    id,
                    package.tracking(),
                    package.size(),
                    package.priority(),
                ));
            }
        }

        // 2. Run the loading search.
        let outcome = self
            .loader
            .select_load_with_monitor(&candidates, truck_capacity, monitor)?;

        // 3. Commit the plan. Bin usage is deliberately not released here;
        //    the reservation stands until departure so a rollback restores
        //    the exact pre-load state.
        let plan = outcome.plan();
        let mut loaded = Vec::with_capacity(plan.num_packages());
        for &id in plan.selected() {
            let package = self.ledger.package(id);
            let tracking = package.tracking();
            let size = package.size();
            let bin = self.ledger.bound_bin(id);
            let sequence = self.advance_sequence();
            self.history.push(LoadEvent::new(sequence, id, bin, size));
            self.ledger.set_state(id, PackageState::Loaded);
            self.emit(sequence, tracking, bin, ShipmentStatus::Loaded);
            loaded.push(tracking);
        }

        Ok(LoadReport::new(
            loaded,
            plan.total_load(),
            plan.capacity(),
            outcome.termination_reason().clone(),
            outcome.statistics().clone(),
        ))
    }

    /// Reverses the most recent load commit.
    ///
    /// The package returns to `Stored` in its recorded bin. Bin usage needs
    /// no adjustment because loading kept the reservation. An empty history
    /// yields [`WarehouseError::NothingToRollback`] and mutates nothing.
    pub fn rollback_load(&mut self) -> Result<RollbackReport<T>, WarehouseError<T>> {
        let Some(event) = self.history.pop() else {
            return Err(WarehouseError::NothingToRollback);
        };
        let id = event.package();
        debug_assert_eq!(
            self.ledger.state(id),
            PackageState::Loaded,
            "the package of the most recent load event must be in the Loaded state"
        );
        debug_assert_eq!(
            self.ledger.bin(id),
            Some(event.bin()),
            "the recorded bin of a load event must match the package's bin binding"
        );

        self.ledger.set_state(id, PackageState::Stored);
        let tracking = self.ledger.package(id).tracking();
        let sequence = self.advance_sequence();
        self.emit(
            sequence,
            tracking,
            event.bin(),
            ShipmentStatus::UnloadedRollback,
        );
        Ok(RollbackReport::new(tracking, event.bin(), event.amount()))
    }

    /// Departs the staged truck: ships every loaded package, releases its
    /// bin reservation and clears the loading history.
    ///
    /// Shipped packages leave active tracking; their tracking numbers may
    /// be reused by future arrivals. Nothing is rollback-eligible after a
    /// departure, and the event sequence keeps increasing.
    pub fn depart_truck(&mut self) -> Result<DepartureReport<T>, WarehouseError<T>> {
        let mut shipped = Vec::with_capacity(self.history.len());
        let mut total_released = T::ZERO;
        for event in self.history.iter() {
            let id = event.package();
            self.bins.release(event.bin(), event.amount())?;
            shipped.push(self.ledger.package(id).tracking());
            self.ledger.retire(id);
            total_released = total_released.saturating_add_val(event.amount());
        }
        self.history.clear();
        Ok(DepartureReport::new(shipped, total_released))
    }

    /// Returns a point-in-time snapshot of the warehouse.
    pub fn status(&self) -> WarehouseStatus<T> {
        WarehouseStatus::new(
            self.bins.iter().cloned().collect(),
            self.intake.len(),
            self.history.len(),
            self.escalated
                .iter()
                .map(|&id| self.ledger.package(id).tracking())
                .collect(),
        )
    }

    /// Returns the lifecycle state of the active package carrying the
    /// tracking number.
    pub fn package_state(&self, tracking: u64) -> Result<PackageState, WarehouseError<T>> {
        let id = self
            .ledger
            .lookup(tracking)
            .ok_or(WarehouseError::UnknownTracking { tracking })?;
        Ok(self.ledger.state(id))
    }

    /// Iterates over the tracking numbers parked in the escalation buffer,
    /// in escalation order.
    pub fn escalated(&self) -> impl Iterator<Item = u64> + '_ {
        self.escalated
            .iter()
            .map(|&id| self.ledger.package(id).tracking())
    }

    /// Moves every escalated package back to the intake queue, preserving
    /// escalation order, and returns how many were requeued.
    pub fn requeue_escalated(&mut self) -> usize {
        let count = self.escalated.len();
        for id in self.escalated.drain(..) {
            self.intake.enqueue(id);
        }
        count
    }

    /// Hands out the next event sequence number. The counter spans the
    /// controller's whole lifetime and is never reset.
    #[inline]
    fn advance_sequence(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        sequence
    }

    /// Reports a state transition to the shipment log sink.
    fn emit(&mut self, sequence: u64, tracking: u64, bin: BinId, status: ShipmentStatus) {
        let event = ShipmentEvent::new(sequence, tracking, bin, Utc::now(), status);
        if let Err(error) = self.sink.append(&event) {
            self.sink_failures += 1;
            log::warn!("shipment log sink rejected event {}: {}", sequence, error);
        }
    }
}
