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

//! # Truck Loader
//!
//! The branch-and-bound engine that picks which packages go on a truck.
//!
//! ## Problem
//!
//! Given candidates with positive sizes and a positive truck capacity, find
//! the selection with the highest total size that does not exceed the
//! capacity. Ties on total size are broken in favor of fewer packages, and
//! the exploration order makes the result deterministic for identical input.
//!
//! ## Search
//!
//! Candidates are sorted largest first and each level of the tree branches
//! on one candidate: include it (explored first) or exclude it. Three rules
//! keep the tree small:
//!
//! - Includes that no longer fit are never enqueued.
//! - A subtree is pruned when its optimistic load (current load plus all
//!   remaining candidate sizes) falls strictly below the incumbent. The
//!   strict comparison keeps equal-load selections with fewer packages
//!   reachable.
//! - Once an incumbent fills the truck exactly with the provably minimal
//!   number of packages, the search stops early.
//!
//! The engine reuses its stack and scratch buffers across calls, so a single
//! `TruckLoader` can serve many departures without reallocating.

use crate::{
    candidate::{CandidateIndex, LoadCandidate},
    decision::LoadDecision,
    error::LoaderError,
    monitor::{
        load_search_monitor::{LoadSearchMonitor, PruneReason, SearchCommand},
        no_op::NoOperationMonitor,
    },
    plan::{LoadOutcome, LoadPlan, TerminationReason},
    stack::SearchStack,
    state::SearchState,
    stats::LoaderStatistics,
};
use fixedbitset::FixedBitSet;
use gantry_core::num::storage_numeric::StorageNumeric;
use smallvec::SmallVec;

/// The branch-and-bound truck loading engine.
///
/// The loader owns the decision stack and the per-search scratch buffers.
/// All state is reset between calls; the allocations are kept.
#[derive(Debug, Clone)]
pub struct TruckLoader<T> {
    /// Pending decisions, framed by search depth.
    stack: SearchStack,
    /// The decision applied at each level of the current path.
    applied: Vec<LoadDecision>,
    /// The sorted exploration order of the current search.
    order: Vec<LoadCandidate<T>>,
    /// `suffix_loads[i]` is the saturating sum of all candidate sizes at
    /// positions `i..`, with `suffix_loads[len] == 0`.
    suffix_loads: Vec<T>,
    /// The smallest number of candidates any full-capacity plan can contain,
    /// or `usize::MAX` when the candidates cannot fill the truck.
    min_full_load_count: usize,
}

impl<T> TruckLoader<T> {
    /// Creates a new `TruckLoader` with empty buffers.
    #[inline]
    pub fn new() -> Self {
        Self {
            stack: SearchStack::new(),
            applied: Vec::new(),
            order: Vec::new(),
            suffix_loads: Vec::new(),
            min_full_load_count: usize::MAX,
        }
    }

    /// Creates a `TruckLoader` preallocated for the given candidate count.
    #[inline]
    pub fn preallocated(num_candidates: usize) -> Self {
        Self {
            stack: SearchStack::preallocated(num_candidates),
            applied: Vec::with_capacity(num_candidates),
            order: Vec::with_capacity(num_candidates),
            suffix_loads: Vec::with_capacity(num_candidates.saturating_add(1)),
            min_full_load_count: usize::MAX,
        }
    }
}

impl<T> Default for TruckLoader<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TruckLoader<T>
where
    T: StorageNumeric,
{
    /// Selects the best load for a truck of the given capacity.
    ///
    /// Candidates larger than the capacity are skipped; they can never be
    /// loaded and do not fail the search. Returns an error if the capacity
    /// or any candidate size is not positive.
    pub fn select_load(
        &mut self,
        candidates: &[LoadCandidate<T>],
        capacity: T,
    ) -> Result<LoadOutcome<T>, LoaderError<T>> {
        self.select_load_with_monitor(candidates, capacity, NoOperationMonitor::new())
    }

    /// Selects the best load for a truck of the given capacity, reporting
    /// search events to the monitor.
    ///
    /// The monitor may abort the search; the outcome then carries the best
    /// plan found so far and an `Aborted` termination reason.
    pub fn select_load_with_monitor<S>(
        &mut self,
        candidates: &[LoadCandidate<T>],
        capacity: T,
        mut monitor: S,
    ) -> Result<LoadOutcome<T>, LoaderError<T>>
    where
        S: LoadSearchMonitor<T>,
    {
        self.prepare(candidates, capacity)?;
        let session = LoadSearchSession::new(self, capacity, &mut monitor);
        let outcome = session.run();
        self.reset();
        Ok(outcome)
    }

    /// Validates the input and sets up the exploration order and bounds.
    fn prepare(
        &mut self,
        candidates: &[LoadCandidate<T>],
        capacity: T,
    ) -> Result<(), LoaderError<T>> {
        if capacity <= T::ZERO {
            return Err(LoaderError::InvalidCapacity { capacity });
        }

        self.reset();
        self.order.reserve(candidates.len());
        for candidate in candidates {
            if candidate.size() <= T::ZERO {
                return Err(LoaderError::InvalidCandidate {
                    package: candidate.package(),
                    size: candidate.size(),
                });
            }
            // Candidates larger than the truck can never be loaded; they
            // are left out of the search instead of failing it.
            if candidate.size() <= capacity {
                self.order.push(*candidate);
            }
        }
        self.order.sort_unstable();

        // Suffix sums of candidate sizes, the optimistic lookahead used for
        // bound pruning. Saturation only ever overestimates.
        let num_candidates = self.order.len();
        self.suffix_loads.resize(num_candidates + 1, T::ZERO);
        for position in (0..num_candidates).rev() {
            self.suffix_loads[position] =
                self.suffix_loads[position + 1].saturating_add_val(self.order[position].size());
        }

        // Any selection reaching the capacity must contain at least as many
        // candidates as the shortest prefix of the (descending) order whose
        // sizes sum to the capacity or beyond.
        self.min_full_load_count = usize::MAX;
        let mut running = T::ZERO;
        for (position, candidate) in self.order.iter().enumerate() {
            running = running.saturating_add_val(candidate.size());
            if running >= capacity {
                self.min_full_load_count = position + 1;
                break;
            }
        }

        self.stack.ensure_capacity(num_candidates);
        self.applied.reserve(num_candidates);
        Ok(())
    }

    /// Resets the logical state of the loader, keeping allocations.
    #[inline]
    fn reset(&mut self) {
        self.stack.reset();
        self.applied.clear();
        self.order.clear();
        self.suffix_loads.clear();
        self.min_full_load_count = usize::MAX;
    }
}

/// A single loading search run.
///
/// The session borrows the loader's buffers and owns the incumbent and the
/// statistics of this run.
struct LoadSearchSession<'a, T, S>
where
    T: StorageNumeric,
    S: LoadSearchMonitor<T>,
{
    loader: &'a mut TruckLoader<T>,
    monitor: &'a mut S,
    state: SearchState<T>,
    capacity: T,
    best_selected: FixedBitSet,
    best_total: T,
    best_count: usize,
    stats: LoaderStatistics,
    start_time: std::time::Instant,
}

impl<'a, T, S> LoadSearchSession<'a, T, S>
where
    T: StorageNumeric,
    S: LoadSearchMonitor<T>,
{
    fn new(loader: &'a mut TruckLoader<T>, capacity: T, monitor: &'a mut S) -> Self {
        let num_candidates = loader.order.len();
        Self {
            state: SearchState::new(num_candidates),
            best_selected: FixedBitSet::with_capacity(num_candidates),
            best_total: T::ZERO,
            best_count: 0,
            stats: LoaderStatistics::default(),
            start_time: std::time::Instant::now(),
            capacity,
            loader,
            monitor,
        }
    }

    /// Run the loading search session.
    #[inline]
    fn run(mut self) -> LoadOutcome<T> {
        self.monitor.on_enter_search(&self.loader.order, &self.stats);
        self.initialize();

        let termination_reason = loop {
            if self.full_load_proven() {
                break TerminationReason::OptimalityProven;
            }

            self.monitor.on_step(&self.state, &self.stats);
            if let SearchCommand::Terminate(reason) =
                self.monitor.search_command(&self.state, &self.stats)
            {
                break TerminationReason::Aborted(reason);
            }

            if self.loader.stack.is_current_level_empty() {
                if self.loader.stack.depth() <= 1 {
                    break TerminationReason::OptimalityProven;
                }
                self.backtrack_step();
            } else {
                self.process_next_decision();
            }
        };

        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_search(&self.stats);
        self.finalize(termination_reason)
    }

    /// Sets up the root level. With no candidates the stack stays empty and
    /// the empty plan is optimal.
    fn initialize(&mut self) {
        if self.loader.order.is_empty() {
            return;
        }
        self.loader.stack.push_frame();
        self.stats.on_depth_update(self.loader.stack.depth() as u64);
        self.enqueue_decisions();
    }

    /// Enqueues the decisions for the next undecided position. The exclude
    /// branch is pushed first so the include branch pops first.
    fn enqueue_decisions(&mut self) {
        let position = self.state.num_decided();
        debug_assert!(
            position < self.loader.order.len(),
            "called `LoadSearchSession::enqueue_decisions` past the exploration order: the position is {} but the candidate count is {}",
            position,
            self.loader.order.len()
        );
        let candidate = self.loader.order[position];

        let mut decisions: SmallVec<[LoadDecision; 2]> = SmallVec::new();
        decisions.push(LoadDecision::Exclude(CandidateIndex::new(position)));

        match self.state.total_load().checked_add_val(candidate.size()) {
            Some(loaded) if loaded <= self.capacity => {
                decisions.push(LoadDecision::Include(CandidateIndex::new(position)));
            }
            _ => {
                self.stats.on_pruning_capacity();
                self.monitor
                    .on_prune(&self.state, PruneReason::CapacityExceeded, &self.stats);
            }
        }

        let count = decisions.len();
        self.stats.on_decisions_generated(count as u64);
        self.loader.stack.extend(decisions);
        self.monitor
            .on_decisions_enqueued(&self.state, count, &self.stats);
    }

    /// Process the next decision from the stack.
    fn process_next_decision(&mut self) {
        debug_assert!(
            !self.loader.stack.is_current_level_empty(),
            "called `LoadSearchSession::process_next_decision` with an empty decision level"
        );
        let decision = unsafe { self.loader.stack.pop().unwrap_unchecked() };
        let position = decision.position().get();
        let candidate = self.loader.order[position];

        self.stats.on_node_explored();

        // The load the child state would carry. Enqueue-time feasibility
        // keeps the include addition within capacity and type range.
        let child_load = match decision {
            LoadDecision::Include(_) => {
                debug_assert!(
                    self.state
                        .total_load()
                        .checked_add_val(candidate.size())
                        .is_some(),
                    "called `LoadSearchSession::process_next_decision` with an include that no longer fits"
                );
                self.state.total_load() + candidate.size()
            }
            LoadDecision::Exclude(_) => self.state.total_load(),
        };

        // Bound pruning is strict: a subtree whose optimistic load merely
        // equals the incumbent may still contain an equal load with fewer
        // packages and stays open.
        let lookahead = self.loader.suffix_loads[position + 1];
        let optimistic = child_load.saturating_add_val(lookahead);
        if optimistic < self.best_total {
            self.stats.on_pruning_bound();
            self.monitor
                .on_prune(&self.state, PruneReason::BoundDominated, &self.stats);
            return;
        }

        match decision {
            LoadDecision::Include(_) => self.state.include(position, candidate.size()),
            LoadDecision::Exclude(_) => self.state.exclude(position),
        }
        self.monitor.on_descend(&self.state, decision, &self.stats);

        if self.state.num_decided() == self.loader.order.len() {
            // Leaf: every position is decided. Score it and step back.
            self.evaluate_leaf();
            self.retract(decision);
        } else {
            self.loader.applied.push(decision);
            self.loader.stack.push_frame();
            self.stats.on_depth_update(self.loader.stack.depth() as u64);
            self.enqueue_decisions();
        }
    }

    /// Scores a fully decided selection against the incumbent.
    fn evaluate_leaf(&mut self) {
        let total = self.state.total_load();
        let count = self.state.num_selected();

        // A better plan carries more load; on equal load, fewer packages win.
        let improves =
            total > self.best_total || (total == self.best_total && count < self.best_count);
        if !improves {
            return;
        }

        self.best_total = total;
        self.best_count = count;
        self.best_selected.clone_from(self.state.selection());
        self.stats.on_incumbent_found();
        self.monitor.on_incumbent(&self.state, &self.stats);
    }

    /// Pops the current level and retracts the decision that entered it.
    fn backtrack_step(&mut self) {
        self.monitor.on_backtrack(&self.state, &self.stats);
        self.stats.on_backtrack();
        self.loader.stack.pop_frame();

        debug_assert!(
            !self.loader.applied.is_empty(),
            "called `LoadSearchSession::backtrack_step` with no applied decision on the path"
        );
        if let Some(decision) = self.loader.applied.pop() {
            self.retract(decision);
        }
    }

    /// Undoes a decision against the search state.
    fn retract(&mut self, decision: LoadDecision) {
        let position = decision.position().get();
        match decision {
            LoadDecision::Include(_) => {
                let amount = self.loader.order[position].size();
                self.state.retract_include(position, amount);
            }
            LoadDecision::Exclude(_) => self.state.retract_exclude(position),
        }
    }

    /// Returns `true` once the incumbent fills the truck exactly with the
    /// provably minimal number of packages. No other plan can beat it.
    #[inline]
    fn full_load_proven(&self) -> bool {
        self.best_total == self.capacity && self.best_count <= self.loader.min_full_load_count
    }

    /// Builds the outcome from the incumbent.
    ///
    /// # Note
    ///
    /// This consumes self.
    fn finalize(self, termination_reason: TerminationReason) -> LoadOutcome<T> {
        let mut selected = Vec::with_capacity(self.best_count);
        for position in self.best_selected.ones() {
            selected.push(self.loader.order[position].package());
        }
        let plan = LoadPlan::new(selected, self.best_total, self.capacity);

        match termination_reason {
            TerminationReason::OptimalityProven => LoadOutcome::optimal(plan, self.stats),
            TerminationReason::Aborted(reason) => LoadOutcome::aborted(plan, reason, self.stats),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::node_limit::NodeLimitMonitor;
    use gantry_model::ids::PackageId;

    type IntegerType = i64;

    fn cand(id: usize, tracking: u64, size: IntegerType) -> LoadCandidate<IntegerType> {
        LoadCandidate::new(PackageId::new(id), tracking, size, 0)
    }

    fn cand_with_priority(
        id: usize,
        tracking: u64,
        size: IntegerType,
        priority: IntegerType,
    ) -> LoadCandidate<IntegerType> {
        LoadCandidate::new(PackageId::new(id), tracking, size, priority)
    }

    fn selected_ids(plan: &LoadPlan<IntegerType>) -> Vec<usize> {
        let mut ids: Vec<usize> = plan.selected().iter().map(|p| p.get()).collect();
        ids.sort_unstable();
        ids
    }

    /// Records lifecycle callbacks into a shared log so tests can check the
    /// engine reports events in the expected order. The monitor itself is
    /// consumed by the search; the log outlives it.
    struct RecordingMonitor {
        events: std::rc::Rc<std::cell::RefCell<Vec<&'static str>>>,
    }

    impl LoadSearchMonitor<IntegerType> for RecordingMonitor {
        fn name(&self) -> &str {
            "RecordingMonitor"
        }
        fn on_enter_search(
            &mut self,
            _candidates: &[LoadCandidate<IntegerType>],
            _statistics: &LoaderStatistics,
        ) {
            self.events.borrow_mut().push("enter");
        }
        fn on_exit_search(&mut self, _statistics: &LoaderStatistics) {
            self.events.borrow_mut().push("exit");
        }
        fn on_step(&mut self, _state: &SearchState<IntegerType>, _statistics: &LoaderStatistics) {}
        fn on_prune(
            &mut self,
            _state: &SearchState<IntegerType>,
            _reason: PruneReason,
            _statistics: &LoaderStatistics,
        ) {
        }
        fn on_decisions_enqueued(
            &mut self,
            _state: &SearchState<IntegerType>,
            _count: usize,
            _statistics: &LoaderStatistics,
        ) {
        }
        fn on_descend(
            &mut self,
            _state: &SearchState<IntegerType>,
            _decision: LoadDecision,
            _statistics: &LoaderStatistics,
        ) {
            self.events.borrow_mut().push("descend");
        }
        fn on_backtrack(
            &mut self,
            _state: &SearchState<IntegerType>,
            _statistics: &LoaderStatistics,
        ) {
            self.events.borrow_mut().push("backtrack");
        }
        fn on_incumbent(
            &mut self,
            _state: &SearchState<IntegerType>,
            _statistics: &LoaderStatistics,
        ) {
            self.events.borrow_mut().push("incumbent");
        }
    }

    #[test]
    fn test_empty_candidates_yield_empty_optimal_plan() {
        let mut loader = TruckLoader::new();
        let outcome = loader.select_load(&[], 40).unwrap();
        assert!(outcome.is_optimal());
        assert!(outcome.plan().is_empty());
        assert_eq!(outcome.plan().total_load(), 0);
        assert_eq!(outcome.plan().capacity(), 40);
    }

    #[test]
    fn test_single_candidate_that_fits_is_loaded() {
        let mut loader = TruckLoader::new();
        let outcome = loader.select_load(&[cand(0, 1, 25)], 40).unwrap();
        assert!(outcome.is_optimal());
        assert_eq!(outcome.plan().total_load(), 25);
        assert_eq!(selected_ids(outcome.plan()), vec![0]);
    }

    #[test]
    fn test_oversized_candidate_is_left_behind() {
        let mut loader = TruckLoader::new();
        let outcome = loader.select_load(&[cand(0, 1, 50)], 40).unwrap();
        assert!(outcome.is_optimal());
        assert!(outcome.plan().is_empty());
    }

    #[test]
    fn test_fills_truck_instead_of_greedily_taking_the_largest() {
        // Sizes 5, 7, 8 with capacity 12: taking the 8 first caps out at 8,
        // while 7 + 5 fills the truck exactly.
        let mut loader = TruckLoader::new();
        let candidates = [cand(0, 1, 5), cand(1, 2, 7), cand(2, 3, 8)];
        let outcome = loader.select_load(&candidates, 12).unwrap();

        assert!(outcome.is_optimal());
        assert_eq!(outcome.plan().total_load(), 12);
        assert_eq!(outcome.plan().remaining_capacity(), 0);
        assert_eq!(selected_ids(outcome.plan()), vec![0, 1]);
    }

    #[test]
    fn test_equal_totals_prefer_fewer_packages() {
        // Both {8, 3, 1} and {7, 5} sum to 12; the two-package plan wins.
        let mut loader = TruckLoader::new();
        let candidates = [
            cand(0, 1, 8),
            cand(1, 2, 7),
            cand(2, 3, 5),
            cand(3, 4, 3),
            cand(4, 5, 1),
        ];
        let outcome = loader.select_load(&candidates, 12).unwrap();

        assert!(outcome.is_optimal());
        assert_eq!(outcome.plan().total_load(), 12);
        assert_eq!(outcome.plan().num_packages(), 2);
        assert_eq!(selected_ids(outcome.plan()), vec![1, 2]);
    }

    #[test]
    fn test_takes_everything_when_all_fit() {
        let mut loader = TruckLoader::new();
        let candidates = [cand(0, 1, 2), cand(1, 2, 3), cand(2, 3, 4)];
        let outcome = loader.select_load(&candidates, 20).unwrap();

        assert!(outcome.is_optimal());
        assert_eq!(outcome.plan().total_load(), 9);
        assert_eq!(selected_ids(outcome.plan()), vec![0, 1, 2]);
    }

    #[test]
    fn test_non_positive_capacity_is_rejected() {
        let mut loader = TruckLoader::new();
        let candidates = [cand(0, 1, 5)];
        assert_eq!(
            loader.select_load(&candidates, 0).unwrap_err(),
            LoaderError::InvalidCapacity { capacity: 0 }
        );
        assert_eq!(
            loader.select_load(&candidates, -4).unwrap_err(),
            LoaderError::InvalidCapacity { capacity: -4 }
        );
    }

    #[test]
    fn test_non_positive_candidate_size_is_rejected() {
        let mut loader = TruckLoader::new();
        let candidates = [cand(0, 1, 5), cand(1, 2, 0)];
        assert_eq!(
            loader.select_load(&candidates, 10).unwrap_err(),
            LoaderError::InvalidCandidate {
                package: PackageId::new(1),
                size: 0
            }
        );
    }

    #[test]
    fn test_same_plan_for_permuted_input() {
        let forward = [cand(0, 1, 5), cand(1, 2, 7), cand(2, 3, 8), cand(3, 4, 2)];
        let permuted = [cand(2, 3, 8), cand(3, 4, 2), cand(0, 1, 5), cand(1, 2, 7)];

        let mut loader = TruckLoader::new();
        let first = loader.select_load(&forward, 12).unwrap();
        let second = loader.select_load(&permuted, 12).unwrap();

        assert_eq!(first.plan(), second.plan());
        assert_eq!(first.plan().total_load(), 12);
    }

    #[test]
    fn test_repeated_runs_are_deterministic() {
        let candidates = [
            cand(0, 1, 9),
            cand(1, 2, 13),
            cand(2, 3, 5),
            cand(3, 4, 11),
            cand(4, 5, 3),
            cand(5, 6, 8),
        ];
        let mut loader = TruckLoader::new();
        let first = loader.select_load(&candidates, 24).unwrap();
        let second = loader.select_load(&candidates, 24).unwrap();

        assert_eq!(first.plan(), second.plan());
        assert_eq!(
            first.plan().selected(),
            second.plan().selected(),
            "selection order must be reproducible"
        );
    }

    #[test]
    fn test_size_ties_broken_by_priority_then_tracking() {
        // Only one of the two equally sized packages fits; the higher
        // priority one is explored and locked in first.
        let mut loader = TruckLoader::new();
        let candidates = [
            cand_with_priority(0, 10, 10, 1),
            cand_with_priority(1, 20, 10, 5),
        ];
        let outcome = loader.select_load(&candidates, 10).unwrap();
        assert_eq!(selected_ids(outcome.plan()), vec![1]);

        // Equal priority: the lower tracking number is explored first.
        let candidates = [
            cand_with_priority(0, 42, 10, 1),
            cand_with_priority(1, 7, 10, 1),
        ];
        let outcome = loader.select_load(&candidates, 10).unwrap();
        assert_eq!(selected_ids(outcome.plan()), vec![1]);
    }

    #[test]
    fn test_node_limit_aborts_with_best_incumbent() {
        let candidates = [
            cand(0, 1, 9),
            cand(1, 2, 13),
            cand(2, 3, 5),
            cand(3, 4, 11),
            cand(4, 5, 3),
            cand(5, 6, 8),
        ];
        let mut loader = TruckLoader::new();
        let outcome = loader
            .select_load_with_monitor(&candidates, 24, NodeLimitMonitor::new(3))
            .unwrap();

        assert!(outcome.is_aborted());
        match outcome.termination_reason() {
            TerminationReason::Aborted(reason) => assert_eq!(reason, "node limit reached"),
            other => panic!("expected Aborted, got {:?}", other),
        }
        // Whatever was found so far must still be feasible.
        assert!(outcome.plan().total_load() <= 24);
    }

    #[test]
    fn test_zero_node_budget_returns_empty_plan() {
        let mut loader = TruckLoader::new();
        let outcome = loader
            .select_load_with_monitor(&[cand(0, 1, 5)], 10, NodeLimitMonitor::new(0))
            .unwrap();
        assert!(outcome.is_aborted());
        assert!(outcome.plan().is_empty());
    }

    #[test]
    fn test_loader_is_reusable_across_searches() {
        let mut loader = TruckLoader::preallocated(8);

        let outcome = loader
            .select_load(&[cand(0, 1, 5), cand(1, 2, 7), cand(2, 3, 8)], 12)
            .unwrap();
        assert_eq!(outcome.plan().total_load(), 12);

        let outcome = loader.select_load(&[cand(7, 9, 4)], 40).unwrap();
        assert_eq!(outcome.plan().total_load(), 4);
        assert_eq!(selected_ids(outcome.plan()), vec![7]);
    }

    #[test]
    fn test_statistics_reflect_the_search() {
        let mut loader = TruckLoader::new();
        let candidates = [cand(0, 1, 5), cand(1, 2, 7), cand(2, 3, 8)];
        let outcome = loader.select_load(&candidates, 12).unwrap();

        let stats = outcome.statistics();
        assert!(stats.nodes_explored > 0);
        assert!(stats.decisions_generated > 0);
        assert!(stats.incumbents_found >= 1);
        assert!(stats.max_depth >= 1);
        assert!(stats.prunings_capacity > 0, "8 + 7 cannot both be loaded");
    }

    #[test]
    fn test_monitor_lifecycle_callbacks() {
        let events = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let monitor = RecordingMonitor {
            events: events.clone(),
        };

        let mut loader = TruckLoader::new();
        let candidates = [cand(0, 1, 5), cand(1, 2, 7), cand(2, 3, 8)];
        let outcome = loader
            .select_load_with_monitor(&candidates, 12, monitor)
            .unwrap();
        assert!(outcome.is_optimal());

        let events = events.borrow();
        assert_eq!(events.first(), Some(&"enter"));
        assert_eq!(events.last(), Some(&"exit"));
        assert!(events.contains(&"incumbent"));
        assert!(events.contains(&"descend"));
    }

    #[test]
    fn test_exact_fit_with_minimal_count_stops_early() {
        // The two largest candidates fill the truck exactly, so the search
        // can stop after the first descent chain instead of exploring the
        // rest of the tree.
        let mut loader = TruckLoader::new();
        let candidates = [
            cand(0, 1, 12),
            cand(1, 2, 8),
            cand(2, 3, 6),
            cand(3, 4, 5),
            cand(4, 5, 4),
        ];
        let outcome = loader.select_load(&candidates, 20).unwrap();

        assert!(outcome.is_optimal());
        assert_eq!(outcome.plan().total_load(), 20);
        assert_eq!(outcome.plan().num_packages(), 2);
        assert_eq!(selected_ids(outcome.plan()), vec![0, 1]);
        // 5 candidates would span a tree of up to 2^6 - 1 nodes; the early
        // stop must cut that short.
        assert!(outcome.statistics().nodes_explored < 16);
    }
}
