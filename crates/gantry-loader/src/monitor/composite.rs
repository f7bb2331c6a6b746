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

//! Monitoring combinators for the loading search
//!
//! Provides `CompositeLoadSearchMonitor`, a fan-out monitor that forwards
//! every event to its children. This lets you mix logging and budgets
//! without coupling them to the loader.
//!
//! Behavior
//! - Events are dispatched to child monitors in insertion order.
//! - `search_command` short-circuits on the first non-`Continue` response;
//!   put stricter stop conditions first.
//! - Other callbacks always fan out to all children.

use crate::{
    candidate::LoadCandidate,
    decision::LoadDecision,
    monitor::load_search_monitor::{LoadSearchMonitor, PruneReason, SearchCommand},
    state::SearchState,
    stats::LoaderStatistics,
};
use num_traits::{PrimInt, Signed};

/// A monitor that aggregates multiple monitors and forwards events to all of
/// them. This allows combining different monitoring behaviors into a single
/// monitor.
pub struct CompositeLoadSearchMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    monitors: Vec<Box<dyn LoadSearchMonitor<T> + 'a>>,
}

impl<'a, T> Default for CompositeLoadSearchMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeLoadSearchMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    /// Creates a new empty `CompositeLoadSearchMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeLoadSearchMonitor` with the specified capacity.
    /// This pre-allocates space for the given number of monitors.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Creates a new `CompositeLoadSearchMonitor` from a vector of boxed
    /// monitors.
    #[inline(always)]
    pub fn from_vec(monitors: Vec<Box<dyn LoadSearchMonitor<T> + 'a>>) -> Self {
        Self { monitors }
    }

    /// Adds a new monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: LoadSearchMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a boxed monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn LoadSearchMonitor<T> + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns a slice of the monitors contained in the composite monitor.
    #[inline(always)]
    pub fn monitors(&self) -> &[Box<dyn LoadSearchMonitor<T> + 'a>] {
        &self.monitors
    }

    /// Clears all monitors from the composite monitor.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.monitors.clear();
    }

    /// Returns the number of monitors contained in the composite monitor.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if the composite monitor contains no monitors,
    /// `false` otherwise.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a, T> FromIterator<Box<dyn LoadSearchMonitor<T> + 'a>>
    for CompositeLoadSearchMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    #[inline(always)]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn LoadSearchMonitor<T> + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> LoadSearchMonitor<T> for CompositeLoadSearchMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "CompositeLoadSearchMonitor"
    }

    #[inline(always)]
    fn on_enter_search(&mut self, candidates: &[LoadCandidate<T>], statistics: &LoaderStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_enter_search(candidates, statistics);
        }
    }

    #[inline(always)]
    fn on_exit_search(&mut self, statistics: &LoaderStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_exit_search(statistics);
        }
    }

    #[inline(always)]
    fn search_command(
        &mut self,
        state: &SearchState<T>,
        statistics: &LoaderStatistics,
    ) -> SearchCommand {
        for monitor in &mut self.monitors {
            let cmd = monitor.search_command(state, statistics);
            // Short-circuit on the first non-Continue command
            if !matches!(cmd, SearchCommand::Continue) {
                return cmd;
            }
        }
        SearchCommand::Continue
    }

    #[inline(always)]
    fn on_step(&mut self, state: &SearchState<T>, statistics: &LoaderStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_step(state, statistics);
        }
    }

    #[inline(always)]
    fn on_prune(
        &mut self,
        state: &SearchState<T>,
        reason: PruneReason,
        statistics: &LoaderStatistics,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_prune(state, reason, statistics);
        }
    }

    #[inline(always)]
    fn on_decisions_enqueued(
        &mut self,
        state: &SearchState<T>,
        count: usize,
        statistics: &LoaderStatistics,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_decisions_enqueued(state, count, statistics);
        }
    }

    #[inline(always)]
    fn on_descend(
        &mut self,
        state: &SearchState<T>,
        decision: LoadDecision,
        statistics: &LoaderStatistics,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_descend(state, decision, statistics);
        }
    }

    #[inline(always)]
    fn on_backtrack(&mut self, state: &SearchState<T>, statistics: &LoaderStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_backtrack(state, statistics);
        }
    }

    #[inline(always)]
    fn on_incumbent(&mut self, state: &SearchState<T>, statistics: &LoaderStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_incumbent(state, statistics);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::{no_op::NoOperationMonitor, node_limit::NodeLimitMonitor};

    type IntegerType = i64;

    #[test]
    fn test_empty_composite_continues() {
        let mut composite: CompositeLoadSearchMonitor<IntegerType> =
            CompositeLoadSearchMonitor::new();
        assert!(composite.is_empty());
        let state: SearchState<IntegerType> = SearchState::new(0);
        assert_eq!(
            composite.search_command(&state, &LoaderStatistics::default()),
            SearchCommand::Continue
        );
    }

    #[test]
    fn test_add_and_count_monitors() {
        let mut composite: CompositeLoadSearchMonitor<IntegerType> =
            CompositeLoadSearchMonitor::with_capacity(2);
        composite.add_monitor(NoOperationMonitor::new());
        composite.add_monitor_boxed(Box::new(NodeLimitMonitor::new(100)));
        assert_eq!(composite.len(), 2);
        assert!(!composite.is_empty());
        composite.clear();
        assert!(composite.is_empty());
    }

    #[test]
    fn test_short_circuits_on_first_terminate() {
        let mut composite: CompositeLoadSearchMonitor<IntegerType> =
            CompositeLoadSearchMonitor::new();
        composite.add_monitor(NodeLimitMonitor::new(0));
        composite.add_monitor(NoOperationMonitor::new());

        let state: SearchState<IntegerType> = SearchState::new(0);
        match composite.search_command(&state, &LoaderStatistics::default()) {
            SearchCommand::Terminate(reason) => assert!(reason.contains("node limit")),
            other => panic!("expected Terminate, got {:?}", other),
        }
    }

    #[test]
    fn test_from_iterator_collects_monitors() {
        let boxed: Vec<Box<dyn LoadSearchMonitor<IntegerType>>> = vec![
            Box::new(NoOperationMonitor::new()),
            Box::new(NoOperationMonitor::new()),
        ];
        let composite: CompositeLoadSearchMonitor<IntegerType> = boxed.into_iter().collect();
        assert_eq!(composite.len(), 2);
    }
}
