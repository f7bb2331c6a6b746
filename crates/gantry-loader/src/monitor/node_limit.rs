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

//! # Node Limit Monitor
//!
//! A monitor that enforces a budget on the number of search nodes explored.
//! Once the statistics report at least `max_nodes` explored nodes, the
//! monitor requests termination; the loader then returns the best plan found
//! so far with an `Aborted` termination reason.

use crate::{
    candidate::LoadCandidate,
    decision::LoadDecision,
    monitor::load_search_monitor::{LoadSearchMonitor, PruneReason, SearchCommand},
    state::SearchState,
    stats::LoaderStatistics,
};
use num_traits::{PrimInt, Signed};

/// A monitor that terminates the search after a fixed number of explored
/// nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeLimitMonitor<T>
where
    T: PrimInt + Signed,
{
    max_nodes: u64,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> NodeLimitMonitor<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new `NodeLimitMonitor` with the given node budget.
    #[inline]
    pub fn new(max_nodes: u64) -> Self {
        Self {
            max_nodes,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns the node budget.
    #[inline]
    pub fn max_nodes(&self) -> u64 {
        self.max_nodes
    }
}

impl<T> LoadSearchMonitor<T> for NodeLimitMonitor<T>
where
    T: PrimInt + Signed,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "NodeLimitMonitor"
    }

    #[inline(always)]
    fn on_enter_search(
        &mut self,
        _candidates: &[LoadCandidate<T>],
        _statistics: &LoaderStatistics,
    ) {
    }

    #[inline(always)]
    fn on_exit_search(&mut self, _statistics: &LoaderStatistics) {}

    #[inline(always)]
    fn search_command(
        &mut self,
        _state: &SearchState<T>,
        statistics: &LoaderStatistics,
    ) -> SearchCommand {
        if statistics.nodes_explored >= self.max_nodes {
            return SearchCommand::Terminate("node limit reached".to_string());
        }
        SearchCommand::Continue
    }

    #[inline(always)]
    fn on_step(&mut self, _state: &SearchState<T>, _statistics: &LoaderStatistics) {}

    #[inline(always)]
    fn on_prune(
        &mut self,
        _state: &SearchState<T>,
        _reason: PruneReason,
        _statistics: &LoaderStatistics,
    ) {
    }

    #[inline(always)]
    fn on_decisions_enqueued(
        &mut self,
        _state: &SearchState<T>,
        _count: usize,
        _statistics: &LoaderStatistics,
    ) {
    }

    #[inline(always)]
    fn on_descend(
        &mut self,
        _state: &SearchState<T>,
        _decision: LoadDecision,
        _statistics: &LoaderStatistics,
    ) {
    }

    #[inline(always)]
    fn on_backtrack(&mut self, _state: &SearchState<T>, _statistics: &LoaderStatistics) {}

    #[inline(always)]
    fn on_incumbent(&mut self, _state: &SearchState<T>, _statistics: &LoaderStatistics) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    #[test]
    fn test_continues_below_budget() {
        let mut monitor: NodeLimitMonitor<IntegerType> = NodeLimitMonitor::new(10);
        let state: SearchState<IntegerType> = SearchState::new(1);
        let stats = LoaderStatistics {
            nodes_explored: 9,
            ..Default::default()
        };
        assert_eq!(
            monitor.search_command(&state, &stats),
            SearchCommand::Continue
        );
    }

    #[test]
    fn test_terminates_at_budget() {
        let mut monitor: NodeLimitMonitor<IntegerType> = NodeLimitMonitor::new(10);
        let state: SearchState<IntegerType> = SearchState::new(1);
        let stats = LoaderStatistics {
            nodes_explored: 10,
            ..Default::default()
        };
        match monitor.search_command(&state, &stats) {
            SearchCommand::Terminate(reason) => {
                assert!(reason.contains("node limit"), "unexpected message: {reason}");
            }
            other => panic!("expected Terminate, got {:?}", other),
        }
    }

    #[test]
    fn test_reports_correct_name() {
        let monitor: NodeLimitMonitor<IntegerType> = NodeLimitMonitor::new(1);
        assert_eq!(LoadSearchMonitor::name(&monitor), "NodeLimitMonitor");
        assert_eq!(monitor.max_nodes(), 1);
    }
}
