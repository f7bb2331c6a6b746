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

use gantry_core::num::ops::saturating_arithmetic::SaturatingAddVal;
use std::time::Duration;

/// Statistics collected during a truck loading search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoaderStatistics {
    /// Total decisions applied (nodes of the search tree visited).
    pub nodes_explored: u64,
    /// Total times the search returned to a parent level.
    pub backtracks: u64,
    /// Total branching decisions enqueued.
    pub decisions_generated: u64,
    /// The deepest level reached in the tree.
    pub max_depth: u64,
    /// Includes discarded because the candidate no longer fits.
    pub prunings_capacity: u64,
    /// Subtrees discarded because their optimistic load cannot beat the
    /// incumbent.
    pub prunings_bound: u64,
    /// Total incumbent improvements during the search.
    pub incumbents_found: u64,
    /// Total time spent in the search.
    pub time_total: Duration,
}

impl LoaderStatistics {
    #[inline]
    pub fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add_val(1);
    }

    #[inline]
    pub fn on_backtrack(&mut self) {
        self.backtracks = self.backtracks.saturating_add_val(1);
    }

    #[inline]
    pub fn on_decisions_generated(&mut self, count: u64) {
        self.decisions_generated = self.decisions_generated.saturating_add_val(count);
    }

    #[inline]
    pub fn on_depth_update(&mut self, depth: u64) {
        self.max_depth = self.max_depth.max(depth);
    }

    #[inline]
    pub fn on_pruning_capacity(&mut self) {
        self.prunings_capacity = self.prunings_capacity.saturating_add_val(1);
    }

    #[inline]
    pub fn on_pruning_bound(&mut self) {
        self.prunings_bound = self.prunings_bound.saturating_add_val(1);
    }

    #[inline]
    pub fn on_incumbent_found(&mut self) {
        self.incumbents_found = self.incumbents_found.saturating_add_val(1);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for LoaderStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Gantry Loader Statistics:")?;
        writeln!(f, "  Nodes explored:       {}", self.nodes_explored)?;
        writeln!(f, "  Backtracks:           {}", self.backtracks)?;
        writeln!(f, "  Max depth reached:    {}", self.max_depth)?;
        writeln!(f, "  Decisions generated:  {}", self.decisions_generated)?;
        writeln!(f, "  Prunings (capacity):  {}", self.prunings_capacity)?;
        writeln!(f, "  Prunings (bound):     {}", self.prunings_bound)?;
        writeln!(f, "  Incumbents found:     {}", self.incumbents_found)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_zero() {
        let stats = LoaderStatistics::default();
        assert_eq!(stats.nodes_explored, 0);
        assert_eq!(stats.backtracks, 0);
        assert_eq!(stats.decisions_generated, 0);
        assert_eq!(stats.max_depth, 0);
        assert_eq!(stats.prunings_capacity, 0);
        assert_eq!(stats.prunings_bound, 0);
        assert_eq!(stats.incumbents_found, 0);
        assert_eq!(stats.time_total, Duration::ZERO);
    }

    #[test]
    fn test_counters_increment() {
        let mut stats = LoaderStatistics::default();
        stats.on_node_explored();
        stats.on_node_explored();
        stats.on_backtrack();
        stats.on_decisions_generated(2);
        stats.on_pruning_capacity();
        stats.on_pruning_bound();
        stats.on_incumbent_found();
        assert_eq!(stats.nodes_explored, 2);
        assert_eq!(stats.backtracks, 1);
        assert_eq!(stats.decisions_generated, 2);
        assert_eq!(stats.prunings_capacity, 1);
        assert_eq!(stats.prunings_bound, 1);
        assert_eq!(stats.incumbents_found, 1);
    }

    #[test]
    fn test_counters_saturate_at_max() {
        let mut stats = LoaderStatistics {
            nodes_explored: u64::MAX,
            ..Default::default()
        };
        stats.on_node_explored();
        assert_eq!(stats.nodes_explored, u64::MAX);
    }

    #[test]
    fn test_max_depth_keeps_maximum() {
        let mut stats = LoaderStatistics::default();
        stats.on_depth_update(3);
        stats.on_depth_update(1);
        assert_eq!(stats.max_depth, 3);
    }

    #[test]
    fn test_display_contains_all_counters() {
        let mut stats = LoaderStatistics::default();
        stats.on_node_explored();
        let rendered = format!("{}", stats);
        assert!(rendered.contains("Gantry Loader Statistics:"));
        assert!(rendered.contains("Nodes explored:       1"));
        assert!(rendered.contains("Prunings (bound):"));
        assert!(rendered.contains("Total time:"));
    }
}
