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

//! # Log Monitor
//!
//! Periodic console progress reporting for the loading search. Prints a
//! header when the search starts and a progress line at most once per
//! `log_interval`, gated by a bitmask over the explored node count so the
//! clock is not read on every descent.

use crate::{
    candidate::LoadCandidate,
    decision::LoadDecision,
    monitor::load_search_monitor::{LoadSearchMonitor, PruneReason, SearchCommand},
    state::SearchState,
    stats::LoaderStatistics,
};
use num_traits::{PrimInt, Signed};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct LogMonitor<T>
where
    T: std::fmt::Display + std::fmt::Debug + PrimInt + Signed,
{
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    best_load: Option<T>,
}

impl<T> LogMonitor<T>
where
    T: std::fmt::Display + std::fmt::Debug + PrimInt + Signed,
{
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
            best_load: None,
        }
    }

    #[inline(always)]
    fn print_header(&self) {
        println!(
            "{:<9} | {:<14} | {:<7} | {:<14} | {:<17} | {:<10} | {:<13}",
            "Elapsed", "Nodes", "Depth", "Best Load", "Current Load", "Backtracks", "Pruned (Bound)"
        );
        println!("{}", "-".repeat(102));
    }

    #[inline(always)]
    fn log_line(&mut self, state: &SearchState<T>, stats: &LoaderStatistics) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time).as_secs_f32();

        let nodes = stats.nodes_explored;
        let depth = state.num_decided();
        let backtracks = stats.backtracks;
        let pruned_bound = stats.prunings_bound;
        let current_load = state.total_load();

        let best_load_str = match &self.best_load {
            Some(load) => format!("{}", load),
            None => "None".to_string(),
        };

        let elapsed_field = format!("{:.1}s", elapsed);

        println!(
            "{:<9} | {:<14} | {:<7} | {:<14} | {:<17} | {:<10} | {:<13}",
            elapsed_field, nodes, depth, best_load_str, current_load, backtracks, pruned_bound
        );

        self.last_log_time = now;
    }
}

impl<T> Default for LogMonitor<T>
where
    T: std::fmt::Display + std::fmt::Debug + PrimInt + Signed,
{
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 4095)
    }
}

impl<T> std::fmt::Display for LogMonitor<T>
where
    T: std::fmt::Display + std::fmt::Debug + PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(log_interval: {}s, clock_check_mask: {})",
            self.log_interval.as_secs(),
            self.clock_check_mask
        )
    }
}

impl<T> LoadSearchMonitor<T> for LogMonitor<T>
where
    T: std::fmt::Display + std::fmt::Debug + PrimInt + Signed,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(
        &mut self,
        _candidates: &[LoadCandidate<T>],
        _statistics: &LoaderStatistics,
    ) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.best_load = None; // Reset
        self.print_header();
    }

    fn on_exit_search(&mut self, _statistics: &LoaderStatistics) {
        println!("{}", "-".repeat(102));
        println!("Search finished.");
    }

    fn on_step(&mut self, _state: &SearchState<T>, _statistics: &LoaderStatistics) {}

    fn on_prune(
        &mut self,
        _state: &SearchState<T>,
        _reason: PruneReason,
        _statistics: &LoaderStatistics,
    ) {
    }

    fn on_decisions_enqueued(
        &mut self,
        _state: &SearchState<T>,
        _count: usize,
        _statistics: &LoaderStatistics,
    ) {
    }

    fn on_descend(
        &mut self,
        state: &SearchState<T>,
        _decision: LoadDecision,
        statistics: &LoaderStatistics,
    ) {
        if (statistics.nodes_explored & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line(state, statistics);
        }
    }

    fn on_backtrack(&mut self, _state: &SearchState<T>, _statistics: &LoaderStatistics) {}

    fn on_incumbent(&mut self, state: &SearchState<T>, _statistics: &LoaderStatistics) {
        self.best_load = Some(state.total_load());
    }

    fn search_command(
        &mut self,
        _state: &SearchState<T>,
        _statistics: &LoaderStatistics,
    ) -> SearchCommand {
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    #[test]
    fn test_incumbent_updates_best_load() {
        let mut monitor: LogMonitor<IntegerType> = LogMonitor::default();
        let mut state: SearchState<IntegerType> = SearchState::new(1);
        state.include(0, 9);
        monitor.on_incumbent(&state, &LoaderStatistics::default());
        assert_eq!(monitor.best_load, Some(9));
    }

    #[test]
    fn test_display_format() {
        let monitor: LogMonitor<IntegerType> = LogMonitor::new(Duration::from_secs(2), 255);
        assert_eq!(
            format!("{}", monitor),
            "LogMonitor(log_interval: 2s, clock_check_mask: 255)"
        );
    }
}
