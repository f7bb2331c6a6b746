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

//! # Time Limit Monitor
//!
//! A lightweight monitor that enforces a wall-clock time budget on the
//! loading search. It periodically checks elapsed time (using a bitmask-based
//! step filter) and requests termination once the configured `Duration` has
//! been exceeded.
//!
//! ## Highlights
//!
//! - `TimeLimitMonitor<T>` stores a `time_limit`, `start_time`, and `steps`
//!   counter.
//! - Bitmask-driven clock checks: `(steps & clock_check_mask) == 0` triggers
//!   a check. The default mask (`0x3FFF`) checks approximately every 16,384
//!   steps.
//! - `on_step()` uses `wrapping_add` to increment steps at minimal cost.
//! - `search_command()` returns `Terminate("time limit reached")` once
//!   elapsed time exceeds the limit at a check point; otherwise `Continue`.
//! - Constructors: `new(time_limit)` and
//!   `with_clock_check_mask(time_limit, mask)`.

use crate::{
    candidate::LoadCandidate,
    decision::LoadDecision,
    monitor::load_search_monitor::{LoadSearchMonitor, PruneReason, SearchCommand},
    state::SearchState,
    stats::LoaderStatistics,
};
use num_traits::{PrimInt, Signed};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLimitMonitor<T>
where
    T: PrimInt + Signed,
{
    clock_check_mask: u64,
    steps: u64,
    time_limit: std::time::Duration,
    start_time: std::time::Instant,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> TimeLimitMonitor<T>
where
    T: PrimInt + Signed,
{
    /// Default mask: Check every 16,384 steps (2^14).
    /// 16384 - 1 = 16383 = 0x3FFF
    const DEFAULT_STEP_CLOCK_CHECK_MASK: u64 = 0x3FFF;

    #[inline]
    pub fn new(time_limit: std::time::Duration) -> Self {
        Self {
            clock_check_mask: Self::DEFAULT_STEP_CLOCK_CHECK_MASK,
            steps: 0,
            time_limit,
            start_time: std::time::Instant::now(),
            _phantom: std::marker::PhantomData,
        }
    }

    #[inline]
    pub fn with_clock_check_mask(time_limit: std::time::Duration, clock_check_mask: u64) -> Self {
        Self {
            clock_check_mask,
            steps: 0,
            time_limit,
            start_time: std::time::Instant::now(),
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T> LoadSearchMonitor<T> for TimeLimitMonitor<T>
where
    T: PrimInt + Signed,
{
    fn name(&self) -> &str {
        "TimeLimitMonitor"
    }

    fn on_enter_search(
        &mut self,
        _candidates: &[LoadCandidate<T>],
        _statistics: &LoaderStatistics,
    ) {
        self.start_time = std::time::Instant::now();
        self.steps = 0;
    }

    fn on_exit_search(&mut self, _statistics: &LoaderStatistics) {}

    #[inline(always)]
    fn search_command(
        &mut self,
        _state: &SearchState<T>,
        _statistics: &LoaderStatistics,
    ) -> SearchCommand {
        if (self.steps & self.clock_check_mask) == 0 && self.start_time.elapsed() >= self.time_limit
        {
            return SearchCommand::Terminate("time limit reached".to_string());
        }
        SearchCommand::Continue
    }

    #[inline(always)]
    fn on_step(&mut self, _state: &SearchState<T>, _statistics: &LoaderStatistics) {
        self.steps = self.steps.wrapping_add(1);
    }

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
    use std::time::{Duration, Instant};

    type IntegerType = i64;

    fn new_monitor_with_limit(ms: u64) -> TimeLimitMonitor<IntegerType> {
        TimeLimitMonitor::<IntegerType>::new(Duration::from_millis(ms))
    }

    fn empty_state() -> SearchState<IntegerType> {
        SearchState::new(0)
    }

    #[test]
    fn test_default_mask_is_power_of_two_minus_one() {
        assert_eq!(
            TimeLimitMonitor::<IntegerType>::DEFAULT_STEP_CLOCK_CHECK_MASK,
            0x3FFF
        );
    }

    #[test]
    fn test_search_command_terminates_after_time_limit_when_mask_condition_met() {
        let mut mon = new_monitor_with_limit(10);
        // Make elapsed exceed limit by setting start_time sufficiently in the past.
        mon.start_time = Instant::now() - Duration::from_millis(50);

        // steps = 0 => (steps & mask) == 0, so clock check runs
        mon.steps = 0;
        match mon.search_command(&empty_state(), &LoaderStatistics::default()) {
            SearchCommand::Terminate(msg) => {
                assert!(msg.contains("time limit"), "unexpected message: {msg}");
            }
            other => panic!("expected Terminate, got {:?}", other),
        }
    }

    #[test]
    fn test_search_command_continues_when_mask_condition_not_met_even_if_time_exceeded() {
        let mut mon = new_monitor_with_limit(1);
        mon.start_time = Instant::now() - Duration::from_millis(50);

        // With default mask 0x3FFF, any nonzero steps with low bits set will skip the check.
        mon.steps = 1; // 1 & 0x3FFF != 0
        match mon.search_command(&empty_state(), &LoaderStatistics::default()) {
            SearchCommand::Continue => {}
            other => panic!("expected Continue, got {:?}", other),
        }
    }

    #[test]
    fn test_search_command_respects_custom_mask_zero_always_checks() {
        let mut mon =
            TimeLimitMonitor::<IntegerType>::with_clock_check_mask(Duration::from_millis(1), 0);
        // If mask is 0, (steps & mask) == 0 is always true, so we always check the clock.
        mon.start_time = Instant::now() - Duration::from_millis(50);

        mon.steps = 12345;
        match mon.search_command(&empty_state(), &LoaderStatistics::default()) {
            SearchCommand::Terminate(_) => {}
            other => panic!("expected Terminate due to exceeded time, got {:?}", other),
        }
    }

    #[test]
    fn test_search_command_continues_before_time_limit_when_mask_condition_met() {
        let mut mon = new_monitor_with_limit(1000);
        mon.start_time = Instant::now();
        mon.steps = 0; // check will run

        match mon.search_command(&empty_state(), &LoaderStatistics::default()) {
            SearchCommand::Continue => {}
            other => panic!("expected Continue, got {:?}", other),
        }
    }

    #[test]
    fn test_on_step_increments_steps_wrapping() {
        let mut mon = new_monitor_with_limit(1000);
        let state = empty_state();
        let stats = LoaderStatistics::default();

        let before = mon.steps;
        mon.on_step(&state, &stats);
        assert_eq!(mon.steps, before.wrapping_add(1));

        // Simulate near-overflow boundary
        mon.steps = u64::MAX;
        mon.on_step(&state, &stats);
        assert_eq!(mon.steps, 0);
    }

    #[test]
    fn test_on_enter_search_resets_counters() {
        let mut mon = new_monitor_with_limit(1000);
        mon.steps = 77;
        mon.on_enter_search(&[], &LoaderStatistics::default());
        assert_eq!(mon.steps, 0);
    }
}
