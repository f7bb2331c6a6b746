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

//! Loading search monitoring interface
//!
//! Declares the `LoadSearchMonitor` trait and `PruneReason` for observing and
//! controlling the truck loading search. Callbacks track the search
//! lifecycle, and a monitor can influence execution via `SearchCommand`
//! (default: Continue).
//!
//! Lifecycle highlights
//! - enter -> step -> {prune | decisions/descend/backtrack} -> incumbent -> exit
//! - `LoaderStatistics` is provided to every callback for telemetry.
//!
//! Design notes
//! - Methods take `&mut self`; monitors are assumed single-threaded.
//! - Keep callbacks lightweight; avoid blocking I/O in hot paths.

use crate::{
    candidate::LoadCandidate, decision::LoadDecision, state::SearchState, stats::LoaderStatistics,
};
use num_traits::{PrimInt, Signed};

/// The next action the search should take, as requested by a monitor.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum SearchCommand {
    #[default]
    Continue,
    Terminate(String),
}

impl std::fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Terminate(reason) => write!(f, "Terminate: {}", reason),
        }
    }
}

/// Reasons for pruning a search subtree.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PruneReason {
    /// Including the candidate would exceed the truck capacity.
    CapacityExceeded,
    /// The subtree's optimistic load cannot beat the incumbent.
    BoundDominated,
}

impl std::fmt::Display for PruneReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PruneReason::CapacityExceeded => write!(f, "CapacityExceeded"),
            PruneReason::BoundDominated => write!(f, "BoundDominated"),
        }
    }
}

/// Trait for monitoring and controlling the truck loading search.
pub trait LoadSearchMonitor<T>
where
    T: PrimInt + Signed,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called when the search starts, with the sorted exploration order.
    fn on_enter_search(&mut self, candidates: &[LoadCandidate<T>], statistics: &LoaderStatistics);
    /// Called when the search ends.
    fn on_exit_search(&mut self, statistics: &LoaderStatistics);
    /// Called to determine the next action of the search.
    fn search_command(
        &mut self,
        _state: &SearchState<T>,
        _statistics: &LoaderStatistics,
    ) -> SearchCommand {
        SearchCommand::Continue
    }
    /// Called at each step of the search loop.
    fn on_step(&mut self, state: &SearchState<T>, statistics: &LoaderStatistics);
    /// Called when a subtree is pruned.
    fn on_prune(&mut self, state: &SearchState<T>, reason: PruneReason, statistics: &LoaderStatistics);
    /// Called when decisions are enqueued for exploration.
    fn on_decisions_enqueued(
        &mut self,
        state: &SearchState<T>,
        count: usize,
        statistics: &LoaderStatistics,
    );
    /// Called when descending into a child state.
    fn on_descend(
        &mut self,
        state: &SearchState<T>,
        decision: LoadDecision,
        statistics: &LoaderStatistics,
    );
    /// Called when backtracking to a parent state.
    fn on_backtrack(&mut self, state: &SearchState<T>, statistics: &LoaderStatistics);
    /// Called when a new best plan is found. The state passed in is the leaf
    /// selection that became the incumbent.
    fn on_incumbent(&mut self, state: &SearchState<T>, statistics: &LoaderStatistics);
}

impl<T> std::fmt::Debug for dyn LoadSearchMonitor<T> + '_
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LoadSearchMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn LoadSearchMonitor<T> + '_
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LoadSearchMonitor({})", self.name())
    }
}
