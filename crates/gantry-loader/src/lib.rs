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

//! # Gantry Loader
//!
//! Deterministic branch-and-bound package selection for truck loading.
//!
//! Given a set of load candidates and a truck capacity, the loader picks the
//! subset with the highest total size that still fits, preferring fewer
//! packages when totals tie. The search separates candidate ordering,
//! pruning, monitoring, and outcome reporting so that budgets and logging can
//! be swapped without touching the core loop.
//!
//! ## Core flow
//!
//! - Describe each eligible package as a [`candidate::LoadCandidate`].
//! - Run [`loader::TruckLoader::select_load`], or attach a budget or logger
//!   via [`loader::TruckLoader::select_load_with_monitor`].
//! - Read the selected packages and utilization from the returned
//!   [`plan::LoadOutcome`].
//!
//! ## Design highlights
//!
//! - Candidates are explored in a fixed total order (largest first), so
//!   identical inputs always produce identical plans.
//! - The optimistic lookahead bound never underestimates what a subtree can
//!   still load, which makes bound pruning safe.
//! - Monitors observe the search and may abort it; the best plan found so
//!   far is always returned together with the termination reason.
//!
//! ## Module map
//!
//! - `loader`: the search engine and session orchestration.
//! - `candidate`: candidate records and their deterministic ordering.
//! - `decision`: include/exclude branching decisions.
//! - `monitor`: search monitors (no-op, node limit, time limit, log,
//!   composite).
//! - `plan`: load plans and outcomes with termination reasons.
//! - `state`: the incremental selection state visible to monitors.
//! - `stats`: lightweight search counters and timing.

pub mod candidate;
pub mod decision;
pub mod error;
pub mod loader;
pub mod monitor;
pub mod plan;
mod stack;
pub mod state;
pub mod stats;
