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

//! # Load Plans and Outcomes
//!
//! The result side of the truck loading search. A [`LoadPlan`] is the chosen
//! set of packages together with the load it puts on the truck. A
//! [`LoadOutcome`] wraps the plan with the [`TerminationReason`] and the
//! search statistics, so callers can distinguish a proven-optimal plan from
//! the best plan found before a budget ran out.

use crate::stats::LoaderStatistics;
use gantry_core::num::constants::Zero;
use gantry_model::ids::PackageId;

/// The packages selected for a truck, in exploration order (largest first).
///
/// Invariant: `total_load <= capacity`. The loader only constructs plans
/// from feasible selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadPlan<T> {
    selected: Vec<PackageId>,
    total_load: T,
    capacity: T,
}

impl<T> LoadPlan<T> {
    /// Creates a new `LoadPlan` from a feasible selection.
    #[inline]
    pub fn new(selected: Vec<PackageId>, total_load: T, capacity: T) -> Self
    where
        T: PartialOrd,
    {
        debug_assert!(
            total_load <= capacity,
            "called `LoadPlan::new` with an overloaded plan: the load exceeds the truck capacity"
        );
        Self {
            selected,
            total_load,
            capacity,
        }
    }

    /// Creates an empty plan for a truck of the given capacity.
    #[inline]
    pub fn empty(capacity: T) -> Self
    where
        T: Zero,
    {
        Self {
            selected: Vec::new(),
            total_load: T::ZERO,
            capacity,
        }
    }

    /// Returns the selected packages in exploration order.
    #[inline]
    pub fn selected(&self) -> &[PackageId] {
        &self.selected
    }

    /// Returns the number of selected packages.
    #[inline]
    pub fn num_packages(&self) -> usize {
        self.selected.len()
    }

    /// Returns `true` if no package was selected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

impl<T> LoadPlan<T>
where
    T: Copy,
{
    /// Returns the total size loaded onto the truck.
    #[inline]
    pub fn total_load(&self) -> T {
        self.total_load
    }

    /// Returns the truck capacity the plan was computed for.
    #[inline]
    pub fn capacity(&self) -> T {
        self.capacity
    }
}

impl<T> LoadPlan<T>
where
    T: Copy + std::ops::Sub<Output = T>,
{
    /// Returns the capacity left unused by this plan.
    #[inline]
    pub fn remaining_capacity(&self) -> T {
        self.capacity - self.total_load
    }
}

impl<T> std::fmt::Display for LoadPlan<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LoadPlan(packages: {}, load: {}/{})",
            self.selected.len(),
            self.total_load,
            self.capacity
        )
    }
}

/// Why the loading search stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The search exhausted the tree or proved no better plan can exist.
    OptimalityProven,
    /// A monitor stopped the search (time, nodes, etc.).
    /// The string describes the triggering limit.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::OptimalityProven => write!(f, "Optimality Proven"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// Result of the loading search after termination.
///
/// An outcome always carries a feasible plan. When a monitor aborts the
/// search before the tree is exhausted, the plan is the best incumbent found
/// up to that point, which may be empty.
#[derive(Debug, Clone)]
pub struct LoadOutcome<T> {
    plan: LoadPlan<T>,
    termination_reason: TerminationReason,
    statistics: LoaderStatistics,
}

impl<T> LoadOutcome<T> {
    /// Creates an outcome for a plan whose optimality has been proven.
    #[inline]
    pub fn optimal(plan: LoadPlan<T>, statistics: LoaderStatistics) -> Self {
        Self {
            plan,
            termination_reason: TerminationReason::OptimalityProven,
            statistics,
        }
    }

    /// Creates an outcome for a search stopped by a monitor.
    #[inline]
    pub fn aborted<R>(plan: LoadPlan<T>, reason: R, statistics: LoaderStatistics) -> Self
    where
        R: Into<String>,
    {
        Self {
            plan,
            termination_reason: TerminationReason::Aborted(reason.into()),
            statistics,
        }
    }

    /// Returns the best plan found.
    #[inline]
    pub fn plan(&self) -> &LoadPlan<T> {
        &self.plan
    }

    /// Consumes the outcome and returns the best plan found.
    #[inline]
    pub fn into_plan(self) -> LoadPlan<T> {
        self.plan
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    /// Returns the search statistics.
    #[inline]
    pub fn statistics(&self) -> &LoaderStatistics {
        &self.statistics
    }

    /// Returns `true` if the plan is proven optimal.
    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self.termination_reason, TerminationReason::OptimalityProven)
    }

    /// Returns `true` if a monitor stopped the search early.
    #[inline]
    pub fn is_aborted(&self) -> bool {
        matches!(self.termination_reason, TerminationReason::Aborted(_))
    }
}

impl<T> std::fmt::Display for LoadOutcome<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.plan, self.termination_reason)
    }
}
