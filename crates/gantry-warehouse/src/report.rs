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

//! # Controller Reports
//!
//! The result types returned by the warehouse controller's operations.
//! No-fit and empty-queue situations are encoded as outcomes here, never as
//! errors: the caller always learns explicitly what happened to a package.

use gantry_loader::plan::TerminationReason;
use gantry_loader::stats::LoaderStatistics;
use gantry_model::ids::BinId;

/// What happened to the package processed by one intake step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeOutcome {
    /// The package was bound to a bin and its size reserved.
    Stored {
        /// The tracking number of the stored package.
        tracking: u64,
        /// The bin the package was stored in.
        bin: BinId,
    },
    /// No bin fits; the package returned to the back of the intake queue.
    Requeued {
        /// The tracking number of the requeued package.
        tracking: u64,
    },
    /// No bin fits; the package was parked in the escalation buffer.
    Escalated {
        /// The tracking number of the escalated package.
        tracking: u64,
    },
    /// The intake queue was empty. A normal signal, not an error.
    QueueEmpty,
}

impl std::fmt::Display for IntakeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntakeOutcome::Stored { tracking, bin } => {
                write!(f, "Stored(package: PKG-{}, bin: {})", tracking, bin)
            }
            IntakeOutcome::Requeued { tracking } => {
                write!(f, "Requeued(package: PKG-{})", tracking)
            }
            IntakeOutcome::Escalated { tracking } => {
                write!(f, "Escalated(package: PKG-{})", tracking)
            }
            IntakeOutcome::QueueEmpty => write!(f, "QueueEmpty"),
        }
    }
}

/// Counts from draining the intake queue once.
///
/// A drain processes exactly the packages queued when it started; a package
/// requeued by the no-fit policy is counted but not processed again within
/// the same drain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntakeDrainReport {
    /// Packages bound to a bin.
    pub stored: usize,
    /// Packages returned to the intake queue.
    pub requeued: usize,
    /// Packages parked in the escalation buffer.
    pub escalated: usize,
}

impl IntakeDrainReport {
    /// Returns the total number of packages the drain processed.
    #[inline]
    pub fn num_processed(&self) -> usize {
        self.stored + self.requeued + self.escalated
    }
}

impl std::fmt::Display for IntakeDrainReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "IntakeDrainReport(stored: {}, requeued: {}, escalated: {})",
            self.stored, self.requeued, self.escalated
        )
    }
}

/// The result of committing a truck load.
///
/// Lists the loaded packages by tracking number in plan order and carries
/// the search's termination reason and statistics, so callers can tell a
/// proven-optimal load from the best load found before a budget ran out.
#[derive(Debug, Clone)]
pub struct LoadReport<T> {
    loaded: Vec<u64>,
    total_load: T,
    capacity: T,
    termination_reason: TerminationReason,
    statistics: LoaderStatistics,
}

impl<T> LoadReport<T> {
    #[inline]
    pub(crate) fn new(
        loaded: Vec<u64>,
        total_load: T,
        capacity: T,
        termination_reason: TerminationReason,
        statistics: LoaderStatistics,
    ) -> Self {
        Self {
            loaded,
            total_load,
            capacity,
            termination_reason,
            statistics,
        }
    }

    /// Returns the tracking numbers of the loaded packages in plan order.
    #[inline]
    pub fn loaded(&self) -> &[u64] {
        &self.loaded
    }

    /// Returns the number of loaded packages.
    #[inline]
    pub fn num_loaded(&self) -> usize {
        self.loaded.len()
    }

    /// Returns `true` if nothing was loaded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }

    /// Returns the termination reason of the loading search.
    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    /// Returns the statistics of the loading search.
    #[inline]
    pub fn statistics(&self) -> &LoaderStatistics {
        &self.statistics
    }

    /// Returns `true` if the load is proven optimal.
    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self.termination_reason, TerminationReason::OptimalityProven)
    }
}

impl<T> LoadReport<T>
where
    T: Copy,
{
    /// Returns the total size loaded onto the truck.
    #[inline]
    pub fn total_load(&self) -> T {
        self.total_load
    }

    /// Returns the truck capacity the load was computed for.
    #[inline]
    pub fn capacity(&self) -> T {
        self.capacity
    }
}

impl<T> std::fmt::Display for LoadReport<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LoadReport(packages: {}, load: {}/{}, {})",
            self.loaded.len(),
            self.total_load,
            self.capacity,
            self.termination_reason
        )
    }
}

/// The result of rolling back the most recent load commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollbackReport<T> {
    tracking: u64,
    bin: BinId,
    amount: T,
}

impl<T> RollbackReport<T> {
    #[inline]
    pub(crate) fn new(tracking: u64, bin: BinId, amount: T) -> Self {
        Self {
            tracking,
            bin,
            amount,
        }
    }

    /// Returns the tracking number of the package returned to storage.
    #[inline]
    pub fn tracking(&self) -> u64 {
        self.tracking
    }

    /// Returns the bin the package is stored in again.
    #[inline]
    pub fn bin(&self) -> BinId {
        self.bin
    }
}

impl<T> RollbackReport<T>
where
    T: Copy,
{
    /// Returns the capacity that stays reserved on the bin.
    #[inline]
    pub fn amount(&self) -> T {
        self.amount
    }
}

impl<T> std::fmt::Display for RollbackReport<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RollbackReport(package: PKG-{}, bin: {}, amount: {})",
            self.tracking, self.bin, self.amount
        )
    }
}

/// The result of a truck departure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureReport<T> {
    shipped: Vec<u64>,
    total_released: T,
}

impl<T> DepartureReport<T> {
    #[inline]
    pub(crate) fn new(shipped: Vec<u64>, total_released: T) -> Self {
        Self {
            shipped,
            total_released,
        }
    }

    /// Returns the tracking numbers of the shipped packages in loading
    /// order.
    #[inline]
    pub fn shipped(&self) -> &[u64] {
        &self.shipped
    }

    /// Returns the number of shipped packages.
    #[inline]
    pub fn num_shipped(&self) -> usize {
        self.shipped.len()
    }
}

impl<T> DepartureReport<T>
where
    T: Copy,
{
    /// Returns the total bin capacity released by the departure.
    #[inline]
    pub fn total_released(&self) -> T {
        self.total_released
    }
}

impl<T> std::fmt::Display for DepartureReport<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DepartureReport(packages: {}, released: {})",
            self.shipped.len(),
            self.total_released
        )
    }
}
