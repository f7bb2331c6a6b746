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

//! # Warehouse Status Snapshot
//!
//! A point-in-time, side-effect-free view of the warehouse for presentation
//! layers: the full bin occupancy list, the intake queue length, the loading
//! history depth, and the tracking numbers parked in the escalation buffer.

use gantry_core::num::storage_numeric::StorageNumeric;
use gantry_model::bin::BinRecord;

/// Point-in-time snapshot of the warehouse state.
#[derive(Debug, Clone)]
pub struct WarehouseStatus<T> {
    bins: Vec<BinRecord<T>>,
    intake_len: usize,
    history_depth: usize,
    escalated: Vec<u64>,
}

impl<T> WarehouseStatus<T> {
    #[inline]
    pub(crate) fn new(
        bins: Vec<BinRecord<T>>,
        intake_len: usize,
        history_depth: usize,
        escalated: Vec<u64>,
    ) -> Self {
        Self {
            bins,
            intake_len,
            history_depth,
            escalated,
        }
    }

    /// Returns the bin occupancy list in ascending identifier order.
    #[inline]
    pub fn bins(&self) -> &[BinRecord<T>] {
        &self.bins
    }

    /// Returns the number of bins.
    #[inline]
    pub fn num_bins(&self) -> usize {
        self.bins.len()
    }

    /// Returns the number of packages waiting for a bin.
    #[inline]
    pub fn intake_len(&self) -> usize {
        self.intake_len
    }

    /// Returns the number of staged load events.
    #[inline]
    pub fn history_depth(&self) -> usize {
        self.history_depth
    }

    /// Returns the tracking numbers of escalated packages, in escalation
    /// order.
    #[inline]
    pub fn escalated(&self) -> &[u64] {
        &self.escalated
    }
}

impl<T> std::fmt::Display for WarehouseStatus<T>
where
    T: StorageNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Warehouse Status:")?;
        writeln!(f, "  Intake queue length:   {}", self.intake_len)?;
        writeln!(f, "  Loading history depth: {}", self.history_depth)?;
        writeln!(f, "  Escalated packages:    {}", self.escalated.len())?;
        writeln!(f, "  Bins:")?;
        for bin in &self.bins {
            writeln!(f, "    {}", bin)?;
        }
        Ok(())
    }
}
