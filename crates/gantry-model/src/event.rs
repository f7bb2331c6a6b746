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

//! # Events
//!
//! Two event kinds tie the warehouse together:
//!
//! - [`LoadEvent`] is the internal rollback record: it captures exactly what
//!   a single load commit changed (which package left which bin, and how
//!   much capacity stays reserved), so popping it reverses the commit.
//! - [`ShipmentEvent`] is the external log record consumed by an
//!   append-only sink, carrying the tracking number, bin, timestamp, and
//!   status in the exact order the controller emits them.

use chrono::{DateTime, Utc};

use crate::ids::{BinId, PackageId};
use gantry_core::num::storage_numeric::StorageNumeric;

/// A single committed load action, recorded for rollback.
///
/// The recorded amount is the capacity that remains reserved on the source
/// bin while the package sits on the staged truck (committed-to-load).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadEvent<T> {
    sequence: u64,
    package: PackageId,
    bin: BinId,
    amount: T,
}

impl<T> LoadEvent<T>
where
    T: StorageNumeric,
{
    /// Creates a new load event.
    #[inline]
    pub fn new(sequence: u64, package: PackageId, bin: BinId, amount: T) -> Self {
        Self {
            sequence,
            package,
            bin,
            amount,
        }
    }

    /// Returns the ordering sequence number of the commit.
    #[inline]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Returns the package that was loaded.
    #[inline]
    pub fn package(&self) -> PackageId {
        self.package
    }

    /// Returns the bin the package was stored in.
    #[inline]
    pub fn bin(&self) -> BinId {
        self.bin
    }

    /// Returns the capacity that stays reserved on the bin.
    #[inline]
    pub fn amount(&self) -> T {
        self.amount
    }
}

impl<T> std::fmt::Display for LoadEvent<T>
where
    T: StorageNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LoadEvent(seq: {}, package: {}, bin: {}, amount: {})",
            self.sequence, self.package, self.bin, self.amount
        )
    }
}

/// The status carried by a shipment event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipmentStatus {
    /// The package was placed into a bin.
    Stored,
    /// The package was committed to the staged truck.
    Loaded,
    /// The most recent load was rolled back.
    UnloadedRollback,
}

impl std::fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ShipmentStatus::Stored => "STORED",
            ShipmentStatus::Loaded => "LOADED",
            ShipmentStatus::UnloadedRollback => "UNLOADED_ROLLBACK",
        };
        write!(f, "{}", name)
    }
}

/// A structured record emitted to the external shipment log sink.
///
/// Events carry a controller-assigned sequence number; sinks must append
/// them without reordering or dropping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipmentEvent {
    sequence: u64,
    tracking: u64,
    bin: BinId,
    timestamp: DateTime<Utc>,
    status: ShipmentStatus,
}

impl ShipmentEvent {
    /// Creates a new shipment event.
    #[inline]
    pub fn new(
        sequence: u64,
        tracking: u64,
        bin: BinId,
        timestamp: DateTime<Utc>,
        status: ShipmentStatus,
    ) -> Self {
        Self {
            sequence,
            tracking,
            bin,
            timestamp,
            status,
        }
    }

    /// Returns the emission sequence number.
    #[inline]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Returns the tracking number of the affected package.
    #[inline]
    pub fn tracking(&self) -> u64 {
        self.tracking
    }

    /// Returns the bin involved in the transition.
    #[inline]
    pub fn bin(&self) -> BinId {
        self.bin
    }

    /// Returns the emission timestamp.
    #[inline]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the recorded status.
    #[inline]
    pub fn status(&self) -> ShipmentStatus {
        self.status
    }
}

impl std::fmt::Display for ShipmentEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} PKG-{} {} {}",
            self.sequence,
            self.timestamp.to_rfc3339(),
            self.tracking,
            self.bin,
            self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_load_event_accessors() {
        let event = LoadEvent::new(3, PackageId::new(0), BinId::new(3), 12i64);
        assert_eq!(event.sequence(), 3);
        assert_eq!(event.package(), PackageId::new(0));
        assert_eq!(event.bin(), BinId::new(3));
        assert_eq!(event.amount(), 12);
    }

    #[test]
    fn test_status_display_matches_log_vocabulary() {
        assert_eq!(format!("{}", ShipmentStatus::Stored), "STORED");
        assert_eq!(format!("{}", ShipmentStatus::Loaded), "LOADED");
        assert_eq!(
            format!("{}", ShipmentStatus::UnloadedRollback),
            "UNLOADED_ROLLBACK"
        );
    }

    #[test]
    fn test_shipment_event_display() {
        let timestamp = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let event = ShipmentEvent::new(7, 1, BinId::new(3), timestamp, ShipmentStatus::Stored);
        assert_eq!(
            format!("{}", event),
            "[7] 2025-06-01T12:00:00+00:00 PKG-1 Bin(3) STORED"
        );
    }
}
