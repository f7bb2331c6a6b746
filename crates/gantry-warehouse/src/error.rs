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

//! Error types for warehouse coordination.
//!
//! Empty-queue and no-fit situations are outcomes, not errors; only
//! contract violations and invalid inputs surface here. Lower-level errors
//! from the bin index and the truck loader cross the crate boundary through
//! `From` conversions.

use gantry_loader::error::LoaderError;
use gantry_model::error::BinIndexError;

/// Errors reported by the warehouse controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarehouseError<T> {
    /// A rollback was requested while the loading history is empty.
    /// A normal no-op signal, not a corruption.
    NothingToRollback,
    /// The tracking number is not registered with any active package.
    UnknownTracking {
        /// The offending tracking number.
        tracking: u64,
    },
    /// A package with the same tracking number is already active.
    DuplicateTracking {
        /// The offending tracking number.
        tracking: u64,
    },
    /// A package was received with a non-positive size.
    InvalidSize {
        /// The tracking number of the rejected package.
        tracking: u64,
        /// The offending size.
        size: T,
    },
    /// The truck loading search rejected its input.
    Loader(LoaderError<T>),
    /// The bin index rejected a reserve or release.
    Bins(BinIndexError<T>),
}

impl<T> From<LoaderError<T>> for WarehouseError<T> {
    #[inline]
    fn from(error: LoaderError<T>) -> Self {
        WarehouseError::Loader(error)
    }
}

impl<T> From<BinIndexError<T>> for WarehouseError<T> {
    #[inline]
    fn from(error: BinIndexError<T>) -> Self {
        WarehouseError::Bins(error)
    }
}

impl<T> std::fmt::Display for WarehouseError<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WarehouseError::NothingToRollback => {
                write!(f, "nothing to roll back: the loading history is empty")
            }
            WarehouseError::UnknownTracking { tracking } => {
                write!(f, "unknown tracking number: PKG-{}", tracking)
            }
            WarehouseError::DuplicateTracking { tracking } => {
                write!(f, "tracking number PKG-{} is already registered", tracking)
            }
            WarehouseError::InvalidSize { tracking, size } => {
                write!(f, "package PKG-{} has a non-positive size of {}", tracking, size)
            }
            WarehouseError::Loader(error) => {
                write!(f, "truck loading failed: {}", error)
            }
            WarehouseError::Bins(error) => {
                write!(f, "bin index rejected the operation: {}", error)
            }
        }
    }
}

impl<T> std::error::Error for WarehouseError<T> where T: std::fmt::Display + std::fmt::Debug {}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_model::ids::BinId;

    #[test]
    fn test_display_nothing_to_rollback() {
        let error: WarehouseError<i64> = WarehouseError::NothingToRollback;
        assert_eq!(
            format!("{}", error),
            "nothing to roll back: the loading history is empty"
        );
    }

    #[test]
    fn test_display_duplicate_tracking() {
        let error: WarehouseError<i64> = WarehouseError::DuplicateTracking { tracking: 42 };
        assert_eq!(
            format!("{}", error),
            "tracking number PKG-42 is already registered"
        );
    }

    #[test]
    fn test_display_invalid_size() {
        let error: WarehouseError<i64> = WarehouseError::InvalidSize {
            tracking: 7,
            size: 0,
        };
        assert_eq!(
            format!("{}", error),
            "package PKG-7 has a non-positive size of 0"
        );
    }

    #[test]
    fn test_from_loader_error() {
        let inner = LoaderError::InvalidCapacity { capacity: -3i64 };
        let error: WarehouseError<i64> = inner.clone().into();
        assert_eq!(error, WarehouseError::Loader(inner));
        assert_eq!(
            format!("{}", error),
            "truck loading failed: truck capacity must be positive, got -3"
        );
    }

    #[test]
    fn test_from_bin_index_error() {
        let inner: BinIndexError<i64> = BinIndexError::Underflow {
            bin: BinId::new(1),
            usage: 5,
            amount: 6,
        };
        let error: WarehouseError<i64> = inner.clone().into();
        assert!(matches!(error, WarehouseError::Bins(_)));
    }

    #[test]
    fn test_unknown_tracking_display() {
        let error: WarehouseError<i64> = WarehouseError::UnknownTracking { tracking: 9001 };
        assert_eq!(format!("{}", error), "unknown tracking number: PKG-9001");
    }
}
