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

//! # Seed Input
//!
//! Bulk initialization records for the bin index. A seed collaborator
//! supplies the full bin layout (identifier, capacity, location code) before
//! any query runs; the index validates the batch eagerly and rejects
//! duplicates and non-positive capacities.
//!
//! ## Usage
//!
//! ```rust
//! use gantry_model::bin_index::BinIndex;
//! use gantry_model::seed::default_seed;
//!
//! let index = BinIndex::from_seed(default_seed()).unwrap();
//! assert_eq!(index.len(), 5);
//! ```

use crate::ids::BinId;
use gantry_core::num::storage_numeric::StorageNumeric;

/// A single bin description supplied at warehouse initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedBin<T> {
    id: BinId,
    capacity: T,
    location: String,
}

impl<T> SeedBin<T>
where
    T: StorageNumeric,
{
    /// Creates a new seed record.
    #[inline]
    pub fn new(id: BinId, capacity: T, location: impl Into<String>) -> Self {
        Self {
            id,
            capacity,
            location: location.into(),
        }
    }

    /// Returns the bin identifier.
    #[inline]
    pub fn id(&self) -> BinId {
        self.id
    }

    /// Returns the declared capacity.
    #[inline]
    pub fn capacity(&self) -> T {
        self.capacity
    }

    /// Returns the location code.
    #[inline]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Consumes the record, returning its parts.
    #[inline]
    pub(crate) fn into_parts(self) -> (BinId, T, String) {
        (self.id, self.capacity, self.location)
    }
}

impl<T> std::fmt::Display for SeedBin<T>
where
    T: StorageNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(capacity: {}, location: {})",
            self.id, self.capacity, self.location
        )
    }
}

/// Returns the stock five-bin warehouse layout used for demonstrations
/// and tests: capacities 50 through 500 across locations A1 to C1.
pub fn default_seed() -> Vec<SeedBin<i64>> {
    vec![
        SeedBin::new(BinId::new(1), 50, "A1"),
        SeedBin::new(BinId::new(2), 100, "A2"),
        SeedBin::new(BinId::new(3), 150, "B1"),
        SeedBin::new(BinId::new(4), 200, "B2"),
        SeedBin::new(BinId::new(5), 500, "C1"),
    ]
}

/// Errors raised while bulk-loading a seed batch into the bin index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedError<T> {
    /// Two seed records share the same bin identifier.
    DuplicateBin {
        /// The identifier that appeared more than once.
        bin: BinId,
    },
    /// A seed record declared a non-positive capacity.
    InvalidCapacity {
        /// The offending bin.
        bin: BinId,
        /// The declared capacity.
        capacity: T,
    },
}

impl<T> std::fmt::Display for SeedError<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedError::DuplicateBin { bin } => {
                write!(f, "duplicate bin in seed: {}", bin)
            }
            SeedError::InvalidCapacity { bin, capacity } => {
                write!(
                    f,
                    "seed capacity for {} must be positive, got {}",
                    bin, capacity
                )
            }
        }
    }
}

impl<T> std::error::Error for SeedError<T> where T: std::fmt::Display + std::fmt::Debug {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_layout() {
        let seed = default_seed();
        assert_eq!(seed.len(), 5);
        assert_eq!(seed[0].id(), BinId::new(1));
        assert_eq!(seed[0].capacity(), 50);
        assert_eq!(seed[0].location(), "A1");
        assert_eq!(seed[4].id(), BinId::new(5));
        assert_eq!(seed[4].capacity(), 500);
        assert_eq!(seed[4].location(), "C1");
    }

    #[test]
    fn test_display() {
        let seed = SeedBin::new(BinId::new(2), 100i64, "A2");
        assert_eq!(format!("{}", seed), "Bin(2)(capacity: 100, location: A2)");
    }

    #[test]
    fn test_error_display() {
        let err: SeedError<i64> = SeedError::InvalidCapacity {
            bin: BinId::new(9),
            capacity: -5,
        };
        assert_eq!(
            format!("{}", err),
            "seed capacity for Bin(9) must be positive, got -5"
        );
    }
}
