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

//! Error types for bin index operations.

use crate::ids::BinId;

/// Errors reported by the bin index.
///
/// `NotFound` is a normal, recoverable signal; `Overflow` and `Underflow`
/// indicate a violated caller contract and must be surfaced, never
/// swallowed. A failed operation mutates nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinIndexError<T> {
    /// No bin has enough available capacity for the requested size.
    NotFound {
        /// The requested size.
        size: T,
    },
    /// The bin identifier is not part of the index.
    UnknownBin {
        /// The offending identifier.
        bin: BinId,
    },
    /// Reserving the amount would push usage beyond the bin capacity.
    Overflow {
        /// The bin on which the reserve was attempted.
        bin: BinId,
        /// The fixed capacity of the bin.
        capacity: T,
        /// The usage at the time of the attempt.
        usage: T,
        /// The requested amount.
        amount: T,
    },
    /// Releasing the amount would push usage below zero.
    Underflow {
        /// The bin on which the release was attempted.
        bin: BinId,
        /// The usage at the time of the attempt.
        usage: T,
        /// The requested amount.
        amount: T,
    },
    /// A non-positive amount was passed to a query or mutation.
    InvalidAmount {
        /// The offending amount.
        amount: T,
    },
}

impl<T> std::fmt::Display for BinIndexError<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinIndexError::NotFound { size } => {
                write!(f, "no bin with at least {} available capacity", size)
            }
            BinIndexError::UnknownBin { bin } => {
                write!(f, "unknown bin: {}", bin)
            }
            BinIndexError::Overflow {
                bin,
                capacity,
                usage,
                amount,
            } => {
                write!(
                    f,
                    "reserving {} on {} would exceed capacity (capacity: {}, usage: {})",
                    amount, bin, capacity, usage
                )
            }
            BinIndexError::Underflow { bin, usage, amount } => {
                write!(
                    f,
                    "releasing {} on {} would drop usage below zero (usage: {})",
                    amount, bin, usage
                )
            }
            BinIndexError::InvalidAmount { amount } => {
                write!(f, "amount must be positive, got {}", amount)
            }
        }
    }
}

impl<T> std::error::Error for BinIndexError<T> where T: std::fmt::Display + std::fmt::Debug {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_not_found() {
        let err: BinIndexError<i64> = BinIndexError::NotFound { size: 12 };
        assert_eq!(
            format!("{}", err),
            "no bin with at least 12 available capacity"
        );
    }

    #[test]
    fn test_display_overflow() {
        let err: BinIndexError<i64> = BinIndexError::Overflow {
            bin: BinId::new(3),
            capacity: 15,
            usage: 10,
            amount: 8,
        };
        assert_eq!(
            format!("{}", err),
            "reserving 8 on Bin(3) would exceed capacity (capacity: 15, usage: 10)"
        );
    }

    #[test]
    fn test_display_underflow() {
        let err: BinIndexError<i64> = BinIndexError::Underflow {
            bin: BinId::new(1),
            usage: 5,
            amount: 6,
        };
        assert_eq!(
            format!("{}", err),
            "releasing 6 on Bin(1) would drop usage below zero (usage: 5)"
        );
    }
}
