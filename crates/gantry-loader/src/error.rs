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

//! Error types for the truck loading search.

use gantry_model::ids::PackageId;

/// Errors reported before a loading search starts.
///
/// Both variants indicate invalid input; the search itself cannot fail once
/// its inputs validate, it can only be aborted by a monitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderError<T> {
    /// The truck capacity is zero or negative.
    InvalidCapacity {
        /// The offending capacity.
        capacity: T,
    },
    /// A candidate declares a zero or negative size.
    InvalidCandidate {
        /// The package the candidate refers to.
        package: PackageId,
        /// The offending size.
        size: T,
    },
}

impl<T> std::fmt::Display for LoaderError<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::InvalidCapacity { capacity } => {
                write!(f, "truck capacity must be positive, got {}", capacity)
            }
            LoaderError::InvalidCandidate { package, size } => {
                write!(
                    f,
                    "load candidate for {} has a non-positive size of {}",
                    package, size
                )
            }
        }
    }
}

impl<T> std::error::Error for LoaderError<T> where T: std::fmt::Display + std::fmt::Debug {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_capacity() {
        let err: LoaderError<i64> = LoaderError::InvalidCapacity { capacity: -3 };
        assert_eq!(format!("{}", err), "truck capacity must be positive, got -3");
    }

    #[test]
    fn test_display_invalid_candidate() {
        let err: LoaderError<i64> = LoaderError::InvalidCandidate {
            package: PackageId::new(2),
            size: 0,
        };
        assert_eq!(
            format!("{}", err),
            "load candidate for Package(2) has a non-positive size of 0"
        );
    }

    #[test]
    fn test_error_trait_object() {
        let err: Box<dyn std::error::Error> =
            Box::new(LoaderError::<i64>::InvalidCapacity { capacity: 0 });
        assert!(format!("{}", err).contains("capacity"));
    }
}
