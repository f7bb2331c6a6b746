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

//! # Storage Numeric Trait
//!
//! Unified numeric bounds for capacity and size arithmetic. `StorageNumeric`
//! specifies the integer capabilities required by the bin index, the truck
//! loader, and the warehouse controller, including intrinsic traits
//! (`PrimInt`, `Signed`) and by-value checked/saturating arithmetic.
//!
//! ## Motivation
//!
//! Allocation and loading pipelines should remain generic over integer types
//! while retaining predictable arithmetic semantics. This trait collects the
//! necessary bounds into a single alias, simplifying generic signatures and
//! ensuring consistent overflow handling across crates.
//!
//! ## Highlights
//!
//! - Requires `PrimInt + Signed + FromPrimitive` for numeric fundamentals.
//! - Includes the `Zero` constant trait for sentinel-free comparisons.
//! - Adds by-value arithmetic traits: checked add/sub returning `Option<T>`
//!   and saturating add clamping to type bounds.
//! - `Send + Sync` so controller state can cross thread boundaries.

use std::hash::Hash;

use crate::num::{
    constants::Zero,
    ops::{checked_arithmetic, saturating_arithmetic},
};
use num_traits::{FromPrimitive, PrimInt, Signed};

/// A trait alias for numeric types that can represent bin capacities,
/// bin usage, and package sizes.
///
/// This includes integer types that support the required arithmetic
/// operations with both saturating and checked semantics. These are
/// usually all signed integer types such as `i16`, `i32`, `i64` and `isize`.
pub trait StorageNumeric:
    PrimInt
    + Signed
    + FromPrimitive
    + std::fmt::Debug
    + std::fmt::Display
    + Zero
    + saturating_arithmetic::SaturatingAddVal
    + checked_arithmetic::CheckedAddVal
    + checked_arithmetic::CheckedSubVal
    + Send
    + Sync
    + Hash
{
}

impl<T> StorageNumeric for T where
    T: PrimInt
        + Signed
        + FromPrimitive
        + std::fmt::Debug
        + std::fmt::Display
        + Zero
        + saturating_arithmetic::SaturatingAddVal
        + checked_arithmetic::CheckedAddVal
        + checked_arithmetic::CheckedSubVal
        + Send
        + Sync
        + Hash
{
}
