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

use core::ops::{Add, Sub};

/// A trait for types that support checked addition by value (no references).
///
/// This mirrors the semantics of primitive integer `checked_add`, but provides
/// a trait-based API that does not take references (unlike some num_traits APIs).
///
/// # Examples
///
/// ```rust
/// # use gantry_core::num::ops::checked_arithmetic::CheckedAddVal;
/// let a: u8 = 200;
/// let b: u8 = 100;
/// assert_eq!(a.checked_add_val(b), None); // Overflow occurs
/// let c: u8 = 50;
/// assert_eq!(a.checked_add_val(c), Some(250)); // No overflow
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Performs checked addition by value, returning `None` if overflow occurs.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

macro_rules! checked_impl_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_method:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: $t) -> Option<$t> {
                <$t>::$src_method(self, v)
            }
        }
    };
}

checked_impl_val!(CheckedAddVal, checked_add_val, u8, checked_add);
checked_impl_val!(CheckedAddVal, checked_add_val, u16, checked_add);
checked_impl_val!(CheckedAddVal, checked_add_val, u32, checked_add);
checked_impl_val!(CheckedAddVal, checked_add_val, u64, checked_add);
checked_impl_val!(CheckedAddVal, checked_add_val, usize, checked_add);
checked_impl_val!(CheckedAddVal, checked_add_val, u128, checked_add);

checked_impl_val!(CheckedAddVal, checked_add_val, i8, checked_add);
checked_impl_val!(CheckedAddVal, checked_add_val, i16, checked_add);
checked_impl_val!(CheckedAddVal, checked_add_val, i32, checked_add);
checked_impl_val!(CheckedAddVal, checked_add_val, i64, checked_add);
checked_impl_val!(CheckedAddVal, checked_add_val, isize, checked_add);
checked_impl_val!(CheckedAddVal, checked_add_val, i128, checked_add);

/// A trait for types that support checked subtraction by value (no references).
///
/// # Examples
///
/// ```rust
/// # use gantry_core::num::ops::checked_arithmetic::CheckedSubVal;
///
/// let a: u8 = 50;
/// let b: u8 = 100;
/// assert_eq!(a.checked_sub_val(b), None); // Underflow occurs
/// let c: u8 = 20;
/// assert_eq!(a.checked_sub_val(c), Some(30)); // No underflow
/// ```
pub trait CheckedSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs checked subtraction by value, returning `None` if underflow occurs.
    fn checked_sub_val(self, v: Self) -> Option<Self>;
}

checked_impl_val!(CheckedSubVal, checked_sub_val, u8, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, u16, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, u32, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, u64, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, usize, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, u128, checked_sub);

checked_impl_val!(CheckedSubVal, checked_sub_val, i8, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, i16, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, i32, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, i64, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, isize, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, i128, checked_sub);
