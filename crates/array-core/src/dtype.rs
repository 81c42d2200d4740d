// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Supported element data types and the element trait hierarchy.

use crate::Fixed;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Enumerates the numeric types a container can hold.
///
/// The engine uses `DType` to decide whether division by zero is a defined
/// IEEE value or a caller error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum DType {
    /// 32-bit IEEE 754 floating point.
    F32,
    /// 64-bit IEEE 754 floating point.
    F64,
    /// Signed two's-complement integer of the given bit width.
    Int(u8),
    /// Unsigned integer of the given bit width.
    UInt(u8),
    /// Signed fixed point with the given number of fractional bits.
    Fixed(u32),
}

impl DType {
    /// Returns the size of a single element in bytes.
    pub fn size_bytes(self) -> usize {
        match self {
            DType::F32 => 4,
            DType::F64 => 8,
            DType::Int(bits) | DType::UInt(bits) => bits as usize / 8,
            DType::Fixed(_) => 8,
        }
    }

    /// Returns `true` for IEEE floating-point types.
    pub fn is_float(self) -> bool {
        matches!(self, DType::F32 | DType::F64)
    }

    /// Returns `true` for fixed-point types.
    pub fn is_fixed_point(self) -> bool {
        matches!(self, DType::Fixed(_))
    }

    /// Returns a human-readable label for this data type.
    pub fn as_str(self) -> &'static str {
        match self {
            DType::F32 => "f32",
            DType::F64 => "f64",
            DType::Int(8) => "i8",
            DType::Int(16) => "i16",
            DType::Int(32) => "i32",
            DType::Int(_) => "i64",
            DType::UInt(8) => "u8",
            DType::UInt(16) => "u16",
            DType::UInt(32) => "u32",
            DType::UInt(_) => "u64",
            DType::Fixed(16) => "fixed16",
            DType::Fixed(32) => "fixed32",
            DType::Fixed(_) => "fixed",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A numeric element that every container kind can store.
///
/// The `*_wrapping` operations are what elementwise kernels execute.
/// Integer and fixed-point elements wrap on overflow in every build
/// profile, including `MIN / -1`; float elements follow IEEE 754.
/// Division by zero is not defined here and must be ruled out by the caller
/// for non-float elements.
pub trait Element:
    Copy
    + Send
    + Sync
    + PartialEq
    + fmt::Debug
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + 'static
{
    /// The runtime descriptor of this element type.
    const DTYPE: DType;

    fn add_wrapping(self, rhs: Self) -> Self;

    fn sub_wrapping(self, rhs: Self) -> Self;

    fn mul_wrapping(self, rhs: Self) -> Self;

    /// # Panics
    /// Panics on a zero divisor for integer elements.
    fn div_wrapping(self, rhs: Self) -> Self;
}

/// Elements whose arithmetic may be executed through a container's
/// batch-apply capability.
pub trait VectorElement: Element {}

/// Fixed-point elements. Containers of these are always processed with
/// plain index loops.
pub trait FixedPointElement: Element {
    /// Converts from `f64`, rounding to the nearest representable value.
    fn from_f64(value: f64) -> Self;

    /// Converts to `f64`.
    fn to_f64(self) -> f64;
}

macro_rules! float_element_impl {
    ($t:ty, $dtype:expr) => {
        impl Element for $t {
            const DTYPE: DType = $dtype;

            #[inline]
            fn add_wrapping(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn sub_wrapping(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline]
            fn mul_wrapping(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline]
            fn div_wrapping(self, rhs: Self) -> Self {
                self / rhs
            }
        }
        impl VectorElement for $t {}
    };
}

macro_rules! int_element_impl {
    ($t:ty, $dtype:expr) => {
        impl Element for $t {
            const DTYPE: DType = $dtype;

            #[inline]
            fn add_wrapping(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline]
            fn sub_wrapping(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            #[inline]
            fn mul_wrapping(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            #[inline]
            fn div_wrapping(self, rhs: Self) -> Self {
                self.wrapping_div(rhs)
            }
        }
        impl VectorElement for $t {}
    };
}

float_element_impl!(f32, DType::F32);
float_element_impl!(f64, DType::F64);
int_element_impl!(i8, DType::Int(8));
int_element_impl!(i16, DType::Int(16));
int_element_impl!(i32, DType::Int(32));
int_element_impl!(i64, DType::Int(64));
int_element_impl!(u8, DType::UInt(8));
int_element_impl!(u16, DType::UInt(16));
int_element_impl!(u32, DType::UInt(32));
int_element_impl!(u64, DType::UInt(64));

// `Fixed` operators already wrap.
impl<const FRAC: u32> Element for Fixed<FRAC> {
    const DTYPE: DType = DType::Fixed(FRAC);

    #[inline]
    fn add_wrapping(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline]
    fn sub_wrapping(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline]
    fn mul_wrapping(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline]
    fn div_wrapping(self, rhs: Self) -> Self {
        self / rhs
    }
}

impl<const FRAC: u32> FixedPointElement for Fixed<FRAC> {
    fn from_f64(value: f64) -> Self {
        Fixed::from_f64(value)
    }

    fn to_f64(self) -> f64 {
        Fixed::to_f64(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Fixed16;

    #[test]
    fn test_dtype_sizes() {
        assert_eq!(DType::F32.size_bytes(), 4);
        assert_eq!(DType::F64.size_bytes(), 8);
        assert_eq!(DType::Int(16).size_bytes(), 2);
        assert_eq!(DType::UInt(8).size_bytes(), 1);
        assert_eq!(DType::Fixed(16).size_bytes(), 8);
    }

    #[test]
    fn test_element_dtypes() {
        assert_eq!(<f32 as Element>::DTYPE, DType::F32);
        assert_eq!(<i64 as Element>::DTYPE, DType::Int(64));
        assert_eq!(<u16 as Element>::DTYPE, DType::UInt(16));
        assert_eq!(<Fixed16 as Element>::DTYPE, DType::Fixed(16));
    }

    #[test]
    fn test_integer_arithmetic_wraps() {
        assert_eq!(i64::MIN.div_wrapping(-1), i64::MIN);
        assert_eq!(i8::MAX.add_wrapping(1), i8::MIN);
        assert_eq!(0u8.sub_wrapping(1), u8::MAX);
        assert_eq!(i32::MIN.mul_wrapping(-1), i32::MIN);
        assert_eq!(7u16.div_wrapping(2), 3);
    }

    #[test]
    fn test_float_arithmetic_is_ieee() {
        assert_eq!(1.5f64.add_wrapping(0.25), 1.75);
        assert_eq!(f32::MAX.mul_wrapping(2.0), f32::INFINITY);
        assert!(0.0f64.div_wrapping(0.0).is_nan());
    }

    #[test]
    fn test_float_classification() {
        assert!(DType::F32.is_float());
        assert!(!DType::Int(32).is_float());
        assert!(!DType::Fixed(16).is_float());
        assert!(DType::Fixed(32).is_fixed_point());
    }

    #[test]
    fn test_labels() {
        assert_eq!(DType::F64.as_str(), "f64");
        assert_eq!(DType::Int(8).as_str(), "i8");
        assert_eq!(format!("{}", DType::Fixed(16)), "fixed16");
    }
}
