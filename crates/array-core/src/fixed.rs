// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Signed binary fixed-point numbers.
//!
//! [`Fixed<FRAC>`] stores a value as an `i64` scaled by `2^FRAC`. Addition and
//! subtraction are exact on the raw representation; multiplication and
//! division go through an `i128` intermediate so no precision is lost
//! before the final rescale.
//!
//! Every operator wraps on overflow of the raw `i64` in all build profiles.
//! A product or quotient that leaves the representable range keeps the low
//! 64 bits of the rescaled `i128` result.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A signed fixed-point number with `FRAC` fractional bits.
///
/// Arithmetic wraps on overflow, matching the wrapping methods of `i64`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Fixed<const FRAC: u32> {
    raw: i64,
}

/// Q47.16 fixed point.
pub type Fixed16 = Fixed<16>;

/// Q31.32 fixed point.
pub type Fixed32 = Fixed<32>;

impl<const FRAC: u32> Fixed<FRAC> {
    /// Raw representation of `1.0`.
    const SCALE: i64 = {
        assert!(FRAC > 0 && FRAC < 63, "fractional bits must be in 1..=62");
        1i64 << FRAC
    };

    /// The smallest positive representable value.
    pub const EPSILON: Self = Self { raw: 1 };

    /// Creates a value from its raw scaled representation.
    pub const fn from_raw(raw: i64) -> Self {
        Self { raw }
    }

    /// Returns the raw scaled representation.
    pub const fn raw(self) -> i64 {
        self.raw
    }

    /// Creates a value from an integer.
    ///
    /// # Examples
    /// ```
    /// use array_core::Fixed16;
    /// assert_eq!(Fixed16::from_int(3).to_f64(), 3.0);
    /// ```
    pub fn from_int(value: i32) -> Self {
        Self {
            raw: i64::from(value) << FRAC,
        }
    }

    /// Converts from `f64`, rounding to the nearest representable value.
    pub fn from_f64(value: f64) -> Self {
        Self {
            raw: (value * Self::SCALE as f64).round() as i64,
        }
    }

    /// Converts to `f64`.
    pub fn to_f64(self) -> f64 {
        self.raw as f64 / Self::SCALE as f64
    }

    /// Returns the number of fractional bits.
    pub const fn frac_bits() -> u32 {
        FRAC
    }
}

impl<const FRAC: u32> Add for Fixed<FRAC> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            raw: self.raw.wrapping_add(rhs.raw),
        }
    }
}

impl<const FRAC: u32> Sub for Fixed<FRAC> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            raw: self.raw.wrapping_sub(rhs.raw),
        }
    }
}

impl<const FRAC: u32> Mul for Fixed<FRAC> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let wide = i128::from(self.raw) * i128::from(rhs.raw);
        Self {
            raw: (wide >> FRAC) as i64,
        }
    }
}

impl<const FRAC: u32> Div for Fixed<FRAC> {
    type Output = Self;

    /// # Panics
    /// Panics if `rhs` is zero. Callers that cannot rule this out check the
    /// divisor first.
    #[inline]
    fn div(self, rhs: Self) -> Self {
        let wide = i128::from(self.raw) << FRAC;
        Self {
            raw: (wide / i128::from(rhs.raw)) as i64,
        }
    }
}

impl<const FRAC: u32> Neg for Fixed<FRAC> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            raw: self.raw.wrapping_neg(),
        }
    }
}

impl<const FRAC: u32> PartialOrd for Fixed<FRAC> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const FRAC: u32> Ord for Fixed<FRAC> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl<const FRAC: u32> Zero for Fixed<FRAC> {
    fn zero() -> Self {
        Self { raw: 0 }
    }

    fn is_zero(&self) -> bool {
        self.raw == 0
    }
}

impl<const FRAC: u32> One for Fixed<FRAC> {
    fn one() -> Self {
        Self { raw: Self::SCALE }
    }
}

impl<const FRAC: u32> fmt::Debug for Fixed<FRAC> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fixed<{FRAC}>({})", self.to_f64())
    }
}

impl<const FRAC: u32> fmt::Display for Fixed<FRAC> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}
