// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The four binary operations and the divisor guard they share.

use crate::ArithmeticError;
use array_core::Element;

/// A binary arithmetic operation applied to one pair of elements.
///
/// Operations are zero-sized types; kernels are generic over them so each
/// (kind pair, operation) combination is monomorphised separately.
pub trait BinaryOp: Send + Sync + 'static {
    /// Name used in errors and logs.
    const NAME: &'static str;

    /// Whether a zero right operand must be rejected for non-float elements.
    const CHECKS_DIVISOR: bool = false;

    fn apply<T: Element>(lhs: T, rhs: T) -> T;
}

/// `lhs + rhs`
#[derive(Debug, Clone, Copy, Default)]
pub struct Add;

/// `lhs - rhs`
#[derive(Debug, Clone, Copy, Default)]
pub struct Subtract;

/// `lhs * rhs`
#[derive(Debug, Clone, Copy, Default)]
pub struct Multiply;

/// `lhs / rhs`
///
/// Floats follow IEEE 754 (`x / 0.0` is infinite or NaN). Integer and
/// fixed-point division by zero is reported as
/// [`ArithmeticError::DivideByZero`]; `MIN / -1` wraps to `MIN`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Divide;

impl BinaryOp for Add {
    const NAME: &'static str = "add";

    #[inline]
    fn apply<T: Element>(lhs: T, rhs: T) -> T {
        lhs.add_wrapping(rhs)
    }
}

impl BinaryOp for Subtract {
    const NAME: &'static str = "subtract";

    #[inline]
    fn apply<T: Element>(lhs: T, rhs: T) -> T {
        lhs.sub_wrapping(rhs)
    }
}

impl BinaryOp for Multiply {
    const NAME: &'static str = "multiply";

    #[inline]
    fn apply<T: Element>(lhs: T, rhs: T) -> T {
        lhs.mul_wrapping(rhs)
    }
}

impl BinaryOp for Divide {
    const NAME: &'static str = "divide";
    const CHECKS_DIVISOR: bool = true;

    #[inline]
    fn apply<T: Element>(lhs: T, rhs: T) -> T {
        lhs.div_wrapping(rhs)
    }
}

fn guards_divisor<O: BinaryOp, T: Element>() -> bool {
    O::CHECKS_DIVISOR && !T::DTYPE.is_float()
}

/// Rejects a zero scalar divisor.
pub(crate) fn check_divisor<O: BinaryOp, T: Element>(divisor: T) -> Result<(), ArithmeticError> {
    if guards_divisor::<O, T>() && divisor.is_zero() {
        return Err(ArithmeticError::DivideByZero {
            op: O::NAME,
            index: None,
        });
    }
    Ok(())
}

/// Rejects the first zero among `(output index, divisor)` pairs.
///
/// The iterator is never advanced unless the operation and element type
/// need the guard.
pub(crate) fn check_divisors<O, T, I>(divisors: I) -> Result<(), ArithmeticError>
where
    O: BinaryOp,
    T: Element,
    I: IntoIterator<Item = (usize, T)>,
{
    if !guards_divisor::<O, T>() {
        return Ok(());
    }
    match divisors.into_iter().find(|(_, d)| d.is_zero()) {
        Some((index, _)) => Err(ArithmeticError::DivideByZero {
            op: O::NAME,
            index: Some(index),
        }),
        None => Ok(()),
    }
}
