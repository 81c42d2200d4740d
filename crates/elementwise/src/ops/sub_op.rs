// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Elementwise subtraction.

use super::{apply, apply_assign, apply_into, apply_ranged, apply_ranged_into};
use crate::kernel::{AssignKernel, Kernel, Output, Pair, RangedKernel};
use crate::{ArithmeticError, Subtract};
use array_core::{Operand, Range};

/// Computes `lhs - rhs` into a newly allocated container.
///
/// Operand order matters for scalar pairings: `subtract(&v, &s)` yields
/// `v[i] - s` and `subtract(&s, &v)` yields `s - v[i]`.
///
/// # Examples
/// ```
/// use array_core::Matrix;
/// use elementwise::subtract;
///
/// let m = Matrix::from_rows(&[[1i32, 2, 3], [4, 5, 6]]).unwrap();
/// let col = Matrix::from_rows(&[[10i32], [20]]).unwrap();
/// let out = subtract(&m, &col).unwrap();
/// assert_eq!(out.to_rows(), vec![vec![-9, -8, -7], vec![-16, -15, -14]]);
/// ```
pub fn subtract<A, B>(lhs: &A, rhs: &B) -> Result<Output<A, B>, ArithmeticError>
where
    A: Operand,
    B: Operand,
    Pair<A, B>: Kernel<A, B>,
{
    apply::<Subtract, A, B>(lhs, rhs)
}

/// Computes `lhs - rhs` into `out`.
pub fn subtract_into<A, B>(
    lhs: &A,
    rhs: &B,
    out: &mut Output<A, B>,
) -> Result<(), ArithmeticError>
where
    A: Operand,
    B: Operand,
    Pair<A, B>: Kernel<A, B>,
{
    apply_into::<Subtract, A, B>(lhs, rhs, out)
}

/// Computes `lhs - rhs` inside `range` into a newly allocated container.
pub fn subtract_ranged<A, B>(
    lhs: &A,
    rhs: &B,
    range: impl Into<Range>,
) -> Result<Output<A, B>, ArithmeticError>
where
    A: Operand,
    B: Operand,
    Pair<A, B>: RangedKernel<A, B>,
{
    apply_ranged::<Subtract, A, B>(lhs, rhs, range)
}

/// Computes `lhs - rhs` inside `range` into `out`.
pub fn subtract_ranged_into<A, B>(
    lhs: &A,
    rhs: &B,
    range: impl Into<Range>,
    out: &mut Output<A, B>,
) -> Result<(), ArithmeticError>
where
    A: Operand,
    B: Operand,
    Pair<A, B>: RangedKernel<A, B>,
{
    apply_ranged_into::<Subtract, A, B>(lhs, rhs, range, out)
}

/// Computes `lhs -= rhs` in place.
pub fn subtract_assign<A, B>(lhs: &mut A, rhs: &B) -> Result<(), ArithmeticError>
where
    A: Operand,
    B: Operand,
    Pair<A, B>: AssignKernel<A, B>,
{
    apply_assign::<Subtract, A, B>(lhs, rhs)
}
