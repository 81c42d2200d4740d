// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Elementwise addition.

use super::{apply, apply_assign, apply_into, apply_ranged, apply_ranged_into};
use crate::kernel::{AssignKernel, Kernel, Output, Pair, RangedKernel};
use crate::{Add, ArithmeticError};
use array_core::{Operand, Range};

/// Computes `lhs + rhs` into a newly allocated container.
///
/// Accepts any pairing of a scalar with a container (in either order), two
/// containers of the same kind, or two scalars. The output is sized from
/// the container operand, or from the broadcast shape when two matrices or
/// two n-dimensional arrays differ in shape.
///
/// # Errors
/// Returns [`ArithmeticError::ShapeMismatch`] if the operands cannot be
/// paired elementwise.
///
/// # Examples
/// ```
/// use array_core::{Container, Vector};
/// use elementwise::add;
///
/// let a = Vector::from_vec(vec![1.0f32, 2.0, 3.0]);
/// let b = Vector::from_vec(vec![0.5f32, 0.5, 0.5]);
/// assert_eq!(add(&a, &b).unwrap().as_slice(), &[1.5, 2.5, 3.5]);
/// assert_eq!(add(&a, &1.0f32).unwrap().as_slice(), &[2.0, 3.0, 4.0]);
/// ```
pub fn add<A, B>(lhs: &A, rhs: &B) -> Result<Output<A, B>, ArithmeticError>
where
    A: Operand,
    B: Operand,
    Pair<A, B>: Kernel<A, B>,
{
    apply::<Add, A, B>(lhs, rhs)
}

/// Computes `lhs + rhs` into `out`.
///
/// `out` must already have the result shape; every element is overwritten.
///
/// # Errors
/// Returns [`ArithmeticError::ShapeMismatch`] if the operands cannot be
/// paired or `out` has the wrong shape. `out` is unchanged on error.
pub fn add_into<A, B>(lhs: &A, rhs: &B, out: &mut Output<A, B>) -> Result<(), ArithmeticError>
where
    A: Operand,
    B: Operand,
    Pair<A, B>: Kernel<A, B>,
{
    apply_into::<Add, A, B>(lhs, rhs, out)
}

/// Computes `lhs + rhs` for the indices in `range` only, into a newly
/// allocated container that is zero elsewhere.
///
/// Defined for two containers of the same kind. An undefined range covers
/// the whole container; for broadcasting pairs the window indexes the
/// output.
///
/// # Errors
/// Returns [`ArithmeticError::UnsupportedRange`] for a strided range and
/// [`ArithmeticError::RangeOutOfBounds`] for a window past the end.
pub fn add_ranged<A, B>(
    lhs: &A,
    rhs: &B,
    range: impl Into<Range>,
) -> Result<Output<A, B>, ArithmeticError>
where
    A: Operand,
    B: Operand,
    Pair<A, B>: RangedKernel<A, B>,
{
    apply_ranged::<Add, A, B>(lhs, rhs, range)
}

/// Computes `lhs + rhs` into `out` for the indices in `range` only.
///
/// Elements of `out` outside the window keep their values.
///
/// # Examples
/// ```
/// use array_core::{Container, Range, Vector};
/// use elementwise::add_ranged_into;
///
/// let a = Vector::from_vec(vec![1i32, 2, 3, 4]);
/// let b = Vector::from_vec(vec![10i32, 10, 10, 10]);
/// let mut out = Vector::from_vec(vec![-1i32, -1, -1, -1]);
/// add_ranged_into(&a, &b, Range::new(1, 3), &mut out).unwrap();
/// assert_eq!(out.as_slice(), &[-1, 12, 13, -1]);
/// ```
pub fn add_ranged_into<A, B>(
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
    apply_ranged_into::<Add, A, B>(lhs, rhs, range, out)
}

/// Computes `lhs += rhs` in place.
///
/// Defined when the result has `lhs`'s shape: a scalar right operand, a
/// right operand of the same shape, or one that broadcasts into `lhs`.
pub fn add_assign<A, B>(lhs: &mut A, rhs: &B) -> Result<(), ArithmeticError>
where
    A: Operand,
    B: Operand,
    Pair<A, B>: AssignKernel<A, B>,
{
    apply_assign::<Add, A, B>(lhs, rhs)
}
