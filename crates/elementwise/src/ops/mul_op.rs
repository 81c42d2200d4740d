// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Elementwise multiplication.

use super::{apply, apply_assign, apply_into, apply_ranged, apply_ranged_into};
use crate::kernel::{AssignKernel, Kernel, Output, Pair, RangedKernel};
use crate::{ArithmeticError, Multiply};
use array_core::{Operand, Range};

/// Computes `lhs * rhs` into a newly allocated container.
pub fn multiply<A, B>(lhs: &A, rhs: &B) -> Result<Output<A, B>, ArithmeticError>
where
    A: Operand,
    B: Operand,
    Pair<A, B>: Kernel<A, B>,
{
    apply::<Multiply, A, B>(lhs, rhs)
}

/// Computes `lhs * rhs` into `out`.
pub fn multiply_into<A, B>(
    lhs: &A,
    rhs: &B,
    out: &mut Output<A, B>,
) -> Result<(), ArithmeticError>
where
    A: Operand,
    B: Operand,
    Pair<A, B>: Kernel<A, B>,
{
    apply_into::<Multiply, A, B>(lhs, rhs, out)
}

/// Computes `lhs * rhs` inside `range` into a newly allocated container.
pub fn multiply_ranged<A, B>(
    lhs: &A,
    rhs: &B,
    range: impl Into<Range>,
) -> Result<Output<A, B>, ArithmeticError>
where
    A: Operand,
    B: Operand,
    Pair<A, B>: RangedKernel<A, B>,
{
    apply_ranged::<Multiply, A, B>(lhs, rhs, range)
}

/// Computes `lhs * rhs` inside `range` into `out`.
pub fn multiply_ranged_into<A, B>(
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
    apply_ranged_into::<Multiply, A, B>(lhs, rhs, range, out)
}

/// Computes `lhs *= rhs` in place.
pub fn multiply_assign<A, B>(lhs: &mut A, rhs: &B) -> Result<(), ArithmeticError>
where
    A: Operand,
    B: Operand,
    Pair<A, B>: AssignKernel<A, B>,
{
    apply_assign::<Multiply, A, B>(lhs, rhs)
}
