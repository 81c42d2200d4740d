// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Kernel selection.
//!
//! Kernels are implemented on the *pair of kind markers* of the two
//! operands rather than on the operand types themselves. Every operand type
//! has exactly one kind, so for any `(A, B)` at most one impl of
//! [`Kernel<A, B>`] applies to [`Pair<A, B>`]; pairs with no impl do not
//! compile.
//!
//! | lhs \ rhs   | Scalar | Flat | FixedPointFlat | Shaped | BroadcastNd |
//! |-------------|--------|------|----------------|--------|-------------|
//! | Scalar      | K A    | K    | K              | K      | K           |
//! | Flat        | K A    | K R A|                |        |             |
//! | FixedPoint  | K A    |      | K R A          |        |             |
//! | Shaped      | K A    |      |                | K R A  |             |
//! | BroadcastNd | K A    |      |                |        | K R A       |
//!
//! `K` = [`Kernel`], `R` = [`RangedKernel`], `A` = [`AssignKernel`].

mod fixed;
mod flat;
mod nd;
mod scalar;
mod shaped;

use crate::{ArithmeticError, BinaryOp};
use array_core::{Operand, Range, Shape};

/// The kind-marker pair that selects the kernel for `(A, B)`.
pub type Pair<A, B> = (<A as Operand>::Kind, <B as Operand>::Kind);

/// The result container of an operation on `(A, B)`.
pub type Output<A, B> = <Pair<A, B> as Kernel<A, B>>::Output;

/// Whole-container elementwise kernel for operands `A` and `B`.
pub trait Kernel<A, B> {
    /// The result container.
    type Output;

    /// Allocates a zeroed output sized for `lhs OP rhs`.
    fn allocate<O: BinaryOp>(lhs: &A, rhs: &B) -> Result<Self::Output, ArithmeticError>;

    /// Writes `lhs OP rhs` into `out`, overwriting every element.
    fn apply<O: BinaryOp>(lhs: &A, rhs: &B, out: &mut Self::Output)
        -> Result<(), ArithmeticError>;
}

/// Kernel restricted to a window of the output's linear index space.
pub trait RangedKernel<A, B>: Kernel<A, B> {
    /// Writes `lhs OP rhs` into `out` for indices in `range` only.
    fn apply_ranged<O: BinaryOp>(
        lhs: &A,
        rhs: &B,
        range: &Range,
        out: &mut Self::Output,
    ) -> Result<(), ArithmeticError>;
}

/// Compound assignment `lhs = lhs OP rhs`, for pairings whose result has
/// the left operand's shape.
pub trait AssignKernel<A, B> {
    fn apply_assign<O: BinaryOp>(lhs: &mut A, rhs: &B) -> Result<(), ArithmeticError>;
}

fn check_len(op: &'static str, lhs: usize, rhs: usize) -> Result<(), ArithmeticError> {
    if lhs != rhs {
        return Err(ArithmeticError::ShapeMismatch {
            op,
            lhs: Shape::vector(lhs),
            rhs: Shape::vector(rhs),
        });
    }
    Ok(())
}

fn check_output(op: &'static str, expected: &Shape, out: &Shape) -> Result<(), ArithmeticError> {
    if expected != out {
        return Err(ArithmeticError::ShapeMismatch {
            op,
            lhs: expected.clone(),
            rhs: out.clone(),
        });
    }
    Ok(())
}
