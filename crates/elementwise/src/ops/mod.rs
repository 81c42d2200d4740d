// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Operation entry points.
//!
//! Every operation comes in five forms:
//!
//! | form              | output                                  |
//! |-------------------|-----------------------------------------|
//! | `op(a, b)`        | newly allocated                         |
//! | `op_into(a, b, out)` | caller's pre-sized `out`, overwritten |
//! | `op_ranged(a, b, r)` | newly allocated, zero outside `r`     |
//! | `op_ranged_into(a, b, r, out)` | `out`, written only inside `r` |
//! | `op_assign(a, b)` | `a` itself                              |
//!
//! The `_into` forms can never alias an input: the borrow checker rejects
//! `op_into(&a, &b, &mut a)`. The `_assign` form is the in-place path; it
//! is offered only where the result has the left operand's shape.
//!
//! The generic drivers [`apply`], [`apply_into`], [`apply_ranged`],
//! [`apply_ranged_into`] and [`apply_assign`] take the operation as a type
//! parameter and back every named function.

mod add_op;
mod div_op;
mod mul_op;
mod sub_op;

pub use add_op::{add, add_assign, add_into, add_ranged, add_ranged_into};
pub use div_op::{divide, divide_assign, divide_into, divide_ranged, divide_ranged_into};
pub use mul_op::{multiply, multiply_assign, multiply_into, multiply_ranged, multiply_ranged_into};
pub use sub_op::{subtract, subtract_assign, subtract_into, subtract_ranged, subtract_ranged_into};

use crate::kernel::{AssignKernel, Kernel, Output, Pair, RangedKernel};
use crate::{ArithmeticError, BinaryOp};
use array_core::{KindMarker, Operand, Range};

fn trace_dispatch<O: BinaryOp, A: Operand, B: Operand>(form: &str, range: Option<&Range>) {
    let lhs = <A::Kind as KindMarker>::KIND.as_str();
    let rhs = <B::Kind as KindMarker>::KIND.as_str();
    match range {
        Some(range) => tracing::trace!("{} {form}: {lhs} x {rhs} over {range:?}", O::NAME),
        None => tracing::trace!("{} {form}: {lhs} x {rhs}", O::NAME),
    }
}

/// Computes `lhs OP rhs` into a newly allocated output.
pub fn apply<O, A, B>(lhs: &A, rhs: &B) -> Result<Output<A, B>, ArithmeticError>
where
    O: BinaryOp,
    A: Operand,
    B: Operand,
    Pair<A, B>: Kernel<A, B>,
{
    trace_dispatch::<O, A, B>("allocating", None);
    let mut out = <Pair<A, B> as Kernel<A, B>>::allocate::<O>(lhs, rhs)?;
    <Pair<A, B> as Kernel<A, B>>::apply::<O>(lhs, rhs, &mut out)?;
    Ok(out)
}

/// Computes `lhs OP rhs` into `out`, which must already have the result shape.
pub fn apply_into<O, A, B>(lhs: &A, rhs: &B, out: &mut Output<A, B>) -> Result<(), ArithmeticError>
where
    O: BinaryOp,
    A: Operand,
    B: Operand,
    Pair<A, B>: Kernel<A, B>,
{
    trace_dispatch::<O, A, B>("into", None);
    <Pair<A, B> as Kernel<A, B>>::apply::<O>(lhs, rhs, out)
}

/// Computes `lhs OP rhs` inside `range` into a newly allocated, zeroed output.
pub fn apply_ranged<O, A, B>(
    lhs: &A,
    rhs: &B,
    range: impl Into<Range>,
) -> Result<Output<A, B>, ArithmeticError>
where
    O: BinaryOp,
    A: Operand,
    B: Operand,
    Pair<A, B>: RangedKernel<A, B>,
{
    let range = range.into();
    trace_dispatch::<O, A, B>("ranged", Some(&range));
    let mut out = <Pair<A, B> as Kernel<A, B>>::allocate::<O>(lhs, rhs)?;
    <Pair<A, B> as RangedKernel<A, B>>::apply_ranged::<O>(lhs, rhs, &range, &mut out)?;
    Ok(out)
}

/// Computes `lhs OP rhs` inside `range` into `out`; elements outside the
/// window are left untouched.
pub fn apply_ranged_into<O, A, B>(
    lhs: &A,
    rhs: &B,
    range: impl Into<Range>,
    out: &mut Output<A, B>,
) -> Result<(), ArithmeticError>
where
    O: BinaryOp,
    A: Operand,
    B: Operand,
    Pair<A, B>: RangedKernel<A, B>,
{
    let range = range.into();
    trace_dispatch::<O, A, B>("ranged into", Some(&range));
    <Pair<A, B> as RangedKernel<A, B>>::apply_ranged::<O>(lhs, rhs, &range, out)
}

/// Computes `lhs = lhs OP rhs`.
pub fn apply_assign<O, A, B>(lhs: &mut A, rhs: &B) -> Result<(), ArithmeticError>
where
    O: BinaryOp,
    A: Operand,
    B: Operand,
    Pair<A, B>: AssignKernel<A, B>,
{
    trace_dispatch::<O, A, B>("assign", None);
    <Pair<A, B> as AssignKernel<A, B>>::apply_assign::<O>(lhs, rhs)
}
