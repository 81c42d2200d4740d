// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! N-dimensional broadcasting arrays, executed as index loops.

use super::{check_output, AssignKernel, Kernel, RangedKernel};
use crate::broadcast::BroadcastPlan;
use crate::op::{check_divisor, check_divisors};
use crate::partition;
use crate::{ArithmeticError, BinaryOp};
use array_core::classify::{kind, IsBroadcastNd};
use array_core::Range;

impl<A: IsBroadcastNd> Kernel<A, A> for (kind::BroadcastNd, kind::BroadcastNd) {
    type Output = A;

    fn allocate<O: BinaryOp>(lhs: &A, rhs: &A) -> Result<A, ArithmeticError> {
        if lhs.shape_ref() == rhs.shape_ref() {
            return Ok(A::with_shape(lhs.shape_ref().clone()));
        }
        let plan = BroadcastPlan::nd(O::NAME, lhs.shape_ref(), rhs.shape_ref())?;
        Ok(A::with_shape(plan.out_shape().clone()))
    }

    fn apply<O: BinaryOp>(lhs: &A, rhs: &A, out: &mut A) -> Result<(), ArithmeticError> {
        <Self as RangedKernel<A, A>>::apply_ranged::<O>(lhs, rhs, &Range::undefined(), out)
    }
}

impl<A: IsBroadcastNd> RangedKernel<A, A> for (kind::BroadcastNd, kind::BroadcastNd) {
    fn apply_ranged<O: BinaryOp>(
        lhs: &A,
        rhs: &A,
        range: &Range,
        out: &mut A,
    ) -> Result<(), ArithmeticError> {
        let (a, b) = (lhs.as_slice(), rhs.as_slice());
        if lhs.shape_ref() == rhs.shape_ref() {
            check_output(O::NAME, lhs.shape_ref(), out.shape_ref())?;
            let window = partition::window(range, a.len())?;
            check_divisors::<O, A::Elem, _>(window.clone().map(|i| (i, b[i])))?;
            partition::index_zip(a, b, window, out.as_mut_slice(), O::apply::<A::Elem>);
        } else {
            let plan = BroadcastPlan::nd(O::NAME, lhs.shape_ref(), rhs.shape_ref())?;
            check_output(O::NAME, plan.out_shape(), out.shape_ref())?;
            let window = partition::window(range, out.len())?;
            check_divisors::<O, A::Elem, _>(plan.divisors(b, window.clone()))?;
            plan.index_fill(a, b, window, out.as_mut_slice(), O::apply::<A::Elem>);
        }
        Ok(())
    }
}

impl<A: IsBroadcastNd> AssignKernel<A, A> for (kind::BroadcastNd, kind::BroadcastNd) {
    fn apply_assign<O: BinaryOp>(lhs: &mut A, rhs: &A) -> Result<(), ArithmeticError> {
        let b = rhs.as_slice();
        let len = lhs.len();
        if lhs.shape_ref() == rhs.shape_ref() {
            check_divisors::<O, A::Elem, _>(b.iter().copied().enumerate())?;
            partition::index_zip_assign(lhs.as_mut_slice(), b, 0..len, O::apply::<A::Elem>);
            return Ok(());
        }
        let plan = BroadcastPlan::nd(O::NAME, lhs.shape_ref(), rhs.shape_ref())?;
        if plan.out_shape() != lhs.shape_ref() {
            return Err(ArithmeticError::ShapeMismatch {
                op: O::NAME,
                lhs: lhs.shape_ref().clone(),
                rhs: rhs.shape_ref().clone(),
            });
        }
        check_divisors::<O, A::Elem, _>(plan.divisors(b, 0..len))?;
        plan.index_update(lhs.as_mut_slice(), b, 0..len, O::apply::<A::Elem>);
        Ok(())
    }
}

impl<A: IsBroadcastNd> Kernel<A, A::Elem> for (kind::BroadcastNd, kind::Scalar) {
    type Output = A;

    fn allocate<O: BinaryOp>(lhs: &A, _rhs: &A::Elem) -> Result<A, ArithmeticError> {
        Ok(A::with_shape(lhs.shape_ref().clone()))
    }

    fn apply<O: BinaryOp>(lhs: &A, rhs: &A::Elem, out: &mut A) -> Result<(), ArithmeticError> {
        check_output(O::NAME, lhs.shape_ref(), out.shape_ref())?;
        check_divisor::<O, A::Elem>(*rhs)?;
        let s = *rhs;
        partition::index_map(lhs.as_slice(), 0..lhs.len(), out.as_mut_slice(), |x| {
            O::apply(x, s)
        });
        Ok(())
    }
}

impl<A: IsBroadcastNd> AssignKernel<A, A::Elem> for (kind::BroadcastNd, kind::Scalar) {
    fn apply_assign<O: BinaryOp>(lhs: &mut A, rhs: &A::Elem) -> Result<(), ArithmeticError> {
        check_divisor::<O, A::Elem>(*rhs)?;
        let s = *rhs;
        let len = lhs.len();
        partition::index_map_assign(lhs.as_mut_slice(), 0..len, |x| O::apply(x, s));
        Ok(())
    }
}

impl<B: IsBroadcastNd> Kernel<B::Elem, B> for (kind::Scalar, kind::BroadcastNd) {
    type Output = B;

    fn allocate<O: BinaryOp>(_lhs: &B::Elem, rhs: &B) -> Result<B, ArithmeticError> {
        Ok(B::with_shape(rhs.shape_ref().clone()))
    }

    fn apply<O: BinaryOp>(lhs: &B::Elem, rhs: &B, out: &mut B) -> Result<(), ArithmeticError> {
        check_output(O::NAME, rhs.shape_ref(), out.shape_ref())?;
        let b = rhs.as_slice();
        check_divisors::<O, B::Elem, _>(b.iter().copied().enumerate())?;
        let s = *lhs;
        partition::index_map(b, 0..b.len(), out.as_mut_slice(), |x| O::apply(s, x));
        Ok(())
    }
}
