// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Flat containers, executed through batch apply.

use super::{check_len, AssignKernel, Kernel, RangedKernel};
use crate::op::{check_divisor, check_divisors};
use crate::partition;
use crate::{ArithmeticError, BinaryOp};
use array_core::classify::{kind, IsFlat};
use array_core::Range;

impl<A: IsFlat> Kernel<A, A> for (kind::Flat, kind::Flat) {
    type Output = A;

    fn allocate<O: BinaryOp>(lhs: &A, rhs: &A) -> Result<A, ArithmeticError> {
        check_len(O::NAME, lhs.len(), rhs.len())?;
        Ok(A::with_len(lhs.len()))
    }

    fn apply<O: BinaryOp>(lhs: &A, rhs: &A, out: &mut A) -> Result<(), ArithmeticError> {
        <Self as RangedKernel<A, A>>::apply_ranged::<O>(lhs, rhs, &Range::undefined(), out)
    }
}

impl<A: IsFlat> RangedKernel<A, A> for (kind::Flat, kind::Flat) {
    fn apply_ranged<O: BinaryOp>(
        lhs: &A,
        rhs: &A,
        range: &Range,
        out: &mut A,
    ) -> Result<(), ArithmeticError> {
        check_len(O::NAME, lhs.len(), rhs.len())?;
        check_len(O::NAME, lhs.len(), out.len())?;
        let window = partition::window(range, lhs.len())?;
        let (a, b) = (lhs.as_slice(), rhs.as_slice());
        check_divisors::<O, A::Elem, _>(window.clone().map(|i| (i, b[i])))?;
        partition::batch_zip(a, b, window, out, O::apply::<A::Elem>);
        Ok(())
    }
}

impl<A: IsFlat> AssignKernel<A, A> for (kind::Flat, kind::Flat) {
    fn apply_assign<O: BinaryOp>(lhs: &mut A, rhs: &A) -> Result<(), ArithmeticError> {
        check_len(O::NAME, lhs.len(), rhs.len())?;
        let b = rhs.as_slice();
        check_divisors::<O, A::Elem, _>(b.iter().copied().enumerate())?;
        let len = lhs.len();
        partition::batch_zip_assign(lhs, b, 0..len, O::apply::<A::Elem>);
        Ok(())
    }
}

impl<A: IsFlat> Kernel<A, A::Elem> for (kind::Flat, kind::Scalar) {
    type Output = A;

    fn allocate<O: BinaryOp>(lhs: &A, _rhs: &A::Elem) -> Result<A, ArithmeticError> {
        Ok(A::with_len(lhs.len()))
    }

    fn apply<O: BinaryOp>(lhs: &A, rhs: &A::Elem, out: &mut A) -> Result<(), ArithmeticError> {
        check_len(O::NAME, lhs.len(), out.len())?;
        check_divisor::<O, A::Elem>(*rhs)?;
        let s = *rhs;
        partition::batch_map(lhs.as_slice(), 0..lhs.len(), out, move |x| O::apply(x, s));
        Ok(())
    }
}

impl<A: IsFlat> AssignKernel<A, A::Elem> for (kind::Flat, kind::Scalar) {
    fn apply_assign<O: BinaryOp>(lhs: &mut A, rhs: &A::Elem) -> Result<(), ArithmeticError> {
        check_divisor::<O, A::Elem>(*rhs)?;
        let s = *rhs;
        let len = lhs.len();
        partition::batch_map_assign(lhs, 0..len, move |x| O::apply(x, s));
        Ok(())
    }
}

impl<B: IsFlat> Kernel<B::Elem, B> for (kind::Scalar, kind::Flat) {
    type Output = B;

    fn allocate<O: BinaryOp>(_lhs: &B::Elem, rhs: &B) -> Result<B, ArithmeticError> {
        Ok(B::with_len(rhs.len()))
    }

    fn apply<O: BinaryOp>(lhs: &B::Elem, rhs: &B, out: &mut B) -> Result<(), ArithmeticError> {
        check_len(O::NAME, rhs.len(), out.len())?;
        let b = rhs.as_slice();
        check_divisors::<O, B::Elem, _>(b.iter().copied().enumerate())?;
        let s = *lhs;
        partition::batch_map(b, 0..b.len(), out, move |x| O::apply(s, x));
        Ok(())
    }
}
