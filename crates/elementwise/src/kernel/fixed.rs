// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Fixed-point flat containers, executed as plain index loops.

use super::{check_len, AssignKernel, Kernel, RangedKernel};
use crate::op::{check_divisor, check_divisors};
use crate::partition;
use crate::{ArithmeticError, BinaryOp};
use array_core::classify::{kind, IsFixedPointFlat};
use array_core::Range;

impl<A: IsFixedPointFlat> Kernel<A, A> for (kind::FixedPointFlat, kind::FixedPointFlat) {
    type Output = A;

    fn allocate<O: BinaryOp>(lhs: &A, rhs: &A) -> Result<A, ArithmeticError> {
        check_len(O::NAME, lhs.len(), rhs.len())?;
        Ok(A::with_len(lhs.len()))
    }

    fn apply<O: BinaryOp>(lhs: &A, rhs: &A, out: &mut A) -> Result<(), ArithmeticError> {
        <Self as RangedKernel<A, A>>::apply_ranged::<O>(lhs, rhs, &Range::undefined(), out)
    }
}

impl<A: IsFixedPointFlat> RangedKernel<A, A> for (kind::FixedPointFlat, kind::FixedPointFlat) {
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
        partition::index_zip(a, b, window, out.as_mut_slice(), O::apply::<A::Elem>);
        Ok(())
    }
}

impl<A: IsFixedPointFlat> AssignKernel<A, A> for (kind::FixedPointFlat, kind::FixedPointFlat) {
    fn apply_assign<O: BinaryOp>(lhs: &mut A, rhs: &A) -> Result<(), ArithmeticError> {
        check_len(O::NAME, lhs.len(), rhs.len())?;
        let b = rhs.as_slice();
        check_divisors::<O, A::Elem, _>(b.iter().copied().enumerate())?;
        let len = lhs.len();
        partition::index_zip_assign(lhs.as_mut_slice(), b, 0..len, O::apply::<A::Elem>);
        Ok(())
    }
}

impl<A: IsFixedPointFlat> Kernel<A, A::Elem> for (kind::FixedPointFlat, kind::Scalar) {
    type Output = A;

    fn allocate<O: BinaryOp>(lhs: &A, _rhs: &A::Elem) -> Result<A, ArithmeticError> {
        Ok(A::with_len(lhs.len()))
    }

    fn apply<O: BinaryOp>(lhs: &A, rhs: &A::Elem, out: &mut A) -> Result<(), ArithmeticError> {
        check_len(O::NAME, lhs.len(), out.len())?;
        check_divisor::<O, A::Elem>(*rhs)?;
        let s = *rhs;
        partition::index_map(lhs.as_slice(), 0..lhs.len(), out.as_mut_slice(), |x| {
            O::apply(x, s)
        });
        Ok(())
    }
}

impl<A: IsFixedPointFlat> AssignKernel<A, A::Elem> for (kind::FixedPointFlat, kind::Scalar) {
    fn apply_assign<O: BinaryOp>(lhs: &mut A, rhs: &A::Elem) -> Result<(), ArithmeticError> {
        check_divisor::<O, A::Elem>(*rhs)?;
        let s = *rhs;
        let len = lhs.len();
        partition::index_map_assign(lhs.as_mut_slice(), 0..len, |x| O::apply(x, s));
        Ok(())
    }
}

impl<B: IsFixedPointFlat> Kernel<B::Elem, B> for (kind::Scalar, kind::FixedPointFlat) {
    type Output = B;

    fn allocate<O: BinaryOp>(_lhs: &B::Elem, rhs: &B) -> Result<B, ArithmeticError> {
        Ok(B::with_len(rhs.len()))
    }

    fn apply<O: BinaryOp>(lhs: &B::Elem, rhs: &B, out: &mut B) -> Result<(), ArithmeticError> {
        check_len(O::NAME, rhs.len(), out.len())?;
        let b = rhs.as_slice();
        check_divisors::<O, B::Elem, _>(b.iter().copied().enumerate())?;
        let s = *lhs;
        partition::index_map(b, 0..b.len(), out.as_mut_slice(), |x| O::apply(s, x));
        Ok(())
    }
}
