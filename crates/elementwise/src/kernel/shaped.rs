// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Matrices: same-shape, scalar and row/column broadcast.

use super::{check_output, AssignKernel, Kernel, RangedKernel};
use crate::broadcast::BroadcastPlan;
use crate::op::{check_divisor, check_divisors};
use crate::partition;
use crate::{ArithmeticError, BinaryOp};
use array_core::classify::{kind, IsShaped};
use array_core::Range;

impl<A: IsShaped> Kernel<A, A> for (kind::Shaped, kind::Shaped) {
    type Output = A;

    fn allocate<O: BinaryOp>(lhs: &A, rhs: &A) -> Result<A, ArithmeticError> {
        if lhs.dims() == rhs.dims() {
            return Ok(A::with_dims(lhs.rows(), lhs.cols()));
        }
        let plan = BroadcastPlan::matrix(O::NAME, lhs.dims(), rhs.dims())?;
        let dims = plan.out_shape().dims();
        Ok(A::with_dims(dims[0], dims[1]))
    }

    fn apply<O: BinaryOp>(lhs: &A, rhs: &A, out: &mut A) -> Result<(), ArithmeticError> {
        <Self as RangedKernel<A, A>>::apply_ranged::<O>(lhs, rhs, &Range::undefined(), out)
    }
}

impl<A: IsShaped> RangedKernel<A, A> for (kind::Shaped, kind::Shaped) {
    fn apply_ranged<O: BinaryOp>(
        lhs: &A,
        rhs: &A,
        range: &Range,
        out: &mut A,
    ) -> Result<(), ArithmeticError> {
        let (a, b) = (lhs.as_slice(), rhs.as_slice());
        if lhs.dims() == rhs.dims() {
            check_output(O::NAME, &lhs.shape(), &out.shape())?;
            let window = partition::window(range, a.len())?;
            check_divisors::<O, A::Elem, _>(window.clone().map(|i| (i, b[i])))?;
            partition::batch_zip(a, b, window, out, O::apply::<A::Elem>);
        } else {
            let plan = BroadcastPlan::matrix(O::NAME, lhs.dims(), rhs.dims())?;
            check_output(O::NAME, plan.out_shape(), &out.shape())?;
            let window = partition::window(range, out.len())?;
            check_divisors::<O, A::Elem, _>(plan.divisors(b, window.clone()))?;
            plan.batch_fill(a, b, window, out, O::apply::<A::Elem>);
        }
        Ok(())
    }
}

impl<A: IsShaped> AssignKernel<A, A> for (kind::Shaped, kind::Shaped) {
    fn apply_assign<O: BinaryOp>(lhs: &mut A, rhs: &A) -> Result<(), ArithmeticError> {
        let b = rhs.as_slice();
        let len = lhs.len();
        if lhs.dims() == rhs.dims() {
            check_divisors::<O, A::Elem, _>(b.iter().copied().enumerate())?;
            partition::batch_zip_assign(lhs, b, 0..len, O::apply::<A::Elem>);
            return Ok(());
        }
        let plan = BroadcastPlan::matrix(O::NAME, lhs.dims(), rhs.dims())?;
        // The result must fit back into lhs.
        if *plan.out_shape() != lhs.shape() {
            return Err(ArithmeticError::ShapeMismatch {
                op: O::NAME,
                lhs: lhs.shape(),
                rhs: rhs.shape(),
            });
        }
        check_divisors::<O, A::Elem, _>(plan.divisors(b, 0..len))?;
        plan.batch_update(lhs, b, 0..len, O::apply::<A::Elem>);
        Ok(())
    }
}

impl<A: IsShaped> Kernel<A, A::Elem> for (kind::Shaped, kind::Scalar) {
    type Output = A;

    fn allocate<O: BinaryOp>(lhs: &A, _rhs: &A::Elem) -> Result<A, ArithmeticError> {
        Ok(A::with_dims(lhs.rows(), lhs.cols()))
    }

    fn apply<O: BinaryOp>(lhs: &A, rhs: &A::Elem, out: &mut A) -> Result<(), ArithmeticError> {
        check_output(O::NAME, &lhs.shape(), &out.shape())?;
        check_divisor::<O, A::Elem>(*rhs)?;
        let s = *rhs;
        partition::batch_map(lhs.as_slice(), 0..lhs.len(), out, move |x| O::apply(x, s));
        Ok(())
    }
}

impl<A: IsShaped> AssignKernel<A, A::Elem> for (kind::Shaped, kind::Scalar) {
    fn apply_assign<O: BinaryOp>(lhs: &mut A, rhs: &A::Elem) -> Result<(), ArithmeticError> {
        check_divisor::<O, A::Elem>(*rhs)?;
        let s = *rhs;
        let len = lhs.len();
        partition::batch_map_assign(lhs, 0..len, move |x| O::apply(x, s));
        Ok(())
    }
}

impl<B: IsShaped> Kernel<B::Elem, B> for (kind::Scalar, kind::Shaped) {
    type Output = B;

    fn allocate<O: BinaryOp>(_lhs: &B::Elem, rhs: &B) -> Result<B, ArithmeticError> {
        Ok(B::with_dims(rhs.rows(), rhs.cols()))
    }

    fn apply<O: BinaryOp>(lhs: &B::Elem, rhs: &B, out: &mut B) -> Result<(), ArithmeticError> {
        check_output(O::NAME, &rhs.shape(), &out.shape())?;
        let b = rhs.as_slice();
        check_divisors::<O, B::Elem, _>(b.iter().copied().enumerate())?;
        let s = *lhs;
        partition::batch_map(b, 0..b.len(), out, move |x| O::apply(s, x));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Add, Divide};
    use array_core::{Container, Matrix, ShapedContainer};

    type Matrices = (kind::Shaped, kind::Shaped);

    #[test]
    fn test_broadcast_allocation_takes_larger_shape() {
        let col = Matrix::from_rows(&[[1], [2]]).unwrap();
        let full = Matrix::from_rows(&[[1, 1, 1], [1, 1, 1]]).unwrap();
        let out =
            <Matrices as Kernel<Matrix<i32>, Matrix<i32>>>::allocate::<Add>(&col, &full).unwrap();
        assert_eq!(out.dims(), (2, 3));
    }

    #[test]
    fn test_output_shape_checked() {
        let a = Matrix::<f32>::zeros(2, 2);
        let mut out = Matrix::<f32>::zeros(2, 3);
        let r = <Matrices as Kernel<Matrix<f32>, Matrix<f32>>>::apply::<Add>(&a, &a, &mut out);
        assert!(matches!(r, Err(ArithmeticError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_assign_rejects_growing_lhs() {
        let mut col = Matrix::<f64>::zeros(2, 1);
        let full = Matrix::<f64>::zeros(2, 3);
        let r = <Matrices as AssignKernel<_, _>>::apply_assign::<Add>(&mut col, &full);
        assert!(matches!(r, Err(ArithmeticError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_broadcast_divisor_checked_before_write() {
        let a = Matrix::from_rows(&[[4, 8], [6, 9]]).unwrap();
        let row = Matrix::from_rows(&[[2, 0]]).unwrap();
        let mut out = Matrix::<i32>::zeros(2, 2);
        let r =
            <Matrices as Kernel<Matrix<i32>, Matrix<i32>>>::apply::<Divide>(&a, &row, &mut out);
        assert!(matches!(
            r,
            Err(ArithmeticError::DivideByZero { index: Some(1), .. })
        ));
        assert!(out.as_slice().iter().all(|&x| x == 0));
    }
}
