// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Scalar × scalar.

use super::{AssignKernel, Kernel};
use crate::op::check_divisor;
use crate::{ArithmeticError, BinaryOp};
use array_core::classify::{kind, IsScalar};

impl<S: IsScalar> Kernel<S, S> for (kind::Scalar, kind::Scalar) {
    type Output = S;

    fn allocate<O: BinaryOp>(_lhs: &S, _rhs: &S) -> Result<S, ArithmeticError> {
        Ok(S::zero())
    }

    fn apply<O: BinaryOp>(lhs: &S, rhs: &S, out: &mut S) -> Result<(), ArithmeticError> {
        check_divisor::<O, S>(*rhs)?;
        *out = O::apply(*lhs, *rhs);
        Ok(())
    }
}

impl<S: IsScalar> AssignKernel<S, S> for (kind::Scalar, kind::Scalar) {
    fn apply_assign<O: BinaryOp>(lhs: &mut S, rhs: &S) -> Result<(), ArithmeticError> {
        check_divisor::<O, S>(*rhs)?;
        *lhs = O::apply(*lhs, *rhs);
        Ok(())
    }
}
