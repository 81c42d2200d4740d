// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Elementwise division.
//!
//! Float division follows IEEE 754. For integer and fixed-point elements
//! every divisor the call would read is checked first; a zero fails the call
//! with [`ArithmeticError::DivideByZero`] before anything is written.
//! Signed `MIN / -1` wraps to `MIN` rather than failing.

use super::{apply, apply_assign, apply_into, apply_ranged, apply_ranged_into};
use crate::kernel::{AssignKernel, Kernel, Output, Pair, RangedKernel};
use crate::{ArithmeticError, Divide};
use array_core::{Operand, Range};

/// Computes `lhs / rhs` into a newly allocated container.
///
/// # Errors
/// Returns [`ArithmeticError::DivideByZero`] for a zero integer or
/// fixed-point divisor, with the output index when the divisor came from
/// a container.
pub fn divide<A, B>(lhs: &A, rhs: &B) -> Result<Output<A, B>, ArithmeticError>
where
    A: Operand,
    B: Operand,
    Pair<A, B>: Kernel<A, B>,
{
    apply::<Divide, A, B>(lhs, rhs)
}

/// Computes `lhs / rhs` into `out`.
pub fn divide_into<A, B>(lhs: &A, rhs: &B, out: &mut Output<A, B>) -> Result<(), ArithmeticError>
where
    A: Operand,
    B: Operand,
    Pair<A, B>: Kernel<A, B>,
{
    apply_into::<Divide, A, B>(lhs, rhs, out)
}

/// Computes `lhs / rhs` inside `range` into a newly allocated container.
///
/// Only divisors inside the window are checked.
pub fn divide_ranged<A, B>(
    lhs: &A,
    rhs: &B,
    range: impl Into<Range>,
) -> Result<Output<A, B>, ArithmeticError>
where
    A: Operand,
    B: Operand,
    Pair<A, B>: RangedKernel<A, B>,
{
    apply_ranged::<Divide, A, B>(lhs, rhs, range)
}

/// Computes `lhs / rhs` inside `range` into `out`.
pub fn divide_ranged_into<A, B>(
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
    apply_ranged_into::<Divide, A, B>(lhs, rhs, range, out)
}

/// Computes `lhs /= rhs` in place.
pub fn divide_assign<A, B>(lhs: &mut A, rhs: &B) -> Result<(), ArithmeticError>
where
    A: Operand,
    B: Operand,
    Pair<A, B>: AssignKernel<A, B>,
{
    apply_assign::<Divide, A, B>(lhs, rhs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use array_core::{Container, Fixed16, FixedVector, Matrix, Vector};

    #[test]
    fn test_divide_scalar_order() {
        let v = Vector::from_vec(vec![1.0f64, 2.0, 4.0]);
        assert_eq!(divide(&v, &2.0f64).unwrap().as_slice(), &[0.5, 1.0, 2.0]);
        assert_eq!(divide(&2.0f64, &v).unwrap().as_slice(), &[2.0, 1.0, 0.5]);
    }

    #[test]
    fn test_divide_float_by_zero_is_ieee() {
        let a = Vector::from_vec(vec![1.0f32, -1.0, 0.0]);
        let z = Vector::<f32>::zeros(3);
        let out = divide(&a, &z).unwrap();
        assert_eq!(out[0], f32::INFINITY);
        assert_eq!(out[1], f32::NEG_INFINITY);
        assert!(out[2].is_nan());
    }

    #[test]
    fn test_divide_integer_by_zero() {
        assert!(matches!(
            divide(&7i32, &0i32),
            Err(ArithmeticError::DivideByZero {
                op: "divide",
                index: None
            })
        ));

        let a = Vector::from_vec(vec![6i32, 6, 6]);
        let b = Vector::from_vec(vec![3i32, 0, 2]);
        let mut out = Vector::from_vec(vec![-1i32, -1, -1]);
        assert!(matches!(
            divide_into(&a, &b, &mut out),
            Err(ArithmeticError::DivideByZero { index: Some(1), .. })
        ));
        assert_eq!(out.as_slice(), &[-1, -1, -1]);
    }

    #[test]
    fn test_divide_scalar_by_container_with_zero() {
        let v = Vector::from_vec(vec![1u64, 0]);
        assert!(matches!(
            divide(&8u64, &v),
            Err(ArithmeticError::DivideByZero { index: Some(1), .. })
        ));
        // The container is the dividend here, so zero is fine.
        assert_eq!(divide(&v, &2u64).unwrap().as_slice(), &[0, 0]);
    }

    #[test]
    fn test_divide_ranged_checks_window_only() {
        let a = Vector::from_vec(vec![8i16, 8, 8, 8]);
        let b = Vector::from_vec(vec![0i16, 2, 4, 0]);
        let out = divide_ranged(&a, &b, Range::new(1, 3)).unwrap();
        assert_eq!(out.as_slice(), &[0, 4, 2, 0]);
        assert!(divide_ranged(&a, &b, Range::new(0, 2)).is_err());
    }

    #[test]
    fn test_divide_fixed_by_zero() {
        let a = FixedVector::<Fixed16>::from_f64_slice(&[1.0, 2.0]);
        let b = FixedVector::<Fixed16>::from_f64_slice(&[0.5, 0.0]);
        assert!(matches!(
            divide(&a, &b),
            Err(ArithmeticError::DivideByZero { index: Some(1), .. })
        ));
        let mut c = a.clone();
        assert!(divide_assign(&mut c, &Fixed16::from_int(0)).is_err());
        assert_eq!(c, a);
        divide_assign(&mut c, &Fixed16::from_int(2)).unwrap();
        assert_eq!(c.to_f64_vec(), vec![0.5, 1.0]);
    }

    #[test]
    fn test_divide_min_by_minus_one_wraps() {
        assert_eq!(divide(&i64::MIN, &-1i64).unwrap(), i64::MIN);

        let a = Vector::from_vec(vec![i32::MIN, 4]);
        let b = Vector::from_vec(vec![-1i32, 2]);
        assert_eq!(divide(&a, &b).unwrap().as_slice(), &[i32::MIN, 2]);
        assert_eq!(divide(&a, &-1i32).unwrap().as_slice(), &[i32::MIN, -4]);
        assert_eq!(divide(&i32::MIN, &b).unwrap().as_slice(), &[i32::MIN, i32::MIN / 2]);

        let mut out = Vector::<i32>::zeros(2);
        divide_ranged_into(&a, &b, Range::new(0, 1), &mut out).unwrap();
        assert_eq!(out.as_slice(), &[i32::MIN, 0]);

        let mut c = a.clone();
        divide_assign(&mut c, &b).unwrap();
        assert_eq!(c.as_slice(), &[i32::MIN, 2]);

        let mut m = Matrix::from_rows(&[[i8::MIN, 8], [i8::MIN, -8]]).unwrap();
        let col = Matrix::from_rows(&[[-1i8], [1]]).unwrap();
        divide_assign(&mut m, &col).unwrap();
        assert_eq!(m.as_slice(), &[i8::MIN, -8, i8::MIN, -8]);
    }

    #[test]
    fn test_divide_assign_row_broadcast() {
        let mut m = Matrix::from_rows(&[[2.0f64, 9.0], [4.0, 3.0]]).unwrap();
        let row = Matrix::from_rows(&[[2.0f64, 3.0]]).unwrap();
        divide_assign(&mut m, &row).unwrap();
        assert_eq!(m.as_slice(), &[1.0, 3.0, 2.0, 1.0]);
    }
}
