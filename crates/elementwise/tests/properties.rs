// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Property tests for the elementwise operations.
//!
//! A small-chunk batch policy is installed for this binary so that inputs
//! longer than a few elements go through the worker pool; every law below
//! therefore also checks that batched and sequential execution agree.

use array_core::{BatchPolicy, Container, Fixed16, FixedVector, Matrix, NdArray, Shape, Vector};
use elementwise::{
    add, add_assign, add_into, divide, divide_assign, divide_into, multiply, multiply_assign,
    multiply_into, subtract, subtract_assign, subtract_into,
};
use proptest::prelude::*;
use std::sync::Once;

static POLICY: Once = Once::new();

fn install_small_chunks() {
    POLICY.call_once(|| {
        let policy = BatchPolicy {
            parallel: true,
            min_parallel_len: 8,
            chunk_size: 5,
            num_threads: None,
        };
        policy.install().unwrap();
    });
}

fn floats() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6f64..1.0e6, 0..96)
}

fn float_pair() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (0usize..96).prop_flat_map(|n| {
        (
            prop::collection::vec(-1.0e6f64..1.0e6, n),
            prop::collection::vec(-1.0e6f64..1.0e6, n),
        )
    })
}

fn int_pair() -> impl Strategy<Value = (Vec<i64>, Vec<i64>)> {
    (0usize..96).prop_flat_map(|n| {
        (
            prop::collection::vec(-100_000i64..100_000, n),
            prop::collection::vec(1i64..1_000, n),
        )
    })
}

// ============================================================
// Algebraic laws
// ============================================================

proptest! {
    #[test]
    fn add_commutes((a, b) in float_pair()) {
        install_small_chunks();
        let (a, b) = (Vector::from_vec(a), Vector::from_vec(b));
        prop_assert_eq!(add(&a, &b).unwrap(), add(&b, &a).unwrap());
    }

    #[test]
    fn multiply_commutes((a, b) in float_pair()) {
        install_small_chunks();
        let (a, b) = (Vector::from_vec(a), Vector::from_vec(b));
        prop_assert_eq!(multiply(&a, &b).unwrap(), multiply(&b, &a).unwrap());
    }

    #[test]
    fn subtract_is_antisymmetric((a, b) in float_pair()) {
        install_small_chunks();
        let (a, b) = (Vector::from_vec(a), Vector::from_vec(b));
        let ab = subtract(&a, &b).unwrap();
        let ba = subtract(&b, &a).unwrap();
        for (x, y) in ab.iter().zip(ba.iter()) {
            prop_assert_eq!(x, -y);
        }
    }

    #[test]
    fn identities_hold(a in floats()) {
        install_small_chunks();
        let a = Vector::from_vec(a);
        prop_assert_eq!(&add(&a, &0.0f64).unwrap(), &a);
        prop_assert_eq!(&multiply(&a, &1.0f64).unwrap(), &a);
        prop_assert_eq!(&divide(&a, &1.0f64).unwrap(), &a);
        let zeros = Vector::<f64>::zeros(a.len());
        prop_assert_eq!(&add(&a, &zeros).unwrap(), &a);
        let ones = Vector::filled(a.len(), 1.0f64);
        prop_assert_eq!(&multiply(&a, &ones).unwrap(), &a);
        prop_assert_eq!(&divide(&a, &ones).unwrap(), &a);
    }

    #[test]
    fn fixed_point_identities_hold(raw in prop::collection::vec(-(1i64 << 40)..(1i64 << 40), 0..64)) {
        let a = FixedVector::from_vec(raw.into_iter().map(Fixed16::from_raw).collect());
        let one = Fixed16::from_int(1);
        let ones = FixedVector::from_vec(vec![one; a.len()]);
        let zeros = FixedVector::from_vec(vec![Fixed16::from_int(0); a.len()]);
        prop_assert_eq!(&add(&a, &zeros).unwrap(), &a);
        prop_assert_eq!(&multiply(&a, &ones).unwrap(), &a);
        prop_assert_eq!(&divide(&a, &ones).unwrap(), &a);
        prop_assert_eq!(&multiply(&a, &one).unwrap(), &a);
        prop_assert_eq!(&divide(&a, &one).unwrap(), &a);
    }

    #[test]
    fn shaped_identities_hold(
        (rows, cols, data) in (1usize..10, 1usize..10).prop_flat_map(|(r, c)| {
            (Just(r), Just(c), prop::collection::vec(-1.0e6f64..1.0e6, r * c))
        })
    ) {
        install_small_chunks();
        let m = Matrix::from_vec(rows, cols, data.clone()).unwrap();
        let ones = Matrix::from_vec(rows, cols, vec![1.0f64; rows * cols]).unwrap();
        prop_assert_eq!(&multiply(&m, &ones).unwrap(), &m);
        prop_assert_eq!(&divide(&m, &ones).unwrap(), &m);
        prop_assert_eq!(&add(&m, &Matrix::<f64>::zeros(rows, cols)).unwrap(), &m);

        let shape = Shape::new(vec![1, rows, cols]);
        let nd = NdArray::from_vec(shape.clone(), data).unwrap();
        let nd_ones = NdArray::from_vec(shape, vec![1.0f64; rows * cols]).unwrap();
        prop_assert_eq!(&multiply(&nd, &nd_ones).unwrap(), &nd);
        prop_assert_eq!(&divide(&nd, &nd_ones).unwrap(), &nd);
    }

    #[test]
    fn batched_matches_reference((a, b) in int_pair()) {
        install_small_chunks();
        let expected: Vec<i64> = a.iter().zip(&b).map(|(x, y)| x * y - x / y).collect();
        let (va, vb) = (Vector::from_vec(a), Vector::from_vec(b));
        let product = multiply(&va, &vb).unwrap();
        let quotient = divide(&va, &vb).unwrap();
        prop_assert_eq!(subtract(&product, &quotient).unwrap().into_vec(), expected);
    }
}

// ============================================================
// In-place / allocating equivalence
// ============================================================

proptest! {
    #[test]
    fn into_matches_allocating((a, b) in int_pair()) {
        install_small_chunks();
        let (a, b) = (Vector::from_vec(a), Vector::from_vec(b));
        let mut out = Vector::<i64>::zeros(a.len());

        add_into(&a, &b, &mut out).unwrap();
        prop_assert_eq!(&out, &add(&a, &b).unwrap());
        subtract_into(&a, &b, &mut out).unwrap();
        prop_assert_eq!(&out, &subtract(&a, &b).unwrap());
        multiply_into(&a, &b, &mut out).unwrap();
        prop_assert_eq!(&out, &multiply(&a, &b).unwrap());
        divide_into(&a, &b, &mut out).unwrap();
        prop_assert_eq!(&out, &divide(&a, &b).unwrap());
    }

    #[test]
    fn assign_matches_allocating((a, b) in int_pair()) {
        install_small_chunks();
        let (a, b) = (Vector::from_vec(a), Vector::from_vec(b));

        let mut x = a.clone();
        add_assign(&mut x, &b).unwrap();
        prop_assert_eq!(&x, &add(&a, &b).unwrap());

        let mut x = a.clone();
        subtract_assign(&mut x, &b).unwrap();
        prop_assert_eq!(&x, &subtract(&a, &b).unwrap());

        let mut x = a.clone();
        multiply_assign(&mut x, &b).unwrap();
        prop_assert_eq!(&x, &multiply(&a, &b).unwrap());

        let mut x = a.clone();
        divide_assign(&mut x, &b).unwrap();
        prop_assert_eq!(&x, &divide(&a, &b).unwrap());
    }

    #[test]
    fn matrix_broadcast_assign_matches_allocating(
        rows in 1usize..12,
        cols in 1usize..12,
        seed in any::<i32>(),
    ) {
        install_small_chunks();
        let data: Vec<i64> = (0..rows * cols).map(|i| (i as i64) ^ i64::from(seed)).collect();
        let m = Matrix::from_vec(rows, cols, data).unwrap();
        let row = Matrix::from_vec(1, cols, (1..=cols as i64).collect()).unwrap();

        let mut x = m.clone();
        add_assign(&mut x, &row).unwrap();
        prop_assert_eq!(x, add(&m, &row).unwrap());
    }

    #[test]
    fn fixed_point_tracks_float(
        (a, b) in (0usize..32).prop_flat_map(|n| (
            prop::collection::vec(-512i32..512, n),
            prop::collection::vec(-512i32..512, n),
        ))
    ) {
        // Quarter steps are exact in Q16, so the paths must agree exactly
        // for add, subtract and multiply.
        let fa: Vec<f64> = a.iter().map(|&v| f64::from(v) / 4.0).collect();
        let fb: Vec<f64> = b.iter().map(|&v| f64::from(v) / 4.0).collect();
        let (qa, qb) = (
            FixedVector::<Fixed16>::from_f64_slice(&fa),
            FixedVector::<Fixed16>::from_f64_slice(&fb),
        );
        let (va, vb) = (Vector::from_vec(fa), Vector::from_vec(fb));

        prop_assert_eq!(add(&qa, &qb).unwrap().to_f64_vec(), add(&va, &vb).unwrap().into_vec());
        prop_assert_eq!(
            subtract(&qa, &qb).unwrap().to_f64_vec(),
            subtract(&va, &vb).unwrap().into_vec()
        );
        prop_assert_eq!(
            multiply(&qa, &qb).unwrap().to_f64_vec(),
            multiply(&va, &vb).unwrap().into_vec()
        );
    }
}
