// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for elementwise operations.

use array_core::{Matrix, NdArray, Range, Shape, Vector};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use elementwise::{add, add_into, add_ranged_into, divide_into, multiply_assign};
use std::hint::black_box;

fn ramp(len: usize) -> Vec<f32> {
    (0..len).map(|i| (i % 251) as f32 * 0.5 + 1.0).collect()
}

fn bench_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("flat");
    for &len in &[1_024usize, 65_536, 1_048_576] {
        let a = Vector::from_vec(ramp(len));
        let b = Vector::from_vec(ramp(len));
        let mut out = Vector::<f32>::zeros(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("add", len), &len, |bench, _| {
            bench.iter(|| add(black_box(&a), black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("add_into", len), &len, |bench, _| {
            bench.iter(|| add_into(black_box(&a), black_box(&b), &mut out))
        });
        group.bench_with_input(BenchmarkId::new("divide_into", len), &len, |bench, _| {
            bench.iter(|| divide_into(black_box(&a), black_box(&b), &mut out))
        });
    }
    group.finish();
}

fn bench_integer_divide(c: &mut Criterion) {
    let len = 65_536usize;
    let a = Vector::from_vec((0..len as i64).collect::<Vec<_>>());
    let b = Vector::from_vec((1..=len as i64).collect::<Vec<_>>());
    let mut out = Vector::<i64>::zeros(len);

    let mut group = c.benchmark_group("integer_divide");
    group.throughput(Throughput::Elements(len as u64));
    group.bench_function("checked", |bench| {
        bench.iter(|| divide_into(black_box(&a), black_box(&b), &mut out))
    });
    group.finish();
}

fn bench_matrix_broadcast(c: &mut Criterion) {
    let (rows, cols) = (512usize, 512usize);
    let m = Matrix::from_vec(rows, cols, ramp(rows * cols)).unwrap();
    let row = Matrix::from_vec(1, cols, ramp(cols)).unwrap();
    let col = Matrix::from_vec(rows, 1, ramp(rows)).unwrap();
    let full = m.clone();

    let mut group = c.benchmark_group("matrix");
    group.throughput(Throughput::Elements((rows * cols) as u64));
    group.bench_function("same_shape", |bench| {
        bench.iter(|| add(black_box(&m), black_box(&full)))
    });
    group.bench_function("row_broadcast", |bench| {
        bench.iter(|| add(black_box(&m), black_box(&row)))
    });
    group.bench_function("column_broadcast", |bench| {
        bench.iter(|| add(black_box(&m), black_box(&col)))
    });
    group.bench_function("row_broadcast_assign", |bench| {
        let mut x = m.clone();
        bench.iter(|| multiply_assign(&mut x, black_box(&row)))
    });
    group.finish();
}

fn bench_nd_broadcast(c: &mut Criterion) {
    let shape = Shape::new(vec![16, 64, 64]);
    let a = NdArray::from_vec(shape.clone(), ramp(shape.num_elements())).unwrap();
    let plane = NdArray::from_vec(Shape::new(vec![1, 64, 64]), ramp(64 * 64)).unwrap();

    let mut group = c.benchmark_group("nd");
    group.throughput(Throughput::Elements(shape.num_elements() as u64));
    group.bench_function("broadcast_leading_axis", |bench| {
        bench.iter(|| add(black_box(&a), black_box(&plane)))
    });
    group.finish();
}

fn bench_ranged_chunks(c: &mut Criterion) {
    let len = 1_048_576usize;
    let a = Vector::from_vec(ramp(len));
    let b = Vector::from_vec(ramp(len));
    let mut out = Vector::<f32>::zeros(len);

    let mut group = c.benchmark_group("ranged");
    group.throughput(Throughput::Elements(len as u64));
    group.bench_function("whole", |bench| {
        bench.iter(|| add_into(black_box(&a), black_box(&b), &mut out))
    });
    for &chunks in &[4usize, 64] {
        let step = len / chunks;
        group.bench_with_input(BenchmarkId::new("chunked", chunks), &step, |bench, &step| {
            bench.iter(|| {
                for begin in (0..len).step_by(step) {
                    add_ranged_into(&a, &b, Range::new(begin, begin + step), &mut out)?;
                }
                Ok::<(), elementwise::ArithmeticError>(())
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_flat,
    bench_integer_divide,
    bench_matrix_broadcast,
    bench_nd_broadcast,
    bench_ranged_chunks
);
criterion_main!(benches);
