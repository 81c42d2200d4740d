// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `ewise eval` command: apply one operation to two JSON operands.
//!
//! A JSON number becomes a scalar, a flat array a vector and an array of
//! rows a matrix. With `--nd` every array becomes an n-dimensional array
//! whose shape is read from the nesting. Fixed-point operands have no
//! matrix form, so 2-D fixed-point input needs `--nd`.

use super::{DTypeArg, OpArg};
use anyhow::{anyhow, bail};
use array_core::classify::kind;
use array_core::{
    Container, Element, Fixed16, FixedVector, Matrix, NdArray, Operand, Range, Shape,
    ShapedContainer, Vector, VectorElement,
};
use elementwise::{
    apply, apply_ranged, Add, BinaryOp, Divide, Kernel, Multiply, Output, Pair, RangedKernel,
    Subtract,
};
use serde_json::Value;

pub fn execute(
    op: OpArg,
    lhs: &str,
    rhs: &str,
    dtype: DTypeArg,
    nd: bool,
    range: Option<Range>,
) -> anyhow::Result<()> {
    let lhs: Value =
        serde_json::from_str(lhs).map_err(|e| anyhow!("invalid left operand: {e}"))?;
    let rhs: Value =
        serde_json::from_str(rhs).map_err(|e| anyhow!("invalid right operand: {e}"))?;
    let result = evaluate(op, &lhs, &rhs, dtype, nd, range)?;
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

/// Evaluates `lhs OP rhs` and renders the result as JSON.
pub fn evaluate(
    op: OpArg,
    lhs: &Value,
    rhs: &Value,
    dtype: DTypeArg,
    nd: bool,
    range: Option<Range>,
) -> anyhow::Result<Value> {
    tracing::debug!("eval {op:?} as {dtype:?} (nd={nd}, range={range:?})");
    match dtype {
        DTypeArg::F64 => eval_dense::<f64>(op, lhs, rhs, nd, range),
        DTypeArg::I64 => eval_dense::<i64>(op, lhs, rhs, nd, range),
        DTypeArg::Fixed => eval_fixed(op, lhs, rhs, nd, range),
    }
}

// ── Element conversion ────────────────────────────────────────

/// Element types the command line can read and print.
trait Number: Element {
    fn parse(value: &Value) -> anyhow::Result<Self>;
    fn render(self) -> Value;
}

impl Number for f64 {
    fn parse(value: &Value) -> anyhow::Result<Self> {
        value
            .as_f64()
            .ok_or_else(|| anyhow!("expected a number, got {value}"))
    }

    fn render(self) -> Value {
        // Non-finite results have no JSON number form.
        serde_json::Number::from_f64(self)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(self.to_string()))
    }
}

impl Number for i64 {
    fn parse(value: &Value) -> anyhow::Result<Self> {
        value
            .as_i64()
            .ok_or_else(|| anyhow!("expected an integer, got {value}"))
    }

    fn render(self) -> Value {
        Value::from(self)
    }
}

impl Number for Fixed16 {
    fn parse(value: &Value) -> anyhow::Result<Self> {
        f64::parse(value).map(Fixed16::from_f64)
    }

    fn render(self) -> Value {
        self.to_f64().render()
    }
}

/// A nested JSON array flattened in row-major order.
#[derive(Debug, PartialEq)]
struct Dense<T> {
    dims: Vec<usize>,
    data: Vec<T>,
}

fn parse_dense<T: Number>(value: &Value) -> anyhow::Result<Dense<T>> {
    let mut dims = Vec::new();
    let mut cursor = value;
    while let Value::Array(items) = cursor {
        dims.push(items.len());
        match items.first() {
            Some(first) => cursor = first,
            None => break,
        }
    }
    let mut data = Vec::with_capacity(dims.iter().product());
    flatten(value, &dims, 0, &mut data)?;
    Ok(Dense { dims, data })
}

fn flatten<T: Number>(
    value: &Value,
    dims: &[usize],
    depth: usize,
    out: &mut Vec<T>,
) -> anyhow::Result<()> {
    match value {
        Value::Array(items) => {
            if dims.get(depth) != Some(&items.len()) {
                bail!("ragged array at depth {depth}: expected {dims:?}");
            }
            items
                .iter()
                .try_for_each(|item| flatten(item, dims, depth + 1, out))
        }
        other => {
            if depth != dims.len() {
                bail!("ragged array at depth {depth}: expected {dims:?}");
            }
            out.push(T::parse(other)?);
            Ok(())
        }
    }
}

fn nest(dims: &[usize], data: &[Value]) -> Value {
    match dims.split_first() {
        None => data.first().cloned().unwrap_or(Value::Null),
        Some((&n, rest)) => {
            let stride: usize = rest.iter().product();
            Value::Array(
                (0..n)
                    .map(|i| nest(rest, &data[i * stride..(i + 1) * stride]))
                    .collect(),
            )
        }
    }
}

/// Result containers that can be printed.
trait Render {
    fn to_json(&self) -> Value;
}

impl Render for f64 {
    fn to_json(&self) -> Value {
        self.render()
    }
}

impl Render for i64 {
    fn to_json(&self) -> Value {
        self.render()
    }
}

impl Render for Fixed16 {
    fn to_json(&self) -> Value {
        self.render()
    }
}

impl<T: Number + VectorElement> Render for Vector<T> {
    fn to_json(&self) -> Value {
        Value::Array(self.iter().map(Number::render).collect())
    }
}

impl Render for FixedVector<Fixed16> {
    fn to_json(&self) -> Value {
        Value::Array(self.as_slice().iter().map(|v| v.render()).collect())
    }
}

impl<T: Number + VectorElement> Render for Matrix<T> {
    fn to_json(&self) -> Value {
        let flat: Vec<Value> = self.as_slice().iter().map(|v| v.render()).collect();
        nest(&[self.rows(), self.cols()], &flat)
    }
}

impl<T: Number> Render for NdArray<T> {
    fn to_json(&self) -> Value {
        let flat: Vec<Value> = self.as_slice().iter().map(|v| v.render()).collect();
        nest(self.dims(), &flat)
    }
}

// ── Dispatch ──────────────────────────────────────────────────

/// Runs a pairing that has no ranged form.
fn whole<O, A, B>(lhs: &A, rhs: &B, range: Option<Range>) -> anyhow::Result<Value>
where
    O: BinaryOp,
    A: Operand,
    B: Operand,
    Pair<A, B>: Kernel<A, B>,
    Output<A, B>: Render,
{
    if let Some(range) = range {
        bail!("{range:?} needs two container operands of the same kind");
    }
    Ok(apply::<O, A, B>(lhs, rhs)?.to_json())
}

/// Runs a container pairing, over `range` when one is given.
fn windowed<O, A, B>(lhs: &A, rhs: &B, range: Option<Range>) -> anyhow::Result<Value>
where
    O: BinaryOp,
    A: Operand,
    B: Operand,
    Pair<A, B>: RangedKernel<A, B>,
    Output<A, B>: Render,
{
    let out = match range {
        Some(range) => apply_ranged::<O, A, B>(lhs, rhs, range)?,
        None => apply::<O, A, B>(lhs, rhs)?,
    };
    Ok(out.to_json())
}

enum DenseArg<T: VectorElement> {
    Scalar(T),
    Vector(Vector<T>),
    Matrix(Matrix<T>),
    Nd(NdArray<T>),
}

impl<T: VectorElement + Number> DenseArg<T> {
    fn parse(value: &Value, nd: bool) -> anyhow::Result<Self> {
        let dense = parse_dense::<T>(value)?;
        if nd && !dense.dims.is_empty() {
            return Ok(Self::Nd(NdArray::from_vec(Shape::new(dense.dims), dense.data)?));
        }
        match dense.dims.as_slice() {
            [] => dense
                .data
                .first()
                .copied()
                .map(Self::Scalar)
                .ok_or_else(|| anyhow!("empty scalar operand")),
            [_] => Ok(Self::Vector(Vector::from_vec(dense.data))),
            &[rows, cols] => Ok(Self::Matrix(Matrix::from_vec(rows, cols, dense.data)?)),
            dims => bail!("{}-dimensional operand needs --nd", dims.len()),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Vector(_) => "vector",
            Self::Matrix(_) => "matrix",
            Self::Nd(_) => "n-dimensional array",
        }
    }
}

fn eval_dense<T>(
    op: OpArg,
    lhs: &Value,
    rhs: &Value,
    nd: bool,
    range: Option<Range>,
) -> anyhow::Result<Value>
where
    T: VectorElement + Number + Render + Operand<Kind = kind::Scalar>,
{
    let lhs = DenseArg::<T>::parse(lhs, nd)?;
    let rhs = DenseArg::<T>::parse(rhs, nd)?;
    match op {
        OpArg::Add => dense_with::<Add, T>(lhs, rhs, range),
        OpArg::Subtract => dense_with::<Subtract, T>(lhs, rhs, range),
        OpArg::Multiply => dense_with::<Multiply, T>(lhs, rhs, range),
        OpArg::Divide => dense_with::<Divide, T>(lhs, rhs, range),
    }
}

fn dense_with<O, T>(
    lhs: DenseArg<T>,
    rhs: DenseArg<T>,
    range: Option<Range>,
) -> anyhow::Result<Value>
where
    O: BinaryOp,
    T: VectorElement + Number + Render + Operand<Kind = kind::Scalar>,
{
    use DenseArg as D;
    match (&lhs, &rhs) {
        (D::Scalar(a), D::Scalar(b)) => whole::<O, _, _>(a, b, range),
        (D::Vector(a), D::Vector(b)) => windowed::<O, _, _>(a, b, range),
        (D::Vector(a), D::Scalar(b)) => whole::<O, _, _>(a, b, range),
        (D::Scalar(a), D::Vector(b)) => whole::<O, _, _>(a, b, range),
        (D::Matrix(a), D::Matrix(b)) => windowed::<O, _, _>(a, b, range),
        (D::Matrix(a), D::Scalar(b)) => whole::<O, _, _>(a, b, range),
        (D::Scalar(a), D::Matrix(b)) => whole::<O, _, _>(a, b, range),
        (D::Nd(a), D::Nd(b)) => windowed::<O, _, _>(a, b, range),
        (D::Nd(a), D::Scalar(b)) => whole::<O, _, _>(a, b, range),
        (D::Scalar(a), D::Nd(b)) => whole::<O, _, _>(a, b, range),
        (l, r) => bail!("{} cannot combine a {} with a {}", O::NAME, l.kind(), r.kind()),
    }
}

enum FixedArg {
    Scalar(Fixed16),
    Vector(FixedVector<Fixed16>),
    Nd(NdArray<Fixed16>),
}

impl FixedArg {
    fn parse(value: &Value, nd: bool) -> anyhow::Result<Self> {
        let dense = parse_dense::<Fixed16>(value)?;
        if nd && !dense.dims.is_empty() {
            return Ok(Self::Nd(NdArray::from_vec(Shape::new(dense.dims), dense.data)?));
        }
        match dense.dims.len() {
            0 => dense
                .data
                .first()
                .copied()
                .map(Self::Scalar)
                .ok_or_else(|| anyhow!("empty scalar operand")),
            1 => Ok(Self::Vector(FixedVector::from_vec(dense.data))),
            n => bail!("{n}-dimensional fixed-point operand needs --nd"),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Vector(_) => "fixed-point vector",
            Self::Nd(_) => "n-dimensional array",
        }
    }
}

fn eval_fixed(
    op: OpArg,
    lhs: &Value,
    rhs: &Value,
    nd: bool,
    range: Option<Range>,
) -> anyhow::Result<Value> {
    let lhs = FixedArg::parse(lhs, nd)?;
    let rhs = FixedArg::parse(rhs, nd)?;
    match op {
        OpArg::Add => fixed_with::<Add>(lhs, rhs, range),
        OpArg::Subtract => fixed_with::<Subtract>(lhs, rhs, range),
        OpArg::Multiply => fixed_with::<Multiply>(lhs, rhs, range),
        OpArg::Divide => fixed_with::<Divide>(lhs, rhs, range),
    }
}

fn fixed_with<O: BinaryOp>(
    lhs: FixedArg,
    rhs: FixedArg,
    range: Option<Range>,
) -> anyhow::Result<Value> {
    use FixedArg as F;
    match (&lhs, &rhs) {
        (F::Scalar(a), F::Scalar(b)) => whole::<O, _, _>(a, b, range),
        (F::Vector(a), F::Vector(b)) => windowed::<O, _, _>(a, b, range),
        (F::Vector(a), F::Scalar(b)) => whole::<O, _, _>(a, b, range),
        (F::Scalar(a), F::Vector(b)) => whole::<O, _, _>(a, b, range),
        (F::Nd(a), F::Nd(b)) => windowed::<O, _, _>(a, b, range),
        (F::Nd(a), F::Scalar(b)) => whole::<O, _, _>(a, b, range),
        (F::Scalar(a), F::Nd(b)) => whole::<O, _, _>(a, b, range),
        (l, r) => bail!("{} cannot combine a {} with a {}", O::NAME, l.kind(), r.kind()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elementwise::ArithmeticError;
    use serde_json::json;

    fn run(op: OpArg, lhs: Value, rhs: Value, dtype: DTypeArg) -> anyhow::Result<Value> {
        evaluate(op, &lhs, &rhs, dtype, false, None)
    }

    #[test]
    fn test_parse_dense_shapes() {
        let d = parse_dense::<i64>(&json!([[1, 2, 3], [4, 5, 6]])).unwrap();
        assert_eq!(d.dims, vec![2, 3]);
        assert_eq!(d.data, vec![1, 2, 3, 4, 5, 6]);

        let d = parse_dense::<i64>(&json!(7)).unwrap();
        assert!(d.dims.is_empty());
        assert_eq!(d.data, vec![7]);

        let d = parse_dense::<f64>(&json!([])).unwrap();
        assert_eq!(d.dims, vec![0]);
        assert!(d.data.is_empty());
    }

    #[test]
    fn test_parse_dense_rejects_ragged() {
        assert!(parse_dense::<i64>(&json!([[1, 2], [3]])).is_err());
        assert!(parse_dense::<i64>(&json!([1, [2]])).is_err());
        assert!(parse_dense::<i64>(&json!([1.5])).is_err());
    }

    #[test]
    fn test_nest_round_trips_layout() {
        let flat: Vec<Value> = (1..=6).map(Value::from).collect();
        assert_eq!(nest(&[2, 3], &flat), json!([[1, 2, 3], [4, 5, 6]]));
        assert_eq!(nest(&[3, 1, 2], &flat), json!([[[1, 2]], [[3, 4]], [[5, 6]]]));
        assert_eq!(nest(&[0], &[]), json!([]));
    }

    #[test]
    fn test_eval_scalar_and_vector() {
        let out = run(OpArg::Add, json!([1.0, 2.0]), json!(0.5), DTypeArg::F64).unwrap();
        assert_eq!(out, json!([1.5, 2.5]));
        let out = run(OpArg::Subtract, json!(10), json!([1, 2]), DTypeArg::I64).unwrap();
        assert_eq!(out, json!([9, 8]));
        let out = run(OpArg::Multiply, json!(3), json!(4), DTypeArg::I64).unwrap();
        assert_eq!(out, json!(12));
    }

    #[test]
    fn test_eval_matrix_row_broadcast() {
        let out = run(
            OpArg::Add,
            json!([[1, 2, 3], [4, 5, 6]]),
            json!([[10, 20, 30]]),
            DTypeArg::I64,
        )
        .unwrap();
        assert_eq!(out, json!([[11, 22, 33], [14, 25, 36]]));
    }

    #[test]
    fn test_eval_nd_broadcast() {
        let out = evaluate(
            OpArg::Multiply,
            &json!([[[1, 2]], [[3, 4]]]),
            &json!([[[10, 100]]]),
            DTypeArg::I64,
            true,
            None,
        )
        .unwrap();
        assert_eq!(out, json!([[[10, 200]], [[30, 400]]]));
    }

    #[test]
    fn test_eval_ranged() {
        let out = evaluate(
            OpArg::Divide,
            &json!([8, 8, 8, 8]),
            &json!([0, 2, 4, 0]),
            DTypeArg::I64,
            false,
            Some(Range::new(1, 3)),
        )
        .unwrap();
        assert_eq!(out, json!([0, 4, 2, 0]));
    }

    #[test]
    fn test_eval_range_with_scalar_rejected() {
        let err = evaluate(
            OpArg::Add,
            &json!([1, 2]),
            &json!(1),
            DTypeArg::I64,
            false,
            Some(Range::new(0, 1)),
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_eval_divide_by_zero() {
        let err = run(OpArg::Divide, json!([1, 2]), json!([1, 0]), DTypeArg::I64).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ArithmeticError>(),
            Some(ArithmeticError::DivideByZero { index: Some(1), .. })
        ));
    }

    #[test]
    fn test_eval_float_divide_by_zero_renders_infinity() {
        let out = run(OpArg::Divide, json!([1.0]), json!([0.0]), DTypeArg::F64).unwrap();
        assert_eq!(out, json!(["inf"]));
    }

    #[test]
    fn test_eval_fixed() {
        let out = run(OpArg::Multiply, json!([1.5, -2.0]), json!(0.5), DTypeArg::Fixed).unwrap();
        assert_eq!(out, json!([0.75, -1.0]));
        assert!(run(OpArg::Add, json!([[1.0]]), json!([[1.0]]), DTypeArg::Fixed).is_err());
    }

    #[test]
    fn test_eval_kind_mismatch() {
        let err = run(OpArg::Add, json!([1, 2]), json!([[1, 2]]), DTypeArg::I64).unwrap_err();
        assert!(err.to_string().contains("cannot combine"));
    }
}
