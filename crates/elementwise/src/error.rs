// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for elementwise operations.

use array_core::{ArrayError, Shape};

/// Errors that can occur during elementwise arithmetic.
///
/// Every variant is detected before the output is written, so a failed call
/// leaves the output untouched.
#[derive(Debug, thiserror::Error)]
pub enum ArithmeticError {
    /// Operand shapes violate the pairing or broadcasting rule.
    ///
    /// Also reported when a caller-supplied output does not have the result
    /// shape; `lhs` is then the expected shape and `rhs` the output's shape.
    /// Flat containers report their length as a one-dimensional shape.
    #[error("incompatible shapes for {op}: {lhs} vs {rhs}")]
    ShapeMismatch {
        op: &'static str,
        lhs: Shape,
        rhs: Shape,
    },

    /// A strided range was supplied. Only contiguous windows are executed.
    #[error("unsupported range {begin}..{end} with stride {stride}")]
    UnsupportedRange {
        begin: usize,
        end: usize,
        stride: usize,
    },

    /// A contiguous range does not satisfy `begin <= end <= len`.
    #[error("range {begin}..{end} out of bounds for length {len}")]
    RangeOutOfBounds { begin: usize, end: usize, len: usize },

    /// Integer or fixed-point division by zero.
    #[error(
        "division by zero in {op}{}",
        .index.map(|i| format!(" at index {i}")).unwrap_or_default()
    )]
    DivideByZero {
        op: &'static str,
        index: Option<usize>,
    },

    /// Container construction failed.
    #[error(transparent)]
    Array(#[from] ArrayError),
}
