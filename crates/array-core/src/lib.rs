// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # array-core
//!
//! Numeric containers and element types that elementwise arithmetic runs on.
//!
//! This crate provides:
//! - [`Vector`], [`FixedVector`], [`Matrix`] and [`NdArray`]: owned,
//!   row-major containers.
//! - [`Element`] and its refinements: the closed set of element types,
//!   including the binary fixed-point type [`Fixed`].
//! - [`Range`]: a half-open index window with an optional stride.
//! - [`classify`]: compile-time operand kinds that drive kernel selection.
//! - [`BatchPolicy`]: the TOML-configurable policy for batched, data-parallel
//!   execution.
//!
//! # Design Goals
//! - One contiguous buffer per container; no views, no reference counting.
//! - Operand kinds are resolved statically, never by runtime type checks.
//! - Clean error types via `thiserror`.

pub mod batch;
pub mod classify;
mod container;
mod dtype;
mod error;
mod fixed;
mod fixed_vector;
mod matrix;
mod ndarray;
mod range;
mod shape;
mod vector;

pub use batch::{for_each_chunk, BatchPolicy};
pub use classify::{kind_of, KindMarker, Operand, OperandKind};
pub use container::{BatchApply, Container, FlatContainer, NdContainer, ShapedContainer};
pub use dtype::{DType, Element, FixedPointElement, VectorElement};
pub use error::ArrayError;
pub use fixed::{Fixed, Fixed16, Fixed32};
pub use fixed_vector::FixedVector;
pub use matrix::Matrix;
pub use ndarray::NdArray;
pub use range::{Range, RangeState};
pub use shape::Shape;
pub use vector::Vector;

/// Traits needed to call container methods.
pub mod prelude {
    pub use crate::{BatchApply, Container, FlatContainer, NdContainer, ShapedContainer};
}
