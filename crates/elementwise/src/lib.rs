// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # elementwise
//!
//! Add, subtract, multiply and divide over scalars, flat vectors,
//! fixed-point vectors, matrices and n-dimensional arrays.
//!
//! This crate provides:
//! - [`add`], [`subtract`], [`multiply`], [`divide`] and their `_into`,
//!   `_ranged`, `_ranged_into` and `_assign` forms.
//! - [`kernel`]: the compile-time selection of one implementation per pair
//!   of operand kinds.
//! - [`partition`]: range validation and the batched / index-loop window
//!   primitives.
//! - [`BroadcastPlan`]: row/column and n-dimensional broadcasting.
//!
//! # Design Goals
//! - Every pairing either has exactly one kernel or fails to compile.
//! - All errors are detected before the output is written.
//! - Results do not depend on whether batches run sequentially or on the
//!   worker pool.

pub mod broadcast;
mod error;
pub mod kernel;
mod op;
pub mod ops;
pub mod partition;

pub use broadcast::BroadcastPlan;
pub use error::ArithmeticError;
pub use kernel::{AssignKernel, Kernel, Output, Pair, RangedKernel};
pub use op::{Add, BinaryOp, Divide, Multiply, Subtract};
pub use ops::{
    add, add_assign, add_into, add_ranged, add_ranged_into, apply, apply_assign, apply_into,
    apply_ranged, apply_ranged_into, divide, divide_assign, divide_into, divide_ranged,
    divide_ranged_into, multiply, multiply_assign, multiply_into, multiply_ranged,
    multiply_ranged_into, subtract, subtract_assign, subtract_into, subtract_ranged,
    subtract_ranged_into,
};
