// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for container construction and configuration.

/// Errors that can occur while building containers or loading a batch policy.
#[derive(Debug, thiserror::Error)]
pub enum ArrayError {
    /// The provided element buffer does not match the element count implied by the shape.
    #[error("buffer size mismatch: expected {expected} elements, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// A nested row has a different length from the first row.
    #[error("ragged rows: row {row} has {actual} elements, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A multi-dimensional index does not address an element of the container.
    #[error("index {index:?} out of bounds for shape {shape}")]
    IndexOutOfBounds {
        index: Vec<usize>,
        shape: crate::Shape,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
