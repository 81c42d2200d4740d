// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Row-major extents of a container.

use std::fmt;

/// The extent of a container along each of its axes, outermost first.
///
/// A flat container has one axis, a matrix two (`[rows, cols]`). Buffers
/// are always laid out row-major, so the last axis is contiguous.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    /// # Examples
    /// ```
    /// use array_core::Shape;
    /// let s = Shape::new(vec![2, 3, 4]);
    /// assert_eq!(s.rank(), 3);
    /// assert_eq!(s.num_elements(), 24);
    /// ```
    pub fn new(dims: Vec<usize>) -> Self {
        Self { dims }
    }

    /// The shape of a flat container of `len` elements.
    pub fn vector(len: usize) -> Self {
        Self::new(vec![len])
    }

    /// The shape of a `rows x cols` matrix.
    pub fn matrix(rows: usize, cols: usize) -> Self {
        Self::new(vec![rows, cols])
    }

    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Number of elements a buffer of this shape holds. Rank 0 holds one.
    pub fn num_elements(&self) -> usize {
        self.dims.iter().product()
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Elements skipped in the buffer per step along each axis.
    pub fn strides(&self) -> Vec<usize> {
        let mut strides = vec![1; self.dims.len()];
        for axis in (1..self.dims.len()).rev() {
            strides[axis - 1] = strides[axis] * self.dims[axis];
        }
        strides
    }

    /// Buffer offset of a multi-dimensional index, or `None` if the index
    /// has the wrong rank or falls outside an axis.
    pub fn offset(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.dims.len() {
            return None;
        }
        index
            .iter()
            .zip(&self.dims)
            .try_fold(0, |acc, (&i, &d)| (i < d).then_some(acc * d + i))
    }

    /// The shape produced by broadcasting `self` against `other`.
    ///
    /// Both shapes must have the same rank, and on every axis the extents
    /// must agree or one of them must be 1; the result takes the other
    /// extent there. Ranks are never padded with leading ones.
    ///
    /// # Examples
    /// ```
    /// use array_core::Shape;
    /// let a = Shape::new(vec![2, 1, 3]);
    /// let b = Shape::new(vec![1, 4, 3]);
    /// assert_eq!(a.broadcast_with(&b), Some(Shape::new(vec![2, 4, 3])));
    /// assert_eq!(a.broadcast_with(&Shape::new(vec![4, 3])), None);
    /// ```
    pub fn broadcast_with(&self, other: &Shape) -> Option<Shape> {
        if self.rank() != other.rank() {
            return None;
        }
        self.dims
            .iter()
            .zip(&other.dims)
            .map(|(&a, &b)| match (a, b) {
                _ if a == b => Some(a),
                (1, _) => Some(b),
                (_, 1) => Some(a),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .map(Shape::new)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dims: Vec<String> = self.dims.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", dims.join(", "))
    }
}
