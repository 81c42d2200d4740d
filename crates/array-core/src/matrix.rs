// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Two-dimensional row-major matrix.

use crate::batch::{for_each_chunk, BatchPolicy};
use crate::classify::{kind, Operand};
use crate::{ArrayError, BatchApply, Container, Shape, ShapedContainer, VectorElement};
use std::ops::{Index, IndexMut};

/// An owned `rows × cols` matrix stored in row-major order.
///
/// `rows * cols` always equals the number of stored elements; the shape
/// cannot change without building a new matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T: VectorElement> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: VectorElement> Matrix<T> {
    /// Creates a zero-filled matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        }
    }

    /// Builds a matrix from a row-major buffer.
    ///
    /// Returns an error if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, ArrayError> {
        if data.len() != rows * cols {
            return Err(ArrayError::BufferSizeMismatch {
                expected: rows * cols,
                actual: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Builds a matrix from nested rows.
    ///
    /// # Examples
    /// ```
    /// use array_core::{Matrix, ShapedContainer};
    /// let m = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
    /// assert_eq!(m.dims(), (2, 3));
    /// assert_eq!(m[(1, 0)], 4);
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, ArrayError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(ArrayError::RaggedRows {
                    row: i,
                    expected: cols,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Returns the element at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Overwrites the element at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the position is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self[(row, col)] = value;
    }

    /// Returns one row as a slice, or `None` if `row` is out of bounds.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row < self.rows {
            Some(&self.data[row * self.cols..(row + 1) * self.cols])
        } else {
            None
        }
    }

    /// Copies the matrix into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.rows).filter_map(|r| self.row(r)).map(<[T]>::to_vec).collect()
    }

    /// Returns the element buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: VectorElement> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl<T: VectorElement> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}

impl<T: VectorElement> Container for Matrix<T> {
    type Elem = T;

    fn len(&self) -> usize {
        self.data.len()
    }

    fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    fn shape(&self) -> Shape {
        Shape::matrix(self.rows, self.cols)
    }
}

impl<T: VectorElement> ShapedContainer for Matrix<T> {
    fn with_dims(rows: usize, cols: usize) -> Self {
        Self::zeros(rows, cols)
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }
}

impl<T: VectorElement> BatchApply for Matrix<T> {
    fn batch_apply<F>(&mut self, window: std::ops::Range<usize>, f: F)
    where
        F: Fn(usize, &mut [T]) + Send + Sync,
    {
        for_each_chunk(&mut self.data, window, BatchPolicy::current(), f);
    }
}

impl<T: VectorElement> Operand for Matrix<T> {
    type Kind = kind::Shaped;
}
