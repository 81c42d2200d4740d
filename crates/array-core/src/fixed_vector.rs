// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Flat vector of fixed-point elements.

use crate::classify::{kind, Operand};
use crate::{Container, FixedPointElement, FlatContainer, Shape};
use std::ops::{Index, IndexMut};

/// An owned flat buffer of fixed-point elements.
///
/// Deliberately has no batch-apply capability: arithmetic on it always runs
/// as a plain index loop.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedVector<T: FixedPointElement> {
    data: Vec<T>,
}

impl<T: FixedPointElement> FixedVector<T> {
    /// Creates a zero-filled vector.
    pub fn zeros(len: usize) -> Self {
        Self {
            data: vec![T::zero(); len],
        }
    }

    /// Takes ownership of an element buffer.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Converts each value to the nearest representable fixed-point value.
    ///
    /// # Examples
    /// ```
    /// use array_core::{FixedVector, Fixed16};
    /// let v = FixedVector::<Fixed16>::from_f64_slice(&[0.5, -1.25]);
    /// assert_eq!(v.to_f64_vec(), vec![0.5, -1.25]);
    /// ```
    pub fn from_f64_slice(values: &[f64]) -> Self {
        Self {
            data: values.iter().map(|&v| T::from_f64(v)).collect(),
        }
    }

    /// Converts every element to `f64`.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        self.data.iter().map(|&v| v.to_f64()).collect()
    }

    /// Returns the element at `index`, or `None` if out of bounds.
    pub fn get(&self, index: usize) -> Option<T> {
        self.data.get(index).copied()
    }

    /// Returns the element buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: FixedPointElement> Index<usize> for FixedVector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: FixedPointElement> IndexMut<usize> for FixedVector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: FixedPointElement> Container for FixedVector<T> {
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
        Shape::vector(self.data.len())
    }
}

impl<T: FixedPointElement> FlatContainer for FixedVector<T> {
    fn with_len(len: usize) -> Self {
        Self::zeros(len)
    }
}

impl<T: FixedPointElement> Operand for FixedVector<T> {
    type Kind = kind::FixedPointFlat;
}
