// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Flat, batch-capable vector.

use crate::batch::{for_each_chunk, BatchPolicy};
use crate::classify::{kind, Operand};
use crate::{BatchApply, Container, FlatContainer, Shape, VectorElement};
use std::ops::{Index, IndexMut};

/// An owned flat buffer of primitive numeric elements.
///
/// Index order is insertion order. The length is fixed after construction.
///
/// # Examples
/// ```
/// use array_core::{Vector, Container};
/// let v = Vector::from_vec(vec![1.0f32, 2.0, 3.0]);
/// assert_eq!(v.len(), 3);
/// assert_eq!(v[1], 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T: VectorElement> {
    data: Vec<T>,
}

impl<T: VectorElement> Vector<T> {
    /// Creates a zero-filled vector.
    pub fn zeros(len: usize) -> Self {
        Self::filled(len, T::zero())
    }

    /// Creates a vector with every element set to `value`.
    pub fn filled(len: usize, value: T) -> Self {
        Self {
            data: vec![value; len],
        }
    }

    /// Takes ownership of an element buffer.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Returns the element at `index`, or `None` if out of bounds.
    pub fn get(&self, index: usize) -> Option<T> {
        self.data.get(index).copied()
    }

    /// Iterates over the elements by value.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.data.iter().copied()
    }

    /// Returns the element buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: VectorElement> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: VectorElement> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: VectorElement> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: VectorElement> Container for Vector<T> {
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

impl<T: VectorElement> FlatContainer for Vector<T> {
    fn with_len(len: usize) -> Self {
        Self::zeros(len)
    }
}

impl<T: VectorElement> BatchApply for Vector<T> {
    fn batch_apply<F>(&mut self, window: std::ops::Range<usize>, f: F)
    where
        F: Fn(usize, &mut [T]) + Send + Sync,
    {
        for_each_chunk(&mut self.data, window, BatchPolicy::current(), f);
    }
}

impl<T: VectorElement> Operand for Vector<T> {
    type Kind = kind::Flat;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let v = Vector::<f64>::zeros(4);
        assert_eq!(v.len(), 4);
        assert!(v.iter().all(|x| x == 0.0));
        assert_eq!(v.shape(), Shape::vector(4));
    }

    #[test]
    fn test_filled_and_index() {
        let mut v = Vector::filled(3, 7i32);
        v[1] = 9;
        assert_eq!(v.as_slice(), &[7, 9, 7]);
        assert_eq!(v.get(1), Some(9));
        assert_eq!(v.get(3), None);
    }

    #[test]
    fn test_batch_apply_window() {
        let mut v = Vector::from_vec(vec![1.0f32; 6]);
        v.batch_apply(2..5, |start, part| {
            for (k, x) in part.iter_mut().enumerate() {
                *x = (start + k) as f32;
            }
        });
        assert_eq!(v.into_vec(), vec![1.0, 1.0, 2.0, 3.0, 4.0, 1.0]);
    }

    #[test]
    fn test_empty() {
        let v: Vector<u8> = Vec::new().into();
        assert!(v.is_empty());
    }
}
