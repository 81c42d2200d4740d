// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! N-dimensional broadcasting array.

use crate::classify::{kind, Operand};
use crate::{ArrayError, Container, Element, NdContainer, Shape};

/// An owned n-dimensional array stored in row-major order.
///
/// `shape.num_elements()` always equals the number of stored elements.
/// Any [`Element`] may be stored, fixed point included.
#[derive(Debug, Clone, PartialEq)]
pub struct NdArray<T: Element> {
    data: Vec<T>,
    shape: Shape,
}

impl<T: Element> NdArray<T> {
    /// Creates a zero-filled array.
    pub fn zeros(shape: Shape) -> Self {
        Self {
            data: vec![T::zero(); shape.num_elements()],
            shape,
        }
    }

    /// Builds an array from a row-major buffer.
    ///
    /// # Examples
    /// ```
    /// use array_core::{NdArray, Shape};
    /// let a = NdArray::from_vec(Shape::new(vec![2, 1, 2]), vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(a.get(&[1, 0, 1]), Some(4));
    /// ```
    pub fn from_vec(shape: Shape, data: Vec<T>) -> Result<Self, ArrayError> {
        if data.len() != shape.num_elements() {
            return Err(ArrayError::BufferSizeMismatch {
                expected: shape.num_elements(),
                actual: data.len(),
            });
        }
        Ok(Self { data, shape })
    }

    /// Returns the dimensions.
    pub fn dims(&self) -> &[usize] {
        self.shape.dims()
    }

    /// Returns the element at a multi-dimensional index.
    pub fn get(&self, index: &[usize]) -> Option<T> {
        self.shape.offset(index).map(|o| self.data[o])
    }

    /// Overwrites the element at a multi-dimensional index.
    pub fn set(&mut self, index: &[usize], value: T) -> Result<(), ArrayError> {
        let offset = self
            .shape
            .offset(index)
            .ok_or_else(|| ArrayError::IndexOutOfBounds {
                index: index.to_vec(),
                shape: self.shape.clone(),
            })?;
        self.data[offset] = value;
        Ok(())
    }

    /// Returns the element buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Element> Container for NdArray<T> {
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
        self.shape.clone()
    }
}

impl<T: Element> NdContainer for NdArray<T> {
    fn with_shape(shape: Shape) -> Self {
        Self::zeros(shape)
    }

    fn shape_ref(&self) -> &Shape {
        &self.shape
    }
}

impl<T: Element> Operand for NdArray<T> {
    type Kind = kind::BroadcastNd;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Fixed16;

    #[test]
    fn test_zeros() {
        let a = NdArray::<f32>::zeros(Shape::new(vec![2, 3, 4]));
        assert_eq!(a.len(), 24);
        assert_eq!(a.dims(), &[2, 3, 4]);
    }

    #[test]
    fn test_from_vec_size_mismatch() {
        let r = NdArray::from_vec(Shape::new(vec![2, 2]), vec![1u8, 2, 3]);
        assert!(r.is_err());
    }

    #[test]
    fn test_get_set() {
        let mut a = NdArray::<i32>::zeros(Shape::new(vec![2, 3]));
        a.set(&[1, 2], 7).unwrap();
        assert_eq!(a.get(&[1, 2]), Some(7));
        assert_eq!(a.as_slice()[5], 7);
        assert!(a.set(&[2, 0], 1).is_err());
        assert_eq!(a.get(&[0, 3]), None);
    }

    #[test]
    fn test_holds_fixed_point() {
        let a = NdArray::<Fixed16>::zeros(Shape::new(vec![1, 2]));
        assert_eq!(a.shape(), Shape::matrix(1, 2));
    }
}
