// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Capability traits a container exposes to take part in elementwise
//! arithmetic.
//!
//! Every container stores its elements in one contiguous row-major buffer.
//! On top of [`Container`], a type declares how it is shaped
//! ([`FlatContainer`], [`ShapedContainer`] or [`NdContainer`]) and,
//! optionally, that it can run a function over a window of its buffer in
//! batches ([`BatchApply`]).

use crate::{Element, Shape};

/// A contiguous, index-addressable buffer of numeric elements.
pub trait Container {
    /// The element type.
    type Elem: Element;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the elements in linear index order.
    fn as_slice(&self) -> &[Self::Elem];

    /// Returns the elements in linear index order, mutably.
    fn as_mut_slice(&mut self) -> &mut [Self::Elem];

    /// Returns the shape of the container.
    fn shape(&self) -> Shape;
}

/// A container with no shape beyond its length.
pub trait FlatContainer: Container + Sized {
    /// Allocates a zero-filled container of `len` elements.
    fn with_len(len: usize) -> Self;
}

/// A two-dimensional container.
pub trait ShapedContainer: Container + Sized {
    /// Allocates a zero-filled `rows × cols` container.
    fn with_dims(rows: usize, cols: usize) -> Self;

    fn rows(&self) -> usize;

    fn cols(&self) -> usize;

    /// Returns `(rows, cols)`.
    fn dims(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }
}

/// An n-dimensional container.
pub trait NdContainer: Container + Sized {
    /// Allocates a zero-filled container of the given shape.
    fn with_shape(shape: Shape) -> Self;

    /// Returns the shape without cloning it.
    fn shape_ref(&self) -> &Shape;
}

/// Batched execution over a window of the element buffer.
///
/// This is where a container may use vector lanes or worker threads. The
/// caller supplies an already validated window and a function that receives
/// the absolute index of the first element of each batch together with the
/// batch itself; batches never overlap and together cover the window.
pub trait BatchApply: Container {
    fn batch_apply<F>(&mut self, window: std::ops::Range<usize>, f: F)
    where
        F: Fn(usize, &mut [Self::Elem]) + Send + Sync;
}
