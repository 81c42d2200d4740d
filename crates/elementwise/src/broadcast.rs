// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Broadcasting resolver.
//!
//! A [`BroadcastPlan`] records the output shape of a broadcasting pair and,
//! per operand, the stride to advance along each output axis. Axes an
//! operand replicates get stride 0, so walking the output in row-major order
//! yields the matching operand offsets without any per-element division.
//!
//! Two rules produce plans:
//! - matrices: `(r1, c1)` and `(r2, c2)` pair when the row counts agree and
//!   one column count is 1, or the column counts agree and one row count is 1.
//! - n-dimensional arrays: equal rank, and every axis pair is equal or has
//!   a 1 on one side. Ranks are never padded.

use crate::partition::Window;
use crate::ArithmeticError;
use array_core::{BatchApply, Element, Shape};

/// Output shape and per-operand strides of a broadcasting pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastPlan {
    out_shape: Shape,
    lhs_strides: Vec<usize>,
    rhs_strides: Vec<usize>,
}

impl BroadcastPlan {
    /// Resolves a row or column broadcast between two matrices.
    ///
    /// # Errors
    /// Returns [`ArithmeticError::ShapeMismatch`] unless exactly one axis
    /// agrees and the other has size 1 on one operand.
    ///
    /// # Examples
    /// ```
    /// use array_core::Shape;
    /// use elementwise::BroadcastPlan;
    /// let plan = BroadcastPlan::matrix("add", (2, 3), (2, 1)).unwrap();
    /// assert_eq!(plan.out_shape(), &Shape::matrix(2, 3));
    /// assert!(BroadcastPlan::matrix("add", (1, 3), (2, 1)).is_err());
    /// ```
    pub fn matrix(
        op: &'static str,
        (r1, c1): (usize, usize),
        (r2, c2): (usize, usize),
    ) -> Result<Self, ArithmeticError> {
        let rows_agree = r1 == r2 && (c1 == 1 || c2 == 1);
        let cols_agree = c1 == c2 && (r1 == 1 || r2 == 1);
        let lhs = Shape::matrix(r1, c1);
        let rhs = Shape::matrix(r2, c2);
        match lhs.broadcast_with(&rhs) {
            Some(out) if rows_agree || cols_agree => Ok(Self::build(op, &lhs, &rhs, out)),
            _ => Err(ArithmeticError::ShapeMismatch { op, lhs, rhs }),
        }
    }

    /// Resolves an n-dimensional broadcast.
    ///
    /// # Errors
    /// Returns [`ArithmeticError::ShapeMismatch`] if the ranks differ or an
    /// axis pair is neither equal nor contains a 1.
    pub fn nd(op: &'static str, lhs: &Shape, rhs: &Shape) -> Result<Self, ArithmeticError> {
        match lhs.broadcast_with(rhs) {
            Some(out) => Ok(Self::build(op, lhs, rhs, out)),
            None => Err(ArithmeticError::ShapeMismatch {
                op,
                lhs: lhs.clone(),
                rhs: rhs.clone(),
            }),
        }
    }

    fn build(op: &'static str, lhs: &Shape, rhs: &Shape, out_shape: Shape) -> Self {
        let plan = Self {
            lhs_strides: operand_strides(lhs, &out_shape),
            rhs_strides: operand_strides(rhs, &out_shape),
            out_shape,
        };
        tracing::debug!(
            "{op}: broadcasting {lhs} with {rhs} to {}",
            plan.out_shape
        );
        plan
    }

    /// The shape of the result.
    pub fn out_shape(&self) -> &Shape {
        &self.out_shape
    }

    /// Returns `(lhs offset, rhs offset)` for each output index in `window`.
    pub fn offsets(&self, window: Window) -> Offsets<'_> {
        let dims = self.out_shape.dims();
        let remaining = window.len();
        let mut index = vec![0; dims.len()];
        let (mut lhs, mut rhs) = (0, 0);
        if remaining > 0 {
            let mut rest = window.start;
            for axis in (0..dims.len()).rev() {
                index[axis] = rest % dims[axis];
                rest /= dims[axis];
                lhs += index[axis] * self.lhs_strides[axis];
                rhs += index[axis] * self.rhs_strides[axis];
            }
        }
        Offsets {
            dims,
            lhs_strides: &self.lhs_strides,
            rhs_strides: &self.rhs_strides,
            index,
            lhs,
            rhs,
            remaining,
        }
    }

    /// Pairs each output index in `window` with the rhs element it reads.
    pub(crate) fn divisors<'a, T: Element>(
        &'a self,
        rhs: &'a [T],
        window: Window,
    ) -> impl Iterator<Item = (usize, T)> + 'a {
        window
            .clone()
            .zip(self.offsets(window))
            .map(move |(i, (_, r))| (i, rhs[r]))
    }

    /// `out[i] = f(lhs[l(i)], rhs[r(i)])` for `i` in `window`, batched.
    pub fn batch_fill<C, F>(&self, lhs: &[C::Elem], rhs: &[C::Elem], window: Window, out: &mut C, f: F)
    where
        C: BatchApply,
        F: Fn(C::Elem, C::Elem) -> C::Elem + Send + Sync,
    {
        out.batch_apply(window, |start, chunk| {
            let offsets = self.offsets(start..start + chunk.len());
            for (slot, (l, r)) in chunk.iter_mut().zip(offsets) {
                *slot = f(lhs[l], rhs[r]);
            }
        });
    }

    /// `out[i] = f(lhs[l(i)], rhs[r(i)])` for `i` in `window`.
    pub fn index_fill<T, F>(&self, lhs: &[T], rhs: &[T], window: Window, out: &mut [T], f: F)
    where
        T: Element,
        F: Fn(T, T) -> T,
    {
        for (i, (l, r)) in window.clone().zip(self.offsets(window)) {
            out[i] = f(lhs[l], rhs[r]);
        }
    }

    /// `target[i] = f(target[i], rhs[r(i)])` for `i` in `window`, batched.
    ///
    /// Valid only when the target is not broadcast, i.e. its shape equals
    /// [`out_shape`](Self::out_shape).
    pub fn batch_update<C, F>(&self, target: &mut C, rhs: &[C::Elem], window: Window, f: F)
    where
        C: BatchApply,
        F: Fn(C::Elem, C::Elem) -> C::Elem + Send + Sync,
    {
        target.batch_apply(window, |start, chunk| {
            let offsets = self.offsets(start..start + chunk.len());
            for (slot, (_, r)) in chunk.iter_mut().zip(offsets) {
                *slot = f(*slot, rhs[r]);
            }
        });
    }

    /// `target[i] = f(target[i], rhs[r(i)])` for `i` in `window`.
    pub fn index_update<T, F>(&self, target: &mut [T], rhs: &[T], window: Window, f: F)
    where
        T: Element,
        F: Fn(T, T) -> T,
    {
        for (i, (_, r)) in window.clone().zip(self.offsets(window)) {
            target[i] = f(target[i], rhs[r]);
        }
    }
}

/// Row-major strides of `operand` laid over `out`, 0 on replicated axes.
fn operand_strides(operand: &Shape, out: &Shape) -> Vec<usize> {
    operand
        .strides()
        .into_iter()
        .zip(operand.dims().iter().zip(out.dims()))
        .map(|(s, (&d, &o))| if d == o { s } else { 0 })
        .collect()
}

/// Iterator over broadcast operand offsets, see [`BroadcastPlan::offsets`].
#[derive(Debug)]
pub struct Offsets<'a> {
    dims: &'a [usize],
    lhs_strides: &'a [usize],
    rhs_strides: &'a [usize],
    index: Vec<usize>,
    lhs: usize,
    rhs: usize,
    remaining: usize,
}

impl Iterator for Offsets<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let item = (self.lhs, self.rhs);
        for axis in (0..self.dims.len()).rev() {
            self.index[axis] += 1;
            self.lhs += self.lhs_strides[axis];
            self.rhs += self.rhs_strides[axis];
            if self.index[axis] < self.dims[axis] {
                break;
            }
            self.lhs -= self.lhs_strides[axis] * self.dims[axis];
            self.rhs -= self.rhs_strides[axis] * self.dims[axis];
            self.index[axis] = 0;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Offsets<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_column_broadcast() {
        let plan = BroadcastPlan::matrix("subtract", (2, 3), (2, 1)).unwrap();
        assert_eq!(plan.out_shape(), &Shape::matrix(2, 3));
        let offsets: Vec<_> = plan.offsets(0..6).collect();
        assert_eq!(
            offsets,
            vec![(0, 0), (1, 0), (2, 0), (3, 1), (4, 1), (5, 1)]
        );
    }

    #[test]
    fn test_matrix_row_broadcast_lhs_smaller() {
        let plan = BroadcastPlan::matrix("add", (1, 3), (2, 3)).unwrap();
        assert_eq!(plan.out_shape(), &Shape::matrix(2, 3));
        let lhs: Vec<_> = plan.offsets(0..6).map(|(l, _)| l).collect();
        assert_eq!(lhs, vec![0, 1, 2, 0, 1, 2]);
    }

    #[test]
    fn test_matrix_rule_rejects() {
        // Neither axis agrees.
        assert!(BroadcastPlan::matrix("add", (1, 3), (2, 1)).is_err());
        // One axis agrees but the other is not 1 on either side.
        assert!(matches!(
            BroadcastPlan::matrix("add", (2, 3), (2, 4)),
            Err(ArithmeticError::ShapeMismatch { op: "add", .. })
        ));
    }

    #[test]
    fn test_nd_broadcast() {
        let lhs = Shape::new(vec![2, 1, 3]);
        let rhs = Shape::new(vec![1, 4, 3]);
        let plan = BroadcastPlan::nd("multiply", &lhs, &rhs).unwrap();
        assert_eq!(plan.out_shape(), &Shape::new(vec![2, 4, 3]));

        // Output index [1, 2, 1] = 1*12 + 2*3 + 1 = 19.
        let (l, r) = plan.offsets(19..20).next().unwrap();
        assert_eq!(l, lhs.offset(&[1, 0, 1]).unwrap());
        assert_eq!(r, rhs.offset(&[0, 2, 1]).unwrap());
    }

    #[test]
    fn test_nd_rank_mismatch() {
        let lhs = Shape::new(vec![2, 3]);
        let rhs = Shape::new(vec![1, 2, 3]);
        assert!(BroadcastPlan::nd("add", &lhs, &rhs).is_err());
    }

    #[test]
    fn test_zero_length_axis() {
        let plan =
            BroadcastPlan::nd("add", &Shape::new(vec![0, 3]), &Shape::new(vec![1, 3])).unwrap();
        assert_eq!(plan.out_shape().num_elements(), 0);
        assert_eq!(plan.offsets(0..0).count(), 0);
    }

    #[test]
    fn test_offsets_from_window_start() {
        let plan = BroadcastPlan::matrix("add", (3, 2), (3, 1)).unwrap();
        let all: Vec<_> = plan.offsets(0..6).collect();
        let tail: Vec<_> = plan.offsets(3..6).collect();
        assert_eq!(&all[3..], &tail[..]);
        assert_eq!(plan.offsets(3..6).len(), 3);
    }

    #[test]
    fn test_index_fill_and_update() {
        let plan = BroadcastPlan::matrix("add", (2, 2), (1, 2)).unwrap();
        let mut out = [0i32; 4];
        plan.index_fill(&[1, 2, 3, 4], &[10, 20], 0..4, &mut out, |a, b| a + b);
        assert_eq!(out, [11, 22, 13, 24]);
        plan.index_update(&mut out, &[1, 2], 2..4, |a, b| a - b);
        assert_eq!(out, [11, 22, 12, 22]);
    }
}
