// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Range partitioning.
//!
//! [`window`] turns a caller's [`Range`] into a validated window over a
//! buffer of known length. The `batch_*` helpers run a per-element function
//! over that window through the output container's [`BatchApply`]
//! capability; the `index_*` helpers do the same with a plain index loop,
//! which is the only path fixed-point and n-dimensional containers take.
//!
//! Callers validate operand lengths before handing slices in.

use crate::ArithmeticError;
use array_core::{BatchApply, Element, Range, RangeState};

/// A validated half-open window of linear indices.
pub type Window = std::ops::Range<usize>;

/// Normalises `range` against a buffer of `len` elements.
///
/// # Errors
/// Returns [`ArithmeticError::UnsupportedRange`] for a strided range and
/// [`ArithmeticError::RangeOutOfBounds`] unless `begin <= end <= len`.
///
/// # Examples
/// ```
/// use array_core::Range;
/// use elementwise::partition::window;
/// assert_eq!(window(&Range::undefined(), 4).unwrap(), 0..4);
/// assert_eq!(window(&Range::new(1, 3), 4).unwrap(), 1..3);
/// assert!(window(&Range::strided(0, 4, 2), 4).is_err());
/// ```
pub fn window(range: &Range, len: usize) -> Result<Window, ArithmeticError> {
    let window = match range.state() {
        RangeState::Undefined => 0..len,
        RangeState::NonTrivial => {
            return Err(ArithmeticError::UnsupportedRange {
                begin: range.begin(),
                end: range.end(),
                stride: range.stride(),
            })
        }
        RangeState::Trivial => {
            if range.begin() > range.end() || range.end() > len {
                return Err(ArithmeticError::RangeOutOfBounds {
                    begin: range.begin(),
                    end: range.end(),
                    len,
                });
            }
            range.begin()..range.end()
        }
    };
    tracing::trace!("window {}..{} of {len}", window.start, window.end);
    Ok(window)
}

/// `out[i] = f(lhs[i], rhs[i])` for `i` in `window`, batched.
pub fn batch_zip<C, F>(lhs: &[C::Elem], rhs: &[C::Elem], window: Window, out: &mut C, f: F)
where
    C: BatchApply,
    F: Fn(C::Elem, C::Elem) -> C::Elem + Send + Sync,
{
    out.batch_apply(window, |start, chunk| {
        let end = start + chunk.len();
        for ((slot, &a), &b) in chunk
            .iter_mut()
            .zip(&lhs[start..end])
            .zip(&rhs[start..end])
        {
            *slot = f(a, b);
        }
    });
}

/// `out[i] = f(src[i])` for `i` in `window`, batched.
pub fn batch_map<C, F>(src: &[C::Elem], window: Window, out: &mut C, f: F)
where
    C: BatchApply,
    F: Fn(C::Elem) -> C::Elem + Send + Sync,
{
    out.batch_apply(window, |start, chunk| {
        let end = start + chunk.len();
        for (slot, &a) in chunk.iter_mut().zip(&src[start..end]) {
            *slot = f(a);
        }
    });
}

/// `target[i] = f(target[i], rhs[i])` for `i` in `window`, batched.
pub fn batch_zip_assign<C, F>(target: &mut C, rhs: &[C::Elem], window: Window, f: F)
where
    C: BatchApply,
    F: Fn(C::Elem, C::Elem) -> C::Elem + Send + Sync,
{
    target.batch_apply(window, |start, chunk| {
        let end = start + chunk.len();
        for (slot, &b) in chunk.iter_mut().zip(&rhs[start..end]) {
            *slot = f(*slot, b);
        }
    });
}

/// `target[i] = f(target[i])` for `i` in `window`, batched.
pub fn batch_map_assign<C, F>(target: &mut C, window: Window, f: F)
where
    C: BatchApply,
    F: Fn(C::Elem) -> C::Elem + Send + Sync,
{
    target.batch_apply(window, |_, chunk| {
        for slot in chunk.iter_mut() {
            *slot = f(*slot);
        }
    });
}

/// `out[i] = f(lhs[i], rhs[i])` for `i` in `window`.
pub fn index_zip<T, F>(lhs: &[T], rhs: &[T], window: Window, out: &mut [T], f: F)
where
    T: Element,
    F: Fn(T, T) -> T,
{
    for i in window {
        out[i] = f(lhs[i], rhs[i]);
    }
}

/// `out[i] = f(src[i])` for `i` in `window`.
pub fn index_map<T, F>(src: &[T], window: Window, out: &mut [T], f: F)
where
    T: Element,
    F: Fn(T) -> T,
{
    for i in window {
        out[i] = f(src[i]);
    }
}

/// `target[i] = f(target[i], rhs[i])` for `i` in `window`.
pub fn index_zip_assign<T, F>(target: &mut [T], rhs: &[T], window: Window, f: F)
where
    T: Element,
    F: Fn(T, T) -> T,
{
    for i in window {
        target[i] = f(target[i], rhs[i]);
    }
}

/// `target[i] = f(target[i])` for `i` in `window`.
pub fn index_map_assign<T, F>(target: &mut [T], window: Window, f: F)
where
    T: Element,
    F: Fn(T) -> T,
{
    for i in window {
        target[i] = f(target[i]);
    }
}
