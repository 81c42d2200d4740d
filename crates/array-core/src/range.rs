// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Index windows over a container's flat element buffer.

use std::fmt;

/// Classification of a [`Range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeState {
    /// No window was given: the operation covers the whole container.
    Undefined,
    /// A contiguous window (`stride == 1`).
    Trivial,
    /// A strided window. Accepted by construction, rejected by every operation.
    NonTrivial,
}

/// A half-open window `[begin, end)` with a stride, or the undefined range
/// meaning "the whole container".
///
/// Ranges are cheap transient values built per call.
///
/// # Examples
/// ```
/// use array_core::{Range, RangeState};
/// assert_eq!(Range::undefined().state(), RangeState::Undefined);
/// assert_eq!(Range::new(1, 3).state(), RangeState::Trivial);
/// assert_eq!(Range::strided(0, 8, 2).state(), RangeState::NonTrivial);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    begin: usize,
    end: usize,
    stride: usize,
    defined: bool,
}

impl Range {
    /// The range covering the whole container.
    pub const fn undefined() -> Self {
        Self {
            begin: 0,
            end: 0,
            stride: 1,
            defined: false,
        }
    }

    /// A contiguous window `[begin, end)`.
    pub const fn new(begin: usize, end: usize) -> Self {
        Self::strided(begin, end, 1)
    }

    /// A window `[begin, end)` visiting every `stride`-th index.
    pub const fn strided(begin: usize, end: usize, stride: usize) -> Self {
        Self {
            begin,
            end,
            stride,
            defined: true,
        }
    }

    pub fn begin(&self) -> usize {
        self.begin
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Classifies this range.
    pub fn state(&self) -> RangeState {
        if !self.defined {
            RangeState::Undefined
        } else if self.stride == 1 {
            RangeState::Trivial
        } else {
            RangeState::NonTrivial
        }
    }

    pub fn is_undefined(&self) -> bool {
        self.state() == RangeState::Undefined
    }

    pub fn is_trivial(&self) -> bool {
        self.state() == RangeState::Trivial
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::undefined()
    }
}

/// Convenience: `Range::from(1..3)`.
impl From<std::ops::Range<usize>> for Range {
    fn from(r: std::ops::Range<usize>) -> Self {
        Self::new(r.start, r.end)
    }
}

impl fmt::Debug for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state() {
            RangeState::Undefined => write!(f, "Range(..)"),
            RangeState::Trivial => write!(f, "Range({}..{})", self.begin, self.end),
            RangeState::NonTrivial => {
                write!(f, "Range({}..{}; {})", self.begin, self.end, self.stride)
            }
        }
    }
}
