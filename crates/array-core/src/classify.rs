// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Operand classification.
//!
//! Every type that can appear as an operand implements [`Operand`] exactly
//! once, naming one of five kind markers:
//!
//! ```text
//! kind::Scalar          f32, i64, Fixed16, ...
//! kind::Flat            Vector<T>
//! kind::FixedPointFlat  FixedVector<T>
//! kind::Shaped          Matrix<T>
//! kind::BroadcastNd     NdArray<T>
//! ```
//!
//! Because the kind is an associated type, a type cannot be two kinds at
//! once, and a type with no `Operand` impl cannot be passed to any
//! operation: the mistake is a compile error, never a runtime one.
//!
//! The `Is*` traits pair a kind with the capabilities that kind needs and
//! are implemented automatically.

use crate::{
    BatchApply, Element, Fixed, FlatContainer, NdContainer, ShapedContainer,
};

/// Runtime mirror of the kind markers, for logging and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandKind {
    Scalar,
    Flat,
    FixedPointFlat,
    Shaped,
    BroadcastNd,
}

impl OperandKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OperandKind::Scalar => "scalar",
            OperandKind::Flat => "flat",
            OperandKind::FixedPointFlat => "fixed-flat",
            OperandKind::Shaped => "shaped",
            OperandKind::BroadcastNd => "nd",
        }
    }
}

/// Type-level kind markers.
pub mod kind {
    /// A single arithmetic value.
    #[derive(Debug)]
    pub struct Scalar;

    /// A flat buffer with batch-apply support.
    #[derive(Debug)]
    pub struct Flat;

    /// A flat buffer of fixed-point elements, processed by index loops.
    #[derive(Debug)]
    pub struct FixedPointFlat;

    /// A two-dimensional matrix.
    #[derive(Debug)]
    pub struct Shaped;

    /// An n-dimensional broadcasting array.
    #[derive(Debug)]
    pub struct BroadcastNd;
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::kind::Scalar {}
    impl Sealed for super::kind::Flat {}
    impl Sealed for super::kind::FixedPointFlat {}
    impl Sealed for super::kind::Shaped {}
    impl Sealed for super::kind::BroadcastNd {}
}

/// Sealed trait for the five kind markers.
pub trait KindMarker: sealed::Sealed + 'static {
    const KIND: OperandKind;
}

impl KindMarker for kind::Scalar {
    const KIND: OperandKind = OperandKind::Scalar;
}
impl KindMarker for kind::Flat {
    const KIND: OperandKind = OperandKind::Flat;
}
impl KindMarker for kind::FixedPointFlat {
    const KIND: OperandKind = OperandKind::FixedPointFlat;
}
impl KindMarker for kind::Shaped {
    const KIND: OperandKind = OperandKind::Shaped;
}
impl KindMarker for kind::BroadcastNd {
    const KIND: OperandKind = OperandKind::BroadcastNd;
}

/// A type that can be an operand of an elementwise operation.
pub trait Operand {
    /// The single kind this type is classified as.
    type Kind: KindMarker;
}

/// Returns the runtime kind of an operand.
pub fn kind_of<T: Operand>(_operand: &T) -> OperandKind {
    <T::Kind as KindMarker>::KIND
}

/// Scalars.
pub trait IsScalar: Operand<Kind = kind::Scalar> + Element {}
impl<T> IsScalar for T where T: Operand<Kind = kind::Scalar> + Element {}

/// Flat containers with batch apply.
pub trait IsFlat: Operand<Kind = kind::Flat> + FlatContainer + BatchApply {}
impl<T> IsFlat for T where T: Operand<Kind = kind::Flat> + FlatContainer + BatchApply {}

/// Flat containers of fixed-point elements.
pub trait IsFixedPointFlat: Operand<Kind = kind::FixedPointFlat> + FlatContainer {}
impl<T> IsFixedPointFlat for T where T: Operand<Kind = kind::FixedPointFlat> + FlatContainer {}

/// Matrices with batch apply.
pub trait IsShaped: Operand<Kind = kind::Shaped> + ShapedContainer + BatchApply {}
impl<T> IsShaped for T where T: Operand<Kind = kind::Shaped> + ShapedContainer + BatchApply {}

/// N-dimensional broadcasting arrays.
pub trait IsBroadcastNd: Operand<Kind = kind::BroadcastNd> + NdContainer {}
impl<T> IsBroadcastNd for T where T: Operand<Kind = kind::BroadcastNd> + NdContainer {}

macro_rules! scalar_operand_impl {
    ($($t:ty),*) => {
        $(
            impl Operand for $t {
                type Kind = kind::Scalar;
            }
        )*
    };
}

scalar_operand_impl!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);

impl<const FRAC: u32> Operand for Fixed<FRAC> {
    type Kind = kind::Scalar;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Fixed16, FixedVector, Matrix, NdArray, Shape, Vector};

    fn assert_scalar<T: IsScalar>() {}
    fn assert_flat<T: IsFlat>() {}
    fn assert_fixed_flat<T: IsFixedPointFlat>() {}
    fn assert_shaped<T: IsShaped>() {}
    fn assert_nd<T: IsBroadcastNd>() {}

    #[test]
    fn test_static_classification() {
        assert_scalar::<f32>();
        assert_scalar::<u8>();
        assert_scalar::<Fixed16>();
        assert_flat::<Vector<f64>>();
        assert_fixed_flat::<FixedVector<Fixed16>>();
        assert_shaped::<Matrix<i32>>();
        assert_nd::<NdArray<f32>>();
        assert_nd::<NdArray<Fixed16>>();
    }

    #[test]
    fn test_runtime_kind() {
        assert_eq!(kind_of(&1.0f32), OperandKind::Scalar);
        assert_eq!(kind_of(&Vector::<f32>::zeros(2)), OperandKind::Flat);
        assert_eq!(
            kind_of(&FixedVector::<Fixed16>::zeros(2)),
            OperandKind::FixedPointFlat
        );
        assert_eq!(kind_of(&Matrix::<f64>::zeros(2, 2)), OperandKind::Shaped);
        assert_eq!(
            kind_of(&NdArray::<i64>::zeros(Shape::new(vec![2, 1, 3]))),
            OperandKind::BroadcastNd
        );
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(OperandKind::FixedPointFlat.as_str(), "fixed-flat");
        assert_eq!(OperandKind::BroadcastNd.as_str(), "nd");
    }
}
