#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::float_cmp)]
#![no_std]

//! Tessellation of smooth curves through a sequence of points.
//!
//! This crate is reexported in [arcblend](../arcblend/index.html).
//!
//! ## Overview
//!
//! At each point of the input sequence an arc is fitted through the point and
//! its neighbors (see the [geom](geom/index.html) crate). The curve between
//! two adjacent points, a *span*, starts along the arc of the first point and
//! ends along the arc of the second one, the two being blended with an eased
//! weight. The result is a smooth curve passing exactly through every point.
//!
//! The most interesting types and traits of this crate are:
//!
//! * [CurveTessellator](struct.CurveTessellator.html) - Samples the spans of a
//!   point sequence into line geometry.
//! * [`CurveGeometryBuilder`](geometry_builder/trait.CurveGeometryBuilder.html) - (See the
//!   documentation of the [geometry_builder module](geometry_builder/index.html)) which the
//!   tessellator writes into, usually in the form of arbitrary vertex and index buffers.
//! * [SegmentParameters](struct.SegmentParameters.html) - The same spans expressed as one
//!   parameter set per span, for renderers that evaluate the curve themselves.
//!
//! ## Options
//!
//! [CurveOptions](struct.CurveOptions.html) controls the number of segments per span, how the
//! two ends of the sequence are treated ([EndMode](enum.EndMode.html)) and whether the output is
//! colored by arc kind ([ColorMode](enum.ColorMode.html)).
//!
//! ## Examples
//!
//! ```
//! use arcblend_tessellation::{CurveOptions, CurveTessellator, EndMode};
//! use arcblend_tessellation::math::point;
//!
//! let points = [
//!     point(0.0, 0.0),
//!     point(10.0, 0.0),
//!     point(10.0, 10.0),
//!     point(0.0, 10.0),
//! ];
//!
//! let options = CurveOptions::segments(8).with_end_mode(EndMode::ShowEnds);
//! let polyline = CurveTessellator::new()
//!     .tessellate_polyline(&points, &options)
//!     .unwrap();
//!
//! // Three spans of 8 segments.
//! assert_eq!(polyline.len(), 3 * 8 + 1);
//! assert_eq!(polyline[0], points[0]);
//! assert!((polyline[8] - points[1]).length() < 1e-3);
//! assert_eq!(polyline[24], points[3]);
//! ```

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub use arcblend_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod color;
mod curve;
mod error;
pub mod geometry_builder;
mod parameters;

#[doc(inline)]
pub use crate::color::{Color, ColorMode};

#[doc(inline)]
pub use crate::curve::*;

#[doc(inline)]
pub use crate::parameters::*;

#[doc(inline)]
pub use crate::geometry_builder::{
    simple_builder, BuffersBuilder, CurveGeometryBuilder, CurveVertexConstructor,
    GeometryBuilderError, NoOutput, Positions, VertexBuffers,
};

#[doc(inline)]
pub use crate::error::*;

use core::ops::{Add, Sub};

pub mod math {
    //! `f32` versions of the geometric types used by the tessellator.

    pub use crate::geom::euclid;

    /// Alias for `euclid::default::Point2D<f32>`.
    pub type Point = euclid::default::Point2D<f32>;

    /// Alias for `euclid::default::Vector2D<f32>`.
    pub type Vector = euclid::default::Vector2D<f32>;

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    /// Shorthand for `Vector::new(x, y)`.
    #[inline]
    pub fn vector(x: f32, y: f32) -> Vector {
        Vector::new(x, y)
    }
}

/// How the first and last points of the sequence are treated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum EndMode {
    /// Only the spans between interior points are drawn. The first and last
    /// points shape the curve but are not reached by it.
    HideEnds,
    /// The curve starts at the first point and stops at the last one.
    ShowEnds,
    /// The sequence is a closed loop.
    JoinEnds,
}

impl EndMode {
    /// Whether the curve closes onto its first point.
    #[inline]
    pub fn is_closed(self) -> bool {
        self == EndMode::JoinEnds
    }
}

impl Default for EndMode {
    fn default() -> Self {
        CurveOptions::DEFAULT_END_MODE
    }
}

/// Parameters for the tessellator.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct CurveOptions {
    /// Number of line segments each span is approximated with.
    ///
    /// Default value: `CurveOptions::DEFAULT_SEGMENTS_PER_SPAN`.
    pub segments_per_span: u32,

    /// How the two ends of the sequence are treated.
    ///
    /// Default value: `EndMode::JoinEnds`.
    pub end_mode: EndMode,

    /// Whether vertices are colored by arc kind.
    ///
    /// Default value: `ColorMode::Colorized`.
    pub color_mode: ColorMode,
}

impl CurveOptions {
    pub const DEFAULT_SEGMENTS_PER_SPAN: u32 = 128;
    pub const DEFAULT_END_MODE: EndMode = EndMode::JoinEnds;
    pub const DEFAULT_COLOR_MODE: ColorMode = ColorMode::Colorized;

    pub const DEFAULT: Self = CurveOptions {
        segments_per_span: Self::DEFAULT_SEGMENTS_PER_SPAN,
        end_mode: Self::DEFAULT_END_MODE,
        color_mode: Self::DEFAULT_COLOR_MODE,
    };

    #[inline]
    pub const fn segments(segments_per_span: u32) -> Self {
        Self::DEFAULT.with_segments_per_span(segments_per_span)
    }

    #[inline]
    pub const fn with_segments_per_span(mut self, segments_per_span: u32) -> Self {
        self.segments_per_span = segments_per_span;
        self
    }

    #[inline]
    pub const fn with_end_mode(mut self, end_mode: EndMode) -> Self {
        self.end_mode = end_mode;
        self
    }

    #[inline]
    pub const fn with_color_mode(mut self, color_mode: ColorMode) -> Self {
        self.color_mode = color_mode;
        self
    }
}

impl Default for CurveOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

type Index = u32;

/// A virtual vertex offset in a geometry.
///
/// The `VertexId`s are only valid between `CurveGeometryBuilder::begin_geometry` and
/// `CurveGeometryBuilder::end_geometry`. `CurveGeometryBuilder` implementations typically
/// translate the ids internally so that first `VertexId` after `begin_geometry` is zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct VertexId(pub Index);

impl VertexId {
    pub const INVALID: VertexId = VertexId(u32::MAX);

    pub fn offset(self) -> Index {
        self.0
    }

    pub fn to_usize(self) -> usize {
        self.0 as usize
    }

    pub fn from_usize(v: usize) -> Self {
        VertexId(v as Index)
    }
}

impl Add<u32> for VertexId {
    type Output = Self;
    fn add(self, rhs: u32) -> Self {
        VertexId(self.0 + rhs)
    }
}

impl Sub<u32> for VertexId {
    type Output = Self;
    fn sub(self, rhs: u32) -> Self {
        VertexId(self.0 - rhs)
    }
}

impl From<u16> for VertexId {
    fn from(v: u16) -> Self {
        VertexId(v as Index)
    }
}
impl From<u32> for VertexId {
    fn from(v: u32) -> Self {
        VertexId(v)
    }
}

impl From<VertexId> for u16 {
    fn from(v: VertexId) -> Self {
        v.0 as u16
    }
}
impl From<VertexId> for u32 {
    fn from(v: VertexId) -> Self {
        v.0
    }
}
impl From<VertexId> for usize {
    fn from(v: VertexId) -> Self {
        v.0 as usize
    }
}

/// The two input points a span connects.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Span {
    /// Index of the point the span starts at.
    pub from: usize,
    /// Index of the point the span ends at.
    pub to: usize,
}

/// A vertex produced by the curve tessellator.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CurveVertex {
    pub(crate) position: math::Point,
    pub(crate) color: Color,
    pub(crate) span: Span,
    pub(crate) t: f32,
}

impl CurveVertex {
    /// The position of the vertex.
    #[inline]
    pub fn position(&self) -> math::Point {
        self.position
    }

    /// The color blended between the colors of the two arcs of the span.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// The span this vertex was sampled on.
    ///
    /// Vertices shared by two spans report the span they end, with `t = 1`.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// The blend parameter of the vertex on its span, between 0 and 1.
    #[inline]
    pub fn t(&self) -> f32 {
        self.t
    }
}

#[test]
fn options() {
    let options = CurveOptions::DEFAULT;
    assert_eq!(options.segments_per_span, 128);
    assert_eq!(options.end_mode, EndMode::JoinEnds);
    assert_eq!(options.color_mode, ColorMode::Colorized);
    assert_eq!(CurveOptions::default(), options);

    let options = CurveOptions::segments(4)
        .with_end_mode(EndMode::HideEnds)
        .with_color_mode(ColorMode::Neutral);
    assert_eq!(options.segments_per_span, 4);
    assert_eq!(options.end_mode, EndMode::HideEnds);
    assert_eq!(options.color_mode, ColorMode::Neutral);

    assert!(EndMode::JoinEnds.is_closed());
    assert!(!EndMode::ShowEnds.is_closed());
}
