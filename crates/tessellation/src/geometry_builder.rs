//! Tools to help with generating vertex and index buffers.
//!
//! ## Overview
//!
//! The curve tessellator does not write into a particular vertex layout.
//! Instead it reports vertices and lines to a [`CurveGeometryBuilder`], which
//! decides what to do with them. Vertices are produced in curve order, and
//! each line connects two consecutive vertices, so the output can either be
//! read as a polyline (the vertices in order) or drawn as a line list (the
//! indices).
//!
//! It is very common to push vertices and indices into a pair of vectors, so
//! this module provides:
//!
//! * [`VertexBuffers`], a simple pair of vectors of vertices and indices.
//! * [`BuffersBuilder`], which writes into a `VertexBuffers` and implements
//!   `CurveGeometryBuilder`. Producing the vertices is delegated to a
//!   [`CurveVertexConstructor`], which can be a closure.
//! * [`Positions`], a vertex constructor that just returns the position.
//!
//! ## Generating custom vertices
//!
//! ```
//! use arcblend_tessellation::{
//!     BuffersBuilder, CurveOptions, CurveTessellator, CurveVertex, VertexBuffers,
//! };
//! use arcblend_tessellation::math::point;
//!
//! #[derive(Copy, Clone, Debug)]
//! struct MyVertex {
//!     position: [f32; 2],
//!     color: [f32; 3],
//! }
//!
//! let points = [point(0.0, 0.0), point(100.0, 0.0), point(50.0, 80.0)];
//! let mut output: VertexBuffers<MyVertex, u16> = VertexBuffers::new();
//!
//! CurveTessellator::new().tessellate(
//!     &points,
//!     &CurveOptions::segments(16),
//!     &mut BuffersBuilder::new(&mut output, |vertex: CurveVertex| MyVertex {
//!         position: vertex.position().to_array(),
//!         color: vertex.color().to_array(),
//!     }),
//! ).unwrap();
//!
//! // Three closed spans of 16 segments, the joints are shared.
//! assert_eq!(output.vertices.len(), 48);
//! assert_eq!(output.indices.len(), 96);
//! ```

pub use crate::error::GeometryBuilderError;
use crate::math::Point;
use crate::{CurveVertex, Index, VertexId};

use alloc::vec::Vec;
use core::convert::From;
use core::ops::Add;

/// An interface separating the curve tessellator from the actual vertex
/// construction.
///
/// See the [`geometry_builder`](index.html) module documentation for more detailed explanation.
pub trait CurveGeometryBuilder {
    /// Called at the beginning of a generation.
    ///
    /// end_geometry must be called before begin_geometry is called again.
    fn begin_geometry(&mut self) {}

    /// Called at the end of a generation.
    fn end_geometry(&mut self) {}

    /// Inserts a vertex.
    /// Returns a vertex id that is only valid between begin_geometry and end_geometry.
    ///
    /// This method can only be called between begin_geometry and end_geometry.
    fn add_curve_vertex(&mut self, vertex: CurveVertex) -> Result<VertexId, GeometryBuilderError>;

    /// Insert a line between two vertices that were added after the last call to
    /// begin_geometry.
    ///
    /// This method can only be called between begin_geometry and end_geometry.
    fn add_line(&mut self, a: VertexId, b: VertexId);

    /// abort_geometry is called instead of end_geometry if an error occurred while producing
    /// the geometry and we won't be able to finish.
    ///
    /// The implementation is expected to discard the geometry that was generated since the last
    /// time begin_geometry was called, and to remain in a usable state.
    fn abort_geometry(&mut self) {}
}

/// Structure that holds the vertex and index data.
///
/// Usually written into though temporary `BuffersBuilder` objects.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct VertexBuffers<OutputVertex, OutputIndex> {
    pub vertices: Vec<OutputVertex>,
    pub indices: Vec<OutputIndex>,
}

impl<OutputVertex, OutputIndex> VertexBuffers<OutputVertex, OutputIndex> {
    /// Constructor
    pub fn new() -> Self {
        VertexBuffers::with_capacity(512, 1024)
    }

    /// Constructor
    pub fn with_capacity(num_vertices: usize, num_indices: usize) -> Self {
        VertexBuffers {
            vertices: Vec::with_capacity(num_vertices),
            indices: Vec::with_capacity(num_indices),
        }
    }

    /// Empty the buffers without freeing memory, for reuse without reallocation.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }
}

/// A temporary view on a `VertexBuffers` object which facilitate the population of vertex and index
/// data.
///
/// `BuffersBuilders` record the vertex offset from when they are created so that algorithms using
/// them don't need to worry about offsetting indices if some geometry was added beforehand.
pub struct BuffersBuilder<'l, OutputVertex: 'l, OutputIndex: 'l, Ctor> {
    buffers: &'l mut VertexBuffers<OutputVertex, OutputIndex>,
    first_vertex: Index,
    first_index: Index,
    vertex_constructor: Ctor,
}

impl<'l, OutputVertex: 'l, OutputIndex: 'l, Ctor>
    BuffersBuilder<'l, OutputVertex, OutputIndex, Ctor>
{
    pub fn new(buffers: &'l mut VertexBuffers<OutputVertex, OutputIndex>, ctor: Ctor) -> Self {
        let first_vertex = buffers.vertices.len() as Index;
        let first_index = buffers.indices.len() as Index;
        BuffersBuilder {
            buffers,
            first_vertex,
            first_index,
            vertex_constructor: ctor,
        }
    }

    pub fn buffers<'a, 'b: 'a>(&'b self) -> &'a VertexBuffers<OutputVertex, OutputIndex> {
        self.buffers
    }
}

/// A trait specifying how to create vertex values.
pub trait CurveVertexConstructor<OutputVertex> {
    fn new_vertex(&mut self, vertex: CurveVertex) -> OutputVertex;
}

/// A simple vertex constructor that just takes the position.
pub struct Positions;

impl CurveVertexConstructor<Point> for Positions {
    fn new_vertex(&mut self, vertex: CurveVertex) -> Point {
        vertex.position()
    }
}

impl<F, OutputVertex> CurveVertexConstructor<OutputVertex> for F
where
    F: Fn(CurveVertex) -> OutputVertex,
{
    fn new_vertex(&mut self, vertex: CurveVertex) -> OutputVertex {
        self(vertex)
    }
}

/// A `BuffersBuilder` that takes the actual vertex type as input.
pub type SimpleBuffersBuilder<'l> = BuffersBuilder<'l, Point, u32, Positions>;

/// Creates a `SimpleBuffersBuilder`.
pub fn simple_builder(buffers: &mut VertexBuffers<Point, u32>) -> SimpleBuffersBuilder {
    BuffersBuilder::new(buffers, Positions)
}

impl<'l, OutputVertex, OutputIndex, Ctor> CurveGeometryBuilder
    for BuffersBuilder<'l, OutputVertex, OutputIndex, Ctor>
where
    OutputVertex: 'l,
    OutputIndex: Add + From<VertexId> + MaxIndex,
    Ctor: CurveVertexConstructor<OutputVertex>,
{
    fn begin_geometry(&mut self) {
        self.first_vertex = self.buffers.vertices.len() as Index;
        self.first_index = self.buffers.indices.len() as Index;
    }

    fn add_curve_vertex(&mut self, vertex: CurveVertex) -> Result<VertexId, GeometryBuilderError> {
        let position = vertex.position();
        if !position.x.is_finite() || !position.y.is_finite() {
            return Err(GeometryBuilderError::InvalidVertex);
        }

        let len = self.buffers.vertices.len();
        if len >= OutputIndex::MAX {
            return Err(GeometryBuilderError::TooManyVertices);
        }
        self.buffers
            .vertices
            .push(self.vertex_constructor.new_vertex(vertex));
        Ok(VertexId(len as Index - self.first_vertex))
    }

    fn add_line(&mut self, a: VertexId, b: VertexId) {
        debug_assert!(a != b);
        debug_assert!(a != VertexId::INVALID);
        debug_assert!(b != VertexId::INVALID);
        self.buffers.indices.push((a + self.first_vertex).into());
        self.buffers.indices.push((b + self.first_vertex).into());
    }

    fn abort_geometry(&mut self) {
        self.buffers.vertices.truncate(self.first_vertex as usize);
        self.buffers.indices.truncate(self.first_index as usize);
    }
}

/// A geometry builder that does not output any geometry.
///
/// Mostly useful for testing.
pub struct NoOutput {
    next_vertex: u32,
    lines: u32,
}

impl NoOutput {
    pub fn new() -> Self {
        NoOutput {
            next_vertex: 0,
            lines: 0,
        }
    }

    /// Number of vertices added since the last call to begin_geometry.
    pub fn num_vertices(&self) -> u32 {
        self.next_vertex
    }

    /// Number of lines added since the last call to begin_geometry.
    pub fn num_lines(&self) -> u32 {
        self.lines
    }
}

impl Default for NoOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveGeometryBuilder for NoOutput {
    fn begin_geometry(&mut self) {
        self.next_vertex = 0;
        self.lines = 0;
    }

    fn add_curve_vertex(&mut self, _vertex: CurveVertex) -> Result<VertexId, GeometryBuilderError> {
        if self.next_vertex == u32::MAX {
            return Err(GeometryBuilderError::TooManyVertices);
        }
        self.next_vertex += 1;
        Ok(VertexId(self.next_vertex - 1))
    }

    fn add_line(&mut self, a: VertexId, b: VertexId) {
        debug_assert!(a != b);
        self.lines += 1;
    }
}

/// Provides the maximum value of an index.
///
/// This should be the maximum value representable by the index type up
/// to u32::MAX because the tessellator can't internally represent more
/// than u32::MAX indices.
pub trait MaxIndex {
    const MAX: usize;
}

impl MaxIndex for u8 {
    const MAX: usize = u8::MAX as usize;
}
impl MaxIndex for u16 {
    const MAX: usize = u16::MAX as usize;
}
impl MaxIndex for u32 {
    const MAX: usize = u32::MAX as usize;
}
// The tessellator internally uses u32 indices so we can't have more than u32::MAX
impl MaxIndex for usize {
    const MAX: usize = u32::MAX as usize;
}
