#![deny(bare_trait_objects)]

//! Smooth curves through a sequence of points.
//!
//! This meta-crate (`arcblend`) reexports the following sub-crates for convenience:
//!
//! * **arcblend_tessellation** - Sampling of the curve into line geometry or per-span
//!   parameters.
//! * **arcblend_geom** - Circle and ellipse arcs fitted at each point, and the blending
//!   of two arcs into a span.
//!
//! Each `arcblend_<name>` crate is reexported as a `<name>` module in `arcblend`. For example:
//!
//! ```ignore
//! extern crate arcblend_tessellation;
//! use arcblend_tessellation::CurveTessellator;
//! ```
//!
//! Is equivalent to:
//!
//! ```ignore
//! extern crate arcblend;
//! use arcblend::tessellation::CurveTessellator;
//! ```
//!
//! # How it works
//!
//! At each point an arc is fitted through the point and its two neighbors. It
//! is the circle through the three points, unless that circle reaches further
//! than a quarter-turn on either side of the point, in which case an ellipse
//! passing through the point and its farther neighbor at a quarter-turn is
//! used instead. The curve between two adjacent points starts along the arc of
//! the first point and ends along the arc of the second one, positions on both
//! arcs being mixed with the weight `sin²(π/2·t)`.
//!
//! # Examples
//!
//! ```
//! use arcblend::math::{point, Point};
//! use arcblend::tessellation::*;
//!
//! let points = [
//!     point(0.0, 0.0),
//!     point(100.0, 20.0),
//!     point(120.0, 120.0),
//!     point(10.0, 90.0),
//! ];
//!
//! // Will contain the result of the tessellation.
//! let mut geometry: VertexBuffers<Point, u16> = VertexBuffers::new();
//! let mut tessellator = CurveTessellator::new();
//!
//! {
//!     // Compute the tessellation.
//!     tessellator.tessellate(
//!         &points,
//!         &CurveOptions::segments(64),
//!         &mut BuffersBuilder::new(&mut geometry, |vertex: CurveVertex| {
//!             vertex.position()
//!         }),
//!     ).unwrap();
//! }
//!
//! // The tessellated geometry is ready to be uploaded to the GPU and drawn
//! // as a line list.
//! println!(" -- {} vertices {} indices",
//!     geometry.vertices.len(),
//!     geometry.indices.len()
//! );
//! ```

pub extern crate arcblend_tessellation;

pub use arcblend_tessellation as tessellation;
pub use tessellation::geom;

pub use tessellation::math;
