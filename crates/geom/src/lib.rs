#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::excessive_precision)]
#![allow(clippy::many_single_char_names)]
#![no_std]

//! Vertex arcs and arc blending on top of euclid.
//!
//! This crate is reexported in [arcblend](../arcblend/index.html).
//!
//! # Overview.
//!
//! A smooth curve is drawn through an ordered sequence of points by fitting,
//! at each vertex, an arc that passes through the vertex and approximates the
//! path through its two neighbors:
//!
//! - a circle through the vertex and its neighbors when it does not turn more
//!   than a quarter-turn on either side of the vertex ([`circle_arc`]),
//! - otherwise an ellipse arc found with a bounded bisection ([`ellipse_arc`]).
//!
//! [`vertex_arc`] picks between the two. Each [`VertexArc`] is split at the
//! vertex into two [`HalfArc`]s, and the span between two adjacent vertices
//! is produced by [`blend`]ing the trailing half of the first vertex arc with
//! the leading half of the second one.
//!
//! ```
//! use arcblend_geom::{point, vertex_arc, blend};
//!
//! let points = [point(0.0, 0.0), point(10.0, 0.0), point(10.0, 10.0)];
//! let a = vertex_arc(&points, 0);
//! let b = vertex_arc(&points, 1);
//!
//! let start = blend(0.0, &a.trailing_half(), &b.leading_half());
//! let end = blend(1.0, &a.trailing_half(), &b.leading_half());
//! assert!((start - points[0]).length() < 1e-3);
//! assert!((end - points[1]).length() < 1e-3);
//! ```

#[cfg(any(test, feature = "std"))]
extern crate std;

// Reexport dependencies.
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod arc;
pub mod blend;
pub mod circle;
pub mod ellipse;
pub mod select;
pub mod vector_math;

#[doc(inline)]
pub use crate::arc::{ArcKind, HalfArc, VertexArc};
#[doc(inline)]
pub use crate::blend::{blend, blend_weight};
#[doc(inline)]
pub use crate::circle::{circle_arc, NEAR_PARALLEL_THRESHOLD, SMALL_ANGLE};
#[doc(inline)]
pub use crate::ellipse::{ellipse_arc, ELLIPSE_ITERATIONS};
#[doc(inline)]
pub use crate::select::{needs_ellipse, vertex_arc};

pub use crate::scalar::Scalar;

mod scalar {
    use num_traits::{Float, FloatConst, NumCast};

    use core::fmt::{Debug, Display};
    use core::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

    pub trait Scalar:
        Float
        + NumCast
        + FloatConst
        + Sized
        + Display
        + Debug
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
    {
        const HALF: Self;
        const QUARTER: Self;
        const ZERO: Self;
        const ONE: Self;
        const TWO: Self;

        fn value(v: f64) -> Self;
    }

    impl Scalar for f32 {
        const HALF: Self = 0.5;
        const QUARTER: Self = 0.25;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;

        #[inline]
        fn value(v: f64) -> Self {
            v as f32
        }
    }

    impl Scalar for f64 {
        const HALF: Self = 0.5;
        const QUARTER: Self = 0.25;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;

        #[inline]
        fn value(v: f64) -> Self {
            v
        }
    }
}

/// Alias for `euclid::default::Point2D`.
pub use euclid::default::Point2D as Point;

/// Alias for `euclid::default::Vector2D`.
pub use euclid::default::Vector2D as Vector;

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub fn vector<S>(x: S, y: S) -> Vector<S> {
    Vector::new(x, y)
}

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point<S>(x: S, y: S) -> Point<S> {
    Point::new(x, y)
}

/// Index of the vertex before `index`, wrapping around.
#[inline]
pub fn previous_index(index: usize, count: usize) -> usize {
    (index + count - 1) % count
}

/// Index of the vertex after `index`, wrapping around.
#[inline]
pub fn next_index(index: usize, count: usize) -> usize {
    (index + 1) % count
}

#[test]
fn wrapping_indices() {
    assert_eq!(previous_index(0, 5), 4);
    assert_eq!(previous_index(3, 5), 2);
    assert_eq!(next_index(4, 5), 0);
    assert_eq!(next_index(0, 1), 0);
    assert_eq!(previous_index(0, 1), 0);
}
