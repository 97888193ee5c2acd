//! Arcs fitted at the vertices of a point sequence.

use crate::scalar::Scalar;
use crate::{Point, Vector};

/// Which construction produced a [`VertexArc`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum ArcKind {
    /// A circle through the vertex and its two neighbors, or the small-angle
    /// straight arc used when the chords are nearly parallel.
    Circle,
    /// An ellipse arc used when the circle turns too much around the vertex.
    Ellipse,
}

/// An arc passing through a vertex of a point sequence.
///
/// A point on the arc at angle `θ` is `center + axis1 * cos(θ) + axis2 * sin(θ)`.
/// The axes are not necessarily orthogonal or of equal length (they are for
/// circles).
///
/// `limits[1]` is always zero, the angle of the vertex itself. `limits[0]` is
/// the angle of the predecessor and `limits[2]` the angle of the successor.
/// They are not necessarily sorted, use `sorted_limits` when an interval is
/// needed.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct VertexArc<S> {
    pub center: Point<S>,
    pub axis1: Vector<S>,
    pub axis2: Vector<S>,
    pub limits: [S; 3],
    pub kind: ArcKind,
}

impl<S: Scalar> VertexArc<S> {
    /// A nearly straight arc leaving `vertex` along `direction`.
    ///
    /// Angle zero is at the vertex and angle `angle` is at `vertex + direction`,
    /// with the points in between distributed along the chord. Used where the
    /// vertex has no usable curvature.
    pub fn straight(vertex: Point<S>, direction: Vector<S>, angle: S, limits: [S; 3]) -> Self {
        VertexArc {
            center: vertex,
            axis1: Vector::zero(),
            axis2: direction / angle.sin(),
            limits,
            kind: ArcKind::Circle,
        }
    }

    /// The arc used at the ends of an open path.
    ///
    /// `chord` is the vector from the predecessor to the vertex for the last
    /// vertex, or from the vertex to the successor for the first one. Both
    /// halves of the arc follow that chord, so the span adjacent to the end
    /// of the path blends the neighboring vertex arc with a straight line.
    pub fn one_sided(vertex: Point<S>, chord: Vector<S>) -> Self {
        let angle = crate::circle::small_angle::<S>();
        Self::straight(vertex, chord, angle, [-angle, S::ZERO, angle])
    }

    /// Position on the arc at a given angle.
    #[inline]
    pub fn sample_angle(&self, angle: S) -> Point<S> {
        let (sin, cos) = angle.sin_cos();
        self.center + self.axis1 * cos + self.axis2 * sin
    }

    /// The vertex the arc was fitted at.
    #[inline]
    pub fn vertex(&self) -> Point<S> {
        self.sample_angle(S::ZERO)
    }

    /// The two endpoint limits in increasing order.
    #[inline]
    pub fn sorted_limits(&self) -> (S, S) {
        let (a, b) = (self.limits[0], self.limits[2]);
        if b < a {
            (b, a)
        } else {
            (a, b)
        }
    }

    /// The part of the arc between the predecessor and the vertex.
    #[inline]
    pub fn leading_half(&self) -> HalfArc<S> {
        self.half(self.limits[0], self.limits[1])
    }

    /// The part of the arc between the vertex and the successor.
    #[inline]
    pub fn trailing_half(&self) -> HalfArc<S> {
        self.half(self.limits[1], self.limits[2])
    }

    /// Splits the arc at the vertex into its leading and trailing halves.
    #[inline]
    pub fn split(&self) -> (HalfArc<S>, HalfArc<S>) {
        (self.leading_half(), self.trailing_half())
    }

    fn half(&self, from: S, to: S) -> HalfArc<S> {
        HalfArc {
            center: self.center,
            axis1: self.axis1,
            axis2: self.axis2,
            from,
            to,
        }
    }
}

/// One half of a [`VertexArc`], parametrized over `t` in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct HalfArc<S> {
    pub center: Point<S>,
    pub axis1: Vector<S>,
    pub axis2: Vector<S>,
    /// Angle at `t = 0`.
    pub from: S,
    /// Angle at `t = 1`.
    pub to: S,
}

impl<S: Scalar> HalfArc<S> {
    /// The angle at t (expecting t between 0 and 1).
    #[inline]
    pub fn angle(&self, t: S) -> S {
        self.from + t * (self.to - self.from)
    }

    /// Sample the curve at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: S) -> Point<S> {
        let (sin, cos) = self.angle(t).sin_cos();
        self.center + self.axis1 * cos + self.axis2 * sin
    }

    /// Start of the curve.
    #[inline]
    pub fn from(&self) -> Point<S> {
        self.sample(S::ZERO)
    }

    /// End of the curve.
    #[inline]
    pub fn to(&self) -> Point<S> {
        self.sample(S::ONE)
    }

    /// Swap the direction of the curve.
    #[inline]
    pub fn flip(&self) -> Self {
        HalfArc {
            from: self.to,
            to: self.from,
            ..*self
        }
    }
}

#[cfg(test)]
use crate::{point, vector};
#[cfg(test)]
use euclid::approxeq::ApproxEq;

#[test]
fn circle_halves() {
    use core::f64::consts::FRAC_PI_2;

    // Unit circle around the origin, vertex at (1, 0).
    let arc = VertexArc {
        center: point(0.0f64, 0.0),
        axis1: vector(1.0, 0.0),
        axis2: vector(0.0, 1.0),
        limits: [-FRAC_PI_2, 0.0, FRAC_PI_2],
        kind: ArcKind::Circle,
    };

    let (leading, trailing) = arc.split();
    assert!(leading.from().approx_eq(&point(0.0, -1.0)));
    assert!(leading.to().approx_eq(&point(1.0, 0.0)));
    assert!(trailing.from().approx_eq(&point(1.0, 0.0)));
    assert!(trailing.to().approx_eq(&point(0.0, 1.0)));
    assert_eq!(leading.to(), trailing.from());
    assert_eq!(arc.vertex(), point(1.0, 0.0));

    let flipped = trailing.flip();
    assert_eq!(flipped.from(), trailing.to());
}

#[test]
fn sorted_limits() {
    let mut arc = VertexArc::one_sided(point(0.0f32, 0.0), vector(1.0, 0.0));
    assert_eq!(arc.sorted_limits(), (-0.01, 0.01));
    arc.limits = [2.0, 0.0, -1.0];
    assert_eq!(arc.sorted_limits(), (-1.0, 2.0));
}

#[test]
fn one_sided_follows_the_chord() {
    let vertex = point(5.0f64, 5.0);
    let chord = vector(10.0, 0.0);
    let arc = VertexArc::one_sided(vertex, chord);

    // The trailing half runs from the vertex to the vertex plus the chord...
    let trailing = arc.trailing_half();
    assert!(trailing.from().approx_eq(&vertex));
    assert!(trailing.to().approx_eq(&(vertex + chord)));
    // ...and the leading half arrives at the vertex along the same chord.
    let leading = arc.leading_half();
    assert!(leading.from().approx_eq(&(vertex - chord)));
    assert!(leading.to().approx_eq(&vertex));

    // Nearly straight in between.
    let mid = trailing.sample(0.5);
    assert!((mid.y - 5.0).abs() < 1e-9);
    assert!((mid.x - 10.0).abs() < 1e-3);
}
