//! Circle through a vertex and its two neighbors.
//!
//! The perpendicular bisectors of two chords of a circle meet at its center.
//! The chords used here go from the predecessor to the vertex and from the
//! vertex to the successor.

use crate::arc::{ArcKind, VertexArc};
use crate::scalar::Scalar;
use crate::vector_math::{determinant, divide_by_scalar, dot, rotate90};
use crate::{next_index, previous_index, Point};

/// Angle, in radians, of the small arcs used in place of circles with no
/// usable curvature.
pub const SMALL_ANGLE: f64 = 0.01;

/// Below this magnitude the determinant of the two bisector directions is
/// considered zero (the chords are nearly parallel).
pub const NEAR_PARALLEL_THRESHOLD: f64 = 0.001;

#[inline]
pub(crate) fn small_angle<S: Scalar>() -> S {
    S::value(SMALL_ANGLE)
}

/// Computes the circle through `points[index]` and its two neighbors.
///
/// Neighbor indices wrap around the sequence. The returned arc has its vertex
/// at angle zero, the predecessor at `limits[0]` and the successor at
/// `limits[2]`, and the interval between them always contains zero.
///
/// When the chords are nearly parallel and do not fold back onto each other
/// (or when there are fewer than three points), there is no finite circle: a
/// small straight arc towards the successor is returned instead. When they
/// fold back, the determinant is clamped to `NEAR_PARALLEL_THRESHOLD` and the
/// resulting very large circle is used.
///
/// Panics if `index` is out of bounds.
pub fn circle_arc<S: Scalar>(points: &[Point<S>], index: usize) -> VertexArc<S> {
    let count = points.len();
    let j = previous_index(index, count);
    let k = next_index(index, count);

    let p = points[index];
    let pj = points[j];
    let pk = points[k];

    let vec1 = p - pj;
    let mid1 = pj + divide_by_scalar(vec1, S::TWO);
    let dir1 = rotate90(vec1);
    let vec2 = pk - p;
    let mid2 = p + divide_by_scalar(vec2, S::TWO);
    let dir2 = rotate90(vec2);

    let threshold = S::value(NEAR_PARALLEL_THRESHOLD);
    let mut det = determinant(dir1, dir2);
    if det.abs() < threshold {
        if dot(vec1, vec2) >= S::ZERO || count <= 2 {
            return small_arc(p, vec1.length(), vec2);
        }
        det = threshold;
    }

    let s = (dir2.y * (mid2.x - mid1.x) + dir2.x * (mid1.y - mid2.y)) / det;
    let center = mid1 + dir1 * s;
    let axis1 = p - center;
    let axis2 = rotate90(axis1);

    let angle_of = |to: Point<S>| {
        let v = to - center;
        S::atan2(dot(axis2, v), dot(axis1, v))
    };

    let mut limit1 = angle_of(pj);
    let mut limit2 = angle_of(pk);

    // Both neighbors on the same side of the vertex: move the one that is
    // farther away by a full turn so that the interval goes through zero.
    if limit1 * limit2 > S::ZERO {
        let turn = S::TWO * S::PI();
        if limit1.abs() < limit2.abs() {
            limit2 += if limit2 > S::ZERO { -turn } else { turn };
        }
        if limit1.abs() > limit2.abs() {
            limit1 += if limit1 > S::ZERO { -turn } else { turn };
        }
    }

    VertexArc {
        center,
        axis1,
        axis2,
        limits: [limit1, S::ZERO, limit2],
        kind: ArcKind::Circle,
    }
}

fn small_arc<S: Scalar>(vertex: Point<S>, incoming_length: S, outgoing: crate::Vector<S>) -> VertexArc<S> {
    let angle = small_angle::<S>();
    let outgoing_length = outgoing.length();
    // Coincident points would give 0/0 here.
    let ratio = if outgoing_length > S::ZERO {
        incoming_length / outgoing_length
    } else {
        S::ONE
    };

    VertexArc::straight(vertex, outgoing, angle, [-angle * ratio, S::ZERO, angle])
}

#[cfg(test)]
use crate::point;

#[cfg(test)]
fn assert_equidistant(points: &[Point<f64>], index: usize) {
    let count = points.len();
    let arc = circle_arc(points, index);
    let r0 = (points[index] - arc.center).length();
    let r1 = (points[previous_index(index, count)] - arc.center).length();
    let r2 = (points[next_index(index, count)] - arc.center).length();
    assert!((r0 - r1).abs() < 1e-9 * r0.max(1.0), "{r0} {r1}");
    assert!((r0 - r2).abs() < 1e-9 * r0.max(1.0), "{r0} {r2}");
}

#[test]
fn right_angle_circle() {
    let points = [point(0.0f64, 0.0), point(10.0, 0.0), point(10.0, 10.0)];
    let arc = circle_arc(&points, 1);

    assert_eq!(arc.kind, ArcKind::Circle);
    assert!((arc.center - point(5.0, 5.0)).length() < 1e-9);
    assert_equidistant(&points, 1);

    // Circle axes are orthogonal and of equal length.
    assert_eq!(dot(arc.axis1, arc.axis2), 0.0);
    assert_eq!(arc.axis1.length(), arc.axis2.length());

    // Vertex at zero, neighbors on either side.
    assert_eq!(arc.limits[1], 0.0);
    assert!(arc.limits[0] * arc.limits[2] < 0.0);
    assert!(arc.sample_angle(arc.limits[0]).approx_eq_eps(&points[0], &point(1e-9, 1e-9)));
    assert!(arc.sample_angle(arc.limits[2]).approx_eq_eps(&points[2], &point(1e-9, 1e-9)));
}

#[test]
fn equidistant_center() {
    let points = [
        point(150.0f64, 100.0),
        point(300.0, 150.0),
        point(400.0, 250.0),
        point(-20.0, 33.0),
        point(7.5, -80.0),
        point(651.0, 402.0),
    ];

    for i in 0..points.len() {
        assert_equidistant(&points, i);
        let arc = circle_arc(&points, i);
        let (lo, hi) = arc.sorted_limits();
        assert!(lo < 0.0 && hi > 0.0);
    }
}

#[test]
fn limits_straddle_the_vertex() {
    // The path goes past the successor and turns back: both neighbors are on
    // the same side of the vertex on the circle, one of them has to be moved
    // by a full turn.
    let points = [point(0.0f64, 0.0), point(2.0, 0.0), point(1.0, 1.0)];
    let arc = circle_arc(&points, 1);
    assert!((arc.center - point(1.0, 0.0)).length() < 1e-12);
    assert!((arc.limits[0] + core::f64::consts::PI).abs() < 1e-12);
    assert!((arc.limits[2] - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
    let (lo, hi) = arc.sorted_limits();
    assert!(lo < 0.0 && hi > 0.0);
    assert!(arc.sample_angle(arc.limits[0]).approx_eq_eps(&points[0], &point(1e-9, 1e-9)));
    assert!(arc.sample_angle(arc.limits[2]).approx_eq_eps(&points[2], &point(1e-9, 1e-9)));
}

#[test]
fn two_points() {
    let points = [point(0.0f64, 0.0), point(10.0, 0.0)];

    let arc = circle_arc(&points, 0);
    assert_eq!(arc.center, point(0.0, 0.0));
    assert_eq!(arc.axis1, crate::vector(0.0, 0.0));
    assert_eq!(arc.limits, [-0.01, 0.0, 0.01]);

    let arc = circle_arc(&points, 1);
    assert_eq!(arc.center, point(10.0, 0.0));
    assert_eq!(arc.axis1, crate::vector(0.0, 0.0));
    assert_eq!(arc.limits[2], 0.01);
}

#[test]
fn fallback_constants_are_exact() {
    assert_eq!(small_angle::<f64>(), 0.01);
    assert_eq!(small_angle::<f32>(), 0.01f32);
    assert_eq!(f64::value(NEAR_PARALLEL_THRESHOLD), 0.001);
    assert_eq!(f32::value(NEAR_PARALLEL_THRESHOLD), 0.001f32);
}

#[test]
fn single_point() {
    let points = [point(3.0f32, 4.0)];
    let arc = circle_arc(&points, 0);
    assert_eq!(arc.center, points[0]);
    assert_eq!(arc.limits, [-0.01, 0.0, 0.01]);
    assert_eq!(arc.sample_angle(0.005), points[0]);
}

#[test]
fn collinear_points() {
    let points = [point(0.0f64, 0.0), point(5.0, 0.0), point(10.0, 0.0)];
    let arc = circle_arc(&points, 1);

    assert_eq!(arc.center, points[1]);
    assert_eq!(arc.axis1, crate::vector(0.0, 0.0));
    assert_eq!(arc.limits[2], small_angle::<f64>());
    assert_eq!(arc.limits[0], -small_angle::<f64>());
    assert!(arc.trailing_half().to().approx_eq(&points[2]));
}

#[test]
fn reflex_chords_are_clamped() {
    // Going back on itself: the chords are parallel but point in opposite
    // directions, so the determinant is clamped rather than falling back.
    let points = [point(0.0f64, 0.0), point(10.0, 0.0), point(0.0, 0.0), point(-5.0, 3.0)];
    let arc = circle_arc(&points, 1);
    assert!(arc.center.x.is_finite() && arc.center.y.is_finite());
    assert!(arc.axis1.length() > 0.0);
}

#[cfg(test)]
use euclid::approxeq::ApproxEq;
