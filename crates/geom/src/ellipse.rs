//! Ellipse arc through a vertex and its two neighbors.
//!
//! Used in place of the circle when the latter turns more than a quarter-turn
//! on either side of the vertex. The ellipse passes through the vertex and
//! through the farther neighbor, which sits a quarter-turn away from the
//! vertex. The ratio of its axes is found with a fixed number of bisection
//! steps so that it also passes through the nearer neighbor.

use crate::arc::{ArcKind, VertexArc};
use crate::circle::small_angle;
use crate::scalar::Scalar;
use crate::vector_math::{determinant, divide_by_scalar, dot, scale, sub};
use crate::{next_index, previous_index, vector, Point};

/// Number of bisection steps when solving for the ellipse.
///
/// Each step halves the search interval, so the angle is known to within
/// `max_angle / 2^17` (better than 1e-4 radians).
pub const ELLIPSE_ITERATIONS: u32 = 16;

/// Computes an ellipse arc through `points[index]` and its two neighbors.
///
/// Neighbor indices wrap around the sequence. The vertex is at angle zero,
/// the farther neighbor at a quarter-turn and the nearer neighbor at an angle
/// of at most a quarter-turn on the other side, so both limits are within
/// `[-π/2, π/2]`.
///
/// With fewer than three points, a small straight arc towards the successor
/// is returned.
///
/// Panics if `index` is out of bounds.
pub fn ellipse_arc<S: Scalar>(points: &[Point<S>], index: usize) -> VertexArc<S> {
    let count = points.len();
    let j = previous_index(index, count);
    let k = next_index(index, count);

    let p = points[index];
    let vec1 = points[j] - p;
    let vec2 = points[k] - p;

    if count <= 2 {
        let angle = small_angle::<S>();
        let mut arc = VertexArc::straight(p, vec2, angle, [-angle, S::ZERO, angle]);
        arc.kind = ArcKind::Ellipse;
        return arc;
    }

    let len1 = vec1.length();
    let len2 = vec2.length();
    let cos_angle = (dot(vec1, vec2) / (len1 * len2)).max(-S::ONE).min(S::ONE);
    let max_angle = cos_angle.acos();

    let (far, near) = if len1 < len2 { (len2, len1) } else { (len1, len2) };

    let mut ang = max_angle * S::HALF;
    let mut step = max_angle * S::QUARTER;
    let (mut a, mut b, mut c) = (S::ZERO, S::ZERO, S::ZERO);
    for _ in 0..ELLIPSE_ITERATIONS {
        let theta = ang * S::HALF;
        let (sin_theta, cos_theta) = theta.sin_cos();
        a = far * sin_theta;
        b = far * cos_theta;
        let (sin_beta, cos_beta) = (max_angle - theta).sin_cos();
        c = near * sin_beta;
        let d = near * cos_beta;

        // Canonical ellipse equation evaluated at the near point.
        let x = S::ONE - d / b;
        let v = x * x + (c * c) / (a * a);
        if v > S::ONE {
            ang += step;
        } else {
            ang -= step;
        }
        step *= S::HALF;
    }

    let far_is_next = len1 < len2;
    let (vec, len, far_point) = if far_is_next {
        (vec2, len2, points[k])
    } else {
        (vec1, len1, points[j])
    };

    let dir = divide_by_scalar(vec, len);
    let cross = determinant(vec1, vec2);
    let perp = if (far_is_next && cross > S::ZERO) || (!far_is_next && cross < S::ZERO) {
        vector(dir.y, -dir.x)
    } else {
        vector(-dir.y, dir.x)
    };

    let along = b * b / len;
    let across = b * a / len;
    let axis1 = sub(scale(dir, -along), scale(perp, across));
    let center = p - axis1;
    let axis2 = far_point - center;

    let beta = (c / a).min(S::ONE).asin();
    let quarter = S::FRAC_PI_2();

    if far_is_next {
        VertexArc {
            center,
            axis1,
            axis2,
            limits: [-beta, S::ZERO, quarter],
            kind: ArcKind::Ellipse,
        }
    } else {
        VertexArc {
            center,
            axis1,
            axis2: -axis2,
            limits: [-quarter, S::ZERO, beta],
            kind: ArcKind::Ellipse,
        }
    }
}

#[cfg(test)]
use crate::point;
#[cfg(test)]
use core::f64::consts::FRAC_PI_2;

#[cfg(test)]
fn check_ellipse(points: &[Point<f64>], index: usize) -> VertexArc<f64> {
    let count = points.len();
    let arc = ellipse_arc(points, index);
    assert_eq!(arc.kind, ArcKind::Ellipse);

    let (lo, hi) = arc.sorted_limits();
    assert!(lo >= -FRAC_PI_2 && lo < 0.0, "{lo}");
    assert!(hi <= FRAC_PI_2 && hi > 0.0, "{hi}");

    // Goes through the vertex and the far neighbor exactly.
    let tolerance = 1e-9 * arc.axis1.length().max(arc.axis2.length());
    assert!((arc.sample_angle(0.0) - points[index]).length() < tolerance);

    let len1 = (points[previous_index(index, count)] - points[index]).length();
    let len2 = (points[next_index(index, count)] - points[index]).length();
    if len1 < len2 {
        assert_eq!(arc.limits[2], FRAC_PI_2);
        let far = points[next_index(index, count)];
        assert!((arc.sample_angle(FRAC_PI_2) - far).length() < tolerance);
    } else {
        assert_eq!(arc.limits[0], -FRAC_PI_2);
        let far = points[previous_index(index, count)];
        assert!((arc.sample_angle(-FRAC_PI_2) - far).length() < tolerance);
    }

    arc
}

#[test]
fn sharp_turn_far_successor() {
    let points = [point(0.0f64, 0.0), point(10.0, 0.0), point(-5.0, 2.0)];
    let arc = check_ellipse(&points, 1);

    // The near neighbor is reached at the other limit, up to the precision
    // of the bisection.
    let near = arc.sample_angle(arc.limits[0]);
    assert!((near - points[0]).length() < 0.05, "{near:?}");
}

#[test]
fn sharp_turn_far_predecessor() {
    let points = [point(-5.0f64, 2.0), point(10.0, 0.0), point(0.0, 0.0)];
    let arc = check_ellipse(&points, 1);

    let near = arc.sample_angle(arc.limits[2]);
    assert!((near - points[2]).length() < 0.05, "{near:?}");
}

#[test]
fn both_orientations() {
    // Mirror images of each other must produce mirrored ellipses.
    let a = [point(0.0f64, 0.0), point(10.0, 0.0), point(-5.0, 2.0)];
    let b = [point(0.0f64, 0.0), point(10.0, 0.0), point(-5.0, -2.0)];
    let arc_a = check_ellipse(&a, 1);
    let arc_b = check_ellipse(&b, 1);

    assert!((arc_a.center.x - arc_b.center.x).abs() < 1e-9);
    assert!((arc_a.center.y + arc_b.center.y).abs() < 1e-9);
    assert_eq!(arc_a.limits, arc_b.limits);
}

#[test]
fn wrap_around_neighbors() {
    let points = [point(10.0f64, 0.0), point(-5.0, 2.0), point(-3.0, 0.5), point(0.0, 0.0)];
    check_ellipse(&points, 0);
}

#[test]
fn degenerate_two_points() {
    let points = [point(0.0f64, 0.0), point(10.0, 0.0)];
    let arc = ellipse_arc(&points, 0);
    assert_eq!(arc.kind, ArcKind::Ellipse);
    assert_eq!(arc.center, points[0]);
    assert_eq!(arc.axis1, vector(0.0, 0.0));
    assert_eq!(arc.limits, [-small_angle::<f64>(), 0.0, small_angle::<f64>()]);
}

#[test]
fn degenerate_single_point() {
    let points = [point(1.0f32, 1.0)];
    let arc = ellipse_arc(&points, 0);
    assert_eq!(arc.center, points[0]);
    assert_eq!(arc.limits, [-0.01, 0.0, 0.01]);
}
