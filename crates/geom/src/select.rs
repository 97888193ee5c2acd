//! Choice between the circle and the ellipse at each vertex.

use crate::arc::VertexArc;
use crate::circle::circle_arc;
use crate::ellipse::ellipse_arc;
use crate::scalar::Scalar;
use crate::Point;

/// Returns true if the arc reaches further than a quarter-turn on either side
/// of its vertex.
#[inline]
pub fn needs_ellipse<S: Scalar>(arc: &VertexArc<S>) -> bool {
    let (lo, hi) = arc.sorted_limits();
    let quarter = S::FRAC_PI_2();
    lo < -quarter || hi > quarter
}

/// Computes the arc used at `points[index]`.
///
/// This is the circle through the vertex and its neighbors unless that circle
/// spans more than a quarter-turn on either side of the vertex, in which case
/// the ellipse is computed instead.
pub fn vertex_arc<S: Scalar>(points: &[Point<S>], index: usize) -> VertexArc<S> {
    let circle = circle_arc(points, index);
    if needs_ellipse(&circle) {
        return ellipse_arc(points, index);
    }

    circle
}

#[cfg(test)]
use crate::{point, ArcKind};

#[test]
fn gentle_turns_use_circles() {
    let points = [
        point(0.0f64, 0.0),
        point(10.0, -1.0),
        point(18.0, 3.0),
        point(20.0, 12.0),
    ];

    for i in 1..3 {
        let circle = circle_arc(&points, i);
        assert!(!needs_ellipse(&circle));
        assert_eq!(vertex_arc(&points, i), circle);
    }
}

#[test]
fn sharp_turn_uses_ellipse() {
    // Near reversal at the middle vertex.
    let points = [point(0.0f64, 0.0), point(10.0, 0.0), point(-5.0, 2.0)];
    assert!(needs_ellipse(&circle_arc(&points, 1)));

    let arc = vertex_arc(&points, 1);
    assert_eq!(arc.kind, ArcKind::Ellipse);
    let (lo, hi) = arc.sorted_limits();
    assert!(lo.abs() <= core::f64::consts::FRAC_PI_2);
    assert!(hi.abs() <= core::f64::consts::FRAC_PI_2);
}

#[test]
fn never_selects_ellipse_within_a_quarter_turn() {
    // A regular polygon with many sides only turns a little at each vertex.
    let n = 12;
    let points: std::vec::Vec<_> = (0..n)
        .map(|i| {
            let angle = i as f64 / n as f64 * core::f64::consts::PI * 2.0;
            point(100.0 * angle.cos(), 100.0 * angle.sin())
        })
        .collect();

    for i in 0..n {
        let arc = vertex_arc(&points, i);
        assert_eq!(arc.kind, ArcKind::Circle);
        assert!((arc.center - point(0.0, 0.0)).length() < 1e-9);
    }
}

#[test]
fn degenerate_sequences() {
    let one = [point(1.0f32, 2.0)];
    let arc = vertex_arc(&one, 0);
    assert_eq!(arc.limits, [-0.01, 0.0, 0.01]);

    let two = [point(0.0f32, 0.0), point(10.0, 0.0)];
    for i in 0..2 {
        let arc = vertex_arc(&two, i);
        assert_eq!(arc.kind, ArcKind::Circle);
        assert_eq!(arc.center, two[i]);
        assert_eq!(arc.limits[2], 0.01);
    }
}
