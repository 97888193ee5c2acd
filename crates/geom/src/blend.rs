//! Blending of two half arcs into one span.
//!
//! The span between two adjacent vertices follows the trailing half of the
//! first vertex arc at the start and the leading half of the second vertex
//! arc at the end. In between, positions on both halves are mixed with an
//! eased weight `sin²(π/2·t)` which has a zero derivative at both ends.

use crate::arc::HalfArc;
use crate::scalar::Scalar;
use crate::Point;

/// Weight of the second arc at `t`.
///
/// Exactly zero at `t = 0` and exactly one at `t = 1`. The weight of the
/// first arc is `1 - blend_weight(t)`, which is `cos²(π/2·t)`.
#[inline]
pub fn blend_weight<S: Scalar>(t: S) -> S {
    if t >= S::ONE {
        return S::ONE;
    }
    let s = (S::FRAC_PI_2() * t).sin();
    s * s
}

/// Position on the span at `t` (expecting t between 0 and 1).
///
/// At `t = 0` this is exactly `trailing.from()` and at `t = 1` exactly
/// `leading.to()`.
pub fn blend<S: Scalar>(t: S, trailing: &HalfArc<S>, leading: &HalfArc<S>) -> Point<S> {
    let p1 = trailing.sample(t);
    let p2 = leading.sample(t);
    let w = blend_weight(t);
    let w1 = S::ONE - w;

    Point::new(w * p2.x + w1 * p1.x, w * p2.y + w1 * p1.y)
}

#[cfg(test)]
use crate::{point, vector, ArcKind, VertexArc};
#[cfg(test)]
use euclid::approxeq::ApproxEq;

#[cfg(test)]
fn arcs() -> (HalfArc<f64>, HalfArc<f64>) {
    use core::f64::consts::FRAC_PI_2;

    let a = VertexArc {
        center: point(0.0, 0.0),
        axis1: vector(0.0, -10.0),
        axis2: vector(10.0, 0.0),
        limits: [-FRAC_PI_2, 0.0, FRAC_PI_2],
        kind: ArcKind::Circle,
    };
    let b = VertexArc {
        center: point(10.0, 0.0),
        axis1: vector(0.0, 10.0),
        axis2: vector(3.0, 4.0),
        limits: [-1.2, 0.0, 0.3],
        kind: ArcKind::Ellipse,
    };

    (a.trailing_half(), b.leading_half())
}

#[test]
fn weights() {
    assert_eq!(blend_weight(0.0f32), 0.0);
    assert_eq!(blend_weight(1.0f32), 1.0);
    assert_eq!(blend_weight(0.0f64), 0.0);
    assert_eq!(blend_weight(1.0f64), 1.0);
    assert!((blend_weight(0.5f64) - 0.5).abs() < 1e-12);

    // cos² + sin² = 1
    for i in 0..=10 {
        let t = i as f64 / 10.0;
        let c = (core::f64::consts::FRAC_PI_2 * t).cos();
        assert!((1.0 - blend_weight(t) - c * c).abs() < 1e-12);
    }

    // Monotonic.
    let mut prev = 0.0f32;
    for i in 1..=100 {
        let w = blend_weight(i as f32 / 100.0);
        assert!(w >= prev);
        prev = w;
    }
}

#[test]
fn endpoints_are_exact() {
    let (trailing, leading) = arcs();

    assert_eq!(blend(0.0, &trailing, &leading), trailing.from());
    assert_eq!(blend(1.0, &trailing, &leading), leading.to());
    assert_eq!(blend(1.0, &trailing, &leading), point(10.0, 10.0));
}

#[test]
fn between_the_arcs() {
    let (trailing, leading) = arcs();

    let mid = blend(0.5, &trailing, &leading);
    let expected = trailing.sample(0.5).lerp(leading.sample(0.5), 0.5);
    assert!(mid.approx_eq(&expected));
}
