//! Primitive 2D vector operations used by the arc solvers.
//!
//! These are thin wrappers over euclid's operators, named after the
//! operations the solvers are written in terms of.

use crate::scalar::Scalar;
use crate::{vector, Vector};

#[inline]
pub fn add<S: Scalar>(a: Vector<S>, b: Vector<S>) -> Vector<S> {
    a + b
}

#[inline]
pub fn sub<S: Scalar>(a: Vector<S>, b: Vector<S>) -> Vector<S> {
    a - b
}

#[inline]
pub fn scale<S: Scalar>(v: Vector<S>, factor: S) -> Vector<S> {
    v * factor
}

/// Divides each component by `divisor`.
///
/// Dividing by zero is the caller's responsibility to avoid.
#[inline]
pub fn divide_by_scalar<S: Scalar>(v: Vector<S>, divisor: S) -> Vector<S> {
    v / divisor
}

#[inline]
pub fn dot<S: Scalar>(a: Vector<S>, b: Vector<S>) -> S {
    a.x * b.x + a.y * b.y
}

/// The 2D cross product `a.x * b.y - a.y * b.x`.
#[inline]
pub fn determinant<S: Scalar>(a: Vector<S>, b: Vector<S>) -> S {
    a.x * b.y - a.y * b.x
}

/// Rotates by a quarter-turn: `(x, y) -> (-y, x)`.
#[inline]
pub fn rotate90<S: Scalar>(v: Vector<S>) -> Vector<S> {
    vector(-v.y, v.x)
}

#[test]
fn basic_operations() {
    let a = vector(1.0f32, 2.0);
    let b = vector(3.0f32, -1.0);

    assert_eq!(add(a, b), vector(4.0, 1.0));
    assert_eq!(sub(a, b), vector(-2.0, 3.0));
    assert_eq!(scale(a, 2.0), vector(2.0, 4.0));
    assert_eq!(divide_by_scalar(a, 2.0), vector(0.5, 1.0));
    assert_eq!(dot(a, b), 1.0);
    assert_eq!(determinant(a, b), -7.0);
    assert_eq!(rotate90(a), vector(-2.0, 1.0));
}

#[test]
fn rotation_is_orthogonal() {
    let v = vector(3.5f64, -7.25);
    let r = rotate90(v);
    assert_eq!(dot(v, r), 0.0);
    assert_eq!(determinant(v, r), v.square_length());
    assert_eq!(rotate90(rotate90(v)), -v);
}
