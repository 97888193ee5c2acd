use crate::geom::{blend, blend_weight, HalfArc, VertexArc};
use crate::math::{point, vector, Point};
use crate::Color;

use alloc::vec::Vec;

/// The parameters of one span, laid out for a renderer that evaluates the
/// curve itself (for example as shader uniforms, with the blend parameters
/// from [`parametric_positions`] as per-vertex input).
///
/// The first half arc is the trailing half of the arc at the start of the
/// span and the second half arc is the leading half of the arc at its end.
/// The point on a half arc at `t` is
/// `center + axes[0..2] * cos(θ) + axes[2..4] * sin(θ)` with
/// `θ = limits[0] + t * (limits[1] - limits[0])`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct SegmentParameters {
    pub limits1: [f32; 2],
    pub center1: [f32; 2],
    pub axes1: [f32; 4],
    pub limits2: [f32; 2],
    pub center2: [f32; 2],
    pub axes2: [f32; 4],
    pub color1: [f32; 3],
    pub color2: [f32; 3],
}

impl SegmentParameters {
    /// Packs the trailing half of `first` and the leading half of `second`.
    pub fn new(first: &VertexArc<f32>, color1: Color, second: &VertexArc<f32>, color2: Color) -> Self {
        let trailing = first.trailing_half();
        let leading = second.leading_half();
        SegmentParameters {
            limits1: [trailing.from, trailing.to],
            center1: trailing.center.to_array(),
            axes1: [trailing.axis1.x, trailing.axis1.y, trailing.axis2.x, trailing.axis2.y],
            limits2: [leading.from, leading.to],
            center2: leading.center.to_array(),
            axes2: [leading.axis1.x, leading.axis1.y, leading.axis2.x, leading.axis2.y],
            color1: color1.to_array(),
            color2: color2.to_array(),
        }
    }

    /// The first half arc of the span.
    pub fn first_half(&self) -> HalfArc<f32> {
        half_arc(self.center1, self.axes1, self.limits1)
    }

    /// The second half arc of the span.
    pub fn second_half(&self) -> HalfArc<f32> {
        half_arc(self.center2, self.axes2, self.limits2)
    }

    /// Position on the span at `t` (expecting t between 0 and 1).
    pub fn sample(&self, t: f32) -> Point {
        blend(t, &self.first_half(), &self.second_half())
    }

    /// Color on the span at `t` (expecting t between 0 and 1).
    pub fn color(&self, t: f32) -> Color {
        let [r1, g1, b1] = self.color1;
        let [r2, g2, b2] = self.color2;
        Color::rgb(r1, g1, b1).mix(Color::rgb(r2, g2, b2), blend_weight(t))
    }
}

fn half_arc(center: [f32; 2], axes: [f32; 4], limits: [f32; 2]) -> HalfArc<f32> {
    HalfArc {
        center: point(center[0], center[1]),
        axis1: vector(axes[0], axes[1]),
        axis2: vector(axes[2], axes[3]),
        from: limits[0],
        to: limits[1],
    }
}

/// The `segments + 1` evenly spaced blend parameters from 0 to 1 (both
/// included) at which each span is sampled.
pub fn parametric_positions(segments: u32) -> Vec<f32> {
    if segments == 0 {
        return Vec::new();
    }

    let mut positions = Vec::with_capacity(segments as usize + 1);
    for i in 0..=segments {
        positions.push(i as f32 / segments as f32);
    }

    positions
}

#[test]
fn positions() {
    assert!(parametric_positions(0).is_empty());
    assert_eq!(parametric_positions(1), &[0.0, 1.0]);
    assert_eq!(parametric_positions(4), &[0.0, 0.25, 0.5, 0.75, 1.0]);

    let positions = parametric_positions(128);
    assert_eq!(positions.len(), 129);
    assert_eq!(positions[0], 0.0);
    assert_eq!(positions[128], 1.0);
}

#[test]
fn packed_arcs_sample_like_the_vertex_arcs() {
    use crate::geom::ArcKind;

    let first = VertexArc {
        center: point(0.0, 0.0),
        axis1: vector(0.0, -10.0),
        axis2: vector(10.0, 0.0),
        limits: [-1.0, 0.0, 1.5],
        kind: ArcKind::Circle,
    };
    let second = VertexArc {
        center: point(12.0, 3.0),
        axis1: vector(0.0, 8.0),
        axis2: vector(-2.0, 5.0),
        limits: [-1.2, 0.0, 0.4],
        kind: ArcKind::Ellipse,
    };

    let params = SegmentParameters::new(&first, Color::CIRCLE, &second, Color::ELLIPSE);
    assert_eq!(params.first_half(), first.trailing_half());
    assert_eq!(params.second_half(), second.leading_half());

    for i in 0..=10 {
        let t = i as f32 / 10.0;
        assert_eq!(
            params.sample(t),
            blend(t, &first.trailing_half(), &second.leading_half())
        );
    }

    assert_eq!(params.sample(0.0), first.vertex());
    assert_eq!(params.sample(1.0), second.vertex());
    assert_eq!(params.color(0.0), Color::CIRCLE);
    assert_eq!(params.color(1.0), Color::ELLIPSE);
    assert_eq!(params.color1, [1.0, 0.0, 0.0]);
    assert_eq!(params.color2, [0.0, 0.0, 1.0]);
}
