use crate::geom::{blend, blend_weight, next_index, vertex_arc, ArcKind, VertexArc};
use crate::geometry_builder::{simple_builder, CurveGeometryBuilder, VertexBuffers};
use crate::math::Point;
use crate::parameters::SegmentParameters;
use crate::{
    CurveOptions, CurveVertex, EndMode, Span, TessellationError, TessellationResult,
    UnsupportedParameter, VertexId,
};

use alloc::vec::Vec;
use core::ops::Range;

/// A tessellator for smooth curves through a sequence of points.
///
/// An arc is fitted at each point (a circle through the point and its
/// neighbors, or an ellipse where the circle would turn too much) and the
/// spans between adjacent points are obtained by blending the arcs at both
/// ends of the span. Each span is sampled `segments_per_span + 1` times and
/// the samples are connected with lines.
///
/// The tessellator keeps its internal allocations between calls, so it is
/// worth reusing it when tessellating several curves.
///
/// # Examples
///
/// ```
/// # extern crate arcblend_tessellation as arcblend;
/// # use arcblend::math::{Point, point};
/// # use arcblend::geometry_builder::{VertexBuffers, simple_builder};
/// # use arcblend::*;
/// # fn main() {
/// let points = [
///     point(0.0, 0.0),
///     point(100.0, 0.0),
///     point(100.0, 100.0),
///     point(0.0, 100.0),
/// ];
///
/// let mut buffers: VertexBuffers<Point, u32> = VertexBuffers::new();
///
/// {
///     let mut vertex_builder = simple_builder(&mut buffers);
///
///     let mut tessellator = CurveTessellator::new();
///
///     let result = tessellator.tessellate(
///         &points,
///         &CurveOptions::segments(32),
///         &mut vertex_builder,
///     );
///
///     assert!(result.is_ok());
/// }
///
/// // Four spans forming a closed loop.
/// assert_eq!(buffers.vertices.len(), 4 * 32);
/// assert_eq!(buffers.indices.len(), 4 * 32 * 2);
/// # }
/// ```
#[derive(Default)]
pub struct CurveTessellator {
    arcs: Vec<VertexArc<f32>>,
}

impl CurveTessellator {
    pub fn new() -> Self {
        CurveTessellator { arcs: Vec::new() }
    }

    /// Compute the tessellation of a point sequence.
    ///
    /// Fewer than two points (or fewer than four with `EndMode::HideEnds`)
    /// produce no geometry and no error.
    pub fn tessellate(
        &mut self,
        points: &[Point],
        options: &CurveOptions,
        output: &mut dyn CurveGeometryBuilder,
    ) -> TessellationResult {
        validate(points, options)?;
        self.compute_arcs(points, options.end_mode);

        output.begin_geometry();

        match self.tessellate_impl(points.len(), options, output) {
            Ok(num_vertices) => {
                output.end_geometry();
                log::debug!(
                    "tessellated {} points into {} spans and {} vertices",
                    points.len(),
                    spans(points.len(), options.end_mode).len(),
                    num_vertices,
                );
                Ok(())
            }
            Err(e) => {
                output.abort_geometry();
                Err(e)
            }
        }
    }

    /// Compute the tessellation of a point sequence into a list of positions.
    ///
    /// The positions are in curve order. With `EndMode::JoinEnds` the first
    /// position is repeated at the end so that the list can be drawn as a
    /// line strip.
    pub fn tessellate_polyline(
        &mut self,
        points: &[Point],
        options: &CurveOptions,
    ) -> Result<Vec<Point>, TessellationError> {
        let mut buffers: VertexBuffers<Point, u32> = VertexBuffers::with_capacity(
            spans(points.len(), options.end_mode).len() * options.segments_per_span as usize + 1,
            0,
        );

        self.tessellate(points, options, &mut simple_builder(&mut buffers))?;

        let mut polyline = buffers.vertices;
        if options.end_mode.is_closed() {
            if let Some(&first) = polyline.first() {
                polyline.push(first);
            }
        }

        Ok(polyline)
    }

    /// Computes the parameters of each span, in curve order.
    pub fn segment_parameters(
        &mut self,
        points: &[Point],
        options: &CurveOptions,
    ) -> Result<Vec<SegmentParameters>, TessellationError> {
        validate(points, options)?;
        self.compute_arcs(points, options.end_mode);

        let count = points.len();
        let color_mode = options.color_mode;
        let params = spans(count, options.end_mode)
            .map(|i| {
                let first = &self.arcs[i];
                let second = &self.arcs[next_index(i, count)];
                SegmentParameters::new(
                    first,
                    color_mode.arc_color(first.kind),
                    second,
                    color_mode.arc_color(second.kind),
                )
            })
            .collect();

        Ok(params)
    }

    fn compute_arcs(&mut self, points: &[Point], end_mode: EndMode) {
        let count = points.len();
        self.arcs.clear();
        self.arcs.reserve(count);

        let open = !end_mode.is_closed() && count >= 2;
        for i in 0..count {
            let arc = if open && i == 0 {
                VertexArc::one_sided(points[0], points[1] - points[0])
            } else if open && i == count - 1 {
                VertexArc::one_sided(points[i], points[i] - points[i - 1])
            } else {
                vertex_arc(points, i)
            };

            if arc.kind == ArcKind::Ellipse {
                log::debug!("vertex {} uses an ellipse arc", i);
            }

            self.arcs.push(arc);
        }
    }

    fn tessellate_impl(
        &self,
        count: usize,
        options: &CurveOptions,
        output: &mut dyn CurveGeometryBuilder,
    ) -> Result<u32, TessellationError> {
        let segments = options.segments_per_span;
        let color_mode = options.color_mode;
        let closed = options.end_mode.is_closed();
        let spans = spans(count, options.end_mode);
        let last_span = spans.end.saturating_sub(1);

        let mut first_vertex = VertexId::INVALID;
        let mut previous = VertexId::INVALID;
        let mut num_vertices = 0;

        for i in spans {
            let k = next_index(i, count);
            let (from, to) = (&self.arcs[i], &self.arcs[k]);
            let trailing = from.trailing_half();
            let leading = to.leading_half();
            let color1 = color_mode.arc_color(from.kind);
            let color2 = color_mode.arc_color(to.kind);
            let span = Span { from: i, to: k };

            log::trace!(
                "span {} -> {}: {:?} to {:?}, limits {:?} / {:?}",
                i,
                k,
                from.kind,
                to.kind,
                from.limits,
                to.limits,
            );

            // The first sample of a span is the last sample of the previous one.
            let first_step = if previous == VertexId::INVALID { 0 } else { 1 };
            for step in first_step..=segments {
                if closed && i == last_span && step == segments {
                    output.add_line(previous, first_vertex);
                    break;
                }

                let t = step as f32 / segments as f32;
                let id = output.add_curve_vertex(CurveVertex {
                    position: blend(t, &trailing, &leading),
                    color: color1.mix(color2, blend_weight(t)),
                    span,
                    t,
                })?;
                num_vertices += 1;

                if previous == VertexId::INVALID {
                    first_vertex = id;
                } else {
                    output.add_line(previous, id);
                }
                previous = id;
            }
        }

        Ok(num_vertices)
    }
}

fn validate(points: &[Point], options: &CurveOptions) -> Result<(), UnsupportedParameter> {
    if options.segments_per_span == 0 {
        return Err(UnsupportedParameter::ZeroSegments);
    }

    for p in points {
        if !p.x.is_finite() || !p.y.is_finite() {
            return Err(UnsupportedParameter::PositionIsNaN);
        }
    }

    Ok(())
}

/// Indices of the points the spans start at.
fn spans(count: usize, end_mode: EndMode) -> Range<usize> {
    if count < 2 {
        return 0..0;
    }

    match end_mode {
        EndMode::JoinEnds => 0..count,
        EndMode::ShowEnds => 0..(count - 1),
        EndMode::HideEnds if count >= 4 => 1..(count - 2),
        EndMode::HideEnds => 0..0,
    }
}

#[cfg(test)]
use crate::geometry_builder::{BuffersBuilder, GeometryBuilderError, NoOutput};
#[cfg(test)]
use crate::math::point;
#[cfg(test)]
use crate::{Color, ColorMode};
#[cfg(test)]
use std::vec;

#[cfg(test)]
fn shape() -> Vec<Point> {
    vec![
        point(0.0, 0.0),
        point(100.0, 0.0),
        point(130.0, 60.0),
        point(90.0, 120.0),
        point(20.0, 90.0),
        point(-10.0, 40.0),
    ]
}

#[cfg(test)]
fn count_geometry(points: &[Point], options: &CurveOptions) -> (u32, u32) {
    let mut output = NoOutput::new();
    CurveTessellator::new()
        .tessellate(points, options, &mut output)
        .unwrap();

    (output.num_vertices(), output.num_lines())
}

#[test]
fn span_counts() {
    let points = shape();
    let n = 10;

    let joined = CurveOptions::segments(n).with_end_mode(EndMode::JoinEnds);
    assert_eq!(count_geometry(&points, &joined), (6 * n, 6 * n));

    let shown = CurveOptions::segments(n).with_end_mode(EndMode::ShowEnds);
    assert_eq!(count_geometry(&points, &shown), (5 * n + 1, 5 * n));

    let hidden = CurveOptions::segments(n).with_end_mode(EndMode::HideEnds);
    assert_eq!(count_geometry(&points, &hidden), (3 * n + 1, 3 * n));
}

#[test]
fn degenerate_sequences() {
    let options = CurveOptions::segments(8);
    for &end_mode in &[EndMode::JoinEnds, EndMode::ShowEnds, EndMode::HideEnds] {
        let options = options.with_end_mode(end_mode);
        assert_eq!(count_geometry(&[], &options), (0, 0));
        assert_eq!(count_geometry(&[point(1.0, 2.0)], &options), (0, 0));
    }

    let two = [point(0.0, 0.0), point(10.0, 0.0)];
    let joined = options.with_end_mode(EndMode::JoinEnds);
    assert_eq!(count_geometry(&two, &joined), (16, 16));
    let shown = options.with_end_mode(EndMode::ShowEnds);
    assert_eq!(count_geometry(&two, &shown), (9, 8));
    let hidden = options.with_end_mode(EndMode::HideEnds);
    assert_eq!(count_geometry(&two, &hidden), (0, 0));

    let three = [point(0.0, 0.0), point(10.0, 0.0), point(10.0, 10.0)];
    assert_eq!(count_geometry(&three, &hidden), (0, 0));

    let polyline = CurveTessellator::new()
        .tessellate_polyline(&two, &shown)
        .unwrap();
    for p in &polyline {
        assert!(p.x.is_finite() && p.y.is_finite());
        assert!(p.y.abs() < 1e-3);
    }
    assert_eq!(polyline[0], two[0]);
    assert_eq!(polyline[8], two[1]);
}

#[test]
fn passes_through_every_point() {
    let points = shape();
    let options = CurveOptions::segments(16);
    let polyline = CurveTessellator::new()
        .tessellate_polyline(&points, &options)
        .unwrap();

    assert_eq!(polyline.len(), 6 * 16 + 1);
    assert_eq!(polyline[0], polyline[6 * 16]);
    for (i, p) in points.iter().enumerate() {
        assert!((polyline[i * 16] - *p).length() < 1e-3);
    }
}

#[test]
fn continuity_across_spans() {
    let points = shape();
    let options = CurveOptions::segments(16);
    let params = CurveTessellator::new()
        .segment_parameters(&points, &options)
        .unwrap();

    assert_eq!(params.len(), points.len());
    for i in 0..params.len() {
        let next = &params[(i + 1) % params.len()];
        assert_eq!(params[i].sample(1.0), next.sample(0.0));
    }
}

#[test]
fn parameters_match_the_polyline() {
    let points = shape();
    for &end_mode in &[EndMode::JoinEnds, EndMode::ShowEnds, EndMode::HideEnds] {
        let n = 12;
        let options = CurveOptions::segments(n).with_end_mode(end_mode);
        let mut tessellator = CurveTessellator::new();
        let params = tessellator.segment_parameters(&points, &options).unwrap();
        let polyline = tessellator.tessellate_polyline(&points, &options).unwrap();

        assert_eq!(polyline.len(), params.len() * n as usize + 1);
        for (s, span) in params.iter().enumerate() {
            for step in 0..=n {
                let t = step as f32 / n as f32;
                let expected = polyline[s * n as usize + step as usize];
                assert_eq!(span.sample(t), expected);
            }
        }
    }
}

#[test]
fn colors() {
    // The sharp turn at the third point needs an ellipse.
    let points = [
        point(0.0, 0.0),
        point(50.0, 5.0),
        point(100.0, 0.0),
        point(20.0, 10.0),
        point(-30.0, 30.0),
    ];
    let n = 8;

    let mut colors = Vec::new();
    let mut buffers: VertexBuffers<Color, u16> = VertexBuffers::new();
    let options = CurveOptions::segments(n).with_end_mode(EndMode::ShowEnds);
    CurveTessellator::new()
        .tessellate(
            &points,
            &options,
            &mut BuffersBuilder::new(&mut buffers, |v: CurveVertex| v.color()),
        )
        .unwrap();
    colors.extend_from_slice(&buffers.vertices);

    // Span 1 goes from a circle to the ellipse, span 2 from the ellipse to a circle.
    assert_eq!(colors[n as usize], Color::CIRCLE);
    assert_eq!(colors[2 * n as usize], Color::ELLIPSE);
    assert_eq!(colors[3 * n as usize], Color::CIRCLE);
    let halfway = colors[n as usize + n as usize / 2];
    assert!((halfway.r - 0.5).abs() < 1e-5);
    assert!((halfway.b - 0.5).abs() < 1e-5);

    buffers.clear();
    CurveTessellator::new()
        .tessellate(
            &points,
            &options.with_color_mode(ColorMode::Neutral),
            &mut BuffersBuilder::new(&mut buffers, |v: CurveVertex| v.color()),
        )
        .unwrap();
    for color in &buffers.vertices {
        assert_eq!(*color, Color::NEUTRAL);
    }
}

#[test]
fn vertex_attributes() {
    let points = shape();
    let n = 4;
    let mut buffers: VertexBuffers<CurveVertex, u32> = VertexBuffers::new();
    CurveTessellator::new()
        .tessellate(
            &points,
            &CurveOptions::segments(n).with_end_mode(EndMode::ShowEnds),
            &mut BuffersBuilder::new(&mut buffers, |v: CurveVertex| v),
        )
        .unwrap();

    let vertices = &buffers.vertices;
    assert_eq!(vertices[0].span(), Span { from: 0, to: 1 });
    assert_eq!(vertices[0].t(), 0.0);
    assert_eq!(vertices[1].t(), 0.25);
    // Shared vertices report the span they end.
    assert_eq!(vertices[4].span(), Span { from: 0, to: 1 });
    assert_eq!(vertices[4].t(), 1.0);
    assert_eq!(vertices[5].span(), Span { from: 1, to: 2 });
    assert_eq!(vertices[5].t(), 0.25);
    assert_eq!(vertices.len(), 5 * 4 + 1);
    let last = vertices[vertices.len() - 1];
    assert_eq!(last.span(), Span { from: 4, to: 5 });
    assert_eq!(last.t(), 1.0);
    assert_eq!(last.position(), points[5]);

    // Lines connect consecutive vertices.
    for (i, line) in buffers.indices.chunks(2).enumerate() {
        assert_eq!(line, &[i as u32, i as u32 + 1]);
    }
}

#[test]
fn invalid_parameters() {
    let mut tessellator = CurveTessellator::new();
    let mut output = NoOutput::new();

    assert_eq!(
        tessellator.tessellate(&shape(), &CurveOptions::segments(0), &mut output),
        Err(TessellationError::UnsupportedParameter(
            UnsupportedParameter::ZeroSegments
        ))
    );

    let mut points = shape();
    points[2].y = f32::NAN;
    assert_eq!(
        tessellator.tessellate(&points, &CurveOptions::DEFAULT, &mut output),
        Err(TessellationError::UnsupportedParameter(
            UnsupportedParameter::PositionIsNaN
        ))
    );

    points[2].y = f32::INFINITY;
    assert!(tessellator
        .segment_parameters(&points, &CurveOptions::DEFAULT)
        .is_err());
}

#[test]
fn abort_on_builder_error() {
    let mut buffers: VertexBuffers<Point, u16> = VertexBuffers::new();
    buffers.vertices.push(point(1.0, 1.0));
    buffers.indices.extend_from_slice(&[0, 0]);

    // 6 spans of 20000 segments do not fit in u16 indices.
    let result = CurveTessellator::new().tessellate(
        &shape(),
        &CurveOptions::segments(20000),
        &mut BuffersBuilder::new(&mut buffers, crate::Positions),
    );

    assert_eq!(
        result,
        Err(TessellationError::GeometryBuilder(
            GeometryBuilderError::TooManyVertices
        ))
    );
    // The existing content is preserved.
    assert_eq!(buffers.vertices.len(), 1);
    assert_eq!(buffers.indices.len(), 2);
}

#[test]
fn reuse_the_tessellator() {
    let mut tessellator = CurveTessellator::new();
    let a = tessellator
        .tessellate_polyline(&shape(), &CurveOptions::segments(8))
        .unwrap();
    let _ = tessellator
        .tessellate_polyline(&[point(0.0, 0.0), point(3.0, 4.0)], &CurveOptions::segments(3))
        .unwrap();
    let b = tessellator
        .tessellate_polyline(&shape(), &CurveOptions::segments(8))
        .unwrap();

    assert_eq!(a, b);
}
