use crate::commands::{CommandError, CurveCmd, SvgCmd};

use arcblend::math::Point;
use arcblend::tessellation::geometry_builder::{BuffersBuilder, VertexBuffers};
use arcblend::tessellation::{Color, ColorMode, CurveTessellator, CurveVertex};
use std::io;

pub fn svg(mut curve: CurveCmd, cmd: SvgCmd) -> Result<(), CommandError> {
    let mut buffers: VertexBuffers<CurveVertex, u32> = VertexBuffers::new();
    CurveTessellator::new().tessellate(
        &curve.points,
        &curve.options,
        &mut BuffersBuilder::new(&mut buffers, |vertex: CurveVertex| vertex),
    )?;

    log::debug!(
        "writing {} vertices and {} lines",
        buffers.vertices.len(),
        buffers.indices.len() / 2
    );

    write_svg(
        &mut *curve.output,
        &curve.points,
        &buffers,
        curve.options.color_mode,
        &cmd,
    )?;

    Ok(())
}

fn write_svg(
    output: &mut dyn io::Write,
    points: &[Point],
    curve: &VertexBuffers<CurveVertex, u32>,
    color_mode: ColorMode,
    cmd: &SvgCmd,
) -> io::Result<()> {
    let positions = curve.vertices.iter().map(|v| v.position());
    let (min, max) = bounds(points.iter().cloned().chain(positions));
    let margin = cmd.point_radius + cmd.stroke_width;
    let (x, y) = (min.x - margin, min.y - margin);
    let (w, h) = (max.x - min.x + 2.0 * margin, max.y - min.y + 2.0 * margin);

    writeln!(
        output,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\" width=\"{}\" height=\"{}\">",
        x, y, w, h, w, h
    )?;

    writeln!(
        output,
        "  <g fill=\"none\" stroke-width=\"{}\" stroke-linecap=\"round\">",
        cmd.stroke_width
    )?;
    match color_mode {
        ColorMode::Colorized => {
            for line in curve.indices.chunks(2) {
                let a = &curve.vertices[line[0] as usize];
                let b = &curve.vertices[line[1] as usize];
                let (p, q) = (a.position(), b.position());
                writeln!(
                    output,
                    "    <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\"/>",
                    p.x,
                    p.y,
                    q.x,
                    q.y,
                    a.color().to_hex()
                )?;
            }
        }
        ColorMode::Neutral => {
            write!(output, "    <polyline points=\"")?;
            let mut is_first = true;
            for line in curve.indices.chunks(2) {
                if is_first {
                    let p = curve.vertices[line[0] as usize].position();
                    write!(output, "{},{}", p.x, p.y)?;
                    is_first = false;
                }
                let p = curve.vertices[line[1] as usize].position();
                write!(output, " {},{}", p.x, p.y)?;
            }
            writeln!(output, "\" stroke=\"{}\"/>", Color::NEUTRAL.to_hex())?;
        }
    }
    writeln!(output, "  </g>")?;

    writeln!(output, "  <g fill=\"{}\">", Color::NEUTRAL.to_hex())?;
    for p in points {
        writeln!(
            output,
            "    <circle cx=\"{}\" cy=\"{}\" r=\"{}\"/>",
            p.x, p.y, cmd.point_radius
        )?;
    }
    writeln!(output, "  </g>")?;

    writeln!(output, "</svg>")
}

fn bounds(mut positions: impl Iterator<Item = Point>) -> (Point, Point) {
    let first = match positions.next() {
        Some(p) => p,
        None => return (Point::zero(), Point::zero()),
    };

    positions.fold((first, first), |(min, max), p| (min.min(p), max.max(p)))
}

#[cfg(test)]
fn render(points: &[Point], options: &arcblend::tessellation::CurveOptions) -> String {
    let mut buffers: VertexBuffers<CurveVertex, u32> = VertexBuffers::new();
    CurveTessellator::new()
        .tessellate(
            points,
            options,
            &mut BuffersBuilder::new(&mut buffers, |vertex: CurveVertex| vertex),
        )
        .unwrap();

    let cmd = SvgCmd {
        point_radius: 5.0,
        stroke_width: 1.0,
    };
    let mut output: Vec<u8> = Vec::new();
    write_svg(&mut output, points, &buffers, options.color_mode, &cmd).unwrap();

    String::from_utf8(output).unwrap()
}

#[test]
fn colorized_svg() {
    use arcblend::math::point;
    use arcblend::tessellation::{CurveOptions, EndMode};

    let points = [point(0.0, 0.0), point(100.0, 0.0), point(100.0, 100.0)];
    let options = CurveOptions::segments(8).with_end_mode(EndMode::ShowEnds);
    let svg = render(&points, &options);

    assert!(svg.starts_with("<svg "));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(svg.matches("<line ").count(), 16);
    assert_eq!(svg.matches("<circle ").count(), 3);
    assert!(svg.contains("stroke=\"#ff0000\""));
    assert!(!svg.contains("<polyline"));
}

#[test]
fn neutral_svg() {
    use arcblend::math::point;
    use arcblend::tessellation::{CurveOptions, EndMode};

    let points = [point(0.0, 0.0), point(100.0, 0.0), point(100.0, 100.0)];
    let options = CurveOptions::segments(8)
        .with_end_mode(EndMode::JoinEnds)
        .with_color_mode(ColorMode::Neutral);
    let svg = render(&points, &options);

    assert_eq!(svg.matches("<polyline ").count(), 1);
    assert_eq!(svg.matches("<line ").count(), 0);
    assert_eq!(svg.matches("<circle ").count(), 3);
    assert!(!svg.contains("#ff0000"));

    // The closing line comes back to the first vertex.
    let start = svg.find("points=\"").unwrap() + 8;
    let end = start + svg[start..].find('"').unwrap();
    let coords: Vec<&str> = svg[start..end].split(' ').collect();
    assert_eq!(coords.len(), 3 * 8 + 1);
    assert_eq!(coords[0], coords[3 * 8]);
}

#[test]
fn empty_bounds() {
    assert_eq!(bounds(std::iter::empty()), (Point::zero(), Point::zero()));
}
