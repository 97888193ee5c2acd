use crate::commands::{CommandError, CurveCmd, PolylineCmd};

use arcblend::tessellation::geometry_builder::{BuffersBuilder, VertexBuffers};
use arcblend::tessellation::{CurveTessellator, CurveVertex, NoOutput};

pub fn polyline(mut curve: CurveCmd, cmd: PolylineCmd) -> Result<(), CommandError> {
    let mut tessellator = CurveTessellator::new();

    if cmd.count {
        let mut output = NoOutput::new();
        tessellator.tessellate(&curve.points, &curve.options, &mut output)?;

        writeln!(&mut *curve.output, "vertices: {}", output.num_vertices())?;
        writeln!(&mut *curve.output, "lines: {}", output.num_lines())?;

        return Ok(());
    }

    let mut buffers: VertexBuffers<CurveVertex, u32> = VertexBuffers::new();
    tessellator.tessellate(
        &curve.points,
        &curve.options,
        &mut BuffersBuilder::new(&mut buffers, |vertex: CurveVertex| vertex),
    )?;

    log::debug!("writing {} vertices", buffers.vertices.len());

    let mut vertices = buffers.vertices;
    // Close the loop so that the output can be drawn as a line strip.
    if curve.options.end_mode.is_closed() {
        if let Some(&first) = vertices.first() {
            vertices.push(first);
        }
    }

    for vertex in &vertices {
        let p = vertex.position();
        if cmd.colors {
            let c = vertex.color();
            writeln!(&mut *curve.output, "{} {} {} {} {}", p.x, p.y, c.r, c.g, c.b)?;
        } else {
            writeln!(&mut *curve.output, "{} {}", p.x, p.y)?;
        }
    }

    Ok(())
}
