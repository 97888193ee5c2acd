use crate::commands::{CommandError, CurveCmd};

use arcblend::tessellation::CurveTessellator;

pub fn params(mut curve: CurveCmd) -> Result<(), CommandError> {
    let params = CurveTessellator::new().segment_parameters(&curve.points, &curve.options)?;

    writeln!(
        &mut *curve.output,
        "segments: {}",
        curve.options.segments_per_span
    )?;

    for (i, span) in params.iter().enumerate() {
        writeln!(
            &mut *curve.output,
            "span {}: limits1 {:?} center1 {:?} axes1 {:?} limits2 {:?} center2 {:?} axes2 {:?} color1 {:?} color2 {:?}",
            i,
            span.limits1,
            span.center1,
            span.axes1,
            span.limits2,
            span.center2,
            span.axes2,
            span.color1,
            span.color2,
        )?;
    }

    Ok(())
}
