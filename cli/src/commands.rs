use arcblend::math::Point;
use arcblend::tessellation::{CurveOptions, TessellationError};

use crate::parser::ParseError;

use std::io;
use thiserror::Error;

pub struct CurveCmd {
    pub points: Vec<Point>,
    pub options: CurveOptions,
    pub output: Box<dyn io::Write>,
}

pub struct PolylineCmd {
    pub colors: bool,
    pub count: bool,
}

pub struct SvgCmd {
    pub point_radius: f32,
    pub stroke_width: f32,
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("Tessellation failed: {0}")]
    Tessellation(#[from] TessellationError),
}
