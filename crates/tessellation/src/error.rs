/// The curve tessellator's result type.
pub type TessellationResult = Result<(), TessellationError>;

/// An error that can happen while generating geometry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GeometryBuilderError {
    InvalidVertex,
    TooManyVertices,
}

#[cfg(feature = "std")]
impl core::fmt::Display for GeometryBuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GeometryBuilderError::InvalidVertex => {
                std::write!(f, "Invalid vertex")
            },
            GeometryBuilderError::TooManyVertices => {
                std::write!(f, "Too many vertices")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GeometryBuilderError {}

/// The curve tessellator's error enumeration.
#[derive(Clone, Debug, PartialEq)]
pub enum TessellationError {
    UnsupportedParameter(UnsupportedParameter),
    GeometryBuilder(GeometryBuilderError),
}

#[cfg(feature = "std")]
impl core::fmt::Display for TessellationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TessellationError::UnsupportedParameter(e) => {
                std::write!(f, "Unsupported parameter: {e}")
            },
            TessellationError::GeometryBuilder(e) => {
                std::write!(f, "Geometry builder error: {e}")
            },
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TessellationError {}

impl core::convert::From<GeometryBuilderError> for TessellationError {
    fn from(value: GeometryBuilderError) -> Self {
        Self::GeometryBuilder(value)
    }
}

impl core::convert::From<UnsupportedParameter> for TessellationError {
    fn from(value: UnsupportedParameter) -> Self {
        Self::UnsupportedParameter(value)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum UnsupportedParameter {
    /// One of the input positions is NaN or infinite.
    PositionIsNaN,
    /// `CurveOptions::segments_per_span` is zero.
    ZeroSegments,
}

#[cfg(feature = "std")]
impl core::fmt::Display for UnsupportedParameter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            UnsupportedParameter::PositionIsNaN => {
                std::write!(f, "Position is not a finite number")
            },
            UnsupportedParameter::ZeroSegments => {
                std::write!(f, "The number of segments per span must be at least one")
            },
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnsupportedParameter {}

#[cfg(feature = "std")]
#[test]
fn error_messages() {
    use std::string::ToString;

    let err: TessellationError = UnsupportedParameter::ZeroSegments.into();
    assert_eq!(
        err.to_string(),
        "Unsupported parameter: The number of segments per span must be at least one"
    );

    let err: TessellationError = GeometryBuilderError::TooManyVertices.into();
    assert_eq!(err.to_string(), "Geometry builder error: Too many vertices");
}
