use thiserror::Error;

/// Top-level error type for shape tessellation.
#[derive(Debug, Error)]
pub enum ShapeMeshError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors raised while building path geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("non-finite value for {0}")]
    NonFinite(&'static str),
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),

    #[error("tessellation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`ShapeMeshError`].
pub type Result<T> = std::result::Result<T, ShapeMeshError>;
