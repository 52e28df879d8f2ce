use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for `sfobj`.
#[derive(Debug, Error)]
pub enum SfobjError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors raised while building or mutating geometries.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("{collection} cannot hold a {found}")]
    TypeConstraintViolation {
        collection: &'static str,
        found: &'static str,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("invalid ring: {0}")]
    InvalidRing(String),

    #[error("index {index} is out of range for {len} members")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid NURBS curve: {0}")]
    InvalidNurbs(String),
}

/// Errors raised while exporting a geometry.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unsupported geometry type: {0}")]
    UnsupportedGeometryKind(&'static str),

    #[error("unable to open file {} for writing", .path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for results using [`SfobjError`].
pub type Result<T> = std::result::Result<T, SfobjError>;
