use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for mesh generation and mesh file I/O.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors raised while validating a domain before any node is generated.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error(
        "there are {nx:.2} elements in the x dimension and {ny:.2} elements in the y dimension \
         of the embedded region; choose a different element size or embedded dimensions"
    )]
    NonIntegralEmbedded { nx: f64, ny: f64 },

    #[error("element size must be positive and finite, got {0}")]
    InvalidElementSize(f64),

    #[error("{axis} extent must be positive and finite, got {value}")]
    InvalidExtent { axis: &'static str, value: f64 },
}

/// Errors related to reading and writing mesh files.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to access {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for results using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;
