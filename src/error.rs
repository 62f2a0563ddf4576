use thiserror::Error;

/// Top-level error type for the sphere peak-finding engine.
#[derive(Debug, Error)]
pub enum SpherePeakError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// Errors related to malformed caller arguments.
#[derive(Debug, Error)]
pub enum ArgumentError {
    #[error("unrecognized axis key {0:?}, expected one of x, y, z, -x, -y, -z")]
    UnknownAxis(String),
}

/// Errors for input that violates the triangulated-sphere contract.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("face {face} references vertex {vertex} but the mesh declares {n_vertices} vertices")]
    FaceOutOfRange {
        face: usize,
        vertex: u32,
        n_vertices: usize,
    },

    #[error("face {face} repeats vertex {vertex}")]
    DegenerateFace { face: usize, vertex: u32 },

    #[error("vertex count {0} is odd and cannot be split into antipodal pairs")]
    OddVertexCount(usize),

    #[error("vertex {0} has no antipodal partner on the sphere")]
    MissingAntipode(usize),
}

/// Convenience type alias for results using [`SpherePeakError`].
pub type Result<T> = std::result::Result<T, SpherePeakError>;
