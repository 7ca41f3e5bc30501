use crate::V2;

#[derive(Debug, thiserror::Error, PartialEq)]
#[non_exhaustive]
pub enum GeometryError {
    #[error("Ray origin must be finite, got {0:?}")]
    InvalidOrigin(V2),

    #[error("Ray direction must be a finite, non-zero vector, got {0:?}")]
    InvalidDirection(V2),

    #[error("Radius must be finite and non-negative, got {0}")]
    InvalidRadius(f64),

    #[error("Attempted to create a box which would have an invalid width or height")]
    InvalidDims,
}

pub type Result<T, E = GeometryError> = std::result::Result<T, E>;
