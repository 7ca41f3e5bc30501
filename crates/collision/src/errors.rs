use sightline_geometry::{GeometryError, V2};

use crate::ObjectId;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Invalid geometry: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Max distance must be a non-negative number, got {0}")]
    InvalidMaxDistance(f64),

    #[error("Object {0} is not in a map")]
    Detached(ObjectId),

    #[error("There is nothing to cast against: no explicit objects, no source object and no active map")]
    NoMap,

    #[error("Object {0} has no collider")]
    MissingCollider(ObjectId),

    #[error("Collider dimensions must be finite and non-negative, got {0:?}")]
    InvalidColliderSize(V2),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
