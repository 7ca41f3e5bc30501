use sightline_geometry::{Transform, V2};

/// What a collider needs to know about its owner for a single query.
///
/// Colliders never hold on to their owner; the owner hands over a fresh pose
/// each time it asks for borders or overlap.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Pose {
    pub transform: Transform,
    /// The rendered size of the owner. Zero when it has no image.
    pub size: V2,
}

impl Pose {
    pub fn new(location: V2, rotation: f64, size: V2) -> Pose {
        Pose {
            transform: Transform::new(location, rotation),
            size,
        }
    }

    pub fn location(&self) -> V2 {
        self.transform.location
    }

    pub fn rotation(&self) -> f64 {
        self.transform.rotation
    }

    /// Half the diagonal of the rendered size.
    pub fn half_diagonal(&self) -> f64 {
        self.size.length() / 2.0
    }
}
