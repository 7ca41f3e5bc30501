//! Location and rotation of a positioned object.
use crate::*;

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Transform {
    pub location: V2,
    /// Degrees, clockwise-positive on a y-down screen.
    pub rotation: f64,
}

impl Transform {
    pub const fn new(location: V2, rotation: f64) -> Transform {
        Transform { location, rotation }
    }

    /// Map a point from the object's local frame into the world.
    pub fn to_world(&self, local: V2) -> V2 {
        local.rotated(self.rotation) + self.location
    }

    /// Map a world point into the object's local frame.
    ///
    /// This is the inverse of [Transform::to_world]: translate, then rotate by the
    /// negated rotation.
    pub fn to_local(&self, world: V2) -> V2 {
        (world - self.location).rotated(-self.rotation)
    }
}
