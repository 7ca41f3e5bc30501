//! A round collider.
use sightline_geometry::{Aabb, Border, Circle, Shape, V2};

use crate::*;

#[derive(Debug, Clone, PartialEq)]
pub struct CircleCollider {
    radius: f64,
}

fn check_radius(radius: f64) -> Result<f64> {
    if !(radius.is_finite() && radius >= 0.0) {
        return Err(Error::InvalidColliderSize(V2::new(radius, radius)));
    }
    Ok(radius)
}

impl CircleCollider {
    pub fn new(radius: f64) -> Result<CircleCollider> {
        Ok(CircleCollider {
            radius: check_radius(radius)?,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        self.radius = check_radius(radius)?;
        Ok(())
    }

    pub fn circle(&self, pose: &Pose) -> Circle {
        Circle::new(pose.location(), self.radius)
            .expect("The radius is checked whenever it is set")
            .with_rotation(pose.rotation())
    }
}

impl BorderSource for CircleCollider {
    /// A single full circle. It needs no culling: rays hit the near side of a
    /// circle on their own.
    fn borders_facing(&self, pose: &Pose, _towards: V2) -> Borders {
        // Objects without an image are invisible to rays.
        if pose.size.is_zero() {
            return Borders::new();
        }
        std::iter::once(Border::Circle(self.circle(pose))).collect()
    }

    fn contains(&self, pose: &Pose, point: V2) -> bool {
        self.circle(pose).contains_point(&point)
    }

    fn bounds(&self, pose: &Pose) -> Option<Aabb> {
        Some(self.circle(pose).get_bounding_box())
    }

    fn shape(&self, pose: &Pose) -> Option<Shape> {
        Some(self.circle(pose).into())
    }
}
