//! A rectangle collider with an explicit size.
use sightline_geometry::{Aabb, Obb, Shape, V2};

use crate::collider::outline::*;
use crate::*;

/// A rectangle centered on the owner and rotated with it.
///
/// Without an explicit size the box follows the owner's rendered size.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BoxCollider {
    size: Option<V2>,
}

fn check_size(size: V2) -> Result<V2> {
    if !(size.is_finite() && size.x >= 0.0 && size.y >= 0.0) {
        return Err(Error::InvalidColliderSize(size));
    }
    Ok(size)
}

impl BoxCollider {
    /// A box matching the owner's rendered size.
    pub fn new() -> BoxCollider {
        Default::default()
    }

    pub fn with_size(size: V2) -> Result<BoxCollider> {
        Ok(BoxCollider {
            size: Some(check_size(size)?),
        })
    }

    /// Set an explicit size, or `None` to follow the rendered size again.
    pub fn set_size(&mut self, size: Option<V2>) -> Result<()> {
        self.size = size.map(check_size).transpose()?;
        Ok(())
    }

    /// The explicit size, if one was set.
    pub fn size(&self) -> Option<V2> {
        self.size
    }

    pub fn current_size(&self, pose: &Pose) -> V2 {
        self.size.unwrap_or(pose.size)
    }

    pub fn half_size(&self, pose: &Pose) -> V2 {
        self.current_size(pose) / 2.0
    }

    pub fn obb(&self, pose: &Pose) -> Option<Obb> {
        Obb::new(pose.transform, self.current_size(pose)).ok()
    }

    /// World-space corners, `None` if the rendered size it follows is invalid.
    pub fn corners(&self, pose: &Pose) -> Option<[V2; 4]> {
        self.obb(pose).map(|b| b.corners())
    }
}

impl BorderSource for BoxCollider {
    fn borders_facing(&self, pose: &Pose, towards: V2) -> Borders {
        match silhouette(&pose.transform, self.current_size(pose)) {
            Some((edges, normals)) => front_faces(&edges, &normals, towards),
            None => Borders::new(),
        }
    }

    /// Inclusive of the boundary. The point is taken into the box's frame by
    /// undoing the owner's rotation around its center.
    fn contains(&self, pose: &Pose, point: V2) -> bool {
        self.obb(pose).map_or(false, |b| b.contains_point(&point))
    }

    fn bounds(&self, pose: &Pose) -> Option<Aabb> {
        self.obb(pose).map(|b| b.get_bounding_box())
    }

    fn shape(&self, pose: &Pose) -> Option<Shape> {
        self.obb(pose).map(Shape::from)
    }
}
