//! Colliders describe an object's silhouette to rays and to overlap tests.
mod boxed;
mod circle;
mod default;
mod map_boundary;
pub(crate) mod outline;

pub use boxed::*;
pub use circle::*;
pub use default::*;
pub use map_boundary::*;

use enum_dispatch::enum_dispatch;
use smallvec::SmallVec;

use sightline_geometry::{Aabb, Border, Shape, V2};

use crate::Pose;

/// The borders a collider shows to one query point. Rectangles show at most
/// two and map boundaries four, so these rarely spill to the heap.
pub type Borders = SmallVec<[Border; 4]>;

#[enum_dispatch]
pub trait BorderSource {
    /// The borders of this collider whose outside is visible from `towards`.
    fn borders_facing(&self, pose: &Pose, towards: V2) -> Borders;

    fn contains(&self, pose: &Pose, point: V2) -> bool;

    /// Axis-aligned bounds, if the collider occupies any space.
    fn bounds(&self, pose: &Pose) -> Option<Aabb>;

    /// The solid shape used for overlap tests.
    fn shape(&self, pose: &Pose) -> Option<Shape>;
}

#[enum_dispatch(BorderSource)]
#[derive(Debug)]
pub enum Collider {
    Default(DefaultCollider),
    Box(BoxCollider),
    Circle(CircleCollider),
    MapBoundary(MapBoundaryCollider),
}

impl Default for Collider {
    fn default() -> Collider {
        Collider::Default(DefaultCollider::new())
    }
}

impl Collider {
    /// Do two colliders overlap?
    ///
    /// A map boundary overlaps whatever crosses or leaves its walls. All other
    /// pairs are tested as solid shapes; in particular two boxes use a full
    /// separating-axis test, so crossed boxes whose corners all lie outside
    /// each other still overlap.
    pub fn intersects(&self, pose: &Pose, other: &Collider, other_pose: &Pose) -> bool {
        match (self, other) {
            (Collider::MapBoundary(m), o) => o
                .bounds(other_pose)
                .map_or(false, |b| m.touches(pose, &b)),
            (o, Collider::MapBoundary(m)) => o
                .bounds(pose)
                .map_or(false, |b| m.touches(other_pose, &b)),
            (a, b) => match (a.shape(pose), b.shape(other_pose)) {
                (Some(a), Some(b)) => a.collides_with(&b),
                _ => false,
            },
        }
    }

    /// Distance from the owner's location to the farthest corner of the
    /// collider's bounds. Zero when it has none.
    pub fn bounding_radius(&self, pose: &Pose) -> f64 {
        let bounds = match self.bounds(pose) {
            Some(b) => b,
            None => return 0.0,
        };
        let (p1, p2) = (*bounds.get_p1(), *bounds.get_p2());
        [p1, p2, V2::new(p1.x, p2.y), V2::new(p2.x, p1.y)]
            .iter()
            .map(|c| c.distance(&pose.location()))
            .fold(0.0, f64::max)
    }

    pub fn is_map_boundary(&self) -> bool {
        matches!(self, Collider::MapBoundary(_))
    }
}
