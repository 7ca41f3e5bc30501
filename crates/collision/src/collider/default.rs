//! The collider every object gets unless it asks for another: the bounding box
//! of its rendered image.
use std::sync::{Arc, Mutex, PoisonError};

use arc_swap::ArcSwapOption;
use log::trace;

use sightline_geometry::{Aabb, Obb, Segment, Shape, V2};

use crate::collider::outline::*;
use crate::*;

/// The borders of a default collider, along with the pose they were computed for.
#[derive(Debug)]
pub struct EdgeCache {
    edges: Edges,
    normals: Normals,
    location: V2,
    rotation: f64,
    size: V2,
}

impl EdgeCache {
    fn compute(pose: &Pose) -> Option<EdgeCache> {
        let (edges, normals) = silhouette(&pose.transform, pose.size)?;
        Some(EdgeCache {
            edges,
            normals,
            location: pose.location(),
            rotation: pose.rotation(),
            size: pose.size,
        })
    }

    fn is_current(&self, pose: &Pose) -> bool {
        self.location == pose.location()
            && self.rotation == pose.rotation()
            && self.size == pose.size
    }

    /// Four edges wound top, right, bottom, left; or a flat object's single
    /// edge and its reverse.
    pub fn edges(&self) -> &[Segment] {
        &self.edges
    }

    /// The outward normal of each edge, in the same order.
    pub fn normals(&self) -> &[V2] {
        &self.normals
    }

    pub fn location(&self) -> V2 {
        self.location
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn size(&self) -> V2 {
        self.size
    }
}

/// A collider shaped like the owner's rendered image.
///
/// Overlap between two default colliders is the host's pixel test when the
/// host offers one (see [intersects](crate::intersects)); otherwise, and for
/// ray casting, the image is treated as a rotated rectangle.
///
/// The rectangle's edges are cached and only recomputed when the owner's
/// location, rotation or size changes.
#[derive(Debug, Default)]
pub struct DefaultCollider {
    cache: ArcSwapOption<EdgeCache>,
    /// Held around check-and-recompute when [guarded_edge_cache] is on.
    lock: Mutex<()>,
}

impl DefaultCollider {
    pub fn new() -> DefaultCollider {
        Default::default()
    }

    /// The edges for `pose`, reusing the cached ones if the pose hasn't changed.
    ///
    /// `None` if the owner has nothing to see.
    pub fn edge_cache(&self, pose: &Pose) -> Option<Arc<EdgeCache>> {
        if guarded_edge_cache() {
            // The lock only orders access to `cache`, so a poisoned lock is still usable.
            let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
            self.refresh(pose)
        } else {
            self.refresh(pose)
        }
    }

    fn refresh(&self, pose: &Pose) -> Option<Arc<EdgeCache>> {
        if let Some(cached) = self.cache.load_full() {
            if cached.is_current(pose) {
                return Some(cached);
            }
        }

        let fresh = Arc::new(EdgeCache::compute(pose)?);
        trace!(
            "Recomputed edges at {:?}, rotation {}, size {:?}",
            fresh.location,
            fresh.rotation,
            fresh.size
        );
        self.cache.store(Some(fresh.clone()));
        Some(fresh)
    }

    fn rendered_box(pose: &Pose) -> Option<Obb> {
        let size = V2::new(pose.size.x.abs(), pose.size.y.abs());
        if !size.is_finite() || size.is_zero() {
            return None;
        }
        Obb::new(pose.transform, size).ok()
    }
}

impl BorderSource for DefaultCollider {
    fn borders_facing(&self, pose: &Pose, towards: V2) -> Borders {
        match self.edge_cache(pose) {
            Some(cache) => front_faces(cache.edges(), cache.normals(), towards),
            None => Borders::new(),
        }
    }

    fn contains(&self, pose: &Pose, point: V2) -> bool {
        DefaultCollider::rendered_box(pose).map_or(false, |b| b.contains_point(&point))
    }

    fn bounds(&self, pose: &Pose) -> Option<Aabb> {
        DefaultCollider::rendered_box(pose).map(|b| b.get_bounding_box())
    }

    fn shape(&self, pose: &Pose) -> Option<Shape> {
        DefaultCollider::rendered_box(pose).map(Shape::from)
    }
}
