//! Overlap queries between objects.
use std::any::TypeId;
use std::sync::Arc;

use crate::*;

/// Do the colliders of `a` and `b` overlap?
///
/// Two objects with default colliders are compared pixel by pixel when the
/// host offers such a test. Everything else goes through
/// [Collider::intersects].
pub fn intersects(a: &dyn SceneObject, b: &dyn SceneObject) -> Result<bool> {
    let collider_a = a.collider().ok_or_else(|| Error::MissingCollider(a.id()))?;
    let collider_b = b.collider().ok_or_else(|| Error::MissingCollider(b.id()))?;

    if let (Collider::Default(_), Collider::Default(_)) = (collider_a, collider_b) {
        if let Some(overlap) = a.pixels_overlap(b) {
            return Ok(overlap);
        }
    }
    Ok(collider_a.intersects(&a.pose(), collider_b, &b.pose()))
}

/// Every object of type `kind` (or of any type) in `object`'s map that
/// overlaps it. Objects without a collider are skipped.
pub fn find_all_intersecting(
    object: &dyn SceneObject,
    kind: Option<TypeId>,
) -> Result<Vec<Arc<dyn SceneObject>>> {
    let mut found = vec![];
    for other in candidates(object, kind)? {
        if intersects(object, &*other)? {
            found.push(other);
        }
    }
    Ok(found)
}

/// Like [find_all_intersecting], but stops at the first overlapping object.
pub fn find_intersecting(
    object: &dyn SceneObject,
    kind: Option<TypeId>,
) -> Result<Option<Arc<dyn SceneObject>>> {
    for other in candidates(object, kind)? {
        if intersects(object, &*other)? {
            return Ok(Some(other));
        }
    }
    Ok(None)
}

fn candidates(
    object: &dyn SceneObject,
    kind: Option<TypeId>,
) -> Result<impl Iterator<Item = Arc<dyn SceneObject>>> {
    let map = object.map().ok_or_else(|| Error::Detached(object.id()))?;
    if object.collider().is_none() {
        return Err(Error::MissingCollider(object.id()));
    }
    let id = object.id();
    Ok(map
        .find_all(kind)
        .into_iter()
        .filter(move |o| o.id() != id && o.collider().is_some()))
}
