//! Test overlap between an oriented box and a circle.
use crate::*;

pub(crate) fn obb_circle_test(obb: &Obb, circle: &Circle) -> bool {
    // In the box's own frame the box is axis aligned, and the closest point of
    // a box to a point is the clamped value of the point itself.
    let local = Transform::new(obb.get_center(), obb.get_rotation()).to_local(*circle.get_center());
    let half = obb.get_half_size();
    let closest = V2::new(local.x.clamp(-half.x, half.x), local.y.clamp(-half.y, half.y));
    local.distance_squared(&closest) < circle.get_radius().powi(2)
}
