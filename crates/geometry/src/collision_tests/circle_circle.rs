//! Test collision between two circles.
use crate::*;

pub(crate) fn circle_circle_test(c1: &Circle, c2: &Circle) -> bool {
    let dist_squared = c1.get_center().distance_squared(c2.get_center());
    // Avoid square root, which is generally very slow.
    let touching_dist_squared = (c1.get_radius() + c2.get_radius()).powi(2);
    dist_squared < touching_dist_squared
}
