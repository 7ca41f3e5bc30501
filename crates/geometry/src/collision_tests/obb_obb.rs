//! The box-box overlap test, using the separating axis theorem.
use crate::*;

fn project(corners: &[V2; 4], axis: &V2) -> (f64, f64) {
    corners
        .iter()
        .map(|c| c.dot(axis))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), d| {
            (lo.min(d), hi.max(d))
        })
}

/// True if the interiors of two boxes overlap. Touching edges or corners don't count.
///
/// Two convex shapes are disjoint exactly when some axis separates their
/// projections. For rectangles the only candidates are the two edge normals
/// of each box, since opposite edges are parallel.
pub(crate) fn obb_obb_test(a: &Obb, b: &Obb) -> bool {
    let ca = a.corners();
    let cb = b.corners();
    let axes = [
        V2::angled(a.get_rotation(), 1.0),
        V2::angled(a.get_rotation() + 90.0, 1.0),
        V2::angled(b.get_rotation(), 1.0),
        V2::angled(b.get_rotation() + 90.0, 1.0),
    ];

    axes.iter().all(|axis| {
        let (min_a, max_a) = project(&ca, axis);
        let (min_b, max_b) = project(&cb, axis);
        max_a > min_b && max_b > min_a
    })
}
