//! Rectangle silhouettes and front-face selection shared by the box-like colliders.
use arrayvec::ArrayVec;

use sightline_geometry::{Border, Obb, Segment, Transform, V2};

use crate::Borders;

pub(crate) type Edges = ArrayVec<Segment, 4>;
pub(crate) type Normals = ArrayVec<V2, 4>;

/// Edges and outward normals of a rectangle of `size` placed by `transform`.
///
/// A rectangle flat in one axis becomes a single segment emitted twice, once
/// in each direction with opposite normals, so that it reads as a one-sided
/// wall from whichever side it is approached. `None` if there is nothing to
/// see.
pub(crate) fn silhouette(transform: &Transform, size: V2) -> Option<(Edges, Normals)> {
    let size = V2::new(size.x.abs(), size.y.abs());
    if !size.is_finite() || size.is_zero() {
        return None;
    }

    if size.x == 0.0 || size.y == 0.0 {
        let (angle, length) = if size.x == 0.0 {
            (transform.rotation + 90.0, size.y)
        } else {
            (transform.rotation, size.x)
        };
        let edge = V2::angled(angle, length);
        // `edge` rotated by -90 degrees.
        let normal = V2::new(edge.y, -edge.x);
        let end1 = transform.location - edge / 2.0;
        let end2 = transform.location + edge / 2.0;

        let edges = [Segment::new(end1, end2), Segment::new(end2, end1)];
        let normals = [normal, -normal];
        return Some((edges.into_iter().collect(), normals.into_iter().collect()));
    }

    let outline = Obb::new(*transform, size)
        .expect("The size was made non-negative above")
        .outline();
    Some((ArrayVec::from(outline.edges), ArrayVec::from(outline.normals)))
}

/// Keep the edges whose outward normal points back at `towards`.
///
/// An edge faces the point when the vector from the point to the edge's start
/// is more than 90 degrees away from the edge's normal. Points exactly in
/// line with an edge see neither of its sides.
pub(crate) fn front_faces(edges: &[Segment], normals: &[V2], towards: V2) -> Borders {
    edges
        .iter()
        .zip(normals.iter())
        .filter(|(edge, normal)| (edge.start - towards).dot(normal) < 0.0)
        .map(|(edge, _)| Border::Segment(*edge))
        .collect()
}
