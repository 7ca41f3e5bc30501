//! The walls around a bounded map.
use sightline_geometry::{Aabb, Border, Segment, Shape, V2};

use crate::*;

/// Four walls enclosing the cells of a `width` by `height` map.
///
/// Cells are centered on integer coordinates, so the walls sit half a unit
/// outside the outermost cell centers. The owner's pose carries the map
/// dimensions as its size.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct MapBoundaryCollider;

impl MapBoundaryCollider {
    pub fn new() -> MapBoundaryCollider {
        MapBoundaryCollider
    }

    /// The rectangle enclosed by the walls.
    pub fn walled_area(&self, pose: &Pose) -> Option<Aabb> {
        let size = pose.size;
        Aabb::from_points(V2::new(-0.5, -0.5), V2::new(size.x - 0.5, size.y - 0.5)).ok()
    }

    /// Does a collider with these bounds cross the walls or lie outside them?
    ///
    /// Bounds touching a wall count as crossing it.
    pub fn touches(&self, pose: &Pose, bounds: &Aabb) -> bool {
        let area = match self.walled_area(pose) {
            Some(a) => a,
            None => return false,
        };
        let (outer1, outer2) = (area.get_p1(), area.get_p2());
        let (inner1, inner2) = (bounds.get_p1(), bounds.get_p2());
        let strictly_inside = inner1.x > outer1.x
            && inner1.y > outer1.y
            && inner2.x < outer2.x
            && inner2.y < outer2.y;
        !strictly_inside
    }
}

impl BorderSource for MapBoundaryCollider {
    /// The walls whose inner side faces `towards`. A point outside the map
    /// sees only the walls it is not behind.
    fn borders_facing(&self, pose: &Pose, towards: V2) -> Borders {
        let right = pose.size.x - 0.5;
        let bottom = pose.size.y - 0.5;
        let (tl, tr) = (V2::new(-0.5, -0.5), V2::new(right, -0.5));
        let (br, bl) = (V2::new(right, bottom), V2::new(-0.5, bottom));

        let mut walls = Borders::new();
        if towards.x <= right {
            walls.push(Border::Segment(Segment::new(tr, br)));
        }
        if towards.x >= -0.5 {
            walls.push(Border::Segment(Segment::new(bl, tl)));
        }
        if towards.y <= bottom {
            walls.push(Border::Segment(Segment::new(br, bl)));
        }
        if towards.y >= -0.5 {
            walls.push(Border::Segment(Segment::new(tl, tr)));
        }
        walls
    }

    fn contains(&self, pose: &Pose, point: V2) -> bool {
        self.walled_area(pose)
            .map_or(false, |a| a.contains_point(&point))
    }

    fn bounds(&self, pose: &Pose) -> Option<Aabb> {
        self.walled_area(pose)
    }

    /// Walls have no solid area to overlap with; see [MapBoundaryCollider::touches].
    fn shape(&self, _pose: &Pose) -> Option<Shape> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::*;
    use sightline_geometry::{cast, Ray};

    fn map_pose(w: f64, h: f64) -> Pose {
        Pose::new(V2::ZERO, 0.0, V2::new(w, h))
    }

    #[test]
    fn all_walls_from_inside() {
        let pose = map_pose(10.0, 10.0);
        let walls = MapBoundaryCollider.borders_facing(&pose, V2::new(5.0, 5.0));
        assert_eq!(walls.len(), 4);
    }

    #[test]
    fn outside_sees_fewer_walls() {
        let pose = map_pose(10.0, 10.0);
        assert_eq!(
            MapBoundaryCollider
                .borders_facing(&pose, V2::new(-3.0, 5.0))
                .len(),
            3
        );
        assert_eq!(
            MapBoundaryCollider
                .borders_facing(&pose, V2::new(20.0, 20.0))
                .len(),
            2
        );
    }

    #[test]
    fn rays_stop_at_the_wall() -> anyhow::Result<()> {
        let pose = map_pose(10.0, 10.0);
        let origin = V2::new(2.0, 3.0);
        let walls = MapBoundaryCollider.borders_facing(&pose, origin);
        let cases = [
            (0.0, V2::new(9.5, 3.0)),
            (90.0, V2::new(2.0, 9.5)),
            (180.0, V2::new(-0.5, 3.0)),
            (270.0, V2::new(2.0, -0.5)),
        ];
        for (angle, expected) in cases {
            let ray = Ray::from_angle(origin, angle)?;
            let hit = cast(&ray, f64::INFINITY, &walls).unwrap();
            assert_relative_eq!(hit.point.x, expected.x, epsilon = 1e-9);
            assert_relative_eq!(hit.point.y, expected.y, epsilon = 1e-9);
        }
        Ok(())
    }

    #[test]
    fn containment_and_touching() -> anyhow::Result<()> {
        let pose = map_pose(4.0, 3.0);
        let m = MapBoundaryCollider;
        assert!(m.contains(&pose, V2::new(0.0, 0.0)));
        assert!(m.contains(&pose, V2::new(3.5, 2.5)));
        assert!(!m.contains(&pose, V2::new(3.6, 1.0)));

        let inside = Aabb::from_points(V2::new(0.0, 0.0), V2::new(1.0, 1.0))?;
        let crossing = Aabb::from_points(V2::new(3.0, 0.0), V2::new(4.0, 1.0))?;
        let outside = Aabb::from_points(V2::new(10.0, 10.0), V2::new(11.0, 11.0))?;
        assert!(!m.touches(&pose, &inside));
        assert!(m.touches(&pose, &crossing));
        assert!(m.touches(&pose, &outside));
        assert!(m.shape(&pose).is_none());
        Ok(())
    }
}
