//! A line segment border.
use crate::*;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    pub start: V2,
    pub end: V2,
}

impl Segment {
    pub const fn new(start: V2, end: V2) -> Segment {
        Segment { start, end }
    }

    #[must_use = "This doesn't mutate the Segment in place"]
    pub fn reversed(&self) -> Segment {
        Segment::new(self.end, self.start)
    }

    pub fn delta(&self) -> V2 {
        self.end - self.start
    }

    pub fn length(&self) -> f64 {
        self.delta().length()
    }

    /// Distance along `ray` to this segment, if the ray hits it no further than
    /// `max_distance`.
    ///
    /// Hits within [`Ray::min_hit_distance`] of the origin are dropped, so a
    /// ray starting on the segment never sees it.
    pub fn intersect_ray(&self, ray: &Ray, max_distance: f64) -> Option<f64> {
        // Solve `origin + t * dir = start + s * edge` for t and s by crossing
        // both sides with `edge` and `dir` respectively.
        let dir = ray.unit_direction();
        let edge = self.delta();
        let denom = dir.cross(&edge);
        // Parallel and collinear segments never count as a hit; a flat wall is
        // not visible edge-on.
        if denom == 0.0 {
            return None;
        }

        let w = self.start - ray.origin;
        let t = w.cross(&edge) / denom;
        let s = w.cross(&dir) / denom;

        let extent = self.start.length().max(self.end.length());
        if t <= ray.min_hit_distance(extent) || t > max_distance || !(0.0..=1.0).contains(&s) {
            return None;
        }
        Some(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::*;
    use proptest::prelude::*;

    #[test]
    fn simple_hit() {
        let s = Segment::new(V2::new(4.0, 0.0), V2::new(4.0, 10.0));
        let r = Ray::new(V2::new(0.0, 5.0), V2::new(1.0, 0.0)).unwrap();
        assert_relative_eq!(s.intersect_ray(&r, f64::INFINITY).unwrap(), 4.0);
        assert!(s.intersect_ray(&r, 3.9).is_none());
        // Inclusive at exactly the max distance.
        assert_relative_eq!(s.intersect_ray(&r, 4.0).unwrap(), 4.0);
    }

    #[test]
    fn behind_and_parallel_miss() {
        let s = Segment::new(V2::new(4.0, 0.0), V2::new(4.0, 10.0));
        let behind = Ray::new(V2::new(0.0, 5.0), V2::new(-1.0, 0.0)).unwrap();
        let parallel = Ray::new(V2::new(4.0, -5.0), V2::new(0.0, 1.0)).unwrap();
        let past_end = Ray::new(V2::new(0.0, 11.0), V2::new(1.0, 0.0)).unwrap();
        assert!(s.intersect_ray(&behind, f64::INFINITY).is_none());
        assert!(s.intersect_ray(&parallel, f64::INFINITY).is_none());
        assert!(s.intersect_ray(&past_end, f64::INFINITY).is_none());
    }

    #[test]
    fn chained_casts_skip_the_wall_they_start_on() {
        let s = Segment::new(V2::new(1.0, -3.0), V2::new(2.5, -1.2));
        let first = Ray::from_points(V2::new(-4.0, 2.0), V2::new(1.9, -1.92)).unwrap();
        let t = s.intersect_ray(&first, f64::INFINITY).unwrap();
        let again = Ray::new(first.evaluate(t), first.direction()).unwrap();
        assert!(s.intersect_ray(&again, f64::INFINITY).is_none());
        let back = Ray::new(first.evaluate(t), -first.direction()).unwrap();
        assert!(s.intersect_ray(&back, f64::INFINITY).is_none());
    }

    #[test]
    fn unnormalized_direction_reports_world_distance() {
        let s = Segment::new(V2::new(4.0, 0.0), V2::new(4.0, 10.0));
        let r = Ray::new(V2::new(0.0, 5.0), V2::new(20.0, 0.0)).unwrap();
        assert_relative_eq!(s.intersect_ray(&r, f64::INFINITY).unwrap(), 4.0);
    }

    proptest! {
        // A ray starting on a segment never sees that segment.
        #[test]
        fn no_self_hit(
            x1 in -100.0..100.0f64,
            y1 in -100.0..100.0f64,
            x2 in -100.0..100.0f64,
            y2 in -100.0..100.0f64,
            along in 0.0..=1.0f64,
            angle in 0.0..360.0f64,
        ) {
            let s = Segment::new(V2::new(x1, y1), V2::new(x2, y2));
            let origin = s.start + s.delta() * along;
            let r = Ray::from_angle(origin, angle).unwrap();
            let t = s.intersect_ray(&r, f64::INFINITY);
            prop_assert!(t.is_none(), "{:?} from {:?} hit at {:?}", s, origin, t);
        }

        // Aim at a point of the segment; the hit must be that point.
        #[test]
        fn aimed_rays_hit(
            x1 in -100.0..100.0f64,
            y1 in -100.0..100.0f64,
            len in 1.0..50.0f64,
            seg_angle in 0.0..360.0f64,
            along in 0.05..0.95f64,
            dist in 1.0..100.0f64,
            side in prop::bool::ANY,
        ) {
            let start = V2::new(x1, y1);
            let s = Segment::new(start, start + V2::angled(seg_angle, len));
            let target = s.start + s.delta() * along;
            let normal = V2::angled(seg_angle + if side { 90.0 } else { -90.0 }, dist);
            let r = Ray::from_points(target + normal, target).unwrap();
            let t = s.intersect_ray(&r, f64::INFINITY);
            prop_assert!(t.is_some());
            prop_assert!((t.unwrap() - dist).abs() < 1e-6, "{:?} vs {}", t, dist);
        }
    }
}
