//! A simple circle, usable both as a ray border and as an overlap shape.
use crate::*;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    center: V2,
    radius: f64,
    /// Only meaningful for partial arcs; full circles ignore it.
    rotation: f64,
    /// Inside-out: rays hit the inner wall, as for a round world boundary.
    inverted: bool,
}

impl Circle {
    pub fn new(center: V2, radius: f64) -> Result<Circle> {
        if !(radius >= 0.0) || !radius.is_finite() {
            return Err(GeometryError::InvalidRadius(radius));
        }
        Ok(Circle {
            center,
            radius,
            rotation: 0.0,
            inverted: false,
        })
    }

    #[must_use = "This doesn't mutate the Circle in place"]
    pub fn with_rotation(self, rotation: f64) -> Circle {
        Circle { rotation, ..self }
    }

    #[must_use = "This doesn't mutate the Circle in place"]
    pub fn inverted(self, inverted: bool) -> Circle {
        Circle { inverted, ..self }
    }

    pub fn get_center(&self) -> &V2 {
        &self.center
    }

    pub fn get_radius(&self) -> f64 {
        self.radius
    }

    pub fn get_rotation(&self) -> f64 {
        self.rotation
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    pub fn contains_point(&self, point: &V2) -> bool {
        self.center.distance_squared(point) <= self.radius.powi(2)
    }

    pub fn get_bounding_box(&self) -> Aabb {
        Aabb::from_center_size(self.center, V2::new(self.radius * 2.0, self.radius * 2.0))
            .expect("Radius is validated on construction")
    }

    /// Move the circle to a new position.
    #[must_use = "This doesn't mutate the Circle in-place"]
    pub fn move_circle(&self, new_center: &V2) -> Circle {
        Circle {
            center: *new_center,
            ..*self
        }
    }

    /// Distance along `ray` to the visible wall of this circle.
    ///
    /// A normal circle is hit at the smaller positive root: the near side from
    /// outside, the far wall from inside. An inverted circle is only ever hit
    /// on the far side. Hits within [`Ray::min_hit_distance`] of the origin
    /// are dropped, so a ray leaving the circle from its edge does not see it.
    pub fn intersect_ray(&self, ray: &Ray, max_distance: f64) -> Option<f64> {
        // Project the vector from the ray origin to the center onto the ray to
        // get the t closest to the center, and onto the ray's perpendicular to
        // get the distance between the center and the line. Because circles
        // are symmetrical, `sqrt(r^2 - d^2)` is then half the chord, and
        // `t_center +- half_chord` are the two roots.
        let dir = ray.unit_direction();
        let translated_center = self.center - ray.origin;
        let dist_proj = V2::new(dir.y, -dir.x).dot(&translated_center).abs();
        if dist_proj > self.radius {
            return None;
        }

        let t_centered = dir.dot(&translated_center);
        let half_chord = (self.radius.powi(2) - dist_proj.powi(2)).sqrt();
        let min_t = ray.min_hit_distance(self.center.length() + self.radius);
        let near = t_centered - half_chord;
        let far = t_centered + half_chord;
        let t = if self.inverted || near <= min_t { far } else { near };

        if t <= min_t || t > max_distance {
            return None;
        }
        Some(t)
    }
}
