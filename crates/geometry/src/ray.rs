use crate::*;

/// A half-infinite ray.
///
/// The direction need not be unit length. Distances reported by casts are
/// always in world units along the normalized direction.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Ray {
    pub(crate) origin: V2,
    pub(crate) direction: V2,
}

impl Ray {
    pub fn new(origin: V2, direction: V2) -> Result<Ray> {
        if !origin.is_finite() {
            return Err(GeometryError::InvalidOrigin(origin));
        }
        if !direction.is_finite() || direction.is_zero() {
            return Err(GeometryError::InvalidDirection(direction));
        }

        Ok(Ray { origin, direction })
    }

    /// Build a ray from an origin and an angle in degrees.
    pub fn from_angle(origin: V2, degrees: f64) -> Result<Ray> {
        Ray::new(origin, V2::angled(degrees, 1.0))
    }

    /// Build a ray from a source point towards a target point.
    pub fn from_points(source: V2, target: V2) -> Result<Ray> {
        Ray::new(source, target - source)
    }

    pub fn origin(&self) -> V2 {
        self.origin
    }

    pub fn direction(&self) -> V2 {
        self.direction
    }

    pub fn unit_direction(&self) -> V2 {
        self.direction.normalize()
    }

    /// Smallest distance at which a border counts as hit.
    ///
    /// Rounding can put a border that passes through the origin at a tiny
    /// positive distance, so hits closer than this are treated as the origin
    /// itself. `extent` is the magnitude of the border's coordinates.
    pub fn min_hit_distance(&self, extent: f64) -> f64 {
        const RELATIVE_TOLERANCE: f64 = 1e-9;
        RELATIVE_TOLERANCE * self.origin.length().max(extent).max(1.0)
    }

    /// Evaluate the ray at a given distance from the origin.
    pub fn evaluate(&self, distance: f64) -> V2 {
        self.origin + self.unit_direction() * distance
    }
}
