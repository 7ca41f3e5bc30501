//! An oriented box: a rectangle rotated around its center.
use crate::*;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Obb {
    transform: Transform,
    size: V2,
}

/// The four sides of a box, each with its outward normal.
///
/// Sides are wound top, right, bottom, left, so that with a y-down screen and
/// no rotation the normals point up, right, down and left.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Outline {
    pub edges: [Segment; 4],
    pub normals: [V2; 4],
}

impl Obb {
    pub fn new(transform: Transform, size: V2) -> Result<Obb> {
        // Written so that NaN fails too.
        if !(size.x >= 0.0 && size.y >= 0.0) {
            return Err(GeometryError::InvalidDims);
        }
        Ok(Obb { transform, size })
    }

    pub fn get_center(&self) -> V2 {
        self.transform.location
    }

    pub fn get_rotation(&self) -> f64 {
        self.transform.rotation
    }

    pub fn get_size(&self) -> V2 {
        self.size
    }

    pub fn get_half_size(&self) -> V2 {
        self.size / 2.0
    }

    /// World-space corners.
    ///
    /// Computed from the half diagonal `size / 2` and its x-mirrored twin, each
    /// rotated once and then added to and subtracted from the center.
    pub fn corners(&self) -> [V2; 4] {
        let half = self.get_half_size();
        let offset = half.rotated(self.transform.rotation);
        let mirrored = V2::new(-half.x, half.y).rotated(self.transform.rotation);
        let c = self.transform.location;
        [c + offset, c + mirrored, c - offset, c - mirrored]
    }

    /// Is the point inside the box or on its boundary?
    pub fn contains_point(&self, point: &V2) -> bool {
        let local = self.transform.to_local(*point);
        let half = self.get_half_size();
        local.x.abs() <= half.x && local.y.abs() <= half.y
    }

    pub fn get_bounding_box(&self) -> Aabb {
        Aabb::enclosing(self.corners()).expect("A box always has corners")
    }

    pub fn outline(&self) -> Outline {
        let rotation = self.transform.rotation;
        let top_left = (self.size * -0.5).rotated(rotation);
        let bottom_right = -top_left;
        let top_right = self.size.scaled_by(V2::new(0.5, -0.5)).rotated(rotation);
        let bottom_left = -top_right;
        let width = top_right - top_left;
        let height = bottom_left - top_left;

        let loc = self.transform.location;
        let (tl, tr, br, bl) = (
            top_left + loc,
            top_right + loc,
            bottom_right + loc,
            bottom_left + loc,
        );

        Outline {
            edges: [
                Segment::new(tl, tr),
                Segment::new(tr, br),
                Segment::new(br, bl),
                Segment::new(bl, tl),
            ],
            normals: [-height, width, height, -width],
        }
    }
}
