//! An axis-aligned bounding box.
use crate::*;

/// An axis-aligned bounding box is specified by 2 points `p1` and `p2`, such
/// that `p1.x <= p2.x && p1.y <= p2.y`.
///
/// Unlike physics bodies, bounds may be flat: a collider with zero width still has bounds.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Aabb {
    p1: V2,
    p2: V2,
}

impl Aabb {
    pub fn from_points(p1: V2, p2: V2) -> Result<Aabb> {
        // Written so that NaN fails too.
        if !(p1.x <= p2.x && p1.y <= p2.y) {
            return Err(GeometryError::InvalidDims);
        }

        Ok(Aabb { p1, p2 })
    }

    pub fn from_center_size(center: V2, size: V2) -> Result<Aabb> {
        let half = size / 2.0;
        Aabb::from_points(center - half, center + half)
    }

    /// The smallest box containing every point. `None` if there are no points.
    pub fn enclosing(points: impl IntoIterator<Item = V2>) -> Option<Aabb> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (p1, p2) = iter.fold((first, first), |(lo, hi), p| {
            (
                V2::new(lo.x.min(p.x), lo.y.min(p.y)),
                V2::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        });
        Some(Aabb { p1, p2 })
    }

    pub fn get_p1(&self) -> &V2 {
        &self.p1
    }

    pub fn get_p2(&self) -> &V2 {
        &self.p2
    }

    pub fn get_width(&self) -> f64 {
        self.p2.x - self.p1.x
    }

    pub fn get_height(&self) -> f64 {
        self.p2.y - self.p1.y
    }

    pub fn get_size(&self) -> V2 {
        self.p2 - self.p1
    }

    pub fn get_half_width(&self) -> f64 {
        self.get_width() / 2.0
    }

    pub fn get_half_height(&self) -> f64 {
        self.get_height() / 2.0
    }

    /// Half the length of the diagonal; the radius of the circle through all four corners.
    pub fn get_half_diagonal(&self) -> f64 {
        self.get_size().length() / 2.0
    }

    pub fn get_center(&self) -> V2 {
        V2 {
            x: self.p1.x + self.get_half_width(),
            y: self.p1.y + self.get_half_height(),
        }
    }

    pub fn contains_point(&self, point: &V2) -> bool {
        self.p1.x <= point.x && point.x <= self.p2.x && self.p1.y <= point.y && point.y <= self.p2.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() -> Result<()> {
        let b = Aabb::from_points(V2::new(1.0, 1.0), V2::new(3.0, 5.0))?;
        approx::assert_relative_eq!(b.get_width(), 2.0);
        approx::assert_relative_eq!(b.get_height(), 4.0);
        approx::assert_relative_eq!(b.get_half_width(), 1.0);
        approx::assert_relative_eq!(b.get_half_height(), 2.0);
        approx::assert_relative_eq!(b.get_half_diagonal(), 20.0f64.sqrt() / 2.0);
        Ok(())
    }

    #[test]
    fn flat_boxes_are_allowed() -> Result<()> {
        let b = Aabb::from_center_size(V2::new(0.0, 0.0), V2::new(0.0, 4.0))?;
        assert!(b.contains_point(&V2::new(0.0, 1.0)));
        assert!(!b.contains_point(&V2::new(0.1, 1.0)));
        assert_eq!(
            Aabb::from_points(V2::new(1.0, 0.0), V2::new(0.0, 0.0)),
            Err(GeometryError::InvalidDims)
        );
        Ok(())
    }

    #[test]
    fn enclosing_points() {
        let b = Aabb::enclosing([V2::new(1.0, 5.0), V2::new(-2.0, 3.0), V2::new(0.0, 7.0)])
            .unwrap();
        assert_eq!(*b.get_p1(), V2::new(-2.0, 3.0));
        assert_eq!(*b.get_p2(), V2::new(1.0, 7.0));
        assert!(Aabb::enclosing(std::iter::empty()).is_none());
    }
}
