//! A shape is one of the concrete shape types behind an enum for overlap
//! testing.
use crate::*;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shape {
    Box(Obb),
    Circle(Circle),
}

impl Shape {
    pub fn get_bounding_box(&self) -> Aabb {
        match self {
            Shape::Box(ref b) => b.get_bounding_box(),
            Shape::Circle(ref c) => c.get_bounding_box(),
        }
    }

    pub fn contains_point(&self, point: &V2) -> bool {
        match self {
            Shape::Box(ref b) => b.contains_point(point),
            Shape::Circle(ref c) => c.contains_point(point),
        }
    }

    /// Test if this shape overlaps another.
    pub fn collides_with(&self, other: &Shape) -> bool {
        use crate::collision_tests::*;
        use Shape::*;

        match (self, other) {
            (Box(ref a), Box(ref b)) => obb_obb_test(a, b),
            (Circle(ref a), Circle(ref b)) => circle_circle_test(a, b),
            (Box(ref a), Circle(ref b)) | (Circle(ref b), Box(ref a)) => obb_circle_test(a, b),
        }
    }
}

impl From<Obb> for Shape {
    fn from(other: Obb) -> Shape {
        Shape::Box(other)
    }
}

impl From<Circle> for Shape {
    fn from(other: Circle) -> Shape {
        Shape::Circle(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_pairs_are_symmetric() -> Result<()> {
        let b: Shape = Obb::new(Transform::new(V2::new(0.0, 0.0), 30.0), V2::new(4.0, 2.0))?.into();
        let near: Shape = Circle::new(V2::new(2.0, 0.0), 1.0)?.into();
        let far: Shape = Circle::new(V2::new(10.0, 0.0), 1.0)?.into();
        assert!(b.collides_with(&near));
        assert!(near.collides_with(&b));
        assert!(!b.collides_with(&far));
        assert!(!far.collides_with(&b));
        Ok(())
    }
}
