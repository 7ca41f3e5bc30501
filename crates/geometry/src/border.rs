//! A border is one ray-testable primitive of an object's silhouette.
use crate::*;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Border {
    Segment(Segment),
    Circle(Circle),
}

impl Border {
    /// Distance along `ray` to this border, excluding hits at the origin and
    /// hits further than `max_distance`.
    pub fn intersect_ray(&self, ray: &Ray, max_distance: f64) -> Option<f64> {
        match self {
            Border::Segment(ref s) => s.intersect_ray(ray, max_distance),
            Border::Circle(ref c) => c.intersect_ray(ray, max_distance),
        }
    }

    pub fn as_segment(&self) -> Option<&Segment> {
        match self {
            Border::Segment(ref s) => Some(s),
            Border::Circle(_) => None,
        }
    }

    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Border::Circle(ref c) => Some(c),
            Border::Segment(_) => None,
        }
    }
}

impl From<Segment> for Border {
    fn from(other: Segment) -> Border {
        Border::Segment(other)
    }
}

impl From<Circle> for Border {
    fn from(other: Circle) -> Border {
        Border::Circle(other)
    }
}
