//! A 2-dimensional vector/point.
//!
//! Angles are in degrees. On a y-down screen a positive rotation turns clockwise.
use num::Num;

#[derive(Debug, Default, Copy, Clone, Eq, Ord, PartialEq, PartialOrd, Hash)]
pub struct V2<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T: Num> V2<T> {
    pub const fn new(x: T, y: T) -> Self {
        V2 { x, y }
    }
}

/// Lengths, products and distances are computed in f64 whatever the component type.
impl<T> V2<T>
where
    T: Num + Copy,
    f64: From<T>,
{
    pub fn to_f64(self) -> V2<f64> {
        V2 {
            x: self.x.into(),
            y: self.y.into(),
        }
    }

    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    #[must_use = "This function doesn't modify the vector in place"]
    pub fn normalize(self) -> V2<f64> {
        self.to_f64() / self.length()
    }

    pub fn dot(&self, other: &V2<T>) -> f64 {
        let (a, b) = (self.to_f64(), other.to_f64());
        a.x * b.x + a.y * b.y
    }

    /// The z component of the 3d cross product, `self.x * other.y - self.y * other.x`.
    pub fn cross(&self, other: &V2<T>) -> f64 {
        let (a, b) = (self.to_f64(), other.to_f64());
        a.x * b.y - a.y * b.x
    }

    pub fn distance_squared(&self, other: &V2<T>) -> f64 {
        let (a, b) = (self.to_f64(), other.to_f64());
        (b.x - a.x).powi(2) + (b.y - a.y).powi(2)
    }

    pub fn distance(&self, other: &V2<T>) -> f64 {
        self.distance_squared(other).sqrt()
    }
}

impl V2<f64> {
    pub const ZERO: V2 = V2::new(0.0, 0.0);
    pub const RIGHT: V2 = V2::new(1.0, 0.0);

    /// A vector of the given length pointing at `degrees`.
    pub fn angled(degrees: f64, length: f64) -> V2 {
        let (sin, cos) = degrees.to_radians().sin_cos();
        V2::new(cos * length, sin * length)
    }

    /// The angle of this vector in degrees, in `(-180, 180]`.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x).to_degrees()
    }

    /// Rotate around the origin by `degrees`.
    #[must_use = "This function doesn't modify the vector in place"]
    pub fn rotated(self, degrees: f64) -> V2 {
        let (sin, cos) = degrees.to_radians().sin_cos();
        V2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Multiply component-wise.
    #[must_use = "This function doesn't modify the vector in place"]
    pub fn scaled_by(self, other: V2) -> V2 {
        V2::new(self.x * other.x, self.y * other.y)
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// The smallest angle between two vectors in degrees, in `[0, 180]`.
    pub fn smallest_angle(&self, other: &V2) -> f64 {
        let cos = self.dot(other) / (self.length() * other.length());
        cos.clamp(-1.0, 1.0).acos().to_degrees()
    }
}

macro_rules! componentwise {
    ($op_trait:ident, $op:ident, $assign_trait:ident, $assign:ident, $tok:tt) => {
        impl<T: Num> std::ops::$op_trait for V2<T> {
            type Output = V2<T>;

            fn $op(self, rhs: V2<T>) -> V2<T> {
                V2 {
                    x: self.x $tok rhs.x,
                    y: self.y $tok rhs.y,
                }
            }
        }

        impl<T: Num + Copy> std::ops::$assign_trait for V2<T> {
            fn $assign(&mut self, rhs: V2<T>) {
                *self = *self $tok rhs;
            }
        }
    };
}

componentwise!(Add, add, AddAssign, add_assign, +);
componentwise!(Sub, sub, SubAssign, sub_assign, -);

/// Scaling always produces an f64 vector.
macro_rules! scalar {
    ($op_trait:ident, $op:ident, $tok:tt) => {
        impl<T: Copy> std::ops::$op_trait<f64> for V2<T>
        where
            f64: From<T>,
        {
            type Output = V2<f64>;

            fn $op(self, rhs: f64) -> V2<f64> {
                V2 {
                    x: f64::from(self.x) $tok rhs,
                    y: f64::from(self.y) $tok rhs,
                }
            }
        }
    };
}

scalar!(Mul, mul, *);
scalar!(Div, div, /);

impl<T: std::ops::Neg> std::ops::Neg for V2<T> {
    type Output = V2<T::Output>;

    fn neg(self) -> Self::Output {
        V2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::*;

    #[test]
    fn rotation_is_clockwise_on_screen() {
        // y points down, so rotating right by 90 degrees points down.
        let r = V2::RIGHT.rotated(90.0);
        assert_relative_eq!(r.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(r.y, 1.0);
    }

    #[test]
    fn angled_matches_rotated() {
        for deg in [0.0, 30.0, 90.0, 135.0, -45.0, 270.0] {
            let a = V2::angled(deg, 2.5);
            let b = V2::RIGHT.rotated(deg) * 2.5;
            assert_relative_eq!(a.x, b.x, epsilon = 1e-12);
            assert_relative_eq!(a.y, b.y, epsilon = 1e-12);
            assert_relative_eq!(a.length(), 2.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn angle_round_trips() {
        assert_relative_eq!(V2::angled(60.0, 1.0).angle(), 60.0, epsilon = 1e-9);
        assert_relative_eq!(V2::new(-1.0, 0.0).angle(), 180.0);
    }

    #[test]
    fn integer_vectors_measure_in_f64() {
        let a = V2::new(3i32, 4);
        assert_relative_eq!(a.length(), 5.0);
        assert_eq!(a - V2::new(1, 1), V2::new(2, 3));
        assert_eq!(a * 0.5, V2::new(1.5, 2.0));
    }

    #[test]
    fn cross_and_smallest_angle() {
        let a = V2::new(1.0, 0.0);
        let b = V2::new(0.0, 1.0);
        assert_relative_eq!(a.cross(&b), 1.0);
        assert_relative_eq!(b.cross(&a), -1.0);
        assert_relative_eq!(a.smallest_angle(&b), 90.0);
        assert_relative_eq!(a.smallest_angle(&-a), 180.0);
    }
}
