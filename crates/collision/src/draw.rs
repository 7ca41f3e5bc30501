//! The host's drawing surface, used to visualize raycasts.
use sightline_geometry::V2;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }
}

/// Anything that can draw pixel lines, such as a map's background image.
pub trait Canvas {
    fn draw_line(&mut self, from: V2<i32>, to: V2<i32>, color: Color);
}

/// Snap a world position to the pixel containing it.
pub(crate) fn to_pixel(point: V2) -> V2<i32> {
    V2::new(point.x.floor() as i32, point.y.floor() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixels_round_down() {
        assert_eq!(to_pixel(V2::new(4.9, 5.0)), V2::new(4, 5));
        assert_eq!(to_pixel(V2::new(-0.5, 0.2)), V2::new(-1, 0));
    }
}
