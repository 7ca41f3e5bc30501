//! Nearest-hit resolution of a ray against a set of borders.
use crate::*;

/// The result of casting a ray against a border set.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BorderHit {
    /// Position of the hit border in the input sequence.
    pub index: usize,
    pub border: Border,
    /// Where did the ray hit the border?
    pub point: V2,
    /// Distance from the ray origin to `point`.
    pub length: f64,
}

/// Find the nearest border hit by `ray` within `max_distance`.
///
/// This is a linear scan. Among borders hit at exactly the same distance the
/// first one wins.
pub fn cast<'a>(
    ray: &Ray,
    max_distance: f64,
    borders: impl IntoIterator<Item = &'a Border>,
) -> Option<BorderHit> {
    let mut best: Option<(usize, &Border, f64)> = None;

    for (index, border) in borders.into_iter().enumerate() {
        let limit = best.map_or(max_distance, |(_, _, t)| t);
        if let Some(t) = border.intersect_ray(ray, limit) {
            if best.map_or(true, |(_, _, b)| t < b) {
                best = Some((index, border, t));
            }
        }
    }

    best.map(|(index, border, length)| BorderHit {
        index,
        border: *border,
        point: ray.evaluate(length),
        length,
    })
}
