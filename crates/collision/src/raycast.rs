//! The outcome of a raycast, and shortcuts for common casts.
use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

use sightline_geometry::{Border, BorderHit, Circle, Ray, Segment, V2};

use crate::draw::to_pixel;
use crate::*;

/// What a ray hit, if anything.
///
/// Immutable once computed.
#[derive(Clone)]
pub struct Raycast {
    hit: Option<Target>,
    border: Option<Border>,
    point: Option<V2>,
    ray: Ray,
    source: Option<Arc<dyn SceneObject>>,
    length: f64,
}

impl Raycast {
    pub(crate) fn new(
        ray: Ray,
        source: Option<Arc<dyn SceneObject>>,
        hit: Option<(Target, BorderHit)>,
    ) -> Raycast {
        match hit {
            Some((target, hit)) => Raycast {
                hit: Some(target),
                border: Some(hit.border),
                point: Some(hit.point),
                ray,
                source,
                length: hit.length,
            },
            None => Raycast {
                hit: None,
                border: None,
                point: None,
                ray,
                source,
                length: f64::INFINITY,
            },
        }
    }

    pub fn builder() -> RaycastBuilder {
        RaycastBuilder::new()
    }

    /// Cast from a point against the active map.
    pub fn from_origin(origin: V2, direction: V2, options: CastOptions) -> Result<Raycast> {
        options
            .apply(RaycastBuilder::new().origin(origin).direction(direction))
            .calculate()
    }

    /// Cast from an object in the direction it faces.
    pub fn from_object(source: Arc<dyn SceneObject>, options: CastOptions) -> Result<Raycast> {
        options
            .apply(RaycastBuilder::new().source(source))
            .calculate()
    }

    /// Cast from an object towards `angle` degrees, whichever way it faces.
    pub fn at_angle(
        source: Arc<dyn SceneObject>,
        angle: f64,
        options: CastOptions,
    ) -> Result<Raycast> {
        options
            .apply(RaycastBuilder::new().source(source).direction_angle(angle))
            .calculate()
    }

    /// The object or map that was hit.
    pub fn hit(&self) -> Option<&Target> {
        self.hit.as_ref()
    }

    /// The hit object. `None` when nothing or only map walls were hit.
    pub fn object(&self) -> Option<&Arc<dyn SceneObject>> {
        self.hit.as_ref().and_then(Target::as_object)
    }

    pub fn border(&self) -> Option<&Border> {
        self.border.as_ref()
    }

    /// The hit border, if it was a segment.
    pub fn segment(&self) -> Option<&Segment> {
        self.border.as_ref().and_then(Border::as_segment)
    }

    /// The hit border, if it was a circle.
    pub fn circle(&self) -> Option<&Circle> {
        self.border.as_ref().and_then(Border::as_circle)
    }

    /// Where the ray hit.
    pub fn point(&self) -> Option<V2> {
        self.point
    }

    pub fn ray(&self) -> &Ray {
        &self.ray
    }

    /// Where the ray started.
    pub fn root(&self) -> V2 {
        self.ray.origin()
    }

    pub fn source(&self) -> Option<&Arc<dyn SceneObject>> {
        self.source.as_ref()
    }

    pub fn collided(&self) -> bool {
        self.hit.is_some()
    }

    /// Distance from the root to the hit, infinite if nothing was hit.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// The stretch of the ray that was travelled before the hit.
    pub fn line(&self) -> Option<Segment> {
        self.point.map(|p| Segment::new(self.root(), p))
    }

    /// Draw the travelled stretch of the ray. Rays that hit nothing have no
    /// end and are not drawn.
    pub fn draw(&self, canvas: &mut dyn Canvas, color: Color) {
        if let Some(line) = self.line() {
            if self.length.is_finite() {
                canvas.draw_line(to_pixel(line.start), to_pixel(line.end), color);
            }
        }
    }
}

impl fmt::Debug for Raycast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Raycast")
            .field("hit", &self.hit)
            .field("border", &self.border)
            .field("point", &self.point)
            .field("ray", &self.ray)
            .field("source", &self.source.as_ref().map(|s| s.id()))
            .field("length", &self.length)
            .finish()
    }
}

/// Optional settings for the [Raycast] shortcuts.
pub struct CastOptions {
    kind: Option<TypeId>,
    filter: Option<Filter>,
    ignore: Vec<ObjectId>,
    max_distance: f64,
}

impl Default for CastOptions {
    fn default() -> CastOptions {
        CastOptions {
            kind: None,
            filter: None,
            ignore: vec![],
            max_distance: f64::INFINITY,
        }
    }
}

impl CastOptions {
    pub fn new() -> CastOptions {
        Default::default()
    }

    /// Only objects of concrete type `T` can be hit.
    pub fn of_type<T: SceneObject + 'static>(mut self) -> CastOptions {
        self.kind = Some(TypeId::of::<T>());
        self
    }

    pub fn filter(
        mut self,
        filter: impl Fn(&dyn SceneObject) -> bool + Send + Sync + 'static,
    ) -> CastOptions {
        self.filter = Some(Box::new(filter));
        self
    }

    pub fn ignore(mut self, ids: impl IntoIterator<Item = ObjectId>) -> CastOptions {
        self.ignore = ids.into_iter().collect();
        self
    }

    pub fn max_distance(mut self, max_distance: f64) -> CastOptions {
        self.max_distance = max_distance;
        self
    }

    fn apply(self, builder: RaycastBuilder) -> RaycastBuilder {
        let builder = builder
            .kind(self.kind)
            .ignore(self.ignore)
            .max_distance(self.max_distance);
        match self.filter {
            Some(f) => builder.boxed_filter(f),
            None => builder,
        }
    }
}

impl fmt::Debug for CastOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CastOptions")
            .field("kind", &self.kind)
            .field("filtered", &self.filter.is_some())
            .field("ignore", &self.ignore)
            .field("max_distance", &self.max_distance)
            .finish()
    }
}
