//! Step-by-step configuration of a raycast against a scene.
use std::any::TypeId;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use log::{debug, trace};

use sightline_geometry::{cast, Border, Ray, V2};

use crate::*;

/// A predicate deciding whether an object may be hit.
pub type Filter = Box<dyn Fn(&dyn SceneObject) -> bool + Send + Sync>;

/// Which objects of the map are candidates.
enum Scope {
    /// Everything of this concrete type, or everything.
    Kind(Option<TypeId>),
    /// Exactly these objects.
    Objects(Vec<Arc<dyn SceneObject>>),
}

/// Configures and runs a single raycast.
///
/// Some settings replace each other: setting an origin drops the source
/// object, setting a source drops the explicit map (the source's own map is
/// used instead), and a type filter and an explicit object list cannot be
/// combined. Without a source or a map, the [active map](active_map) is used.
pub struct RaycastBuilder {
    origin: V2,
    direction: V2,
    max_distance: f64,
    source: Option<Arc<dyn SceneObject>>,
    map: Option<Arc<dyn SceneMap>>,
    scope: Scope,
    filter: Option<Filter>,
    ignored: Vec<ObjectId>,
}

impl Default for RaycastBuilder {
    fn default() -> RaycastBuilder {
        RaycastBuilder {
            origin: V2::ZERO,
            direction: V2::RIGHT,
            max_distance: f64::INFINITY,
            source: None,
            map: active_map(),
            scope: Scope::Kind(None),
            filter: None,
            ignored: vec![],
        }
    }
}

impl RaycastBuilder {
    pub fn new() -> RaycastBuilder {
        Default::default()
    }

    /// Start the ray here. Clears the source object.
    pub fn origin(mut self, origin: V2) -> RaycastBuilder {
        self.origin = origin;
        self.source = None;
        self
    }

    /// Need not be normalized, but must not be zero.
    pub fn direction(mut self, direction: V2) -> RaycastBuilder {
        self.direction = direction;
        self
    }

    pub fn direction_angle(self, degrees: f64) -> RaycastBuilder {
        self.direction(V2::angled(degrees, 1.0))
    }

    /// Origin and direction from a ray. Clears the source object.
    pub fn ray(self, ray: Ray) -> RaycastBuilder {
        self.origin(ray.origin()).direction(ray.direction())
    }

    /// Infinite by default. Hits exactly this far away still count.
    pub fn max_distance(mut self, max_distance: f64) -> RaycastBuilder {
        self.max_distance = max_distance;
        self
    }

    /// Cast from `source` in the direction it faces, within the map it lives in.
    ///
    /// The source itself is never hit.
    pub fn source(mut self, source: Arc<dyn SceneObject>) -> RaycastBuilder {
        self.origin = source.location();
        self.direction = V2::angled(source.rotation(), 1.0);
        self.map = None;
        self.source = Some(source);
        self
    }

    pub fn clear_source(mut self) -> RaycastBuilder {
        self.source = None;
        if self.map.is_none() {
            self.map = active_map();
        }
        self
    }

    /// Cast within `map`. Clears the source object.
    pub fn map(mut self, map: Arc<dyn SceneMap>) -> RaycastBuilder {
        self.map = Some(map);
        self.source = None;
        self
    }

    pub fn clear_map(mut self) -> RaycastBuilder {
        self.map = None;
        if self.source.is_none() && matches!(self.scope, Scope::Kind(_)) {
            self.map = active_map();
        }
        self
    }

    /// Only objects of concrete type `T` can be hit. Clears any explicit object list.
    pub fn of_type<T: SceneObject + 'static>(self) -> RaycastBuilder {
        self.kind(Some(TypeId::of::<T>()))
    }

    /// Objects of any type can be hit. Clears any explicit object list.
    pub fn any_type(self) -> RaycastBuilder {
        self.kind(None)
    }

    pub fn kind(mut self, kind: Option<TypeId>) -> RaycastBuilder {
        self.scope = Scope::Kind(kind);
        self
    }

    /// Only these objects can be hit, along with the map's walls. Clears the type filter.
    pub fn objects(
        mut self,
        objects: impl IntoIterator<Item = Arc<dyn SceneObject>>,
    ) -> RaycastBuilder {
        self.scope = Scope::Objects(objects.into_iter().collect());
        self
    }

    /// Replace the filter.
    pub fn filter(
        self,
        filter: impl Fn(&dyn SceneObject) -> bool + Send + Sync + 'static,
    ) -> RaycastBuilder {
        self.boxed_filter(Box::new(filter))
    }

    pub fn boxed_filter(mut self, filter: Filter) -> RaycastBuilder {
        self.filter = Some(filter);
        self
    }

    /// Require objects to pass `filter` as well as the current filter.
    pub fn and_filter(
        mut self,
        filter: impl Fn(&dyn SceneObject) -> bool + Send + Sync + 'static,
    ) -> RaycastBuilder {
        self.filter = Some(match self.filter.take() {
            Some(old) => Box::new(move |o| old(o) && filter(o)),
            None => Box::new(filter),
        });
        self
    }

    pub fn clear_filter(mut self) -> RaycastBuilder {
        self.filter = None;
        self
    }

    /// Replace the list of objects (or maps) the ray passes through.
    pub fn ignore(mut self, ids: impl IntoIterator<Item = ObjectId>) -> RaycastBuilder {
        self.ignored = ids.into_iter().collect();
        self
    }

    /// Run the raycast.
    pub fn calculate(self) -> Result<Raycast> {
        if self.max_distance.is_nan() || self.max_distance < 0.0 {
            return Err(Error::InvalidMaxDistance(self.max_distance));
        }
        let ray = Ray::new(self.origin, self.direction)?;

        let map = match &self.source {
            Some(source) => Some(source.map().ok_or_else(|| Error::Detached(source.id()))?),
            None => self.map.clone(),
        };

        let objects = match self.scope {
            Scope::Objects(objects) => objects,
            Scope::Kind(kind) => map.as_ref().ok_or(Error::NoMap)?.find_all(kind),
        };

        let mut excluded: HashSet<ObjectId> = self.ignored.iter().copied().collect();
        if let Some(source) = &self.source {
            excluded.insert(source.id());
        }

        let filter = self.filter.as_ref();
        let mut candidates: Vec<Target> = objects
            .into_iter()
            .filter(|o| !o.ignore_on_raycasts())
            .filter(|o| o.size().is_some())
            .filter(|o| filter.map_or(true, |f| f(&**o)))
            .map(Target::Object)
            .collect();
        if let Some(map) = map {
            if map.is_bounded() {
                candidates.push(Target::Map(map));
            }
        }
        candidates.retain(|c| !c.ignore_on_raycasts() && excluded.insert(c.id()));

        if self.max_distance.is_finite() && self.max_distance > 0.0 {
            let before = candidates.len();
            let origin = ray.origin();
            candidates.retain(|c| within_reach(c, origin, self.max_distance));
            trace!(
                "Broad phase kept {} of {} candidates",
                candidates.len(),
                before
            );
        }

        let mut borders: Vec<Border> = vec![];
        let mut owners: Vec<usize> = vec![];
        for (index, candidate) in candidates.iter().enumerate() {
            if let Some(collider) = candidate.collider() {
                let facing = collider.borders_facing(&candidate.pose(), ray.origin());
                owners.extend(std::iter::repeat(index).take(facing.len()));
                borders.extend(facing);
            }
        }

        let hit = cast(&ray, self.max_distance, &borders);
        debug!(
            "Raycast from {:?} towards {:?}: {} candidates, {} borders, hit {:?}",
            ray.origin(),
            ray.direction(),
            candidates.len(),
            borders.len(),
            hit.as_ref().map(|h| (candidates[owners[h.index]].id(), h.length))
        );

        let hit = hit.map(|h| (candidates[owners[h.index]].clone(), h));
        Ok(Raycast::new(ray, self.source, hit))
    }
}

/// Could anything of `candidate` lie within `max_distance` of `origin`?
///
/// Maps are always within reach.
fn within_reach(candidate: &Target, origin: V2, max_distance: f64) -> bool {
    let object = match candidate {
        Target::Object(o) => o,
        Target::Map(_) => return true,
    };
    let pose = object.pose();
    let radius = object
        .collider()
        .map_or(0.0, |c| c.bounding_radius(&pose))
        .max(pose.half_diagonal());
    let gap = (origin.distance(&pose.location()) - radius).max(0.0);
    gap.powi(2) <= max_distance.powi(2)
}

impl fmt::Debug for RaycastBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = match &self.scope {
            Scope::Kind(kind) => format!("{:?}", kind),
            Scope::Objects(objects) => format!("{} objects", objects.len()),
        };
        f.debug_struct("RaycastBuilder")
            .field("origin", &self.origin)
            .field("direction", &self.direction)
            .field("max_distance", &self.max_distance)
            .field("source", &self.source.as_ref().map(|s| s.id()))
            .field("map", &self.map.as_ref().map(|m| m.id()))
            .field("scope", &scope)
            .field("filtered", &self.filter.is_some())
            .field("ignored", &self.ignored)
            .finish()
    }
}
