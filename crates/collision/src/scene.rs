//! The host's view of the scene: positioned objects and the maps holding them.
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use log::debug;

use sightline_geometry::{Transform, V2};

use crate::*;

/// A positioned object in a scene, implemented by the host.
pub trait SceneObject: Send + Sync {
    fn id(&self) -> ObjectId;

    fn location(&self) -> V2;

    /// Facing angle in degrees, clockwise on a y-down screen.
    fn rotation(&self) -> f64;

    /// Rendered size of the object's image. `None` if it has no image, which
    /// makes it invisible to rays.
    fn size(&self) -> Option<V2>;

    fn collider(&self) -> Option<&Collider>;

    /// The map the object currently lives in.
    fn map(&self) -> Option<Arc<dyn SceneMap>>;

    /// Used to filter objects by their concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Objects answering true are skipped by every raycast.
    fn ignore_on_raycasts(&self) -> bool {
        false
    }

    /// The host's pixel-accurate overlap test, if it has one.
    fn pixels_overlap(&self, _other: &dyn SceneObject) -> Option<bool> {
        None
    }

    fn transform(&self) -> Transform {
        Transform::new(self.location(), self.rotation())
    }

    fn pose(&self) -> Pose {
        Pose {
            transform: self.transform(),
            size: self.size().unwrap_or(V2::ZERO),
        }
    }
}

/// A map of `width` by `height` cells holding scene objects.
pub trait SceneMap: Send + Sync {
    fn id(&self) -> ObjectId;

    fn objects(&self) -> Vec<Arc<dyn SceneObject>>;

    /// Objects whose concrete type is `kind`, or all of them.
    fn find_all(&self, kind: Option<TypeId>) -> Vec<Arc<dyn SceneObject>> {
        let mut objects = self.objects();
        if let Some(kind) = kind {
            objects.retain(|o| o.as_any().type_id() == kind);
        }
        objects
    }

    /// Whether the map is walled in. Only bounded maps take part in raycasts.
    fn is_bounded(&self) -> bool;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Normally a [MapBoundaryCollider].
    fn boundary(&self) -> &Collider;

    fn ignore_on_raycasts(&self) -> bool {
        false
    }

    /// Maps sit at the origin, unrotated, with their dimensions as their size.
    fn pose(&self) -> Pose {
        Pose::new(
            V2::ZERO,
            0.0,
            V2::new(self.width() as f64, self.height() as f64),
        )
    }
}

/// Something a ray can hit: an object or the walls of a map.
#[derive(Clone)]
pub enum Target {
    Object(Arc<dyn SceneObject>),
    Map(Arc<dyn SceneMap>),
}

impl Target {
    pub fn id(&self) -> ObjectId {
        match self {
            Target::Object(o) => o.id(),
            Target::Map(m) => m.id(),
        }
    }

    pub fn pose(&self) -> Pose {
        match self {
            Target::Object(o) => o.pose(),
            Target::Map(m) => m.pose(),
        }
    }

    pub fn collider(&self) -> Option<&Collider> {
        match self {
            Target::Object(o) => o.collider(),
            Target::Map(m) => Some(m.boundary()),
        }
    }

    pub fn ignore_on_raycasts(&self) -> bool {
        match self {
            Target::Object(o) => o.ignore_on_raycasts(),
            Target::Map(m) => m.ignore_on_raycasts(),
        }
    }

    pub fn as_object(&self) -> Option<&Arc<dyn SceneObject>> {
        match self {
            Target::Object(o) => Some(o),
            Target::Map(_) => None,
        }
    }

    pub fn as_map(&self) -> Option<&Arc<dyn SceneMap>> {
        match self {
            Target::Map(m) => Some(m),
            Target::Object(_) => None,
        }
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Target::Map(_))
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Object(o) => write!(f, "Object({})", o.id()),
            Target::Map(m) => write!(f, "Map({})", m.id()),
        }
    }
}

impl From<Arc<dyn SceneObject>> for Target {
    fn from(o: Arc<dyn SceneObject>) -> Target {
        Target::Object(o)
    }
}

impl From<Arc<dyn SceneMap>> for Target {
    fn from(m: Arc<dyn SceneMap>) -> Target {
        Target::Map(m)
    }
}

static ACTIVE_MAP: RwLock<Option<Arc<dyn SceneMap>>> = RwLock::new(None);

/// Set the map raycasts use when given neither a map nor a source object.
pub fn set_active_map(map: Option<Arc<dyn SceneMap>>) {
    debug!("Active map is now {:?}", map.as_ref().map(|m| m.id()));
    *ACTIVE_MAP.write().unwrap_or_else(PoisonError::into_inner) = map;
}

pub fn active_map() -> Option<Arc<dyn SceneMap>> {
    ACTIVE_MAP
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}
