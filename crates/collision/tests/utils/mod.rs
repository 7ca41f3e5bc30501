//! Minimal scene objects and maps for driving raycasts from tests.
#![allow(dead_code)]
use std::any::Any;
use std::sync::{Arc, Mutex, RwLock, Weak};

use sightline_collision::*;

pub struct TestObject {
    id: ObjectId,
    place: Mutex<(V2, f64)>,
    size: Option<V2>,
    collider: Option<Collider>,
    map: RwLock<Weak<TestMap>>,
    ignored: bool,
    pixels: Option<bool>,
}

impl TestObject {
    /// An object with a default collider.
    pub fn new(location: V2, size: V2) -> TestObject {
        TestObject {
            id: ObjectId::next(),
            place: Mutex::new((location, 0.0)),
            size: Some(size),
            collider: Some(Collider::default()),
            map: RwLock::new(Weak::new()),
            ignored: false,
            pixels: None,
        }
    }

    pub fn rotated(self, rotation: f64) -> TestObject {
        let location = self.location();
        *self.place.lock().unwrap() = (location, rotation);
        self
    }

    pub fn with_collider(self, collider: impl Into<Collider>) -> TestObject {
        TestObject {
            collider: Some(collider.into()),
            ..self
        }
    }

    pub fn without_collider(self) -> TestObject {
        TestObject {
            collider: None,
            ..self
        }
    }

    pub fn without_image(self) -> TestObject {
        TestObject { size: None, ..self }
    }

    pub fn ignored_by_rays(self) -> TestObject {
        TestObject {
            ignored: true,
            ..self
        }
    }

    /// Pretend the host's pixel test always answers `overlap`.
    pub fn with_pixels(self, overlap: bool) -> TestObject {
        TestObject {
            pixels: Some(overlap),
            ..self
        }
    }

    pub fn move_to(&self, location: V2, rotation: f64) {
        *self.place.lock().unwrap() = (location, rotation);
    }

    pub fn detached(self) -> Arc<TestObject> {
        Arc::new(self)
    }
}

impl SceneObject for TestObject {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn location(&self) -> V2 {
        self.place.lock().unwrap().0
    }

    fn rotation(&self) -> f64 {
        self.place.lock().unwrap().1
    }

    fn size(&self) -> Option<V2> {
        self.size
    }

    fn collider(&self) -> Option<&Collider> {
        self.collider.as_ref()
    }

    fn map(&self) -> Option<Arc<dyn SceneMap>> {
        let map = self.map.read().unwrap().upgrade()?;
        Some(map)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn ignore_on_raycasts(&self) -> bool {
        self.ignored
    }

    fn pixels_overlap(&self, _other: &dyn SceneObject) -> Option<bool> {
        self.pixels
    }
}

/// A second object type, for type filters.
pub struct Decoy(pub TestObject);

impl SceneObject for Decoy {
    fn id(&self) -> ObjectId {
        self.0.id()
    }

    fn location(&self) -> V2 {
        self.0.location()
    }

    fn rotation(&self) -> f64 {
        self.0.rotation()
    }

    fn size(&self) -> Option<V2> {
        self.0.size()
    }

    fn collider(&self) -> Option<&Collider> {
        self.0.collider()
    }

    fn map(&self) -> Option<Arc<dyn SceneMap>> {
        self.0.map()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub struct TestMap {
    id: ObjectId,
    width: u32,
    height: u32,
    bounded: bool,
    ignored: bool,
    boundary: Collider,
    objects: RwLock<Vec<Arc<dyn SceneObject>>>,
}

impl TestMap {
    pub fn new(width: u32, height: u32) -> Arc<TestMap> {
        TestMap::build(width, height, true, false)
    }

    pub fn unbounded(width: u32, height: u32) -> Arc<TestMap> {
        TestMap::build(width, height, false, false)
    }

    pub fn ignored_by_rays(width: u32, height: u32) -> Arc<TestMap> {
        TestMap::build(width, height, true, true)
    }

    fn build(width: u32, height: u32, bounded: bool, ignored: bool) -> Arc<TestMap> {
        Arc::new(TestMap {
            id: ObjectId::next(),
            width,
            height,
            bounded,
            ignored,
            boundary: MapBoundaryCollider::new().into(),
            objects: RwLock::new(vec![]),
        })
    }

    pub fn add(self: &Arc<Self>, object: TestObject) -> Arc<TestObject> {
        *object.map.write().unwrap() = Arc::downgrade(self);
        let object = Arc::new(object);
        self.objects.write().unwrap().push(object.clone());
        object
    }

    pub fn add_decoy(self: &Arc<Self>, object: TestObject) -> Arc<Decoy> {
        *object.map.write().unwrap() = Arc::downgrade(self);
        let decoy = Arc::new(Decoy(object));
        self.objects.write().unwrap().push(decoy.clone());
        decoy
    }

    pub fn as_scene_map(self: &Arc<Self>) -> Arc<dyn SceneMap> {
        self.clone()
    }
}

impl SceneMap for TestMap {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn objects(&self) -> Vec<Arc<dyn SceneObject>> {
        self.objects.read().unwrap().clone()
    }

    fn is_bounded(&self) -> bool {
        self.bounded
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn boundary(&self) -> &Collider {
        &self.boundary
    }

    fn ignore_on_raycasts(&self) -> bool {
        self.ignored
    }
}

pub fn hit_id(cast: &Raycast) -> Option<ObjectId> {
    cast.hit().map(|t| t.id())
}
