//! Collision borders and ray casting for objects in a 2D scene.
//!
//! Every positioned object may carry a [Collider], which describes the
//! object's silhouette as a set of [Border]s facing a query point. A
//! [RaycastBuilder] gathers candidate objects from a [SceneMap], asks their
//! colliders for borders, and resolves the nearest hit into a [Raycast].
mod builder;
mod collider;
mod config;
mod draw;
mod errors;
mod ids;
mod pose;
mod queries;
mod raycast;
mod scene;

pub use builder::*;
pub use collider::*;
pub use config::*;
pub use draw::*;
pub use errors::*;
pub use ids::*;
pub use pose::*;
pub use queries::*;
pub use raycast::*;
pub use scene::*;

pub use sightline_geometry::{Aabb, Border, Circle, Ray, Segment, Shape, Transform, V2};
