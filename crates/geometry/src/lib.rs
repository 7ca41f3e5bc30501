//! 2D geometry for collision borders: vectors, rays, boxes, circles, and the
//! ray-versus-border machinery.
mod aabb;
mod border;
mod circle;
mod collision_tests;
mod errors;
mod obb;
mod ray;
mod raycasting;
mod segment;
mod shape;
mod transform;
mod v2;

pub use aabb::*;
pub use border::*;
pub use circle::*;
pub use errors::*;
pub use obb::*;
pub use ray::*;
pub use raycasting::*;
pub use segment::*;
pub use shape::*;
pub use transform::*;
pub use v2::*;
