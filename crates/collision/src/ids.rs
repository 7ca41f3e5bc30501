use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of an object or map within a scene.
///
/// Raycasts use ids to deduplicate candidates and to express ignore lists.
#[derive(
    Debug,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    derive_more::Display,
    derive_more::From,
    derive_more::Into,
)]
#[display(fmt = "#{}", _0)]
pub struct ObjectId(u64);

impl ObjectId {
    /// Allocate an id that is unique within this process.
    pub fn next() -> ObjectId {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        ObjectId(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}
