//! Process-wide collision settings.
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, warn};

/// Environment variable consulted by [CollisionConfig::from_env].
pub const GUARDED_EDGE_CACHE_ENV: &str = "SIGHTLINE_GUARDED_EDGE_CACHE";

static GUARDED_EDGE_CACHE: AtomicBool = AtomicBool::new(false);

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CollisionConfig {
    /// Guard each default collider's edge cache with a lock, so that rays may
    /// be cast from threads other than the one driving the simulation.
    ///
    /// Off by default: the simulation is single threaded and the unguarded
    /// path skips the lock.
    pub guarded_edge_cache: bool,
}

impl CollisionConfig {
    /// The settings currently in effect.
    pub fn current() -> CollisionConfig {
        CollisionConfig {
            guarded_edge_cache: guarded_edge_cache(),
        }
    }

    /// Read settings from the environment, falling back to the defaults.
    pub fn from_env() -> CollisionConfig {
        let raw = std::env::var(GUARDED_EDGE_CACHE_ENV).ok();
        CollisionConfig {
            guarded_edge_cache: raw.as_deref().map_or(false, parse_flag),
        }
    }

    /// Make these settings the ones in effect for the whole process.
    pub fn install(&self) {
        set_guarded_edge_cache(self.guarded_edge_cache);
    }
}

fn parse_flag(raw: &str) -> bool {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "" | "0" | "false" | "no" | "off" => false,
        other => {
            warn!(
                "Ignoring unrecognized value {:?} for {}",
                other, GUARDED_EDGE_CACHE_ENV
            );
            false
        }
    }
}

pub fn set_guarded_edge_cache(guarded: bool) {
    let old = GUARDED_EDGE_CACHE.swap(guarded, Ordering::Relaxed);
    if old != guarded {
        debug!("Edge cache guarding changed to {}", guarded);
    }
}

pub fn guarded_edge_cache() -> bool {
    GUARDED_EDGE_CACHE.load(Ordering::Relaxed)
}
