use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::constants::CACHE_SEED_COUNT;
use crate::constants::KNOWN_MISSING_ID;
use crate::constants::READING_ID_PREFIX;
use crate::CoordinateGenerator;
use crate::DetectionCache;
use crate::Reading;

/// Serves list/get-by-id queries against the detection cache, synthesizing
/// entries on demand.
///
/// Materializing an arbitrary requested `dron-*` id is deliberate demo
/// scaffolding for an id-addressable API without a real backing store; a
/// production redesign would report not-found instead.
pub struct QueryService {
    generator: Arc<CoordinateGenerator>,
    cache: Arc<DetectionCache>,
    seed_lock: Mutex<()>,
}

impl QueryService {
    pub fn new(generator: Arc<CoordinateGenerator>, cache: Arc<DetectionCache>) -> Self {
        Self {
            generator,
            cache,
            seed_lock: Mutex::new(()),
        }
    }

    /// All cached readings, lazily seeding an empty cache first.
    ///
    /// The empty-check and the seed run under one lock so a concurrent first
    /// call never observes a partially seeded cache.
    pub fn list(&self) -> Vec<Reading> {
        {
            let _guard = self.seed_lock.lock();
            if self.cache.is_empty() {
                self.seed();
            }
        }
        self.cache.values()
    }

    /// Looks up one reading by id.
    ///
    /// A miss on an id carrying the recognized prefix (sentinel excluded) is
    /// materialized under the requested id. With an empty catalog nothing can
    /// be synthesized and the miss stays a miss.
    pub fn get_by_id(&self, id: &str) -> Option<Reading> {
        if let Some(reading) = self.cache.get(id) {
            return Some(reading);
        }

        if !id.starts_with(READING_ID_PREFIX) || id == KNOWN_MISSING_ID {
            return None;
        }

        self.cache
            .get_or_insert_with(id, || self.generator.generate().map(|r| r.with_id(id)))
    }

    // Caller holds the seed lock.
    fn seed(&self) {
        for _ in 0..CACHE_SEED_COUNT {
            if let Some(reading) = self.generator.generate() {
                self.cache.insert(reading);
            }
        }
        debug!(count = self.cache.len(), "seeded detection cache");
    }
}
