use std::sync::Arc;

use chrono::Utc;
use nanoid::nanoid;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::constants::READING_ID_ALPHABET;
use crate::constants::READING_ID_PREFIX;
use crate::constants::READING_ID_SUFFIX_LEN;
use crate::Reading;
use crate::RegionCatalog;
use crate::ThreatLevel;

/// Stochastic reading source bounded by the region catalog.
///
/// The rng lives behind a mutex so one generator instance can be shared by the
/// broadcaster and the query path via `Arc`. Production code seeds it from
/// entropy; tests inject a seeded rng through [`CoordinateGenerator::with_rng`].
pub struct CoordinateGenerator {
    catalog: Arc<RegionCatalog>,
    rng: Mutex<StdRng>,
}

impl CoordinateGenerator {
    pub fn new(catalog: Arc<RegionCatalog>) -> Self {
        Self::with_rng(catalog, StdRng::from_entropy())
    }

    /// Deterministic construction for tests
    pub fn with_rng(catalog: Arc<RegionCatalog>, rng: StdRng) -> Self {
        Self {
            catalog,
            rng: Mutex::new(rng),
        }
    }

    /// Produces one reading, or `None` when no regions are configured.
    ///
    /// `None` is the expected idle-mode outcome, not a failure: callers treat
    /// it as "no reading available this tick".
    pub fn generate(&self) -> Option<Reading> {
        let regions = self.catalog.regions();
        if regions.is_empty() {
            return None;
        }

        let mut rng = self.rng.lock();
        let region = &regions[rng.gen_range(0..regions.len())];
        let latitude = sample_axis(&mut rng, region.lat_min, region.lat_max);
        let longitude = sample_axis(&mut rng, region.lon_min, region.lon_max);
        let threat_level = ThreatLevel::ALL[rng.gen_range(0..ThreatLevel::ALL.len())];

        Some(Reading {
            id: next_reading_id(),
            city: region.name.clone(),
            latitude,
            longitude,
            timestamp: Utc::now(),
            threat_level,
        })
    }
}

/// Fresh collision-tolerant id: fixed prefix plus a short random suffix.
pub fn next_reading_id() -> String {
    format!(
        "{}{}",
        READING_ID_PREFIX,
        nanoid!(READING_ID_SUFFIX_LEN, &READING_ID_ALPHABET)
    )
}

// Half-open uniform draw; a collapsed bound yields its single value.
fn sample_axis(rng: &mut StdRng, min: f64, max: f64) -> f64 {
    if min == max {
        min
    } else {
        rng.gen_range(min..max)
    }
}
