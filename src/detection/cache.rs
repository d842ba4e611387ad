use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::Reading;

/// Process-lifetime store of readings keyed by id. Nothing evicts.
///
/// DashMap gives per-shard locking, so concurrent lookups and inserts for
/// different ids never contend on a single lock.
#[derive(Default)]
pub struct DetectionCache {
    readings: DashMap<String, Reading>,
}

impl DetectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn get(&self, id: &str) -> Option<Reading> {
        self.readings.get(id).map(|entry| entry.value().clone())
    }

    pub fn insert(&self, reading: Reading) {
        self.readings.insert(reading.id.clone(), reading);
    }

    /// Atomic check-then-insert for one id.
    ///
    /// The entry lock is held across the synthesize step, so concurrent
    /// callers racing on the same missing id insert exactly once and all
    /// observe the same reading. `synthesize` may decline by returning `None`.
    pub fn get_or_insert_with<F>(&self, id: &str, synthesize: F) -> Option<Reading>
    where
        F: FnOnce() -> Option<Reading>,
    {
        match self.readings.entry(id.to_string()) {
            Entry::Occupied(entry) => Some(entry.get().clone()),
            Entry::Vacant(entry) => {
                let reading = synthesize()?;
                entry.insert(reading.clone());
                Some(reading)
            }
        }
    }

    pub fn values(&self) -> Vec<Reading> {
        self.readings
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }
}
