/// Prefix carried by every generated reading id.
pub const READING_ID_PREFIX: &str = "dron-";

/// Length of the random suffix appended to [`READING_ID_PREFIX`].
pub const READING_ID_SUFFIX_LEN: usize = 8;

/// Sentinel id that must never resolve to a reading, cached or synthesized.
pub const KNOWN_MISSING_ID: &str = "dron-nonexistent";

/// The single topic all readings are published on.
pub const BROADCAST_TOPIC: &str = "coordinates-broadcast";

/// Number of generator calls used to seed an empty detection cache.
pub const CACHE_SEED_COUNT: usize = 10;

/// Alphabet for the random id suffix.
pub const READING_ID_ALPHABET: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];
