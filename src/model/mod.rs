//! Wire model for synthetic detection events.

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;


/// Threat classification attached to every reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ThreatLevel {
    Low,
    Medium,
    High,
}

impl ThreatLevel {
    pub const ALL: [ThreatLevel; 3] = [ThreatLevel::Low, ThreatLevel::Medium, ThreatLevel::High];
}

/// One synthetic drone-detection event.
///
/// Field names on the wire follow the public API contract: `city` carries the
/// name of the region the coordinates were drawn from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub id: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "threatLevel")]
    pub threat_level: ThreatLevel,
}

impl Reading {
    /// Clone with the id replaced. Only used when a queried-but-absent id is
    /// materialized under the caller's id.
    pub fn with_id(&self, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..self.clone()
        }
    }
}
