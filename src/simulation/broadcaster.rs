use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::info;
use tracing::warn;

use crate::constants::BROADCAST_TOPIC;
use crate::CoordinateGenerator;
use crate::Publisher;

/// Timer-driven actor pushing one generated reading per tick to the
/// broadcast topic.
///
/// There is a single ACTIVE state: the loop ticks forever at a fixed cadence
/// until the shutdown signal fires. Each tick is independent, a failed
/// publish never stalls or delays the schedule.
pub struct Broadcaster {
    generator: Arc<CoordinateGenerator>,
    publisher: Arc<dyn Publisher>,
    interval: Duration,
}

impl Broadcaster {
    pub fn new(
        generator: Arc<CoordinateGenerator>,
        publisher: Arc<dyn Publisher>,
        interval_ms: u64,
    ) -> Self {
        Self {
            generator,
            publisher,
            interval: Duration::from_millis(interval_ms),
        }
    }

    /// Runs the tick loop until `shutdown_signal` changes.
    pub async fn run(self, mut shutdown_signal: watch::Receiver<()>) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(interval_ms = self.interval.as_millis() as u64, "broadcaster started");
        loop {
            tokio::select! {
                _ = ticker.tick() => self.tick(),
                _ = shutdown_signal.changed() => {
                    info!("broadcaster stopped");
                    return;
                }
            }
        }
    }

    /// One scheduling step: generate, publish, log the outcome.
    pub(crate) fn tick(&self) {
        match self.generator.generate() {
            Some(reading) => {
                if let Err(e) = self.publisher.publish(BROADCAST_TOPIC, &reading) {
                    warn!(error = %e, id = %reading.id, "failed to publish reading");
                    return;
                }
                info!(
                    latitude = reading.latitude,
                    longitude = reading.longitude,
                    city = %reading.city,
                    threat_level = ?reading.threat_level,
                    "broadcast reading"
                );
            }
            None => {
                warn!("no reading generated: no regions configured");
            }
        }
    }
}
