use tokio::sync::broadcast;
use tracing::trace;

use crate::Reading;
use crate::Result;

#[cfg(test)]
use mockall::automock;

/// Transport seam between the broadcaster and the pub/sub layer.
///
/// The core only needs "publish(topic, message)"; handshakes, subscriptions
/// and wire framing belong to the transport behind this trait.
#[cfg_attr(test, automock)]
pub trait Publisher: Send + Sync {
    fn publish(&self, topic: &str, reading: &Reading) -> Result<()>;
}

/// Fan-out over a tokio broadcast channel.
///
/// Subscribers only observe readings sent after they subscribe; there is no
/// replay. Sending with zero receivers is a normal idle state for a
/// fire-and-forget feed, not an error.
pub struct BroadcastPublisher {
    tx: broadcast::Sender<Reading>,
}

impl BroadcastPublisher {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Attach a new subscriber to the feed.
    pub fn subscribe(&self) -> broadcast::Receiver<Reading> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Publisher for BroadcastPublisher {
    fn publish(&self, topic: &str, reading: &Reading) -> Result<()> {
        match self.tx.send(reading.clone()) {
            Ok(subscribers) => {
                trace!(topic, subscribers, id = %reading.id, "reading published");
            }
            Err(_) => {
                // No receivers right now; the reading is simply dropped.
                trace!(topic, id = %reading.id, "no subscribers, reading dropped");
            }
        }
        Ok(())
    }
}
