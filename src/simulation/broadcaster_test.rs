use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::watch;
use tokio::time::timeout;
use tokio::time::Duration;

use super::publisher::MockPublisher;
use super::*;
use crate::constants::BROADCAST_TOPIC;
use crate::Error;
use crate::PublishError;
use crate::RegionCatalog;
use crate::RegionConfig;

fn generator(configs: Vec<RegionConfig>) -> Arc<CoordinateGenerator> {
    let catalog = Arc::new(RegionCatalog::from_configs(&configs).unwrap());
    Arc::new(CoordinateGenerator::with_rng(
        catalog,
        StdRng::seed_from_u64(21),
    ))
}

fn medellin() -> RegionConfig {
    RegionConfig {
        name: "Medellín".to_string(),
        lat_range: vec![6.20, 6.35],
        lon_range: vec![-75.65, -75.50],
    }
}

#[test]
fn tick_publishes_one_reading_on_the_fixed_topic() {
    let mut publisher = MockPublisher::new();
    publisher
        .expect_publish()
        .times(1)
        .withf(|topic, reading| topic == BROADCAST_TOPIC && reading.city == "Medellín")
        .returning(|_, _| Ok(()));

    let broadcaster = Broadcaster::new(generator(vec![medellin()]), Arc::new(publisher), 3000);
    broadcaster.tick();
}

#[test]
fn tick_with_empty_catalog_skips_publish() {
    let mut publisher = MockPublisher::new();
    publisher.expect_publish().times(0);

    let broadcaster = Broadcaster::new(generator(vec![]), Arc::new(publisher), 3000);
    broadcaster.tick();
}

#[test]
fn publish_failure_does_not_stop_subsequent_ticks() {
    let mut publisher = MockPublisher::new();
    publisher.expect_publish().times(3).returning(|_, _| {
        Err(Error::Publish(PublishError::ChannelClosed(
            "transport gone".to_string(),
        )))
    });

    let broadcaster = Broadcaster::new(generator(vec![medellin()]), Arc::new(publisher), 3000);
    broadcaster.tick();
    broadcaster.tick();
    broadcaster.tick();
}

#[tokio::test]
async fn run_stops_on_shutdown_signal() {
    let mut publisher = MockPublisher::new();
    publisher.expect_publish().returning(|_, _| Ok(()));

    let broadcaster = Broadcaster::new(generator(vec![medellin()]), Arc::new(publisher), 10);
    let (shutdown_tx, shutdown_rx) = watch::channel(());
    let handle = tokio::spawn(broadcaster.run(shutdown_rx));

    shutdown_tx.send(()).unwrap();
    timeout(Duration::from_secs(1), handle)
        .await
        .expect("broadcaster did not stop on shutdown")
        .unwrap();
}

#[tokio::test(start_paused = true)]
async fn run_ticks_on_the_configured_cadence() {
    let mut publisher = MockPublisher::new();
    // First tick fires immediately, then one per interval.
    publisher
        .expect_publish()
        .times(1..=4)
        .returning(|_, _| Ok(()));

    let broadcaster = Broadcaster::new(generator(vec![medellin()]), Arc::new(publisher), 1000);
    let (shutdown_tx, shutdown_rx) = watch::channel(());
    let handle = tokio::spawn(broadcaster.run(shutdown_rx));

    tokio::time::sleep(Duration::from_millis(3100)).await;
    shutdown_tx.send(()).unwrap();
    handle.await.unwrap();
}
