use std::sync::Arc;

use dronesim::api;
use dronesim::BroadcastPublisher;
use dronesim::Broadcaster;
use dronesim::CoordinateGenerator;
use dronesim::DetectionCache;
use dronesim::Error;
use dronesim::QueryService;
use dronesim::RegionCatalog;
use dronesim::Result;
use dronesim::SimulatorConfig;
use tokio::signal::unix::signal;
use tokio::signal::unix::SignalKind;
use tokio::sync::watch;
use tracing::debug;
use tracing::error;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> Result<()> {
    let settings = SimulatorConfig::load(None)?;

    // Initializing Logs
    init_observability();

    // Initializing Shutdown Signal
    let (graceful_tx, graceful_rx) = watch::channel(());

    // Wire the pipeline: catalog -> generator -> broadcaster / query service
    let catalog = Arc::new(RegionCatalog::from_configs(&settings.regions)?);
    info!(regions = catalog.len(), "region catalog loaded");

    let generator = Arc::new(CoordinateGenerator::new(catalog));
    let publisher = Arc::new(BroadcastPublisher::new(
        settings.simulator.broadcast_capacity,
    ));
    let cache = Arc::new(DetectionCache::new());
    let query = Arc::new(QueryService::new(generator.clone(), cache));

    // Drain subscriber mirroring received readings into the logs.
    let mut feed = publisher.subscribe();
    tokio::spawn(async move {
        while let Ok(reading) = feed.recv().await {
            debug!(id = %reading.id, city = %reading.city, "received reading");
        }
    });

    let broadcaster = Broadcaster::new(
        generator,
        publisher.clone(),
        settings.simulator.interval_ms,
    );
    tokio::spawn(broadcaster.run(graceful_rx.clone()));

    info!("Application started. Waiting for CTRL+C signal...");
    // Listen on Shutdown Signal
    tokio::spawn(async {
        if let Err(e) = graceful_shutdown(graceful_tx).await {
            error!("Failed to shutdown: {:?}", e);
        }
    });

    api::start_server(settings.simulator.listen_address, query, graceful_rx).await;

    println!("Exiting program.");
    Ok(())
}

async fn graceful_shutdown(graceful_tx: watch::Sender<()>) -> Result<()> {
    info!("Shutdown server..");
    let mut sigint = signal(SignalKind::interrupt()).map_err(|e| Error::Fatal(e.to_string()))?;
    let mut sigterm = signal(SignalKind::terminate()).map_err(|e| Error::Fatal(e.to_string()))?;
    tokio::select! {
        _ = sigint.recv() => {
            info!("SIGINT detected.");
        },
        _ = sigterm.recv() => {
            info!("SIGTERM detected.");
        },
        _ = tokio::signal::ctrl_c() => {
            info!("Ctrl+C detected.");
        },
    }

    graceful_tx.send(()).map_err(|e| {
        error!("Failed to send shutdown signal: {}", e);
        Error::Fatal(format!("Failed to send shutdown signal: {}", e))
    })?;

    info!("Shutdown completed");
    Ok(())
}

fn init_observability() {
    let base_subscriber = tracing_subscriber::fmt::layer().with_filter(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    );
    tracing_subscriber::registry().with(base_subscriber).init();
}
