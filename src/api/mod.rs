//! HTTP query boundary: detection list/lookup and a liveness probe.

#[cfg(test)]
mod api_test;

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tokio::sync::watch;
use tracing::info;
use warp::http::StatusCode;
use warp::Filter;
use warp::Rejection;
use warp::Reply;

use crate::QueryService;

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "Drone Coordinates Generator";

/// Full route tree under `/api`.
pub fn routes(
    query: Arc<QueryService>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let list = warp::path!("api" / "detections")
        .and(warp::get())
        .and(with_query(query.clone()))
        .map(|query: Arc<QueryService>| warp::reply::json(&query.list()));

    let get_by_id = warp::path!("api" / "detections" / String)
        .and(warp::get())
        .and(with_query(query))
        .map(|id: String, query: Arc<QueryService>| match query.get_by_id(&id) {
            Some(reading) => {
                warp::reply::with_status(warp::reply::json(&reading), StatusCode::OK)
            }
            None => warp::reply::with_status(
                warp::reply::json(&json!({
                    "error": "detection not found",
                    "id": id,
                })),
                StatusCode::NOT_FOUND,
            ),
        });

    let health = warp::path!("api" / "health").and(warp::get()).map(|| {
        warp::reply::json(&json!({
            "status": "UP",
            "timestamp": Utc::now(),
            "service": SERVICE_NAME,
        }))
    });

    list.or(get_by_id).or(health)
}

/// Serves the query API until the shutdown signal fires.
pub async fn start_server(
    addr: SocketAddr,
    query: Arc<QueryService>,
    mut shutdown_signal: watch::Receiver<()>,
) {
    let (bound, server) =
        warp::serve(routes(query)).bind_with_graceful_shutdown(addr, async move {
            let _ = shutdown_signal.changed().await;
        });
    info!(address = %bound, "query api listening");
    server.await;
}

fn with_query(
    query: Arc<QueryService>,
) -> impl Filter<Extract = (Arc<QueryService>,), Error = Infallible> + Clone {
    warp::any().map(move || query.clone())
}
