use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;
use crate::CoordinateGenerator;
use crate::DetectionCache;
use crate::Reading;
use crate::RegionCatalog;
use crate::RegionConfig;

fn query_service(configs: Vec<RegionConfig>) -> Arc<QueryService> {
    let catalog = Arc::new(RegionCatalog::from_configs(&configs).unwrap());
    let generator = Arc::new(CoordinateGenerator::with_rng(
        catalog,
        StdRng::seed_from_u64(99),
    ));
    Arc::new(QueryService::new(generator, Arc::new(DetectionCache::new())))
}

fn medellin() -> RegionConfig {
    RegionConfig {
        name: "Medellín".to_string(),
        lat_range: vec![6.20, 6.35],
        lon_range: vec![-75.65, -75.50],
    }
}

#[tokio::test]
async fn detections_returns_ten_seeded_readings() {
    let filter = routes(query_service(vec![medellin()]));

    let response = warp::test::request()
        .method("GET")
        .path("/api/detections")
        .reply(&filter)
        .await;

    assert_eq!(response.status(), 200);
    let readings: Vec<Reading> = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(readings.len(), 10);
    for reading in &readings {
        assert_eq!(reading.city, "Medellín");
    }
}

#[tokio::test]
async fn detection_by_id_materializes_the_requested_id() {
    let filter = routes(query_service(vec![medellin()]));

    let response = warp::test::request()
        .method("GET")
        .path("/api/detections/dron-test42xx")
        .reply(&filter)
        .await;

    assert_eq!(response.status(), 200);
    let reading: Reading = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(reading.id, "dron-test42xx");
}

#[tokio::test]
async fn sentinel_id_returns_not_found() {
    let filter = routes(query_service(vec![medellin()]));

    let response = warp::test::request()
        .method("GET")
        .path("/api/detections/dron-nonexistent")
        .reply(&filter)
        .await;

    assert_eq!(response.status(), 404);
    let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(body["error"], "detection not found");
    assert_eq!(body["id"], "dron-nonexistent");
}

#[tokio::test]
async fn unrecognized_id_returns_not_found() {
    let filter = routes(query_service(vec![medellin()]));

    let response = warp::test::request()
        .method("GET")
        .path("/api/detections/uav-123")
        .reply(&filter)
        .await;

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn prefixed_id_with_empty_catalog_returns_not_found() {
    let filter = routes(query_service(vec![]));

    let response = warp::test::request()
        .method("GET")
        .path("/api/detections/dron-test42xx")
        .reply(&filter)
        .await;

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn health_reports_up() {
    let filter = routes(query_service(vec![medellin()]));

    let response = warp::test::request()
        .method("GET")
        .path("/api/health")
        .reply(&filter)
        .await;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(body["status"], "UP");
    assert_eq!(body["service"], SERVICE_NAME);
    assert!(body["timestamp"].is_string());
}
