//! HTTP API tests against the fully layered router (in-process, no socket)

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use fare_server::routes::build_app;
use fare_server::{BillStore, Config, CsvBillStore, MemoryBillStore, ServerState};
use shared::models::BILL_COLUMNS;

fn app_with(store: Arc<dyn BillStore>, config: Config) -> Router {
    build_app().with_state(ServerState::new(config, store))
}

fn csv_app(dir: &tempfile::TempDir) -> (Router, Arc<CsvBillStore>) {
    let path = dir.path().join("bills.csv");
    let store = Arc::new(CsvBillStore::new(&path));
    store.init().unwrap();
    let config = Config::with_overrides(path.display().to_string(), 0);
    (app_with(store.clone(), config), store)
}

async fn post(app: &Router, uri: &str, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn reference_trip() -> Value {
    json!({
        "start_reading": 100,
        "end_reading": 150,
        "rate_per_km": 12,
        "toll": 20,
        "state_tax": 5,
        "meal": 50,
        "night_stay": 0
    })
}

#[tokio::test]
async fn calculate_returns_total_and_distance() {
    let app = app_with(Arc::new(MemoryBillStore::new()), Config::default());

    let (status, body) = post(&app, "/calculate", reference_trip().to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_fare"], json!(675.0));
    assert_eq!(body["distance"], json!(50.0));
}

#[tokio::test]
async fn calculate_response_carries_request_id() {
    let app = app_with(Arc::new(MemoryBillStore::new()), Config::default());
    let request = Request::builder()
        .method("POST")
        .uri("/calculate")
        .header("content-type", "application/json")
        .body(Body::from(reference_trip().to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let id = response.headers().get("x-request-id").unwrap();
    assert_eq!(id.to_str().unwrap().len(), 36);
}

#[tokio::test]
async fn calculate_rejects_reversed_readings() {
    let app = app_with(Arc::new(MemoryBillStore::new()), Config::default());
    let body = json!({"start_reading": 200, "end_reading": 150, "rate_per_km": 10});

    let (status, body) = post(&app, "/calculate", body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!("End meter reading cannot be less than start reading")
    );
    assert_eq!(body["code"], json!(2));
}

#[tokio::test]
async fn calculate_defaults_missing_fields_to_zero() {
    let app = app_with(Arc::new(MemoryBillStore::new()), Config::default());

    let (status, body) = post(&app, "/calculate", "{}").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_fare"], json!(0.0));
    assert_eq!(body["distance"], json!(0.0));
}

#[tokio::test]
async fn calculate_accepts_numeric_strings() {
    let app = app_with(Arc::new(MemoryBillStore::new()), Config::default());
    let body = json!({"start_reading": "10", "end_reading": "20.5", "rate_per_km": " 2 "});

    let (status, body) = post(&app, "/calculate", body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["distance"], json!(10.5));
    assert_eq!(body["total_fare"], json!(21.0));
}

#[tokio::test]
async fn calculate_rejects_non_numeric_field() {
    let app = app_with(Arc::new(MemoryBillStore::new()), Config::default());
    let body = json!({"start_reading": "abc", "end_reading": 20});

    let (status, body) = post(&app, "/calculate", body.to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().is_some_and(|m| !m.is_empty()));
    assert_eq!(body["code"], json!(9001));
}

#[tokio::test]
async fn calculate_rejects_malformed_body() {
    let app = app_with(Arc::new(MemoryBillStore::new()), Config::default());

    let (status, body) = post(&app, "/calculate", "{not json").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn calculate_does_not_touch_store() {
    let dir = tempfile::tempdir().unwrap();
    let (app, store) = csv_app(&dir);

    post(&app, "/calculate", reference_trip().to_string()).await;

    assert!(store.load_all().unwrap().is_empty());
}

#[tokio::test]
async fn save_appends_row_with_customer() {
    let dir = tempfile::tempdir().unwrap();
    let (app, store) = csv_app(&dir);
    let mut body = reference_trip();
    body["customer_name"] = json!("  Asha  ");

    let (status, body) = post(&app, "/save", body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Bill saved successfully!"));
    let today = chrono::Local::now().date_naive().to_string();
    assert_eq!(body["date"], json!(today));
    assert_eq!(body["total_fare"], json!(675.0));

    let records = store.load_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].customer_name, "Asha");
    assert_eq!(records[0].distance, 50.0);
    assert_eq!(records[0].total_fare, 675.0);
}

#[tokio::test]
async fn save_without_customer_records_unknown() {
    let dir = tempfile::tempdir().unwrap();
    let (app, store) = csv_app(&dir);

    let (status, _) = post(&app, "/save", reference_trip().to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let records = store.load_all().unwrap();
    assert_eq!(records[0].customer_name, "Unknown");
}

#[tokio::test]
async fn repeated_saves_append_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let (app, store) = csv_app(&dir);

    for name in ["first", "second", "third"] {
        let mut body = reference_trip();
        body["customer_name"] = json!(name);
        let (status, _) = post(&app, "/save", body.to_string()).await;
        assert_eq!(status, StatusCode::OK);
    }

    let names: Vec<_> = store
        .load_all()
        .unwrap()
        .into_iter()
        .map(|r| r.customer_name)
        .collect();
    assert_eq!(names, ["first", "second", "third"]);

    let contents = std::fs::read_to_string(store.path()).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some(BILL_COLUMNS.join(",").as_str()));
    assert_eq!(lines.count(), 3);
}

#[tokio::test]
async fn save_keeps_reversed_readings_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let (app, store) = csv_app(&dir);
    let body = json!({"start_reading": 200, "end_reading": 150, "rate_per_km": 10});

    let (status, body) = post(&app, "/save", body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_fare"], json!(-500.0));
    assert_eq!(store.load_all().unwrap()[0].distance, -50.0);
}

#[tokio::test]
async fn save_rejects_reversed_readings_when_strict() {
    let store = Arc::new(MemoryBillStore::new());
    let config = Config {
        require_valid_readings_on_save: true,
        ..Config::default()
    };
    let app = app_with(store.clone(), config);
    let body = json!({"start_reading": 200, "end_reading": 150});

    let (status, body) = post(&app, "/save", body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!(2));
    assert!(store.is_empty());
}

#[tokio::test]
async fn save_reports_storage_failure() {
    let dir = tempfile::tempdir().unwrap();
    // Never initialized: the ledger file does not exist
    let store = Arc::new(CsvBillStore::new(dir.path().join("missing.csv")));
    let app = app_with(store, Config::default());

    let (status, body) = post(&app, "/save", reference_trip().to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], json!(9002));
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn save_to_unwritable_store_keeps_previous_contents() {
    let dir = tempfile::tempdir().unwrap();
    let (app, store) = csv_app(&dir);
    post(&app, "/save", reference_trip().to_string()).await;
    let before = std::fs::read(store.path()).unwrap();
    std::fs::create_dir(dir.path().join("bills.csv.tmp")).unwrap();

    let (status, body) = post(&app, "/save", reference_trip().to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], json!(9002));
    assert_eq!(std::fs::read(store.path()).unwrap(), before);
}

#[tokio::test]
async fn health_reports_bill_count() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _store) = csv_app(&dir);
    post(&app, "/save", reference_trip().to_string()).await;

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], json!("healthy"));
    assert_eq!(body["bill_count"], json!(1));
}

#[tokio::test]
async fn health_degrades_when_store_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(CsvBillStore::new(dir.path().join("missing.csv")));
    let app = app_with(store, Config::default());

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], json!("degraded"));
    assert!(body.get("bill_count").is_none());
}
