//! Integration tests for the clinic server
//!
//! These tests drive the router in-process:
//! - Both inquiry endpoints against an in-memory store
//! - Missing, malformed and invalid payloads never reaching the store
//! - Datastore failures surfacing as 500 with the datastore's message
//! - Health check and static files with corrected MIME types

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use clinic_server::routes::{build_router, AppState};
use clinic_server::store::{LeadStore, MemoryStore, StoreError};
use serde_json::{json, Value};
use tower::ServiceExt;

fn router_with(store: Arc<dyn LeadStore>) -> Router {
    build_router(AppState::new(store), &PathBuf::from("does-not-exist"))
}

fn post_json(uri: &str, body: &Value) -> Result<Request<Body>> {
    Ok(Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body)?))?)
}

async fn response_json(response: Response) -> Result<Value> {
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn hospital() -> Value {
    json!({
        "hospitalName": "City Care Hospital",
        "contactPerson": "Meera Rao",
        "email": "desk@citycare.in",
        "phone": "9876543210",
        "city": "Hisar",
        "message": "We would like to discuss a visiting OPD."
    })
}

fn patient() -> Value {
    json!({
        "name": "Ravi Kumar",
        "phone": "98765 43210",
        "email": "ravi@example.com",
        "message": "Follow-up after laparoscopic surgery."
    })
}

/// Store that rejects every insert and counts attempts
#[derive(Default)]
struct RejectingStore {
    attempts: AtomicUsize,
}

#[async_trait]
impl LeadStore for RejectingStore {
    fn name(&self) -> &'static str {
        "rejecting"
    }

    async fn insert(&self, _table: &str, _row: Value) -> Result<Vec<Value>, StoreError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Rejected {
            status: 401,
            message: "Invalid API key".to_string(),
        })
    }
}

// =============================================================================
// Inquiry Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_hospital_inquiry_is_stored_with_source() -> Result<()> {
    let store = Arc::new(MemoryStore::new());
    let app = router_with(store.clone());

    let response = app
        .oneshot(post_json("/api/submit-hospital-inquiry", &hospital())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"][0]["hospital_name"], "City Care Hospital");
    assert_eq!(body["data"][0]["source"], "website");

    let rows = store.rows("hospital_inquiries");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["contact_person"], "Meera Rao");
    Ok(())
}

#[tokio::test]
async fn test_patient_inquiry_is_stored_without_source() -> Result<()> {
    let store = Arc::new(MemoryStore::new());
    let app = router_with(store.clone());

    let response = app
        .oneshot(post_json("/api/submit-patient-inquiry", &patient())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let rows = store.rows("patient_inquiries");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Ravi Kumar");
    assert!(rows[0].get("source").is_none());
    Ok(())
}

#[tokio::test]
async fn test_empty_field_is_400_without_store_call() -> Result<()> {
    let store = Arc::new(RejectingStore::default());
    let app = router_with(store.clone());

    let mut body = hospital();
    body["city"] = json!("   ");
    let response = app
        .oneshot(post_json("/api/submit-hospital-inquiry", &body)?)
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response_json(response).await?,
        json!({ "error": "All fields are required" })
    );
    assert_eq!(store.attempts.load(Ordering::SeqCst), 0);
    Ok(())
}

#[tokio::test]
async fn test_absent_field_counts_as_empty() -> Result<()> {
    let store = Arc::new(MemoryStore::new());
    let app = router_with(store.clone());

    let response = app
        .oneshot(post_json(
            "/api/submit-patient-inquiry",
            &json!({ "name": "Ravi" }),
        )?)
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(store.rows("patient_inquiries").is_empty());
    Ok(())
}

#[tokio::test]
async fn test_invalid_field_names_the_field() -> Result<()> {
    let store = Arc::new(MemoryStore::new());
    let app = router_with(store.clone());

    let mut body = patient();
    body["phone"] = json!("1234567890");
    let response = app
        .oneshot(post_json("/api/submit-patient-inquiry", &body)?)
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response_json(response).await?,
        json!({ "error": "Invalid mobile number", "field": "phone" })
    );
    assert!(store.rows("patient_inquiries").is_empty());
    Ok(())
}

#[tokio::test]
async fn test_malformed_body_is_400() -> Result<()> {
    let app = router_with(Arc::new(MemoryStore::new()));

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/submit-patient-inquiry")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))?;
    let response = app.oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response_json(response).await?,
        json!({ "error": "Invalid request body" })
    );
    Ok(())
}

#[tokio::test]
async fn test_store_failure_is_500_with_message() -> Result<()> {
    let store = Arc::new(RejectingStore::default());
    let app = router_with(store.clone());

    let response = app
        .oneshot(post_json("/api/submit-hospital-inquiry", &hospital())?)
        .await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response_json(response).await?,
        json!({ "error": "Invalid API key" })
    );
    assert_eq!(store.attempts.load(Ordering::SeqCst), 1);
    Ok(())
}

// =============================================================================
// Health and Static File Tests
// =============================================================================

#[tokio::test]
async fn test_healthz() -> Result<()> {
    let app = router_with(Arc::new(MemoryStore::new()));
    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    assert_eq!(&bytes[..], b"ok");
    Ok(())
}

#[tokio::test]
async fn test_static_module_gets_javascript_mime() -> Result<()> {
    let site = std::env::temp_dir().join(format!("clinic-site-{}", std::process::id()));
    std::fs::create_dir_all(site.join("pkg"))?;
    std::fs::write(site.join("pkg/clinic_ui.js"), "export {};")?;
    std::fs::write(site.join("index.html"), "<!doctype html>")?;

    let app = build_router(AppState::new(Arc::new(MemoryStore::new())), &site);

    let script = app
        .clone()
        .oneshot(Request::builder().uri("/pkg/clinic_ui.js").body(Body::empty())?)
        .await?;
    assert_eq!(script.status(), StatusCode::OK);
    assert_eq!(
        script.headers()[header::CONTENT_TYPE],
        "application/javascript; charset=utf-8"
    );

    let missing = app
        .oneshot(Request::builder().uri("/nope.css").body(Body::empty())?)
        .await?;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    std::fs::remove_dir_all(&site)?;
    Ok(())
}
