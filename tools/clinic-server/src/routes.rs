//! HTTP routes: inquiry endpoints, health check and static site

use std::path::Path;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderValue, Request, StatusCode},
    middleware::Next,
    response::Response,
    routing::{get, get_service, post},
    Json, Router,
};
use clinic_leads::{
    HospitalInquiry, Inquiry, PatientInquiry, HOSPITAL_ENDPOINT, PATIENT_ENDPOINT,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

use crate::error::ApiError;
use crate::store::LeadStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn LeadStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn LeadStore>) -> Self {
        Self { store }
    }
}

pub fn build_router(state: AppState, site_dir: &Path) -> Router {
    let serve_dir = ServeDir::new(site_dir)
        .precompressed_gzip()
        .precompressed_br();

    Router::new()
        .route("/healthz", get(health))
        .route(PATIENT_ENDPOINT, post(submit_inquiry::<PatientInquiry>))
        .route(HOSPITAL_ENDPOINT, post(submit_inquiry::<HospitalInquiry>))
        .with_state(state)
        .fallback_service(get_service(serve_dir).handle_error(|_| async {
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }))
        .layer(axum::middleware::from_fn(fix_content_type))
}

async fn health() -> &'static str {
    "ok"
}

/// Validate an inquiry and insert it into its table
///
/// Nothing reaches the store unless every field is present and valid.
async fn submit_inquiry<I>(
    State(state): State<AppState>,
    payload: Result<Json<I>, JsonRejection>,
) -> Result<Json<Value>, ApiError>
where
    I: Inquiry + DeserializeOwned + Send + 'static,
{
    let Json(inquiry) = payload.map_err(|rejection| {
        warn!(table = I::TABLE, %rejection, "rejected inquiry body");
        ApiError::InvalidBody
    })?;

    let missing = inquiry.missing_fields();
    if !missing.is_empty() {
        warn!(table = I::TABLE, ?missing, "inquiry missing fields");
        return Err(ApiError::MissingFields);
    }
    if let Some((field, error)) = inquiry.validate().first() {
        warn!(table = I::TABLE, %field, %error, "inquiry failed validation");
        return Err(ApiError::InvalidField { field, error });
    }

    let row = inquiry.to_row();
    match state.store.insert(I::TABLE, row).await {
        Ok(data) => {
            info!(table = I::TABLE, store = state.store.name(), rows = data.len(), "inquiry stored");
            Ok(Json(json!({ "success": true, "data": data })))
        }
        Err(e) => {
            error!(table = I::TABLE, store = state.store.name(), error = %e, "inquiry insert failed");
            Err(e.into())
        }
    }
}

/// Fix MIME types for module scripts, wasm and static assets
async fn fix_content_type(request: Request<Body>, next: Next) -> Response {
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    if path.starts_with("/api/") || !response.status().is_success() {
        return response;
    }

    let content_type = if path.ends_with(".js") || path.ends_with(".mjs") {
        Some("application/javascript; charset=utf-8")
    } else if path.ends_with(".wasm") {
        Some("application/wasm")
    } else if path.ends_with(".css") {
        Some("text/css; charset=utf-8")
    } else if path.ends_with(".html") {
        Some("text/html; charset=utf-8")
    } else if path.ends_with(".json") {
        Some("application/json; charset=utf-8")
    } else {
        None
    };

    if let Some(content_type) = content_type {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    }
    response
}
