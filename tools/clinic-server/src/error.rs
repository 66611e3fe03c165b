//! API errors and their JSON responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use clinic_leads::{Field, FieldError};
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("All fields are required")]
    MissingFields,
    #[error("{error}")]
    InvalidField { field: Field, error: FieldError },
    #[error("Invalid request body")]
    InvalidBody,
    #[error("{0}")]
    Store(#[from] StoreError),
}

#[derive(Debug, Serialize)]
struct ErrorPayload {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<Field>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingFields | Self::InvalidField { .. } | Self::InvalidBody => {
                StatusCode::BAD_REQUEST
            }
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let field = match &self {
            Self::InvalidField { field, .. } => Some(*field),
            _ => None,
        };
        let payload = ErrorPayload {
            error: self.to_string(),
            field,
        };
        (self.status(), Json(payload)).into_response()
    }
}
