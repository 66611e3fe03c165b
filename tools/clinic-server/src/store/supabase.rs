//! Client for the hosted PostgREST datastore

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use super::{LeadStore, StoreError};

const CONNECT_TIMEOUT_SECS: u64 = 8;
const REQUEST_TIMEOUT_SECS: u64 = 20;

/// Error body returned by the datastore
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Inserts rows through `POST {url}/rest/v1/{table}`
#[derive(Clone)]
pub struct SupabaseStore {
    base_url: String,
    anon_key: String,
    http: Client,
}

impl SupabaseStore {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Result<Self, StoreError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            base_url: base_url.into(),
            anon_key: anon_key.into(),
            http,
        })
    }

    fn table_url(&self, table: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{base}/rest/v1/{table}")
    }
}

#[async_trait]
impl LeadStore for SupabaseStore {
    fn name(&self) -> &'static str {
        "supabase"
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Vec<Value>, StoreError> {
        let response = self
            .http
            .post(self.table_url(table))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Prefer", "return=representation")
            .json(&[row])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            if body.trim().is_empty() {
                return Ok(Vec::new());
            }
            return Ok(serde_json::from_str(&body)?);
        }

        Err(StoreError::Rejected {
            status: status.as_u16(),
            message: error_message(status, &body),
        })
    }
}

fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|e| e.message.or(e.error))
        .unwrap_or_else(|| {
            let text = body.trim();
            if text.is_empty() {
                format!("datastore returned {status}")
            } else {
                text.to_string()
            }
        })
}
