//! Clinic site server
//!
//! Serves the built site and the two lead-capture endpoints:
//!
//! - `POST /api/submit-patient-inquiry`
//! - `POST /api/submit-hospital-inquiry`
//!
//! Inquiries are validated with `clinic-leads` and inserted into the hosted
//! datastore. Without datastore settings rows are kept in memory.

use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{info, warn};

pub mod config;
pub mod error;
pub mod routes;
pub mod store;

use crate::config::ServerConfig;
use crate::routes::{build_router, AppState};
use crate::store::{LeadStore, MemoryStore, StoreError, SupabaseStore};

/// Pick the datastore client for a configuration
pub fn build_store(config: &ServerConfig) -> Result<Arc<dyn LeadStore>, StoreError> {
    match &config.datastore {
        Some(datastore) => Ok(Arc::new(SupabaseStore::new(
            datastore.url.clone(),
            datastore.anon_key.clone(),
        )?)),
        None => {
            warn!("SUPABASE_URL not set, inquiries are kept in memory only");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

pub fn build_app(config: &ServerConfig) -> Result<axum::Router> {
    let store = build_store(config)?;
    Ok(build_router(AppState::new(store), &config.site_dir))
}

pub async fn serve(config: ServerConfig) -> Result<()> {
    let app = build_app(&config)?;
    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(
        bind_addr = %config.bind_addr,
        site_dir = %config.site_dir.display(),
        "clinic server listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("clinic server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
