//! Datastore clients receiving inquiry rows

mod memory;
mod supabase;

pub use memory::MemoryStore;
pub use supabase::SupabaseStore;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors from inserting a row
#[derive(Debug, Error)]
pub enum StoreError {
    /// Request could not be sent or the response not read
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    /// The datastore answered with an error
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// The datastore answered with something other than a row array
    #[error("unexpected datastore response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Destination for inquiry rows
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Insert one row into `table`, returning the stored rows
    async fn insert(&self, table: &str, row: Value) -> Result<Vec<Value>, StoreError>;
}
