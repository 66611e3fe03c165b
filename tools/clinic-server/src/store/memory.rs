//! In-process store for development and tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::{LeadStore, StoreError};

/// Keeps rows in memory, assigning sequential ids
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<HashMap<String, Vec<Value>>>,
    next_id: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows inserted into `table` so far
    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.tables
            .lock()
            .map(|tables| tables.get(table).cloned().unwrap_or_default())
            .unwrap_or_default()
    }
}

#[async_trait]
impl LeadStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn insert(&self, table: &str, mut row: Value) -> Result<Vec<Value>, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        if let Value::Object(fields) = &mut row {
            fields.insert("id".to_string(), Value::from(id));
        }

        let mut tables = self.tables.lock().map_err(|_| StoreError::Rejected {
            status: 500,
            message: "memory store poisoned".to_string(),
        })?;
        tables.entry(table.to_string()).or_default().push(row.clone());
        Ok(vec![row])
    }
}
