//! # Data Access Layer
//!
//! The admin panel owns no storage of its own. Every read and write of the
//! `rag_sources` table goes to the managed data store, reached through the
//! [`SourceStore`] trait:
//!
//! - `postgrest`: the production client, speaking the store's REST dialect over HTTP.
//! - `memory`: an in-process table used by the handler tests.
//!
//! Whatever the implementation, failures surface as a [`StoreError`] carrying the
//! store's own message plus its optional code, hint and details.

use async_trait::async_trait;
use common::model::source::{Source, SourceUpdate};
use serde::Deserialize;

#[cfg(test)]
pub mod memory;
pub mod postgrest;

/// Failure reported by, or while reaching, the data store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct StoreError {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            details: None,
            hint: None,
        }
    }

    #[cfg(test)]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// Table-scoped operations the sources API needs from the store.
#[async_trait]
pub trait SourceStore: Send + Sync {
    /// Every record, ordered by `source_id` ascending. An empty table yields an
    /// empty vector.
    async fn list_all(&self) -> Result<Vec<Source>, StoreError>;

    /// Applies `update` to the record whose `source_id` equals `id` and returns the
    /// rows the store reports as updated. Zero rows means no such record; telling
    /// that apart from a failure is the caller's job.
    async fn update_by_id(&self, id: &str, update: &SourceUpdate)
        -> Result<Vec<Source>, StoreError>;
}
