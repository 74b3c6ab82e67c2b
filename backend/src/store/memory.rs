use async_trait::async_trait;
use common::model::source::{Source, SourceUpdate};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{SourceStore, StoreError};

/// In-process stand-in for the managed store. Rows are keyed by `source_id`, so
/// iteration order matches the store's `order=source_id.asc`.
#[derive(Clone, Default)]
pub struct MemoryStore {
    rows: Arc<RwLock<BTreeMap<String, Source>>>,
    failure: Option<StoreError>,
}

impl MemoryStore {
    pub fn with_rows(rows: impl IntoIterator<Item = Source>) -> Self {
        let rows = rows
            .into_iter()
            .map(|source| (source.source_id.clone(), source))
            .collect();
        Self {
            rows: Arc::new(RwLock::new(rows)),
            failure: None,
        }
    }

    /// A store whose every call fails with `error`, as when it is unreachable.
    pub fn failing(error: StoreError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    pub async fn get(&self, id: &str) -> Option<Source> {
        self.rows.read().await.get(id).cloned()
    }
}

#[async_trait]
impl SourceStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Source>, StoreError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn update_by_id(
        &self,
        id: &str,
        update: &SourceUpdate,
    ) -> Result<Vec<Source>, StoreError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        let mut rows = self.rows.write().await;
        Ok(match rows.get_mut(id) {
            Some(source) => {
                update.clone().apply_to(source);
                vec![source.clone()]
            }
            None => Vec::new(),
        })
    }
}
