//! HTTP client for the managed store's REST interface.
//!
//! Reads are `GET /rest/v1/{table}?select=*&order=source_id.asc`; updates are
//! `PATCH /rest/v1/{table}?source_id=eq.{id}` with `Prefer: return=representation`
//! so the store answers with the rows it changed. The service key travels both as
//! `apikey` and as a bearer token.

use async_trait::async_trait;
use common::model::source::{Source, SourceUpdate};
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use super::{SourceStore, StoreError};
use crate::config::StoreConfig;

#[derive(Clone)]
pub struct PostgrestStore {
    table_url: String,
    client: reqwest::Client,
}

impl PostgrestStore {
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&config.service_key)
            .map_err(|_| StoreError::new("Service key contains invalid header characters"))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.service_key))
            .map_err(|_| StoreError::new("Service key contains invalid header characters"))?;
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| StoreError::new(format!("Failed to build store client: {e}")))?;

        Ok(Self {
            table_url: format!(
                "{}/rest/v1/{}",
                config.url.trim_end_matches('/'),
                config.table
            ),
            client,
        })
    }

    async fn read_rows(response: reqwest::Response) -> Result<Vec<Source>, StoreError> {
        let status = response.status();
        if status.is_success() {
            return response
                .json::<Vec<Source>>()
                .await
                .map_err(|e| StoreError::new(format!("Invalid response from store: {e}")));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| StoreError::new(format!("Failed reading store error body: {e}")))?;
        Err(error_from_body(status.as_u16(), &body))
    }
}

/// Decodes the store's `{message, code, details, hint}` error object, falling back to
/// the raw body when it is not one.
pub(crate) fn error_from_body(status: u16, body: &[u8]) -> StoreError {
    match serde_json::from_slice::<StoreError>(body) {
        Ok(error) if !error.message.trim().is_empty() => error,
        _ => {
            let text = String::from_utf8_lossy(body);
            let text = text.trim();
            if text.is_empty() {
                StoreError::new(format!("Store request failed with HTTP {status}"))
            } else {
                StoreError::new(format!("Store request failed with HTTP {status}: {text}"))
            }
        }
    }
}

fn unreachable(error: reqwest::Error) -> StoreError {
    if error.is_timeout() {
        StoreError::new(format!("Store request timed out: {error}"))
    } else {
        StoreError::new(format!("Store unreachable: {error}"))
    }
}

#[async_trait]
impl SourceStore for PostgrestStore {
    async fn list_all(&self) -> Result<Vec<Source>, StoreError> {
        debug!("GET {}", self.table_url);
        let response = self
            .client
            .get(&self.table_url)
            .query(&[("select", "*"), ("order", "source_id.asc")])
            .send()
            .await
            .map_err(unreachable)?;

        Self::read_rows(response).await
    }

    async fn update_by_id(
        &self,
        id: &str,
        update: &SourceUpdate,
    ) -> Result<Vec<Source>, StoreError> {
        debug!("PATCH {} source_id={}", self.table_url, id);
        let response = self
            .client
            .patch(&self.table_url)
            .query(&[("source_id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(update)
            .send()
            .await
            .map_err(unreachable)?;

        Self::read_rows(response).await
    }
}
