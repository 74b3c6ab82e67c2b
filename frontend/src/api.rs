//! Browser-side client for the sources API.
//!
//! Mirrors the backend contract one-to-one: `get_sources` for `GET /api/sources`
//! and `update_source` for `PUT /api/sources/{id}`. Every failure, whether the
//! request never left the browser or the server answered with an error status, is
//! reduced to a single human-readable message.

use common::model::error::ErrorBody;
use common::model::source::{Source, SourceUpdate};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::constants::{NETWORK_ERROR, SOURCES_PATH};

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    /// Uses the `API_BASE_URL` given at build time, or the page's own origin.
    fn default() -> Self {
        Self::new(option_env!("API_BASE_URL").unwrap_or(""))
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn sources_url(&self) -> String {
        format!("{}{}", self.base_url, SOURCES_PATH)
    }

    fn source_url(&self, id: &str) -> String {
        format!("{}/{}", self.sources_url(), urlencoding::encode(id))
    }

    pub async fn get_sources(&self) -> Result<Vec<Source>, String> {
        let response = Request::get(&self.sources_url())
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| format!("{NETWORK_ERROR}: {e}"))?;
        read_json(response).await
    }

    pub async fn update_source(
        &self,
        id: &str,
        update: &SourceUpdate,
    ) -> Result<Vec<Source>, String> {
        let response = Request::put(&self.source_url(id))
            .header("Content-Type", "application/json")
            .json(update)
            .map_err(|e| format!("{NETWORK_ERROR}: {e}"))?
            .send()
            .await
            .map_err(|e| format!("{NETWORK_ERROR}: {e}"))?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(error_message(
            response.status(),
            &response.status_text(),
            &body,
        ));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Invalid response from server: {e}"))
}

/// Message for a non-success response: the server's `error` field when the body
/// is an [`ErrorBody`], otherwise `HTTP <status>: <status text>`.
pub fn error_message(status: u16, status_text: &str, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|body| body.error)
        .filter(|error| !error.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP {status}: {status_text}"))
}
