//! # Source Update Service
//!
//! Backend logic for `PUT /api/sources/{source_id}`.
//!
//! ## Workflow
//!
//! 1.  **Parse**: the body is read up to 1 MiB (larger bodies get 413) and decoded
//!     as JSON. Anything that is not JSON is rejected as malformed before
//!     validation runs.
//! 2.  **Validate**: the decoded object goes through the shared validation schema
//!     (`common::validation`). Violations are returned per field and the store is
//!     never called.
//! 3.  **Persist**: the normalized update is sent to the store, filtered on
//!     `source_id`.
//! 4.  **Classify**: zero updated rows means the id does not exist (404). More than
//!     one row breaks the uniqueness of `source_id` and is reported as an internal
//!     error after being logged.

use actix_web::{web, HttpResponse};
use chrono::Datelike;
use common::model::source::Source;
use common::validation::validate_source;
use log::{error, info};
use serde_json::Value;

use crate::error::ApiError;
use crate::services::{guarded, read_body, MAX_BODY_BYTES};
use crate::state::AppState;
use crate::store::SourceStore;

/// Actix web handler for the `PUT /api/sources/{source_id}` endpoint.
///
/// # Returns
/// - `200 OK` with a JSON array holding the updated record.
/// - `400 Bad Request` for malformed JSON or validation failures (with `details`).
/// - `413 Payload Too Large` for bodies over 1 MiB.
/// - `404 Not Found` when no record has this `source_id`.
/// - `500 Internal Server Error` when the store fails.
pub async fn process(
    state: web::Data<AppState>,
    source_id: web::Path<String>,
    payload: web::Payload,
) -> Result<HttpResponse, ApiError> {
    let source_id = source_id.into_inner();
    let rows = guarded(async {
        let body = read_body(payload, MAX_BODY_BYTES).await?;
        update_source(state.store.as_ref(), &source_id, &body, current_year()).await
    })
        .await?;
    Ok(HttpResponse::Ok().json(rows))
}

fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// Parses, validates and persists one update, returning the updated row.
pub async fn update_source(
    store: &dyn SourceStore,
    source_id: &str,
    body: &[u8],
    current_year: i32,
) -> Result<Vec<Source>, ApiError> {
    let candidate: Value =
        serde_json::from_slice(body).map_err(|e| ApiError::MalformedInput(e.to_string()))?;
    let update = validate_source(&candidate, current_year).map_err(ApiError::Validation)?;

    let rows = store.update_by_id(source_id, &update).await?;
    match rows.len() {
        0 => Err(ApiError::NotFound(source_id.to_string())),
        1 => {
            info!("Updated source '{}'", source_id);
            Ok(rows)
        }
        n => {
            error!(
                "Invariant violation: update of source '{}' affected {} rows",
                source_id, n
            );
            Err(ApiError::Internal(format!(
                "update of '{source_id}' affected {n} rows"
            )))
        }
    }
}
