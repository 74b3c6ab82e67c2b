use actix_web::{web, HttpResponse};
use common::model::source::Source;

use crate::error::ApiError;
use crate::services::guarded;
use crate::state::AppState;
use crate::store::SourceStore;

/// Actix web handler for `GET /api/sources`.
///
/// # Returns
/// - `200 OK` with the JSON array of every source, `[]` when the table is empty.
/// - `500 Internal Server Error` with `{error}` when the store fails.
pub async fn process(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let sources = guarded(list_sources(state.store.as_ref())).await?;
    Ok(HttpResponse::Ok().json(sources))
}

/// Fetches every source record, ordered by `source_id`.
pub async fn list_sources(store: &dyn SourceStore) -> Result<Vec<Source>, ApiError> {
    Ok(store.list_all().await?)
}
