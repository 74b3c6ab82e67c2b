//! # Sources Service Module
//!
//! HTTP surface of the admin panel. Both endpoints are thin: they hand the request
//! to the data store through `AppState.store` and map the outcome onto a status
//! code and a JSON body.
//!
//! ## Sub-modules:
//! - `list`: returns every source record.
//! - `update`: parses, validates and persists an edit of one record.

mod list;
mod update;

use actix_web::web::{get, put, resource, scope, to};
use actix_web::Scope;

use crate::services::{method_not_allowed, unknown_route};

/// Path of the sources endpoints, relative to the API prefix.
const API_PATH: &str = "/sources";

/// Configures and returns the Actix `Scope` for all source-related routes.
///
/// # Registered Routes:
///
/// *   **`GET /api/sources`**:
///     - **Handler**: `list::process`
///     - **Description**: Returns every record of the sources table ordered by
///       `source_id`, as a JSON array.
///
/// *   **`PUT /api/sources/{source_id}`**:
///     - **Handler**: `update::process`
///     - **Description**: Applies the editable fields of the JSON body to the record
///       with that `source_id` and returns the updated record inside an array.
///
/// Other methods on these paths answer 405 and unknown sub-paths 404, both with a
/// JSON `{error}` body.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .service(
            resource("")
                .route(get().to(list::process))
                .default_service(to(method_not_allowed)),
        )
        .service(
            resource("/{source_id}")
                .route(put().to(update::process))
                .default_service(to(method_not_allowed)),
        )
        .default_service(to(unknown_route))
}

#[cfg(test)]
mod tests {
    use crate::services::configure;
    use crate::state::AppState;
    use crate::store::memory::MemoryStore;
    use crate::store::StoreError;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use common::model::error::ErrorBody;
    use common::model::source::Source;
    use std::sync::Arc;

    fn source(id: &str, title: &str) -> Source {
        Source {
            source_id: id.to_string(),
            filename: format!("C:\\ingest\\{id}.pdf"),
            title: title.to_string(),
            author: None,
            year: None,
            edition: None,
            publisher: None,
            source_url: Some("https://example.com/old".to_string()),
        }
    }

    fn state(store: MemoryStore) -> AppState {
        AppState::new(Arc::new(store))
    }

    #[actix_web::test]
    async fn list_returns_rows_ordered_by_id() {
        let store = MemoryStore::with_rows([source("src-2", "Second"), source("src-1", "First")]);
        let app = test::init_service(App::new().configure(configure(state(store)))).await;

        let req = test::TestRequest::get().uri("/api/sources").to_request();
        let rows: Vec<Source> = test::call_and_read_body_json(&app, req).await;

        let ids: Vec<&str> = rows.iter().map(|s| s.source_id.as_str()).collect();
        assert_eq!(ids, vec!["src-1", "src-2"]);
    }

    #[actix_web::test]
    async fn list_of_empty_store_is_an_empty_array() {
        let app =
            test::init_service(App::new().configure(configure(state(MemoryStore::default())))).await;

        let req = test::TestRequest::get().uri("/api/sources").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(&body[..], b"[]");
    }

    #[actix_web::test]
    async fn list_reports_store_failure_as_500() {
        let store = MemoryStore::failing(StoreError::new("Store unreachable: connection refused"));
        let app = test::init_service(App::new().configure(configure(state(store)))).await;

        let req = test::TestRequest::get().uri("/api/sources").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.error, "Store unreachable: connection refused");
    }

    #[actix_web::test]
    async fn update_normalizes_and_returns_the_record() {
        let store = MemoryStore::with_rows([source("src-1", "Old")]);
        let app = test::init_service(App::new().configure(configure(state(store.clone())))).await;

        let req = test::TestRequest::put()
            .uri("/api/sources/src-1")
            .insert_header(("content-type", "application/json"))
            .set_payload(r#"{"title":"Intro to X","year":2021,"source_url":""}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let rows: Vec<Source> = test::read_body_json(resp).await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Intro to X");
        assert_eq!(rows[0].year, Some(2021));
        assert_eq!(rows[0].source_url, None);
        assert_eq!(store.get("src-1").await, Some(rows[0].clone()));
    }

    #[actix_web::test]
    async fn update_with_empty_title_is_400_with_details() {
        let store = MemoryStore::with_rows([source("src-1", "Old")]);
        let app = test::init_service(App::new().configure(configure(state(store)))).await;

        let req = test::TestRequest::put()
            .uri("/api/sources/src-1")
            .set_payload(r#"{"title":"","year":1999}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ErrorBody = test::read_body_json(resp).await;
        let details = body.details.unwrap_or_default();
        assert!(details.iter().any(|v| v.field == "title"));
    }

    #[actix_web::test]
    async fn update_with_future_year_is_400_with_details() {
        let store = MemoryStore::with_rows([source("src-1", "Old")]);
        let app = test::init_service(App::new().configure(configure(state(store)))).await;

        let req = test::TestRequest::put()
            .uri("/api/sources/src-1")
            .set_payload(r#"{"title":"Valid","year":3000}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ErrorBody = test::read_body_json(resp).await;
        let details = body.details.unwrap_or_default();
        assert!(details.iter().any(|v| v.field == "year"));
    }

    #[actix_web::test]
    async fn update_with_malformed_body_is_400() {
        let store = MemoryStore::with_rows([source("src-1", "Old")]);
        let app = test::init_service(App::new().configure(configure(state(store)))).await;

        let req = test::TestRequest::put()
            .uri("/api/sources/src-1")
            .set_payload("not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ErrorBody = test::read_body_json(resp).await;
        assert!(body.error.starts_with("Malformed JSON body"));
        assert_eq!(body.details, None);
    }

    #[actix_web::test]
    async fn update_of_unknown_id_is_404() {
        let store = MemoryStore::with_rows([source("src-1", "Old")]);
        let app = test::init_service(App::new().configure(configure(state(store)))).await;

        let req = test::TestRequest::put()
            .uri("/api/sources/does-not-exist")
            .set_payload(r#"{"title":"Valid"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn update_reports_store_failure_as_500() {
        let store = MemoryStore::failing(StoreError::new("permission denied").with_code("42501"));
        let app = test::init_service(App::new().configure(configure(state(store)))).await;

        let req = test::TestRequest::put()
            .uri("/api/sources/src-1")
            .set_payload(r#"{"title":"Valid"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.error, "permission denied");
    }

    #[actix_web::test]
    async fn oversized_update_body_is_413_with_json_error() {
        let store = MemoryStore::with_rows([source("src-1", "Old")]);
        let app = test::init_service(App::new().configure(configure(state(store.clone())))).await;

        let payload = format!(r#"{{"title":"{}"}}"#, "a".repeat(2 * 1024 * 1024));
        let req = test::TestRequest::put()
            .uri("/api/sources/src-1")
            .insert_header(("content-type", "application/json"))
            .set_payload(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.error, "Request body exceeds the limit of 1048576 bytes");
        assert_eq!(store.get("src-1").await, Some(source("src-1", "Old")));
    }

    #[actix_web::test]
    async fn wrong_method_on_a_sources_path_is_405_with_json_error() {
        let store = MemoryStore::with_rows([source("src-1", "Old")]);
        let app = test::init_service(App::new().configure(configure(state(store)))).await;

        let req = test::TestRequest::get().uri("/api/sources/src-1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.error, "Method not allowed: GET /api/sources/src-1");

        let req = test::TestRequest::put()
            .uri("/api/sources")
            .set_payload(r#"{"title":"Valid"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[actix_web::test]
    async fn unknown_api_paths_are_404_with_json_error() {
        let app =
            test::init_service(App::new().configure(configure(state(MemoryStore::default())))).await;

        for uri in ["/api/nothing", "/api/sources/src-1/extra"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");

            let body: ErrorBody = test::read_body_json(resp).await;
            assert_eq!(body.error, format!("No API route for GET {uri}"));
        }
    }
}
