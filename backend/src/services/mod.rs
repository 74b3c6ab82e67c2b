pub mod sources;

use actix_web::{web, HttpRequest, HttpResponse};
use futures_util::{FutureExt, StreamExt};
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use crate::error::ApiError;
use crate::state::AppState;

/// Prefix of every API route. Paths outside it serve the embedded frontend.
const API_PREFIX: &str = "/api";

/// Largest request body accepted by the API.
pub(crate) const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Registers the shared state and every API scope on an app or test service.
pub fn configure(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(state)).service(
            web::scope(API_PREFIX)
                .service(sources::configure_routes())
                .default_service(web::to(unknown_route)),
        );
    }
}

/// Fallback for paths under the API prefix that match no route.
pub(crate) async fn unknown_route(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::NoRoute(format!("{} {}", req.method(), req.path())))
}

/// Fallback for a known API path requested with an unsupported method.
pub(crate) async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed(format!(
        "{} {}",
        req.method(),
        req.path()
    )))
}

/// Collects a request body, failing with [`ApiError::PayloadTooLarge`] as soon as it
/// grows past `limit` bytes.
pub(crate) async fn read_body(
    mut payload: web::Payload,
    limit: usize,
) -> Result<web::BytesMut, ApiError> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk =
            chunk.map_err(|e| ApiError::MalformedInput(format!("failed reading body: {e}")))?;
        if body.len() + chunk.len() > limit {
            return Err(ApiError::PayloadTooLarge(limit));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

/// Runs a handler body, turning a panic into [`ApiError::Internal`] so nothing raw
/// crosses the HTTP boundary.
pub(crate) async fn guarded<T, F>(handler: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    match AssertUnwindSafe(handler).catch_unwind().await {
        Ok(result) => result,
        Err(panic) => Err(ApiError::Internal(panic_message(panic.as_ref()))),
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        format!("handler panicked: {message}")
    } else if let Some(message) = panic.downcast_ref::<String>() {
        format!("handler panicked: {message}")
    } else {
        "handler panicked".to_string()
    }
}
