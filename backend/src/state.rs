//! Shared application state handed to every request handler.

use std::sync::Arc;

use crate::store::SourceStore;

/// Clonable handle registered as `web::Data` in `main.rs`.
///
/// Holds no per-request data: the store behind it is the only source of truth,
/// so concurrent requests never coordinate through this struct.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SourceStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn SourceStore>) -> Self {
        Self { store }
    }
}
