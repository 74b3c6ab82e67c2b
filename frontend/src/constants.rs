pub const APP_NAME: &str = "RAG Sources Admin Panel";

pub const SOURCES_PATH: &str = "/api/sources";

/// How long a toast stays on screen, in milliseconds.
pub const TOAST_DURATION_MS: u32 = 4000;

pub const FETCH_FAILED: &str = "Failed to load sources";
pub const UPDATE_FAILED: &str = "Update failed";
pub const NETWORK_ERROR: &str = "Network error occurred";
pub const UPDATING_SOURCE: &str = "Updating source...";
pub const SOURCE_UPDATED: &str = "Source updated successfully!";
