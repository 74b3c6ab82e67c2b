//! In-memory state of the sources page and its transitions.
//!
//! The page component owns one [`SourcesState`] for the lifetime of the page view
//! and drives it only through the `on_*` methods below. They are plain functions
//! over the struct (no rendering, no I/O) and return what the page has to do next:
//! a toast to display, or a list fetch to issue.
//!
//! After a successful update the page always re-fetches the whole list instead of
//! patching the edited row locally, so the table shows exactly what the store
//! persisted.
//!
//! Every list fetch gets a [`FetchId`]. Only the answer to the most recently
//! started fetch is applied; answers to older fetches are dropped, so an earlier
//! response arriving late never overwrites a newer list.

use common::model::source::Source;

use crate::constants::{FETCH_FAILED, SOURCE_UPDATED, UPDATE_FAILED, UPDATING_SOURCE};

/// A transient, non-blocking message for the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Info(String),
    Success(String),
    Error(String),
}

impl Notification {
    pub fn message(&self) -> &str {
        match self {
            Notification::Info(m) | Notification::Success(m) | Notification::Error(m) => m,
        }
    }
}

/// Identifies one list fetch issued by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchId(u64);

/// What the page does once the update request itself has been answered.
#[derive(Debug, Clone, PartialEq)]
pub enum AfterUpdate {
    /// The store accepted the update. The list is reloaded with this fetch and
    /// the edit form closes once it lands.
    Refetch(FetchId),
    /// The update failed. The list is untouched and the edit form stays open.
    KeepEditing(Notification),
}

/// What the page renders for the current state.
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    /// First load in flight, nothing to show yet.
    Loading,
    /// Loading failed and there are no rows to fall back on; offers a retry.
    FullError(String),
    /// The table, possibly empty or stale.
    Table,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SourcesState {
    pub sources: Vec<Source>,
    /// A list fetch is in flight.
    pub loading: bool,
    /// An update (including its follow-up refresh) is in flight.
    pub update_loading: bool,
    /// Message of the last failed fetch.
    pub error: Option<String>,
    last_fetch: u64,
}

impl SourcesState {
    pub fn on_fetch_start(&mut self) -> FetchId {
        self.last_fetch += 1;
        self.loading = true;
        self.error = None;
        FetchId(self.last_fetch)
    }

    fn is_current(&self, fetch: FetchId) -> bool {
        fetch.0 == self.last_fetch
    }

    /// Replaces the list. Returns `false` when the answer belongs to a superseded
    /// fetch and was dropped.
    pub fn on_fetch_success(&mut self, fetch: FetchId, sources: Vec<Source>) -> bool {
        if !self.is_current(fetch) {
            return false;
        }
        self.sources = sources;
        self.loading = false;
        true
    }

    /// Records the failure; the previous list is kept as is. Failures of
    /// superseded fetches are dropped silently.
    pub fn on_fetch_error(&mut self, fetch: FetchId, message: String) -> Option<Notification> {
        if !self.is_current(fetch) {
            return None;
        }
        let message = non_empty_or(message, FETCH_FAILED);
        self.loading = false;
        self.error = Some(message.clone());
        Some(Notification::Error(message))
    }

    pub fn on_update_start(&mut self) -> Notification {
        self.update_loading = true;
        Notification::Info(UPDATING_SOURCE.to_string())
    }

    /// Decides the follow-up of an answered update request. The rows the server
    /// returned are never merged into the list.
    pub fn on_update_settled(&mut self, outcome: Result<(), String>) -> AfterUpdate {
        match outcome {
            Ok(()) => AfterUpdate::Refetch(self.on_fetch_start()),
            Err(message) => {
                self.update_loading = false;
                AfterUpdate::KeepEditing(Notification::Error(non_empty_or(
                    message,
                    UPDATE_FAILED,
                )))
            }
        }
    }

    /// Called once the post-update refresh has finished, whatever its outcome.
    pub fn on_update_success(&mut self) -> Notification {
        self.update_loading = false;
        Notification::Success(SOURCE_UPDATED.to_string())
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn page(&self) -> PageView {
        if !self.sources.is_empty() {
            return PageView::Table;
        }
        match (&self.error, self.loading) {
            (_, true) => PageView::Loading,
            (Some(error), false) => PageView::FullError(error.clone()),
            (None, false) => PageView::Table,
        }
    }
}

fn non_empty_or(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(id: &str) -> Source {
        Source {
            source_id: id.to_string(),
            filename: format!("{id}.pdf"),
            title: format!("Title {id}"),
            author: None,
            year: None,
            edition: None,
            publisher: None,
            source_url: None,
        }
    }

    fn loaded(ids: &[&str]) -> SourcesState {
        let mut state = SourcesState::default();
        let fetch = state.on_fetch_start();
        state.on_fetch_success(fetch, ids.iter().map(|id| source(id)).collect());
        state
    }

    #[test]
    fn first_load_shows_loading_then_table() {
        let mut state = SourcesState::default();
        let fetch = state.on_fetch_start();
        assert_eq!(state.page(), PageView::Loading);

        assert!(state.on_fetch_success(fetch, vec![source("a"), source("b")]));
        assert!(!state.loading);
        assert_eq!(state.sources.len(), 2);
        assert_eq!(state.page(), PageView::Table);
    }

    #[test]
    fn page_never_shows_the_empty_table_before_the_first_answer() {
        let mut state = SourcesState::default();
        state.on_fetch_start();
        assert_ne!(state.page(), PageView::Table);
    }

    #[test]
    fn failed_first_load_is_a_full_page_error() {
        let mut state = SourcesState::default();
        let fetch = state.on_fetch_start();
        let toast = state.on_fetch_error(fetch, "HTTP 500: Internal Server Error".to_string());

        assert_eq!(
            toast,
            Some(Notification::Error("HTTP 500: Internal Server Error".to_string()))
        );
        assert_eq!(
            state.page(),
            PageView::FullError("HTTP 500: Internal Server Error".to_string())
        );

        // Retrying clears the error and goes back to the loading screen.
        state.on_fetch_start();
        assert_eq!(state.error, None);
        assert_eq!(state.page(), PageView::Loading);
    }

    #[test]
    fn failed_refresh_keeps_the_stale_list() {
        let mut state = loaded(&["a"]);

        let fetch = state.on_fetch_start();
        assert_eq!(state.page(), PageView::Table);
        state.on_fetch_error(fetch, String::new());

        assert_eq!(state.sources, vec![source("a")]);
        assert_eq!(state.error.as_deref(), Some(FETCH_FAILED));
        assert_eq!(state.page(), PageView::Table);
    }

    #[test]
    fn empty_result_is_an_empty_table() {
        let mut state = SourcesState::default();
        let fetch = state.on_fetch_start();
        state.on_fetch_success(fetch, Vec::new());
        assert_eq!(state.page(), PageView::Table);
    }

    #[test]
    fn late_answers_of_superseded_fetches_are_dropped() {
        let mut state = loaded(&["a"]);

        let older = state.on_fetch_start();
        let newer = state.on_fetch_start();

        assert!(state.on_fetch_success(newer, vec![source("a"), source("b")]));
        assert!(!state.on_fetch_success(older, vec![source("a")]));
        assert_eq!(state.on_fetch_error(older, "timeout".to_string()), None);

        assert_eq!(state.sources.len(), 2);
        assert!(!state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn stored_update_reloads_the_list_instead_of_patching_it() {
        let mut state = loaded(&["a"]);
        let before = state.sources.clone();

        assert_eq!(
            state.on_update_start(),
            Notification::Info(UPDATING_SOURCE.to_string())
        );
        assert!(state.update_loading);

        let refetch = match state.on_update_settled(Ok(())) {
            AfterUpdate::Refetch(fetch) => fetch,
            other => panic!("expected a refetch, got {other:?}"),
        };
        assert_eq!(state.sources, before);
        assert!(state.loading);
        assert!(state.update_loading);

        let mut renamed = source("a");
        renamed.title = "Renamed by the store".to_string();
        assert!(state.on_fetch_success(refetch, vec![renamed.clone()]));
        assert_eq!(
            state.on_update_success(),
            Notification::Success(SOURCE_UPDATED.to_string())
        );
        assert_eq!(state.sources, vec![renamed]);
        assert!(!state.update_loading);
    }

    #[test]
    fn stored_update_wins_over_a_fetch_already_in_flight() {
        let mut state = loaded(&["a"]);
        let retry = state.on_fetch_start();
        state.on_update_start();

        let AfterUpdate::Refetch(refetch) = state.on_update_settled(Ok(())) else {
            panic!("expected a refetch");
        };
        assert_ne!(retry, refetch);

        let mut renamed = source("a");
        renamed.title = "New".to_string();
        state.on_fetch_success(refetch, vec![renamed.clone()]);
        assert!(!state.on_fetch_success(retry, vec![source("a")]));
        assert_eq!(state.sources, vec![renamed]);
    }

    #[test]
    fn failed_update_keeps_editing_and_leaves_the_list_alone() {
        let mut state = loaded(&["a"]);
        let before = state.sources.clone();

        state.on_update_start();
        let next = state.on_update_settled(Err("Source 'a' not found".to_string()));

        assert_eq!(
            next,
            AfterUpdate::KeepEditing(Notification::Error("Source 'a' not found".to_string()))
        );
        assert_eq!(state.sources, before);
        assert!(!state.update_loading);
        assert!(!state.loading);
        assert_eq!(state.error, None);

        state.on_update_start();
        assert_eq!(
            state.on_update_settled(Err(" ".to_string())),
            AfterUpdate::KeepEditing(Notification::Error(UPDATE_FAILED.to_string()))
        );
    }

    #[test]
    fn clear_error_resets_the_message() {
        let mut state = SourcesState::default();
        let fetch = state.on_fetch_start();
        state.on_fetch_error(fetch, "boom".to_string());
        state.clear_error();
        assert_eq!(state.page(), PageView::Table);
    }
}
