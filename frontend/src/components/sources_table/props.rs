//! Properties of the `SourcesTable` component.

use common::model::source::{Source, SourceUpdate};
use yew::prelude::*;

/// An edit submitted from the table's modal.
///
/// `done` must be emitted exactly once: `true` once the update was stored (the
/// modal closes), `false` when it failed (the modal stays open with its edits).
#[derive(Clone, PartialEq)]
pub struct UpdateRequest {
    pub source_id: String,
    pub update: SourceUpdate,
    pub done: Callback<bool>,
}

#[derive(Properties, PartialEq, Clone)]
pub struct SourcesTableProps {
    /// Rows in display order.
    pub sources: Vec<Source>,

    pub on_update: Callback<UpdateRequest>,

    /// An update is in flight somewhere on the page; editing is locked.
    #[prop_or_default]
    pub disabled: bool,
}
