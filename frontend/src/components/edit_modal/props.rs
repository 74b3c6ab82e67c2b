//! Properties of the `EditModal` component.

use common::model::source::{Source, SourceUpdate};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EditModalProps {
    /// Record being edited. A different `source_id` resets the form.
    pub source: Source,

    /// Receives the validated update when the user saves.
    pub on_save: Callback<SourceUpdate>,

    /// Asks the parent to close the modal. Never emitted while `submitting`.
    pub on_close: Callback<()>,

    /// This modal's own save is in flight: inputs are locked and closing is blocked.
    #[prop_or_default]
    pub submitting: bool,

    /// Some other update is in flight: inputs and saving are locked.
    #[prop_or_default]
    pub disabled: bool,
}
