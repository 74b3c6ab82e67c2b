//! Edit session of the sources table: which record is open in the modal and
//! whether its save is in flight.

use common::model::source::Source;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditSession {
    selected: Option<Source>,
    submitting: bool,
}

impl EditSession {
    pub fn selected(&self) -> Option<&Source> {
        self.selected.as_ref()
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    /// Opens the modal for `source` unless editing is locked or a save is running.
    pub fn open(&mut self, source: Source, locked: bool) -> bool {
        if locked || self.submitting {
            return false;
        }
        self.selected = Some(source);
        true
    }

    /// Marks the save as started and returns the id to update, or `None` when no
    /// record is open or a save is already running.
    pub fn begin_save(&mut self) -> Option<String> {
        if self.submitting {
            return None;
        }
        let id = self.selected.as_ref()?.source_id.clone();
        self.submitting = true;
        Some(id)
    }

    /// Ends the running save. Only a stored update closes the modal; after a
    /// failure the record stays open with the user's edits.
    pub fn finish_save(&mut self, stored: bool) {
        self.submitting = false;
        if stored {
            self.selected = None;
        }
    }

    pub fn close(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.selected = None;
        true
    }
}
