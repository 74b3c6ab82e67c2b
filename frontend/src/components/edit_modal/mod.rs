//! Edit form for a single source, rendered as a modal over the table.
//!
//! The modal only owns the typed-in values and their validation messages. Saving
//! is delegated to the parent through `on_save`; the parent tells the modal a save
//! is in flight via `submitting` and closes it once the update succeeded, so a
//! failed save leaves the user's edits on screen.

mod form;
mod messages;
mod props;
mod view;

use common::model::error::ValidationErrors;
use yew::prelude::*;

pub use form::{EditForm, FormField};
pub use messages::Msg;
pub use props::EditModalProps;

use crate::helpers::current_year;

pub struct EditModal {
    pub form: EditForm,
    pub errors: ValidationErrors,
}

impl EditModal {
    fn locked(props: &EditModalProps) -> bool {
        props.submitting || props.disabled
    }
}

impl Component for EditModal {
    type Message = Msg;
    type Properties = EditModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            form: EditForm::from_source(&ctx.props().source),
            errors: ValidationErrors::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().source.source_id != old_props.source.source_id {
            self.form = EditForm::from_source(&ctx.props().source);
            self.errors = ValidationErrors::default();
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let props = ctx.props();
        match msg {
            Msg::Input(field, value) => {
                if Self::locked(props) {
                    return false;
                }
                self.form.set(field, value);
                true
            }
            Msg::Submit => {
                if Self::locked(props) {
                    return false;
                }
                match self.form.validate(current_year()) {
                    Ok(update) => {
                        self.errors = ValidationErrors::default();
                        props.on_save.emit(update);
                    }
                    Err(errors) => self.errors = errors,
                }
                true
            }
            Msg::Cancel => {
                if !props.submitting {
                    props.on_close.emit(());
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
