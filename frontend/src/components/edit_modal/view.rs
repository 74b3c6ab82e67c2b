//! View rendering for the edit modal.

use common::validation::{max_year, YEAR_MIN};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::form::FormField;
use super::messages::Msg;
use super::EditModal;
use crate::components::feedback::Spinner;
use crate::helpers::current_year;

pub fn view(modal: &EditModal, ctx: &Context<EditModal>) -> Html {
    let props = ctx.props();
    let link = ctx.link();
    let locked = EditModal::locked(props);

    let on_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="modal-header">
                    <div>
                        <h2>{ "Edit Source" }</h2>
                        <p class="muted">{ format!("ID: {}", props.source.source_id) }</p>
                    </div>
                    if props.submitting {
                        <div class="badge-saving">
                            <Spinner size={16} />
                            <span>{ "Saving..." }</span>
                        </div>
                    }
                </div>

                <form class="modal-body" onsubmit={on_submit} novalidate={true}>
                    <div class="form-grid">
                        { text_input(modal, link, FormField::Title, "text", "Enter title", locked, true) }
                        { text_input(modal, link, FormField::Author, "text", "Enter author", locked, false) }
                        { year_input(modal, link, locked) }
                        { text_input(modal, link, FormField::Edition, "text", "Enter edition", locked, false) }
                        { text_input(modal, link, FormField::Publisher, "text", "Enter publisher", locked, false) }
                        { text_input(modal, link, FormField::SourceUrl, "url", "https://example.com", locked, false) }
                    </div>

                    <div class="modal-footer">
                        <button
                            type="button"
                            class="btn btn-secondary"
                            onclick={link.callback(|_| Msg::Cancel)}
                            disabled={props.submitting}
                        >
                            { "Cancel" }
                        </button>
                        <button type="submit" class="btn btn-primary" disabled={locked}>
                            if props.submitting {
                                <Spinner size={16} color="white" />
                            }
                            { "Save Changes" }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn input_callback(link: &Scope<EditModal>, field: FormField) -> Callback<InputEvent> {
    link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::Input(field, input.value())
    })
}

fn field_wrapper(modal: &EditModal, field: FormField, required: bool, input: Html) -> Html {
    let error = modal.errors.message_for(field.key()).map(str::to_string);
    let wide = matches!(field, FormField::Title | FormField::SourceUrl);
    html! {
        <div class={classes!("form-field", wide.then_some("wide"))}>
            <label for={field.key()}>
                { field.label() }
                if required {
                    <span class="required">{ " *" }</span>
                }
            </label>
            { input }
            if let Some(error) = error {
                <p class="field-error">{ error }</p>
            }
        </div>
    }
}

fn text_input(
    modal: &EditModal,
    link: &Scope<EditModal>,
    field: FormField,
    input_type: &'static str,
    placeholder: &'static str,
    locked: bool,
    required: bool,
) -> Html {
    let invalid = modal.errors.message_for(field.key()).is_some();
    let input = html! {
        <input
            id={field.key()}
            type={input_type}
            class={classes!("input", invalid.then_some("invalid"))}
            value={modal.form.get(field).to_string()}
            placeholder={placeholder}
            oninput={input_callback(link, field)}
            disabled={locked}
        />
    };
    field_wrapper(modal, field, required, input)
}

fn year_input(modal: &EditModal, link: &Scope<EditModal>, locked: bool) -> Html {
    let field = FormField::Year;
    let invalid = modal.errors.message_for(field.key()).is_some();
    let input = html! {
        <input
            id={field.key()}
            type="number"
            class={classes!("input", invalid.then_some("invalid"))}
            value={modal.form.year.clone()}
            placeholder="Enter year"
            min={YEAR_MIN.to_string()}
            max={max_year(current_year()).to_string()}
            oninput={input_callback(link, field)}
            disabled={locked}
        />
    };
    field_wrapper(modal, field, false, input)
}
