//! View rendering for the sources table.

use common::model::source::Source;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::SourcesTable;
use crate::components::edit_modal::EditModal;

const COLUMNS: [&str; 9] = [
    "Source ID",
    "File Name",
    "Title",
    "Author",
    "Year",
    "Edition",
    "Publisher",
    "Source URL",
    "Actions",
];

pub fn view(table: &SourcesTable, ctx: &Context<SourcesTable>) -> Html {
    let props = ctx.props();
    let link = ctx.link();

    html! {
        <>
            <div class="table-card">
                <div class="table-scroll">
                    <table class="sources-table">
                        <thead>
                            <tr>
                                { for COLUMNS.iter().map(|title| html! { <th>{ *title }</th> }) }
                            </tr>
                        </thead>
                        <tbody>
                            { for props.sources.iter().enumerate().map(|(index, source)| {
                                build_row(index, source, props.disabled, link)
                            }) }
                        </tbody>
                    </table>
                </div>
            </div>

            if let Some(source) = table.session.selected() {
                <EditModal
                    source={source.clone()}
                    submitting={table.session.submitting()}
                    disabled={props.disabled}
                    on_save={link.callback(Msg::Save)}
                    on_close={link.callback(|_: ()| Msg::Close)}
                />
            }
        </>
    }
}

fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

fn build_row(index: usize, source: &Source, disabled: bool, link: &Scope<SourcesTable>) -> Html {
    let row_class = if index % 2 == 0 { "row-even" } else { "row-odd" };
    let on_edit = {
        let source = source.clone();
        link.callback(move |_| Msg::Edit(source.clone()))
    };

    html! {
        <tr key={source.source_id.clone()} class={row_class}>
            <td class="mono nowrap">{ &source.source_id }</td>
            <td class="nowrap truncate" title={source.filename.clone()}>{ source.file_name() }</td>
            <td>{ or_dash(Some(source.title.as_str())) }</td>
            <td>{ or_dash(source.author.as_deref()) }</td>
            <td class="nowrap">{ source.year.map(|y| y.to_string()).unwrap_or_else(|| "-".to_string()) }</td>
            <td>{ or_dash(source.edition.as_deref()) }</td>
            <td>{ or_dash(source.publisher.as_deref()) }</td>
            <td class="nowrap">
                {
                    match source.source_url.as_deref().filter(|url| !url.is_empty()) {
                        Some(url) => html! {
                            <a href={url.to_string()} target="_blank" rel="noopener noreferrer" class="link">
                                { "Link" }
                            </a>
                        },
                        None => html! { <span class="muted">{ "-" }</span> },
                    }
                }
            </td>
            <td class="nowrap">
                <button class="btn btn-edit" onclick={on_edit} disabled={disabled}>
                    { "Edit" }
                </button>
            </td>
        </tr>
    }
}
