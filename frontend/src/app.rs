use common::model::source::Source;
use yew::{html, Callback, Component, Context, Html};

use crate::api::ApiClient;
use crate::components::feedback::{EmptyState, ErrorState, LoadingState, Spinner};
use crate::components::sources_table::{SourcesTable, UpdateRequest};
use crate::constants::APP_NAME;
use crate::helpers::show_toast;
use crate::state::{AfterUpdate, FetchId, PageView, SourcesState};

pub enum Msg {
    Fetch,
    FetchDone(FetchId, Result<Vec<Source>, String>),
    Update(UpdateRequest),
    UpdateSettled(Result<(), String>, Callback<bool>),
    RefreshDone(FetchId, Result<Vec<Source>, String>, Callback<bool>),
    DismissError,
}

pub struct App {
    state: SourcesState,
    api: ApiClient,
}

impl App {
    fn start_fetch(&mut self, ctx: &Context<Self>) {
        let fetch = self.state.on_fetch_start();
        let api = self.api.clone();
        ctx.link()
            .send_future(async move { Msg::FetchDone(fetch, api.get_sources().await) });
    }

    fn apply_fetch(&mut self, fetch: FetchId, result: Result<Vec<Source>, String>) {
        match result {
            Ok(sources) => {
                self.state.on_fetch_success(fetch, sources);
            }
            Err(e) => {
                if let Some(toast) = self.state.on_fetch_error(fetch, e.clone()) {
                    gloo_console::error!(format!("Fetching sources failed: {e}"));
                    show_toast(&toast);
                }
            }
        }
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut app = Self {
            state: SourcesState::default(),
            api: ApiClient::default(),
        };
        app.start_fetch(ctx);
        app
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Fetch => {
                if self.state.loading {
                    return false;
                }
                self.start_fetch(ctx);
                true
            }
            Msg::FetchDone(fetch, result) => {
                self.apply_fetch(fetch, result);
                true
            }
            Msg::Update(request) => {
                show_toast(&self.state.on_update_start());
                let api = self.api.clone();
                let UpdateRequest {
                    source_id,
                    update,
                    done,
                } = request;
                ctx.link().send_future(async move {
                    let outcome = api.update_source(&source_id, &update).await.map(|_| ());
                    Msg::UpdateSettled(outcome, done)
                });
                true
            }
            Msg::UpdateSettled(outcome, done) => {
                match self.state.on_update_settled(outcome) {
                    AfterUpdate::Refetch(fetch) => {
                        let api = self.api.clone();
                        ctx.link().send_future(async move {
                            Msg::RefreshDone(fetch, api.get_sources().await, done)
                        });
                    }
                    AfterUpdate::KeepEditing(toast) => {
                        gloo_console::warn!(format!("Updating source failed: {}", toast.message()));
                        show_toast(&toast);
                        done.emit(false);
                    }
                }
                true
            }
            Msg::RefreshDone(fetch, result, done) => {
                self.apply_fetch(fetch, result);
                show_toast(&self.state.on_update_success());
                done.emit(true);
                true
            }
            Msg::DismissError => {
                self.state.clear_error();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let body = match self.state.page() {
            PageView::Loading => html! { <LoadingState message="Loading sources..." /> },
            PageView::FullError(error) => html! {
                <ErrorState
                    error={error}
                    on_retry={link.callback(|_: ()| Msg::Fetch)}
                    loading={self.state.loading}
                />
            },
            PageView::Table if self.state.sources.is_empty() => html! { <EmptyState /> },
            PageView::Table => html! {
                <>
                    if let Some(error) = &self.state.error {
                        <div class="stale-banner">
                            <span>{ format!("Showing previously loaded sources. {error}") }</span>
                            <button class="btn btn-link" onclick={link.callback(|_| Msg::Fetch)}>
                                { "Retry" }
                            </button>
                            <button class="btn btn-link" onclick={link.callback(|_| Msg::DismissError)}>
                                { "Dismiss" }
                            </button>
                        </div>
                    }
                    <SourcesTable
                        sources={self.state.sources.clone()}
                        on_update={link.callback(Msg::Update)}
                        disabled={self.state.update_loading}
                    />
                </>
            },
        };

        html! {
            <div class="page">
                <header class="page-header">
                    <h1>{ APP_NAME }</h1>
                    <div class="page-status">
                        if self.state.update_loading {
                            <span class="badge-updating">
                                <Spinner size={14} />
                                { "Updating..." }
                            </span>
                        }
                        if self.state.loading && !self.state.sources.is_empty() {
                            <span class="badge-refreshing">
                                <Spinner size={14} />
                                { "Refreshing..." }
                            </span>
                        }
                    </div>
                </header>
                <main class="page-body">{ body }</main>
            </div>
        }
    }
}
