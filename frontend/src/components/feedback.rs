//! Full-page placeholders shown instead of, or next to, the sources table.

use web_sys::MouseEvent;
use yew::{html, AttrValue, Callback, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    #[prop_or(24)]
    pub size: u32,
    #[prop_or(AttrValue::Static("#3B82F6"))]
    pub color: AttrValue,
}

pub struct Spinner;

impl Component for Spinner {
    type Message = ();
    type Properties = SpinnerProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Spinner
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "width:{size}px;height:{size}px;border:3px solid #E5E7EB;border-top-color:{color};",
            size = props.size,
            color = props.color
        );
        html! { <span class="spinner" style={style} /> }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingStateProps {
    pub message: AttrValue,
}

pub struct LoadingState;

impl Component for LoadingState {
    type Message = ();
    type Properties = LoadingStateProps;

    fn create(_ctx: &Context<Self>) -> Self {
        LoadingState
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="loading-state">
                <Spinner size={32} />
                <p>{ ctx.props().message.clone() }</p>
            </div>
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorStateProps {
    pub error: AttrValue,
    pub on_retry: Callback<()>,
    #[prop_or_default]
    pub loading: bool,
}

/// Shown when the list could not be loaded and there is nothing cached to display.
pub struct ErrorState;

impl Component for ErrorState {
    type Message = ();
    type Properties = ErrorStateProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ErrorState
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_retry = props.on_retry.reform(|_: MouseEvent| ());
        html! {
            <div class="error-state">
                <h2>{ "Error Loading Sources" }</h2>
                <p>{ props.error.clone() }</p>
                <button class="btn btn-danger" onclick={on_retry} disabled={props.loading}>
                    if props.loading {
                        <Spinner size={16} color="white" />
                    }
                    { "Try Again" }
                </button>
            </div>
        }
    }
}

pub struct EmptyState;

impl Component for EmptyState {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        EmptyState
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="empty-state">
                <h3>{ "No sources found" }</h3>
                <p>{ "Sources appear here once they have been ingested." }</p>
            </div>
        }
    }
}
