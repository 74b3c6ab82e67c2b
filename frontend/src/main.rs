use crate::app::App;

mod api;
mod app;
mod components;
mod constants;
mod helpers;
mod state;

fn main() {
    yew::Renderer::<App>::new().render();
}
