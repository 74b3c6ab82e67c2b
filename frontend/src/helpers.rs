//! Browser utilities shared by the page and its components.
//!
//! - **User Feedback**: transient toast notifications for fetch and update outcomes.
//! - **Clock**: the current calendar year, which bounds the `year` field in the
//!   edit form's validation.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::constants::TOAST_DURATION_MS;
use crate::state::Notification;

/// Displays a temporary notification in the top-right corner of the screen.
///
/// The toast is a plain `div` appended to `<body>` and removed after
/// `TOAST_DURATION_MS`. Its text is set as text content, never as HTML, since
/// messages may contain server-provided strings.
pub fn show_toast(notification: &Notification) {
    let (accent, background) = match notification {
        Notification::Info(_) => ("#3B82F6", "#EFF6FF"),
        Notification::Success(_) => ("#10B981", "#ECFDF5"),
        Notification::Error(_) => ("#EF4444", "#FEF2F2"),
    };

    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(notification.message()));
                toast.set_class_name("toast");
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("top", "20px").ok();
                style.set_property("right", "20px").ok();
                style.set_property("background", background).ok();
                style.set_property("color", "#374151").ok();
                style.set_property("border", "1px solid #E5E7EB").ok();
                style
                    .set_property("border-left", &format!("4px solid {accent}"))
                    .ok();
                style.set_property("padding", "10px 16px").ok();
                style.set_property("border-radius", "8px").ok();
                style
                    .set_property("box-shadow", "0 10px 15px -3px rgba(0, 0, 0, 0.1)")
                    .ok();
                style.set_property("z-index", "10000").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Current calendar year according to the browser clock.
pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}
