//! Full-screen error overlay.
//!
//! Dismissing it reloads the page, which is the only recovery path:
//! every signal is discarded and the form comes back empty.

use leptos::*;

#[component]
pub fn ErrorOverlay(message: String) -> impl IntoView {
    let on_dismiss = move |_| {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                log::error!("reload failed: {:?}", e);
            }
        }
    };

    view! {
        <div class="error-overlay" id="errorOverlay">
            <div class="error-dialog">
                <div class="error-title">"Something went wrong"</div>
                <p class="error-text">{message}</p>
                <button class="btn btn-primary" on:click=on_dismiss>
                    "Start over"
                </button>
            </div>
        </div>
    }
}
