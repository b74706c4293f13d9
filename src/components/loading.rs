//! Loading indicator shown while the request is in flight.
//!
//! The upload form is unmounted during this phase, so no second
//! submission is possible. There is no cancel action.

use leptos::*;

#[component]
pub fn LoadingNotice() -> impl IntoView {
    view! {
        <div class="loading-section" id="loadingSection">
            <div class="spinner"></div>
            <div class="loading-text">"Crunching your training log..."</div>
        </div>
    }
}
