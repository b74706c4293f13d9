//! Hero section: title, instructions and the example assets.

use leptos::*;

use crate::{EXAMPLE_BANK_PATH, EXAMPLE_CHART_PATH};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Gainz Charts"</h1>
            <p class="subtitle">
                "Export your training log as CSV from your workout tracker, add an "
                "exercise bank mapping each exercise to its muscle groups, and get "
                "back volume and set-count charts per exercise and muscle group."
            </p>
            <p class="subtitle">
                "Not sure what an exercise bank looks like? "
                <a href=EXAMPLE_BANK_PATH download="" class="footer-link">
                    "Download the example"
                </a>
                " and adapt it to your exercises."
            </p>
            <img class="hero-example" src=EXAMPLE_CHART_PATH alt="Example chart"/>
        </div>
    }
}
