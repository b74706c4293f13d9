//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Gainz Charts • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <a href="https://github.com/gainz-charts/frontend" class="footer-link" target="_blank">
                    "Source"
                </a>
            </div>
        </footer>
    }
}
