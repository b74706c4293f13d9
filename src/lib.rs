//! Gainz Charts - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading workout-tracker CSV exports
//! and rendering the charts returned by the plotting backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (brand bar)                                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent (phase-driven)                                  │
//! │  ├── Hero (title, instructions, example assets)             │
//! │  ├── UploadForm        (Collecting)                         │
//! │  ├── LoadingNotice     (Loading)                            │
//! │  ├── Gallery           (Success)                            │
//! │  └── ErrorOverlay      (Error)                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (UiPhase, SlotKind, UploadError)
//! - [`components`] - UI components (Header, UploadForm, Gallery, etc.)
//! - [`services`] - Backend communication (upload)

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{SlotKind, UiPhase, UploadError};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Gainz Charts - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // The whole application state is one phase signal. Transitions only
    // move forward; a page reload is the way back to Collecting.
    let (phase, set_phase) = create_signal(UiPhase::Collecting);

    view! {
        <Header/>

        <div class="container">
            <Hero/>

            {move || match phase.get() {
                UiPhase::Collecting => view! { <UploadForm set_phase=set_phase/> }.into_view(),
                UiPhase::Loading => view! { <LoadingNotice/> }.into_view(),
                UiPhase::Success(images) => view! { <Gallery images=images/> }.into_view(),
                UiPhase::Error(message) => view! { <ErrorOverlay message=message/> }.into_view(),
            }}
        </div>

        <Footer/>
    }
}
