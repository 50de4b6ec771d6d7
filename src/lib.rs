//! shapetopoi - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for the NIMBY Rails shapefile to POI
//! converter: upload shapefile/KML/KMZ geometry, pick conversion
//! options, and get a downloadable mod zip back.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (service status badge)                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  UploadPage                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (drop-zone, file list, options, submit)  │
//! │  └── ResultSection (conversion response, when present)      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - frontend constants (service URL, labels, defaults)
//! - [`types`] - UI-state types and the pure derivations behind them
//! - [`controller`] - the upload form controller (DOM side)
//! - [`components`] - UI components (Header, Upload, Result, etc.)
//! - [`services`] - converter service communication (upload, health)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod controller;
pub mod services;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Errors
    AppError,
    AppResult,
    // Result
    ConversionResult,
    // Selection
    SelectedFile,
    SubmitState,
};

// Controller
pub use controller::UploadController;

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

    log::info!("🚂 shapetopoi - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=config::APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=UploadPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn UploadPage() -> impl IntoView {
    // Page-level state: the latest converter response and the latest
    // submission error, written by the upload flow.
    let (result, set_result) = create_signal(None::<ConversionResult>);
    let (error, set_error) = create_signal(None::<AppError>);

    view! {
        <Header/>

        <div class="container">
            <Hero/>

            <UploadSection set_result=set_result set_error=set_error/>

            <ResultSection result=result error=error/>
        </div>

        <Footer/>
    }
}
