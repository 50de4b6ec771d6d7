//! Conversion result panel.
//!
//! The converter answers the upload with an HTML fragment (its success
//! page and its handled-error page alike). This panel swaps the fragment
//! in verbatim and shows transport-level failures inline instead.

use leptos::*;

use crate::types::{AppError, ConversionResult};

#[component]
pub fn ResultSection(
    result: ReadSignal<Option<ConversionResult>>,
    error: ReadSignal<Option<AppError>>,
) -> impl IntoView {
    view! {
        <Show
            when=move || error.get().is_some()
            fallback=|| view! { }
        >
            <div class="error-message">
                {move || error.get().map(|e| e.to_string()).unwrap_or_default()}
            </div>
        </Show>

        <Show
            when=move || result.get().is_some()
            fallback=|| view! { }
        >
            <div class="result-section" id="conversion-result">
                <div class="result-meta">
                    "Converter response received at "
                    {move || result.get().map(|r| r.received_at).unwrap_or_default()}
                </div>
                <div
                    class="result-body"
                    inner_html=move || {
                        result.get().map(|r| r.fragment_html).unwrap_or_default()
                    }
                ></div>
            </div>
        </Show>
    }
}
