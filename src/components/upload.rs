//! Upload form component with drag & drop support.
//!
//! Renders the upload form markup (drop-zone, hidden file input, file
//! list, conversion options, submit button, loading indicator) and wires
//! the [`UploadController`] handlers plus the submission flow around it.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlFormElement, SubmitEvent};

use super::options::ConversionOptions;
use crate::config;
use crate::controller::UploadController;
use crate::services::submit_conversion;
use crate::types::{AppError, ConversionResult};

#[component]
pub fn UploadSection(
    set_result: WriteSignal<Option<ConversionResult>>,
    set_error: WriteSignal<Option<AppError>>,
) -> impl IntoView {
    let controller = store_value(None::<UploadController>);

    // Resolve the controller's element handles once the form is in the
    // DOM. The first resolution also runs the initial file-list refresh,
    // so a selection the browser restored still yields a correct button
    // state. Handlers resolve lazily too, in case one fires first.
    let ensure_controller = move || -> Option<UploadController> {
        if let Some(ctl) = controller.get_value() {
            return Some(ctl);
        }
        let ctl = UploadController::from_document()?;
        ctl.refresh_file_list();
        controller.set_value(Some(ctl.clone()));
        log::info!("🗺️ Upload form wired");
        Some(ctl)
    };

    create_effect(move |_| {
        ensure_controller();
    });

    let on_click_area = move |_| {
        if let Some(ctl) = ensure_controller() {
            ctl.open_file_picker();
        }
    };

    let on_file_change = move |_| {
        if let Some(ctl) = ensure_controller() {
            ctl.refresh_file_list();
        }
    };

    let on_drag_over = move |ev: DragEvent| {
        if let Some(ctl) = ensure_controller() {
            ctl.on_drag_over(&ev);
        }
    };

    let on_drag_leave = move |ev: DragEvent| {
        if let Some(ctl) = ensure_controller() {
            ctl.on_drag_leave(&ev);
        }
    };

    let on_drop = move |ev: DragEvent| {
        if let Some(ctl) = ensure_controller() {
            ctl.on_drop(&ev);
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(form) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlFormElement>().ok())
        else {
            return;
        };
        let Some(ctl) = ensure_controller() else {
            return;
        };
        if !ctl.before_submit(&form) {
            return;
        }

        set_error.set(None);
        log::info!("📤 Submitting files for conversion...");

        spawn_local(async move {
            match submit_conversion(&form).await {
                Ok(fragment) => {
                    log::info!("✅ Conversion response received");
                    set_result.set(Some(ConversionResult {
                        fragment_html: fragment,
                        received_at: received_at_now(),
                    }));
                }
                Err(e) => {
                    log::error!("❌ Conversion request failed: {}", e);
                    set_error.set(Some(e));
                }
            }
            ctl.after_submit(&form);
        });
    };

    view! {
        <form
            id="upload-form"
            class="upload-form"
            data-indicator="#loading-indicator"
            on:submit=on_submit
        >
            <div
                class="upload-area"
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <div class="upload-click-area" on:click=on_click_area>
                    <div class="upload-icon">"🗺️"</div>
                    <div class="upload-text">
                        "Drag & drop shapefile, KML or KMZ files here"
                    </div>
                    <div class="upload-hint">"or click to browse"</div>
                    <div class="upload-hint">
                        {format!(
                            "Supported: {} (up to {} MB)",
                            config::ACCEPTED_EXTENSIONS,
                            config::MAX_UPLOAD_MB,
                        )}
                    </div>
                </div>
                <input
                    type="file"
                    id="file-input"
                    name="files"
                    multiple=true
                    accept=config::ACCEPTED_EXTENSIONS
                    style="display:none"
                    on:change=on_file_change
                />
            </div>

            <div class="file-list" id="file-list"></div>

            <ConversionOptions/>

            <div class="submit-row">
                <button
                    type="submit"
                    id="submit-button"
                    class="btn btn-primary"
                    disabled=true
                >
                    <span id="button-text">{config::LABEL_EMPTY}</span>
                </button>
                <div id="loading-indicator" class="loading-indicator hidden">
                    <span class="spinner"></span>
                    " Converting..."
                </div>
            </div>
        </form>
    }
}

/// Local wall-clock time, for the result panel caption.
fn received_at_now() -> String {
    js_sys::Date::new_0()
        .to_locale_time_string("en-GB")
        .as_string()
        .unwrap_or_else(|| "00:00:00".to_string())
}
