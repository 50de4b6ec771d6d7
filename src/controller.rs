//! Upload form controller.
//!
//! Keeps the upload form's visual state (drop-zone highlight, selected
//! file list, submit enablement and label) synchronized with the file
//! input, and brackets form submission with the zero-files guard and the
//! loading indicator.
//!
//! The controller is handed its element handles once, when the form has
//! mounted; every handler is a named method so each piece of behavior
//! can be wired and reasoned about on its own. All other DOM lookups it
//! performs (drop-zone ancestor, indicator target) are defensive: a
//! missing optional element skips the corresponding behavior instead of
//! failing.

use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement};

use crate::config;
use crate::types::{file_list_lines, SelectedFile, SubmitState};

/// Marker class present on the drop-zone while a drag hovers over it.
const DRAGOVER_CLASS: &str = "dragover";

/// Marker class that keeps an element invisible.
const HIDDEN_CLASS: &str = "hidden";

/// Selector for the drop-zone ancestor of drag-event targets.
const UPLOAD_AREA_SELECTOR: &str = ".upload-area";

/// Selector for the form's file input, as used by the submission guard.
const FILE_INPUT_SELECTOR: &str = "#file-input";

/// Form attribute naming the CSS selector of its loading indicator.
const INDICATOR_ATTR: &str = "data-indicator";

/// Element ids the controller resolves its handles from.
const FILE_INPUT_ID: &str = "file-input";
const FILE_LIST_ID: &str = "file-list";
const SUBMIT_BUTTON_ID: &str = "submit-button";
const BUTTON_TEXT_ID: &str = "button-text";

/// Event-driven controller for the upload form.
///
/// All operations are side effects on the DOM; none return data. Handles
/// are cheap JS references, so the controller clones freely into event
/// closures.
#[derive(Clone)]
pub struct UploadController {
    file_input: HtmlInputElement,
    file_list: Element,
    submit_button: HtmlButtonElement,
    button_text: Element,
}

impl UploadController {
    /// Build a controller from the mounted form's element handles.
    pub fn new(
        file_input: HtmlInputElement,
        file_list: Element,
        submit_button: HtmlButtonElement,
        button_text: Element,
    ) -> Self {
        UploadController {
            file_input,
            file_list,
            submit_button,
            button_text,
        }
    }

    /// Resolve the controller's handles from the live document.
    ///
    /// Returns `None` until the upload form is in the DOM (or when the
    /// host page lacks one of the required elements). Lookups happen
    /// once, here; the handlers hold the resolved handles from then on.
    pub fn from_document() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let file_input = document
            .get_element_by_id(FILE_INPUT_ID)?
            .dyn_into::<HtmlInputElement>()
            .ok()?;
        let file_list = document.get_element_by_id(FILE_LIST_ID)?;
        let submit_button = document
            .get_element_by_id(SUBMIT_BUTTON_ID)?
            .dyn_into::<HtmlButtonElement>()
            .ok()?;
        let button_text = document.get_element_by_id(BUTTON_TEXT_ID)?;
        Some(UploadController::new(
            file_input,
            file_list,
            submit_button,
            button_text,
        ))
    }

    /// A drag moved over the drop-zone (or one of its descendants).
    ///
    /// Suppresses the browser's default reject-drop behavior and turns
    /// the drop-zone highlight on.
    pub fn on_drag_over(&self, ev: &DragEvent) {
        ev.prevent_default();
        if let Some(area) = closest_upload_area(ev) {
            let _ = area.class_list().add_1(DRAGOVER_CLASS);
        }
    }

    /// A drag left the drop-zone.
    ///
    /// Leaves fired while moving between the zone's own children are
    /// ignored, so the highlight doesn't flicker over nested elements;
    /// only a leave whose `relatedTarget` is outside the zone clears it.
    pub fn on_drag_leave(&self, ev: &DragEvent) {
        let Some(area) = closest_upload_area(ev) else {
            return;
        };
        if let Some(next) = ev
            .related_target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
        {
            if area.contains(Some(&next)) {
                return;
            }
        }
        let _ = area.class_list().remove_1(DRAGOVER_CLASS);
    }

    /// Files were dropped on the zone.
    ///
    /// Suppresses default navigation, clears the highlight, and assigns
    /// the dropped list to the file input. A drop always replaces the
    /// prior selection, it never merges. Ends with a full re-render.
    pub fn on_drop(&self, ev: &DragEvent) {
        ev.prevent_default();
        if let Some(area) = closest_upload_area(ev) {
            let _ = area.class_list().remove_1(DRAGOVER_CLASS);
        }
        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            log::info!("📥 {} file(s) dropped on the upload area", files.length());
            self.file_input.set_files(Some(&files));
            self.refresh_file_list();
        }
    }

    /// Re-render the file list and submit state from the input's files.
    ///
    /// Non-empty selection: a header plus one `• name (x.xx MB)` line
    /// per file, submit enabled with the ready label. Empty: list
    /// cleared, submit disabled with the prompt label. Idempotent, so
    /// it is also called once at initialization to pick up whatever
    /// selection the browser restored.
    pub fn refresh_file_list(&self) {
        let files = self.selected_files();
        let state = SubmitState::for_count(files.len());

        self.render_file_list(&files);
        self.submit_button.set_disabled(!state.enabled);
        self.button_text.set_text_content(Some(state.label));
    }

    /// Forward a click on the upload area to the hidden input's picker.
    pub fn open_file_picker(&self) {
        self.file_input.click();
    }

    /// Guard an outgoing submission of `form`.
    ///
    /// With an empty file input the submission is cancelled and the user
    /// gets a single blocking alert, the only validation this layer
    /// performs. Otherwise the form's declared indicator (if any) is
    /// made visible. Returns whether the submission may proceed.
    pub fn before_submit(&self, form: &HtmlFormElement) -> bool {
        if form_has_files(form) == Some(false) {
            log::warn!("🚫 Submission blocked: no files selected");
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(config::ALERT_NO_FILES);
            }
            return false;
        }
        set_indicator_hidden(form, false);
        true
    }

    /// A submission finished, successfully or not: hide the indicator.
    pub fn after_submit(&self, form: &HtmlFormElement) {
        set_indicator_hidden(form, true);
    }

    /// Snapshot the input's current `FileList` in order.
    fn selected_files(&self) -> Vec<SelectedFile> {
        let Some(files) = self.file_input.files() else {
            return Vec::new();
        };
        (0..files.length())
            .filter_map(|i| files.get(i))
            .map(|f| SelectedFile {
                name: f.name(),
                size: f.size(),
            })
            .collect()
    }

    /// Rebuild the list region's children from scratch.
    fn render_file_list(&self, files: &[SelectedFile]) {
        self.file_list.set_text_content(None);
        if files.is_empty() {
            return;
        }
        let Some(document) = self.file_list.owner_document() else {
            return;
        };
        if let Ok(header) = document.create_element("strong") {
            header.set_text_content(Some(config::FILE_LIST_HEADER));
            let _ = self.file_list.append_child(&header);
        }
        for line in file_list_lines(files) {
            if let Ok(entry) = document.create_element("div") {
                entry.set_class_name("file-entry");
                entry.set_text_content(Some(&line));
                let _ = self.file_list.append_child(&entry);
            }
        }
    }
}

/// Nearest drop-zone ancestor of the event's target, if any.
fn closest_upload_area(ev: &DragEvent) -> Option<Element> {
    ev.target()?
        .dyn_into::<Element>()
        .ok()?
        .closest(UPLOAD_AREA_SELECTOR)
        .ok()
        .flatten()
}

/// Whether the form's file input holds at least one file.
///
/// `None` when the form has no file input at all; the guard then lets
/// the submission through, mirroring the defensive lookups everywhere
/// else.
fn form_has_files(form: &HtmlFormElement) -> Option<bool> {
    let input = form.query_selector(FILE_INPUT_SELECTOR).ok().flatten()?;
    let input: HtmlInputElement = input.dyn_into().ok()?;
    Some(input.files().map(|f| f.length() > 0).unwrap_or(false))
}

/// Toggle the `hidden` class on the indicator the form points at.
///
/// The form names its indicator via the `data-indicator` attribute, a
/// CSS selector. No attribute, or no match, means no indicator to drive.
fn set_indicator_hidden(form: &HtmlFormElement, hidden: bool) {
    let Some(selector) = form.get_attribute(INDICATOR_ATTR) else {
        return;
    };
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(Some(indicator)) = document.query_selector(&selector) else {
        return;
    };
    let classes = indicator.class_list();
    let _ = if hidden {
        classes.add_1(HIDDEN_CLASS)
    } else {
        classes.remove_1(HIDDEN_CLASS)
    };
}
