//! Common types used across the frontend application.
//!
//! This module centralizes the UI-state types and the pure derivations
//! behind them, so the rendering rules can be exercised without a DOM.
//!
//! # Categories
//!
//! - **Selection Types** - file descriptors and the derived submit state
//! - **Result Types** - the converter's response as shown on the page
//! - **Error Types** - frontend error handling

use std::fmt;

use crate::config;

// =============================================================================
// Selection Types
// =============================================================================

/// A file currently selected in the upload form.
///
/// Observed from the file input, never owned: the input element holds
/// the real `FileList`, this is the snapshot the UI renders from.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    /// File name as reported by the browser
    pub name: String,
    /// Size in bytes (`File.size` is a double in the DOM)
    pub size: f64,
}

/// Derived enablement and label of the form's submit control.
///
/// Always recomputed from the current selection count, never stored, so
/// the button can't drift out of sync with the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitState {
    /// Whether the submit button accepts clicks
    pub enabled: bool,
    /// Text shown inside the button
    pub label: &'static str,
}

impl SubmitState {
    /// Derive the submit state from the number of selected files.
    pub fn for_count(count: usize) -> Self {
        if count > 0 {
            SubmitState {
                enabled: true,
                label: config::LABEL_READY,
            }
        } else {
            SubmitState {
                enabled: false,
                label: config::LABEL_EMPTY,
            }
        }
    }
}

/// Format a byte count the way the file list displays it.
///
/// Sizes are shown in megabytes (1024 * 1024 bytes) with two decimals,
/// e.g. `1.00 MB`.
pub fn format_file_size(bytes: f64) -> String {
    format!("{:.2} MB", bytes / 1024.0 / 1024.0)
}

/// Render the selected-file list as one display line per file.
///
/// Lines keep the input's order. An empty selection yields no lines;
/// the caller clears the list region in that case.
pub fn file_list_lines(files: &[SelectedFile]) -> Vec<String> {
    files
        .iter()
        .map(|f| format!("• {} ({})", f.name, format_file_size(f.size)))
        .collect()
}

// =============================================================================
// Result Types
// =============================================================================

/// Converter response shown in the result panel.
///
/// The service answers `POST /upload` with an HTML fragment (success and
/// handled errors alike); the page swaps it in without interpreting it.
#[derive(Clone, Debug, PartialEq)]
pub struct ConversionResult {
    /// Response body, verbatim
    pub fragment_html: String,
    /// Local wall-clock time the response arrived (HH:MM:SS)
    pub received_at: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// A required DOM handle or API was unavailable.
    Dom(String),
    /// Request never completed (network, CORS, aborted).
    Network(String),
    /// The service answered with a non-success status.
    Server { status: u16, message: String },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Dom(msg) => write!(f, "Browser error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(files: &[(&str, f64)]) -> Vec<SelectedFile> {
        files
            .iter()
            .map(|(name, size)| SelectedFile {
                name: (*name).to_string(),
                size: *size,
            })
            .collect()
    }

    #[test]
    fn submit_state_enabled_with_files() {
        for count in [1, 2, 40] {
            let state = SubmitState::for_count(count);
            assert!(state.enabled);
            assert_eq!(state.label, config::LABEL_READY);
        }
    }

    #[test]
    fn submit_state_disabled_when_empty() {
        let state = SubmitState::for_count(0);
        assert!(!state.enabled);
        assert_eq!(state.label, config::LABEL_EMPTY);
    }

    #[test]
    fn format_file_size_two_decimals() {
        assert_eq!(format_file_size(1_048_576.0), "1.00 MB");
        assert_eq!(format_file_size(2_621_440.0), "2.50 MB");
        assert_eq!(format_file_size(524_288.0), "0.50 MB");
        // Small files round down to zero rather than switching units
        assert_eq!(format_file_size(1_234.0), "0.00 MB");
        assert_eq!(format_file_size(0.0), "0.00 MB");
    }

    #[test]
    fn file_list_lines_keeps_order_and_format() {
        let files = selection(&[("track.csv", 1_048_576.0), ("route.csv", 2_621_440.0)]);
        let lines = file_list_lines(&files);
        assert_eq!(
            lines,
            vec![
                "• track.csv (1.00 MB)".to_string(),
                "• route.csv (2.50 MB)".to_string(),
            ]
        );
    }

    #[test]
    fn file_list_lines_empty_selection() {
        assert!(file_list_lines(&[]).is_empty());
    }

    #[test]
    fn file_list_lines_is_idempotent() {
        let files = selection(&[("alpine.kml", 3_145_728.0), ("yard.shp", 42.0)]);
        assert_eq!(file_list_lines(&files), file_list_lines(&files));
    }

    #[test]
    fn one_line_per_file() {
        let files = selection(&[
            ("a.shp", 1.0),
            ("b.shp", 2.0),
            ("c.kmz", 3.0),
            ("d.kml", 4.0),
        ]);
        assert_eq!(file_list_lines(&files).len(), files.len());
    }

    #[test]
    fn app_error_display() {
        assert_eq!(
            AppError::Network("timed out".to_string()).to_string(),
            "Network error: timed out"
        );
        assert_eq!(
            AppError::Server {
                status: 500,
                message: "boom".to_string()
            }
            .to_string(),
            "Server error (500): boom"
        );
    }
}
