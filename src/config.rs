//! Application configuration.
//!
//! Centralized configuration for the converter frontend. In development
//! these are hardcoded; the converter service itself applies the same
//! defaults server-side, so they only have to match, not be negotiated.

/// Converter service base URL.
///
/// The nimby_shapetopoi web server (serves `/upload` and `/health`).
pub const BACKEND_URL: &str = "http://localhost:8080";

/// Upload endpoint path on the converter service.
pub const UPLOAD_PATH: &str = "/upload";

/// Health endpoint path on the converter service.
pub const HEALTH_PATH: &str = "/health";

/// Application name, used for the document title.
pub const APP_NAME: &str = "NIMBY Rails Shapefile to POI Converter";

/// File extensions the converter accepts, as an input `accept` hint.
///
/// Selection is not validated client-side; the service rejects anything
/// else per file.
pub const ACCEPTED_EXTENSIONS: &str = ".shp,.kml,.kmz";

/// Upload size cap enforced by the service (displayed as a hint only).
pub const MAX_UPLOAD_MB: usize = 50;

/// Submit-button label while at least one file is selected.
pub const LABEL_READY: &str = "Convert to NIMBY Rails Mod";

/// Submit-button label while the selection is empty.
pub const LABEL_EMPTY: &str = "Please select files first";

/// Header line rendered above the selected-file list.
pub const FILE_LIST_HEADER: &str = "Selected files:";

/// Blocking message shown when submitting with no files selected.
pub const ALERT_NO_FILES: &str = "Please select at least one file to upload.";

/// Default mod name sent when the user leaves the field untouched.
pub const DEFAULT_OUTPUT_NAME: &str = "converted-mod";

/// Default POI color (NIMBY blue).
pub const DEFAULT_POI_COLOR: &str = "#0000ff";

/// Largest selectable level-of-detail value for POI visibility.
pub const MAX_LOD: u8 = 10;
