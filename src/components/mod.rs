//! UI Components for the converter frontend.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - navigation bar with the service status badge
//! - [`Hero`] - main title and description
//! - [`Footer`] - page footer
//!
//! # Feature Components
//! - [`UploadSection`] - the upload form: drop-zone, file list, options,
//!   submit button and loading indicator
//! - [`ConversionOptions`] - mod name, interpolation, LOD and color fields
//! - [`ResultSection`] - conversion response panel (fragment swap target)

mod footer;
mod header;
mod hero;
mod options;
mod result;
mod upload;

pub use footer::*;
pub use header::*;
pub use hero::*;
pub use options::*;
pub use result::*;
pub use upload::*;
