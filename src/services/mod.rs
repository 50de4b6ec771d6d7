//! Converter service communication.
//!
//! This module talks to the nimby_shapetopoi web service:
//!
//! # Services
//!
//! - [`upload`] - multipart form submission to `/upload`
//! - [`health`] - service availability probe against `/health`

pub mod health;
pub mod upload;

pub use health::*;
pub use upload::*;
