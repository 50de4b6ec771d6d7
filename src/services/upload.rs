//! HTTP service for submitting the upload form to the converter.

use gloo_net::http::Request;
use web_sys::{FormData, HtmlFormElement};

use crate::config;
use crate::types::{AppError, AppResult};

/// POST the upload form to the converter service.
///
/// The body is the whole form as multipart data: the `files` input plus
/// the conversion-option fields (`output-name`, `interpolate-distance`,
/// `max-lod`, `poi-color`), exactly what a native form post would send.
/// The service answers with an HTML fragment for success and for handled
/// errors alike; the fragment is returned verbatim for the result panel
/// to swap in. Only transport-level failures and non-2xx statuses map to
/// [`AppError`].
pub async fn submit_conversion(form: &HtmlFormElement) -> AppResult<String> {
    let form_data = FormData::new_with_form(form)
        .map_err(|e| AppError::Dom(format!("failed to read form data: {:?}", e)))?;

    let url = format!("{}{}", config::BACKEND_URL, config::UPLOAD_PATH);
    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| AppError::Network(format!("failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if !response.ok() {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        return Err(AppError::Server {
            status: response.status(),
            message,
        });
    }

    response
        .text()
        .await
        .map_err(|e| AppError::Network(e.to_string()))
}
