//! HTTP helpers for JSON APIs with consistent URL building and error handling.
//! Feature clients use these helpers to avoid duplicating request setup. Requests
//! are awaited to completion; the helpers never retry. They do not store secrets;
//! path segments carrying tokens must be encoded with `encode_path_segment` and
//! never logged.

use super::errors::AppError;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, de::DeserializeOwned};
#[cfg(target_arch = "wasm32")]
use {super::config::AppConfig, serde::Serialize};

/// Maximum number of characters of a server message surfaced to the UI.
const MAX_MESSAGE_CHARS: usize = 200;

/// Characters left as-is inside a single path segment (RFC 3986 unreserved).
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Fetches JSON from the configured API base.
#[cfg(target_arch = "wasm32")]
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
    use gloo_net::http::Request;

    let url = build_url(path);
    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(map_request_error)?;

    handle_json_response(response).await
}

/// Posts a JSON body to the configured API base and parses a JSON response.
#[cfg(target_arch = "wasm32")]
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    use gloo_net::http::Request;

    let url = build_url(path);
    let payload = serde_json::to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = Request::post(&url)
        .header("Content-Type", "application/json")
        .header("Accept", "application/json")
        .body(payload)
        .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?
        .send()
        .await
        .map_err(map_request_error)?;

    handle_json_response(response).await
}

/// Percent-encodes `value` so it stays a single path segment.
pub fn encode_path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// Builds a URL from the configured API base URL and the provided path.
#[cfg(target_arch = "wasm32")]
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    build_url_with_base(&config.api_base_url, path)
}

/// Builds a URL from an explicit base URL and the provided path.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

#[cfg(target_arch = "wasm32")]
fn map_request_error(err: gloo_net::Error) -> AppError {
    tracing::warn!("request did not reach the server");
    AppError::Network(format!("Unable to reach the server: {err}"))
}

/// Parses JSON responses and surfaces HTTP errors with their server message.
#[cfg(target_arch = "wasm32")]
async fn handle_json_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, AppError> {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if response.ok() {
        decode_success_body(&body)
    } else {
        tracing::debug!(status, "request rejected");
        Err(AppError::Http {
            status,
            message: error_message(&body),
        })
    }
}

/// Decodes a success body; an empty body (204) decodes as `{}` so response
/// types with only optional fields still parse.
fn decode_success_body<T: DeserializeOwned>(body: &str) -> Result<T, AppError> {
    let body = body.trim();
    let body = if body.is_empty() { "{}" } else { body };
    serde_json::from_str(body)
        .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default, alias = "error")]
    message: Option<String>,
}

/// Pulls a human-readable message out of an error body. Only JSON
/// `{"message": ..}` (or `{"error": ..}`) bodies qualify; raw text is not shown.
fn error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body.trim()).ok()?;
    let message = parsed.message?;
    let trimmed = message.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(MAX_MESSAGE_CHARS).collect())
    }
}
