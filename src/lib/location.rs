//! Query-string access for token-bearing links. Tokens are read once, then the
//! address bar is rewritten to the bare route so the token does not stay in
//! history. Never log the returned value.

use url::form_urlencoded;

/// Name of the query parameter carrying reset and verification tokens.
pub const TOKEN_PARAM: &str = "token";

/// Extracts the first non-empty `token` value from a query string. Accepts
/// the string with or without its leading `?`.
pub fn token_from_query(search: &str) -> Option<String> {
    let query = search.trim().trim_start_matches('?');
    if query.is_empty() {
        return None;
    }

    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == TOKEN_PARAM)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Query string of the current window location, `?` included.
#[cfg(target_arch = "wasm32")]
pub fn current_search() -> Option<String> {
    web_sys::window()?.location().search().ok()
}

/// Replaces the current history entry with `path`, dropping the query string.
#[cfg(target_arch = "wasm32")]
pub fn clear_token_query(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };
    if history
        .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path))
        .is_err()
    {
        tracing::warn!(path, "unable to clear token from the address bar");
    }
}
