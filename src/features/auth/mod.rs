//! Auth feature module covering the token-gated password reset and email
//! verification flows. It keeps request and validation logic out of the
//! routes. Tokens and passwords cross this boundary and must never be logged.
//!
//! Flow Overview: a page reads `token` from its link, validates local input
//! (reset only), sends one request and projects the result onto a terminal
//! status. Success raises a toast and redirects to `/login` after a delay. When
//! a link is missing or spent, `recovery` requests a fresh one by email.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod flow;
pub(crate) mod password;
pub(crate) mod recovery;
#[cfg(target_arch = "wasm32")]
pub(crate) mod redirect;
pub(crate) mod token;
pub(crate) mod types;
