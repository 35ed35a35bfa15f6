//! Shared frontend utilities for API access, configuration, errors, logging,
//! location handling and build metadata.
//!
//! ## Token-bearing links
//!
//! Password reset and email verification emails link to `/reset-password?token=..`
//! and `/verify-email?token=..`. The page reads the token once through
//! [`location::token_from_query`], rewrites the address bar to the bare route,
//! and sends the token to the API as a percent-encoded path segment:
//!
//! 1. **Verify:** `GET /auth/verify-email/{token}`.
//! 2. **Reset:** `POST /auth/reset-password/{token}` with `{"password": ..}`.
//!
//! Both answer `{"message"?: string}`. Centralizing these helpers keeps network
//! behavior consistent; callers must still avoid logging token material.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod location;
pub(crate) mod paths;
pub(crate) mod telemetry;
pub(crate) mod theme;

#[cfg(target_arch = "wasm32")]
pub(crate) use api::{get_json, post_json};
pub(crate) use errors::AppError;
