//! `opsdesk-client` — the REST client with its two interceptors.
//!
//! Outbound: every request is decorated with the bearer credential and the
//! tenant-scoping company header when present. Inbound: every error
//! response is classified into [`FailureClass`]; the HTTP layer performs no
//! navigation or state mutation itself — the shell's dispatcher owns those
//! side effects.
//!
//! No retries, no backoff, no queuing: one-shot classify and return.

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod error;

pub use auth::RequestAuth;
pub use client::ApiClient;
pub use error::{classify, ApiError, ApiResult, FailureClass, SubscriptionExpiry};
