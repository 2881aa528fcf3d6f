//! Error type for the transport.
//!
//! # Design
//! The transport raises exactly one kind of error: the connection library
//! could not complete the round trip. Its message and numeric code are
//! carried verbatim so callers see the same detail the library reported.
//! Caller-side misuse (malformed URL, missing credentials) is not validated
//! here — it surfaces as whatever failure the connection library produces.

use thiserror::Error;

/// Errors returned by [`Transport::exchange`](crate::Transport::exchange).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The connection library reported that the exchange could not complete
    /// (connection refused, TLS handshake failure, DNS failure, ...).
    #[error("network failure (code {code}): {message}")]
    NetworkFailure { code: u32, message: String },
}
