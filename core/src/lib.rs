//! Client-side SOAP transport with NTLM authentication for Exchange Web
//! Services.
//!
//! # Overview
//! [`Transport`] performs one blocking request/response exchange per call:
//! the caller supplies a serialized envelope, a destination URL, and
//! protocol metadata; the transport applies authentication and TLS policy,
//! issues the POST, and hands back the raw response bytes or a typed
//! network error. No parsing, no retries, no status interpretation.
//!
//! # Design
//! - The connection primitive sits behind the [`Connector`] seam; the
//!   production [`CurlConnector`] lives in this crate, tests inject fakes.
//! - Authentication schemes are chosen per call from the connector's
//!   capability report: basic always, NTLM when the library supports it.
//! - Diagnostics go to an injected sink and never affect results.
//! - The only state carried across calls is the configuration and the
//!   header lines of the most recent exchange.

pub mod connector;
pub mod diag;
pub mod error;
pub mod transport;
pub mod types;
pub mod wire;

pub use connector::CurlConnector;
pub use diag::DebugMode;
pub use error::TransportError;
pub use transport::{Credentials, ExchangeRequest, Transport, TransportConfig, USER_AGENT};
pub use types::{ContactSource, DistributionList};
pub use wire::{
    AuthCapabilities, AuthSchemes, Connector, ConnectorError, TlsPolicy, VerifyHostMode,
    WireRequest, NTLM_MIN_VERSION_NUM,
};
