//! Wire-level types crossing the connector seam.
//!
//! # Design
//! `Transport` never touches the connection library directly. It compiles
//! each exchange into a [`WireRequest`] — plain data describing the URL,
//! header lines, body, TLS policy, and authentication schemes — and hands it
//! to a [`Connector`]. The production connector maps that data onto a curl
//! easy handle; tests substitute a recording connector and assert on the
//! data itself. All fields are owned so a `WireRequest` carries no lifetimes.

/// Hostname-verification strictness applied when peer validation is on.
///
/// Wire levels follow libcurl's `SSL_VERIFYHOST` convention: `0` disables
/// the check, `1` is the historical partial check, `2` requires the
/// certificate to name the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyHostMode {
    Disabled,
    Deprecated,
    Strict,
}

impl VerifyHostMode {
    /// Fold a raw level into a mode: `0` disables, `2` is strict, and any
    /// other value lands on the deprecated partial check.
    pub fn from_level(level: u32) -> Self {
        match level {
            0 => VerifyHostMode::Disabled,
            2 => VerifyHostMode::Strict,
            _ => VerifyHostMode::Deprecated,
        }
    }

    /// The numeric `SSL_VERIFYHOST` level this mode corresponds to.
    pub fn level(self) -> u32 {
        match self {
            VerifyHostMode::Disabled => 0,
            VerifyHostMode::Deprecated => 1,
            VerifyHostMode::Strict => 2,
        }
    }
}

/// TLS policy for one exchange, already resolved against the certificate
/// validation switch: when peer verification is off, `verify_host` is
/// `Disabled` regardless of the configured mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlsPolicy {
    pub verify_peer: bool,
    pub verify_host: VerifyHostMode,
}

/// HTTP authentication schemes enabled for one exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthSchemes {
    pub basic: bool,
    pub ntlm: bool,
}

/// Minimum libcurl version (`0xXXYYZZ` form) known to negotiate NTLM
/// reliably: 7.30.0. Everything below — 7.22 with its interoperability
/// problems among them — degrades to basic-only.
pub const NTLM_MIN_VERSION_NUM: u32 = 0x07_1E_00;

/// What the connection library is able to negotiate, as reported by a
/// [`Connector`] at exchange time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthCapabilities {
    pub ntlm: bool,
}

impl AuthCapabilities {
    /// Derive capabilities from a library version number and its NTLM
    /// feature flag. NTLM requires both the feature and a version at or
    /// above [`NTLM_MIN_VERSION_NUM`].
    pub fn from_version(version_num: u32, feature_ntlm: bool) -> Self {
        Self {
            ntlm: feature_ntlm && version_num >= NTLM_MIN_VERSION_NUM,
        }
    }
}

/// A fully prepared exchange as handed to a connector: everything the
/// connection library needs, nothing it has to decide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireRequest {
    pub url: String,
    pub header_lines: Vec<String>,
    pub body: Vec<u8>,
    pub tls: TlsPolicy,
    pub auth: AuthSchemes,
    pub username: String,
    pub secret: String,
}

/// Failure reported by a connector, carrying the connection library's
/// numeric error code and message verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorError {
    pub code: u32,
    pub message: String,
}

/// A blocking connection primitive: one POST round trip per call.
///
/// Implementations must scope any connection handle to a single `perform`
/// call — acquired on entry, released on every exit path, never retained.
pub trait Connector {
    /// Report what the library can negotiate. Consulted once per exchange
    /// and never cached by the transport, so a capability change between
    /// calls takes effect immediately.
    fn capabilities(&self) -> AuthCapabilities;

    /// Execute one blocking round trip. Returns the raw response body, or
    /// the library's error code and message when the transfer could not
    /// complete.
    fn perform(&self, request: &WireRequest) -> Result<Vec<u8>, ConnectorError>;
}
