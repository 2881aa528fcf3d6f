//! NTLM-authenticated SOAP transport.
//!
//! # Design
//! `Transport` performs one blocking request/response exchange per call and
//! returns the response body untouched — no status interpretation, no
//! parsing, no retry. It owns only session-scoped configuration and the
//! header lines of the most recent call; the connection handle lives inside
//! the connector for exactly one `exchange`.
//!
//! Authentication scheme selection is re-derived from the connector's
//! capability report on every call, so a capability change between calls is
//! never masked by a stale cache. A connector without NTLM support silently
//! narrows the scheme set to basic — a missing capability is degradation,
//! not an error.

use std::io::{self, Write};

use crate::diag::{self, DebugMode};
use crate::error::TransportError;
use crate::wire::{AuthSchemes, Connector, TlsPolicy, VerifyHostMode, WireRequest};

/// Fixed user-agent sent with every exchange.
pub const USER_AGENT: &str = "ews-soap-curl";

/// Username/secret pair applied to every exchange. The transport does not
/// validate these; supplying them is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub secret: String,
}

/// Session-scoped transport configuration.
///
/// `validate_certificate` defaults to `false` — the historical default,
/// insecure as it is — and `verify_host` to `Strict`, which only takes
/// effect once validation is switched on.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub validate_certificate: bool,
    pub verify_host: VerifyHostMode,
    pub debug: DebugMode,
    pub credentials: Credentials,
}

/// One SOAP exchange to perform: destination, serialized envelope, and
/// protocol metadata supplied by the message-construction layer.
#[derive(Debug, Clone)]
pub struct ExchangeRequest {
    pub url: String,
    pub body: Vec<u8>,
    pub action: String,
    pub version: u32,
    /// Accepted for protocol completeness; the round trip is performed and
    /// the response body read either way.
    pub one_way: bool,
}

/// Blocking SOAP transport over an injected connection primitive.
///
/// One instance serves at most one in-flight exchange at a time; concurrent
/// callers need external locking or an instance each, since the last-request
/// header capture is last-write-wins.
pub struct Transport<C> {
    connector: C,
    config: TransportConfig,
    sink: Box<dyn Write + Send>,
    last_request_headers: Vec<String>,
}

impl<C: Connector> Transport<C> {
    /// Build a transport with the historical defaults: certificate
    /// validation off, strict host verification, diagnostics off, stdout as
    /// the diagnostic sink.
    pub fn new(connector: C, credentials: Credentials) -> Self {
        Self {
            connector,
            config: TransportConfig {
                validate_certificate: false,
                verify_host: VerifyHostMode::Strict,
                debug: DebugMode::None,
                credentials,
            },
            sink: Box::new(io::stdout()),
            last_request_headers: Vec::new(),
        }
    }

    /// Replace the diagnostic sink.
    pub fn with_debug_sink(mut self, sink: Box<dyn Write + Send>) -> Self {
        self.sink = sink;
        self
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Enable or disable TLS peer validation. While disabled, host
    /// verification is forced off as well, whatever mode is configured.
    pub fn set_validate_certificate(&mut self, enabled: bool) {
        self.config.validate_certificate = enabled;
    }

    /// Set hostname-verification strictness by wire level: `0` disables the
    /// check, `2` selects the strict check, and any other level falls back
    /// to the deprecated partial check.
    pub fn set_verify_host(&mut self, level: u32) {
        self.config.verify_host = VerifyHostMode::from_level(level);
    }

    pub fn set_debug_mode(&mut self, mode: DebugMode) {
        self.config.debug = mode;
    }

    /// Header lines recorded for the most recent exchange, in the order they
    /// were sent. Empty before the first call.
    pub fn last_request_headers(&self) -> &[String] {
        &self.last_request_headers
    }

    /// The recorded header lines newline-joined with a trailing newline.
    /// Empty before the first call.
    pub fn last_request_headers_text(&self) -> String {
        if self.last_request_headers.is_empty() {
            return String::new();
        }
        let mut text = self.last_request_headers.join("\n");
        text.push('\n');
        text
    }

    /// Perform one blocking SOAP exchange.
    ///
    /// The header set is recorded before the call is issued, so the capture
    /// reflects the intended headers even when the round trip fails.
    /// Diagnostics (if enabled) are emitted whether or not the call
    /// succeeded and never alter the returned value.
    ///
    /// # Errors
    /// [`TransportError::NetworkFailure`] when the connection library could
    /// not complete the round trip, carrying its message and numeric code
    /// verbatim.
    pub fn exchange(&mut self, request: &ExchangeRequest) -> Result<Vec<u8>, TransportError> {
        let header_lines = build_header_lines(&request.action);
        self.last_request_headers = header_lines.clone();

        // Host verification only applies while peer validation is on.
        let tls = TlsPolicy {
            verify_peer: self.config.validate_certificate,
            verify_host: if self.config.validate_certificate {
                self.config.verify_host
            } else {
                VerifyHostMode::Disabled
            },
        };

        let capabilities = self.connector.capabilities();
        let auth = AuthSchemes {
            basic: true,
            ntlm: capabilities.ntlm,
        };

        tracing::debug!(
            url = %request.url,
            action = %request.action,
            ntlm = auth.ntlm,
            one_way = request.one_way,
            "issuing soap exchange"
        );

        let wire = WireRequest {
            url: request.url.clone(),
            header_lines,
            body: request.body.clone(),
            tls,
            auth,
            username: self.config.credentials.username.clone(),
            secret: self.config.credentials.secret.clone(),
        };

        let outcome = self.connector.perform(&wire);

        if self.config.debug.dumps_request() {
            diag::emit(self.sink.as_mut(), &request.body);
        }
        if self.config.debug.dumps_response() {
            if let Ok(body) = &outcome {
                diag::emit(self.sink.as_mut(), body);
            }
        }

        match outcome {
            Ok(body) => Ok(body),
            Err(e) => {
                tracing::debug!(code = e.code, message = %e.message, "soap exchange failed");
                Err(TransportError::NetworkFailure {
                    code: e.code,
                    message: e.message,
                })
            }
        }
    }
}

/// The deterministic header set: four fixed lines plus the quoted
/// SOAPAction, in this order.
fn build_header_lines(action: &str) -> Vec<String> {
    vec![
        "Method: POST".to_string(),
        "Connection: Keep-Alive".to_string(),
        format!("User-Agent: {USER_AGENT}"),
        "Content-Type: text/xml; charset=utf-8".to_string(),
        format!("SOAPAction: \"{action}\""),
    ]
}
