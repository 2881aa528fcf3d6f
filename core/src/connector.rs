//! Production connector backed by libcurl via the `curl` crate.
//!
//! # Design
//! A fresh easy handle is created inside every `perform` call and dropped on
//! every exit path, so no connection state outlives an exchange. The handle
//! is configured purely from the [`WireRequest`] data; nothing is decided
//! here beyond translating that data into curl options.

use curl::easy::{Auth, Easy, HttpVersion, List};

use crate::wire::{AuthCapabilities, Connector, ConnectorError, VerifyHostMode, WireRequest};

/// Blocking connector using libcurl, the same library family the service
/// integrations in this area have always used.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurlConnector;

impl Connector for CurlConnector {
    fn capabilities(&self) -> AuthCapabilities {
        let version = curl::Version::get();
        AuthCapabilities::from_version(version.version_num(), version.feature_ntlm())
    }

    fn perform(&self, request: &WireRequest) -> Result<Vec<u8>, ConnectorError> {
        run(request).map_err(|e| ConnectorError {
            code: e.code() as u32,
            message: e.description().to_string(),
        })
    }
}

fn run(request: &WireRequest) -> Result<Vec<u8>, curl::Error> {
    let mut handle = Easy::new();
    handle.url(&request.url)?;
    handle.post(true)?;
    handle.post_fields_copy(&request.body)?;

    let mut headers = List::new();
    for line in &request.header_lines {
        headers.append(line)?;
    }
    handle.http_headers(headers)?;

    handle.ssl_verify_peer(request.tls.verify_peer)?;
    handle.ssl_verify_host(verify_host_flag(request.tls.verify_host))?;
    handle.http_version(HttpVersion::V11)?;

    let mut auth = Auth::new();
    auth.basic(request.auth.basic);
    auth.ntlm(request.auth.ntlm);
    handle.http_auth(&auth)?;
    handle.username(&request.username)?;
    handle.password(&request.secret)?;

    let mut body = Vec::new();
    {
        let mut transfer = handle.transfer();
        transfer.write_function(|chunk| {
            body.extend_from_slice(chunk);
            Ok(chunk.len())
        })?;
        transfer.perform()?;
    }
    Ok(body)
}

/// libcurl dropped the level-1 partial check (7.28 treats it as level 2),
/// and the safe binding exposes only on/off. The deprecated mode therefore
/// verifies strictly here; the three-way distinction survives on the wire
/// type for connectors that can express it.
fn verify_host_flag(mode: VerifyHostMode) -> bool {
    mode != VerifyHostMode::Disabled
}
