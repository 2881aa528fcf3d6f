//! Mock Exchange Web Services endpoint for transport tests.
//!
//! Three routes, all POST:
//! - `/ews/Exchange.asmx` — the happy path: requires a `SOAPAction` header
//!   and a non-empty body, answers with a fixed response envelope.
//! - `/ews/headers` — echoes selected request headers back as plain text so
//!   tests can assert what actually went over the wire.
//! - `/ews/fault` — answers 500 with a fault body; the transport must hand
//!   that body back unchanged since it performs no status interpretation.

use axum::{
    body::Bytes,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use tokio::net::TcpListener;

/// Body returned by the happy-path route.
pub const RESPONSE_ENVELOPE: &str = "<Envelope><Response/></Envelope>";

/// Body returned by the fault route.
pub const FAULT_ENVELOPE: &str = "<Fault/>";

pub fn app() -> Router {
    Router::new()
        .route("/ews/Exchange.asmx", post(exchange))
        .route("/ews/headers", post(echo_headers))
        .route("/ews/fault", post(fault))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn exchange(headers: HeaderMap, body: Bytes) -> Response {
    if !headers.contains_key("soapaction") || body.is_empty() {
        return StatusCode::BAD_REQUEST.into_response();
    }
    (
        [(header::CONTENT_TYPE, "text/xml; charset=utf-8")],
        RESPONSE_ENVELOPE,
    )
        .into_response()
}

async fn echo_headers(headers: HeaderMap) -> String {
    let mut lines = String::new();
    for name in ["soapaction", "user-agent", "content-type"] {
        if let Some(value) = headers.get(name).and_then(|v| v.to_str().ok()) {
            lines.push_str(name);
            lines.push_str(": ");
            lines.push_str(value);
            lines.push('\n');
        }
    }
    lines
}

async fn fault() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/xml; charset=utf-8")],
        FAULT_ENVELOPE,
    )
        .into_response()
}
