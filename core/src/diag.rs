//! Diagnostic dumps of request and response bodies.
//!
//! # Design
//! Diagnostics are purely observational: they write HTML-escaped payload
//! dumps to a sink the caller injects and never influence the outcome of an
//! exchange. The sink is any `io::Write`, so tests capture output in a
//! buffer instead of intercepting stdout.

use std::io::Write;

/// Which sides of an exchange are dumped to the diagnostic sink.
///
/// Wire values follow the original debug flag: 0 off, 1 request only,
/// 2 response only, 3 both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DebugMode {
    #[default]
    None,
    RequestOnly,
    ResponseOnly,
    Both,
}

impl DebugMode {
    pub(crate) fn dumps_request(self) -> bool {
        matches!(self, DebugMode::RequestOnly | DebugMode::Both)
    }

    pub(crate) fn dumps_response(self) -> bool {
        matches!(self, DebugMode::ResponseOnly | DebugMode::Both)
    }
}

/// Escape `&`, `<`, `>`, `"` and `'` so an XML payload can be embedded in an
/// HTML diagnostic page without being interpreted as markup.
pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

/// Write one escaped payload dump to the sink, followed by a newline.
///
/// Sink failures are swallowed: diagnostics must never change the result of
/// an exchange.
pub(crate) fn emit(sink: &mut dyn Write, payload: &[u8]) {
    let text = String::from_utf8_lossy(payload);
    let _ = writeln!(sink, "{}", escape_html(&text));
}
