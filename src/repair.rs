//! Repairs the oracle's serialized payload before parsing. Corrupted source
//! characters copied verbatim into quoted strings leave invalid escape
//! sequences behind; the repair pass drops the offending backslash and keeps
//! the following character. Legitimate escapes are never altered.

use crate::error::AlignError;
use crate::oracle::OracleResponse;

/// Escape introducers that are legal after a backslash in JSON.
const LEGAL_ESCAPES: [char; 9] = ['"', '\\', '/', 'b', 'f', 'n', 'r', 't', 'u'];

/// Single linear pass: a backslash followed by anything outside
/// [`LEGAL_ESCAPES`] is dropped. A legal escape is consumed as a pair so the
/// pass is idempotent (`repair(repair(x)) == repair(x)`).
pub fn repair_payload(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some(&next) if LEGAL_ESCAPES.contains(&next) => {
                out.push('\\');
                out.push(next);
                chars.next();
            }
            // invalid escape: drop the backslash, the next char is emitted
            // by the following iteration
            Some(_) => {}
            // trailing backslash can never be legal
            None => {}
        }
    }
    out
}

/// Strip the Markdown code fences the oracle tends to wrap JSON in, and fall
/// back to the outermost brace/bracket pair when the payload has prose
/// around it.
pub fn strip_code_fences(raw: &str) -> &str {
    let raw = raw.trim();

    if let Some(start) = raw.find("```json") {
        let body = &raw[start + 7..];
        if let Some(end) = body.find("```") {
            return body[..end].trim();
        }
        return body.trim();
    }
    if let Some(body) = raw.strip_prefix("```").and_then(|r| r.strip_suffix("```")) {
        return body.trim();
    }
    if !raw.starts_with('{') && !raw.starts_with('[') {
        let open = raw.find(['{', '[']);
        let close = raw.rfind(['}', ']']);
        if let (Some(open), Some(close)) = (open, close) {
            if open < close {
                return &raw[open..=close];
            }
        }
    }
    raw
}

/// Repair and parse the oracle payload. Parsing the response without the
/// repair pass intermittently fails on any document with corrupted source
/// characters, so this is the only entry point.
pub fn parse_payload(raw: &str) -> Result<OracleResponse, AlignError> {
    let repaired = repair_payload(strip_code_fences(raw));
    serde_json::from_str(&repaired).map_err(|e| AlignError::ParseFailure {
        line: e.line(),
        column: e.column(),
        message: e.to_string(),
    })
}
