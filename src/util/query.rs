//! Minimal query-string parsing and encoding.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by session restore (one-time `?token=` adoption), the route guard
//! (`?from=` return paths) and the payment result page (`?session_id=`).
//! Kept dependency-free so the pure logic is unit-testable off-browser.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

/// Extract a single query parameter from a `location.search` string.
///
/// Accepts the string with or without the leading `?`. Returns the decoded
/// value of the first matching key, or `None` when absent. A bare key with
/// no `=` yields an empty value.
pub fn query_param(search: &str, name: &str) -> Option<String> {
    let search = search.strip_prefix('?').unwrap_or(search);
    for pair in search.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key == name {
            return Some(decode_component(value));
        }
    }
    None
}

/// Percent-encode a value for use inside a query string.
pub fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Decode a percent-encoded query component. `+` decodes to a space;
/// malformed escapes pass through unchanged.
pub fn decode_component(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len() => {
                let decoded = std::str::from_utf8(&bytes[i + 1..i + 3])
                    .ok()
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok());
                if let Some(byte) = decoded {
                    out.push(byte);
                    i += 3;
                    continue;
                }
                out.push(b'%');
                i += 1;
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}
