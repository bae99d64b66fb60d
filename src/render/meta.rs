//! Page metadata for `<head>` tags and the `X-Meta-Data` header

use serde::Serialize;

/// Metadata of a rendered page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub og_type: &'static str,
    pub url: String,
    pub og_image: String,
}

impl PageMeta {
    /// JSON for the `X-Meta-Data` header, read by the client after a swap
    ///
    /// Non-ASCII characters are written as `\uXXXX` escapes so the value is
    /// a valid header on every client.
    pub fn header_json(&self) -> String {
        let value = serde_json::json!({
            "TITLE": self.title,
            "DESCRIPTION": self.description,
            "KEYWORDS": self.keywords,
            "OG_TYPE": self.og_type,
            "URL": self.url,
            "OG_IMAGE": self.og_image,
        });
        ascii_json(&value.to_string())
    }
}

/// Replace every non-ASCII char of a JSON document with `\u` escapes
///
/// Non-ASCII can only occur inside JSON strings, where the escape is
/// equivalent.
fn ascii_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut units = [0u16; 2];
    for c in json.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            for unit in c.encode_utf16(&mut units) {
                out.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    out
}
