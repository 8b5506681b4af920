//! HTML utility functions.
//!
//! - `strip_tags()` - Markup to plain text for feed titles
//! - `unescape()` - HTML entity decoding

use quick_xml::escape::resolve_html5_entity;
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

/// Comments first so `<!-- a > b -->` is removed as a whole.
static RE_MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->|<[^>]*>").unwrap());

/// Remove markup from a string, returning plain text.
///
/// Tags and comments are dropped, runs of whitespace collapse to a single
/// space, and entities are decoded last so escaped angle brackets survive
/// as literal text.
///
/// # Example
/// ```ignore
/// assert_eq!(strip_tags("<b>Hello</b>   world"), "Hello world");
/// assert_eq!(strip_tags("a &lt;b&gt;"), "a <b>");
/// ```
pub fn strip_tags(s: &str) -> String {
    let text = RE_MARKUP.replace_all(s, "");
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    unescape(&collapsed).into_owned()
}

/// Unescape HTML entities back to characters.
///
/// Handles the full HTML5 named entity set and numeric character
/// references. Unknown entities and stray `&` are kept verbatim.
pub fn unescape(s: &str) -> Cow<'_, str> {
    if !s.contains('&') {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(amp) = rest.find('&') {
        result.push_str(&rest[..amp]);
        let tail = &rest[amp + 1..];

        // Longest HTML5 entity name is 31 characters
        let end = tail.find(';').filter(|&end| end > 0 && end <= 32);
        let decoded = end.and_then(|end| decode_entity(&tail[..end]));

        match (end, decoded) {
            (Some(end), Some(text)) => {
                result.push_str(&text);
                rest = &tail[end + 1..];
            }
            _ => {
                result.push('&');
                rest = tail;
            }
        }
    }
    result.push_str(rest);

    Cow::Owned(result)
}

/// Decode a single entity body (without `&` and `;`).
fn decode_entity(entity: &str) -> Option<Cow<'static, str>> {
    let number = if let Some(hex) = entity
        .strip_prefix("#x")
        .or_else(|| entity.strip_prefix("#X"))
    {
        u32::from_str_radix(hex, 16).ok()
    } else if let Some(dec) = entity.strip_prefix('#') {
        dec.parse().ok()
    } else {
        return resolve_html5_entity(entity).map(Cow::Borrowed);
    };

    number
        .and_then(char::from_u32)
        .map(|c| Cow::Owned(c.to_string()))
}
