//! Feed output generation.
//!
//! Turns content items into a podcast feed document:
//!
//! - **Atom 1.0** (default) with iTunes extension elements
//! - **RSS 2.0** with the `rss` crate's iTunes extension
//!
//! Both renderers share episode selection and the document declaration.

pub mod feed;

/// Declaration every feed document starts with.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Put [`XML_DECLARATION`] in front of a serialized document.
///
/// A declaration already written by the serializer is replaced. The
/// result ends with a newline.
pub fn with_declaration(xml: &str, pretty: bool) -> String {
    let body = strip_declaration(xml).trim();
    let separator = if pretty { "\n" } else { "" };
    format!("{XML_DECLARATION}{separator}{body}\n")
}

fn strip_declaration(xml: &str) -> &str {
    let xml = xml.trim_start();
    if xml.starts_with("<?xml")
        && let Some(end) = xml.find("?>")
    {
        return &xml[end + 2..];
    }
    xml
}
