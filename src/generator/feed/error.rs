//! Feed build errors.

use thiserror::Error;

/// Fatal problems while turning items into a feed document.
///
/// Items without audio are not errors; they are left out of the feed.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("invalid date `{date}` in item `{url}`")]
    InvalidDate { url: String, date: String },

    #[error("RSS validation failed: {0}")]
    RssValidation(String),

    #[error("failed to write Atom feed")]
    Atom(#[from] atom_syndication::Error),

    #[error("failed to write RSS feed")]
    Rss(#[from] rss::Error),

    #[error("feed output is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}
