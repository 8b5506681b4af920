//! `[feed]` configuration.

use crate::config::{ConfigDiagnostics, util::validate_http_url};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Feed output format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FeedFormat {
    /// Atom 1.0 format (default).
    #[default]
    Atom,
    /// RSS 2.0 format.
    Rss,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Feed title, appended to the site name as "{site} - {title}".
    pub title: Option<String>,
    /// Stable feed id. Defaults to the feed's own URL.
    pub id: Option<String>,
    /// Output path for the feed file, relative to the output directory.
    pub path: PathBuf,
    /// Domain the feed is served from. Defaults to `site.url`.
    pub domain: Option<String>,
    /// Feed author name. Defaults to the site name.
    pub author: Option<String>,
    /// Feed author email.
    pub email: Option<String>,
    /// Rights or license string (e.g., "cc-by-nc").
    pub rights: Option<String>,
    /// Feed subtitle.
    pub subtitle: Option<String>,
    /// Logo URL.
    pub logo: Option<String>,
    /// Icon URL. Defaults to the logo.
    pub icon: Option<String>,
    /// Language code (e.g., "en", "es").
    pub language: String,
    /// Maximum number of entries (0 = no limit).
    pub max_items: usize,
    /// Feed format: atom | rss.
    pub format: FeedFormat,
    /// Whether article feeds use summaries instead of full content.
    /// Only read by article generators; the podcast feed always uses
    /// the episode summary.
    pub use_summary: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            title: None,
            id: None,
            path: "podcast.xml".into(),
            domain: None,
            author: None,
            email: None,
            rights: None,
            subtitle: None,
            logo: None,
            icon: None,
            language: "en".into(),
            max_items: 0,
            format: FeedFormat::Atom,
            use_summary: false,
        }
    }
}

impl FeedConfig {
    /// Validate feed configuration.
    ///
    /// # Checks
    /// - `path` must be relative and name a file
    /// - `domain` (if set) must be an http(s) URL
    /// - `language` must not be empty
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.path.is_absolute() {
            diag.error_with_hint(
                "feed.path",
                format!("must be relative to the output directory: {}", self.path.display()),
                "use a path like \"podcast.xml\" or \"feeds/podcast.atom.xml\"",
            );
        } else if self.path.file_name().is_none() {
            diag.error("feed.path", "must name a file");
        }

        if let Some(domain) = &self.domain {
            validate_http_url("feed.domain", domain, diag);
        }

        if self.language.trim().is_empty() {
            diag.error_with_hint("feed.language", "must not be empty", "e.g.: \"en\"");
        }
    }
}
