//! `[site]` configuration.
//!
//! The site name and base URL every entry id is built from.

use crate::config::{ConfigDiagnostics, util::validate_http_url};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site name, used as the feed title (or its prefix).
    pub name: String,

    /// Base site URL (e.g., "https://example.org").
    /// Without it, links are root-relative (`/ep1.html`).
    pub url: Option<String>,
}

impl SiteConfig {
    /// Validate site configuration.
    ///
    /// # Checks
    /// - `name` must not be empty
    /// - `url` (if set) must have an http(s) scheme and a host
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error_with_hint(
                "site.name",
                "site name is required",
                "set site.name, e.g.: \"My Podcast\"",
            );
        }

        if let Some(url) = &self.url {
            validate_http_url("site.url", url, diag);
        }
    }
}
