//! Content items handed to the feed builder.
//!
//! The content source is an episode manifest, either a JSON array or a TOML
//! file with `[[episode]]` tables. Order in the manifest is feed order.
//!
//! ```json
//! [
//!   {
//!     "title": "<b>Episode 1</b>",
//!     "url": "episodes/ep1.html",
//!     "date": "2024-01-15",
//!     "podcastsummary": "First episode",
//!     "audio": "https://example.org/audio/ep1.mp3"
//!   }
//! ]
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// One published piece of content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Title, may contain markup.
    pub title: String,
    /// Path relative to the site URL.
    pub url: String,
    /// Publication date (`YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SSZ`, ...).
    pub date: String,
    /// Podcast summary. Absent means an empty description.
    #[serde(default, alias = "podcastsummary")]
    pub summary_text: Option<String>,
    /// Audio file reference. Items without one are left out of the feed.
    #[serde(default, alias = "audio")]
    pub audio_url: Option<String>,
}

impl ContentItem {
    pub fn new(title: impl Into<String>, url: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            date: date.into(),
            summary_text: None,
            audio_url: None,
        }
    }

    pub fn with_audio(mut self, audio: impl Into<String>) -> Self {
        self.audio_url = Some(audio.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary_text = Some(summary.into());
        self
    }

    /// Audio reference, if present and non-blank.
    pub fn audio(&self) -> Option<&str> {
        self.audio_url
            .as_deref()
            .map(str::trim)
            .filter(|audio| !audio.is_empty())
    }

    /// Summary text, or `""` when absent.
    pub fn summary(&self) -> &str {
        self.summary_text.as_deref().unwrap_or_default()
    }
}

/// TOML manifest layout: a list of `[[episode]]` tables.
#[derive(Debug, Default, Deserialize)]
struct TomlManifest {
    #[serde(default)]
    episode: Vec<ContentItem>,
}

/// Load the ordered item list from a manifest file.
///
/// `.toml` files are read as `[[episode]]` tables; anything else as JSON.
pub fn load_items(path: &Path) -> Result<Vec<ContentItem>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read episode manifest {}", path.display()))?;
    parse_items(&content, is_toml(path))
        .with_context(|| format!("failed to parse episode manifest {}", path.display()))
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

fn parse_items(content: &str, toml: bool) -> Result<Vec<ContentItem>> {
    if toml {
        let manifest: TomlManifest = toml::from_str(content)?;
        Ok(manifest.episode)
    } else {
        Ok(serde_json::from_str(content)?)
    }
}
