//! `[podcast]` configuration: iTunes extension tags.

use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PodcastSectionConfig {
    /// Top-level iTunes category.
    pub category: String,
    /// iTunes subcategory (empty = none).
    pub subcategory: String,
    /// iTunes author. Defaults to the feed author.
    pub author: Option<String>,
    /// Mark the podcast as containing explicit content.
    pub explicit: bool,
    /// Mark the podcast as complete (no more episodes).
    pub complete: bool,
}

impl Default for PodcastSectionConfig {
    fn default() -> Self {
        Self {
            category: "Technology".into(),
            subcategory: "Podcasting".into(),
            author: None,
            explicit: false,
            complete: false,
        }
    }
}

impl PodcastSectionConfig {
    /// Validate podcast configuration.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.category.trim().is_empty() {
            diag.error_with_hint(
                "podcast.category",
                "category must not be empty",
                "e.g.: \"Technology\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ConfigDiagnostics, test_parse_config};

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.podcast.category, "Technology");
        assert_eq!(config.podcast.subcategory, "Podcasting");
        assert!(!config.podcast.explicit);
        assert!(!config.podcast.complete);
        assert!(config.podcast.author.is_none());
    }

    #[test]
    fn test_custom_config() {
        let config = test_parse_config(
            "[podcast]\ncategory = \"Arts\"\nsubcategory = \"\"\nexplicit = true\nauthor = \"Host\"",
        );
        assert_eq!(config.podcast.category, "Arts");
        assert!(config.podcast.subcategory.is_empty());
        assert!(config.podcast.explicit);
        assert_eq!(config.podcast.author.as_deref(), Some("Host"));
    }

    #[test]
    fn test_validate_empty_category() {
        let mut config = test_parse_config("");
        config.podcast.category.clear();

        let mut diag = ConfigDiagnostics::new();
        config.podcast.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
