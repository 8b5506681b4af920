//! Configuration management for `podfeed.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   ├── feed       # [feed]
//! │   ├── podcast    # [podcast]
//! │   └── site       # [site]
//! ├── error          # ConfigError, ConfigDiagnostics
//! └── mod.rs         # PodcastConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section      | Purpose                                           |
//! |--------------|---------------------------------------------------|
//! | `[site]`     | Site name and base URL                            |
//! | `[feed]`     | Feed title, id, author, links, cutoff, format     |
//! | `[podcast]`  | iTunes category, author, explicit/complete flags  |
//! | `[build]`    | Output directory, episode manifest, pretty print  |

pub mod error;
pub mod section;
mod util;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use section::{BuildConfig, FeedConfig, FeedFormat, PodcastSectionConfig, SiteConfig};

use crate::{cli::BuildArgs, log};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::find_config_file;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing podfeed.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PodcastConfig {
    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site name and URL
    #[serde(default)]
    pub site: SiteConfig,

    /// Feed metadata
    #[serde(default)]
    pub feed: FeedConfig,

    /// iTunes extension tags
    #[serde(default)]
    pub podcast: PodcastSectionConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,
}

impl PodcastConfig {
    /// Load configuration for a build.
    ///
    /// Searches upward from cwd to find `config_name`; the project root is
    /// the config file's parent directory. CLI arguments override file values.
    pub fn load(config_name: &Path, args: &BuildArgs) -> Result<Self> {
        let Some(config_path) = find_config_file(config_name) else {
            bail!(
                "config file '{}' not found in the current directory or any parent",
                config_name.display()
            );
        };

        let mut config = Self::from_path(&config_path)?;

        let root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.apply_build_args(args);
        config.normalize_paths(&root);
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Final location of the feed file: `{build.output}/{feed.path}`.
    pub fn output_path(&self) -> PathBuf {
        self.build.output.join(&self.feed.path)
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply build arguments from CLI.
    fn apply_build_args(&mut self, args: &BuildArgs) {
        if args.verbose {
            crate::logger::set_verbose(true);
        }

        Self::update_option(&mut self.build.output, args.output.as_ref());
        Self::update_option(&mut self.build.items, args.items.as_ref());
        Self::update_option(&mut self.build.pretty, args.pretty.as_ref());
        Self::update_option(&mut self.feed.max_items, args.max_items.as_ref());
        Self::update_option(&mut self.feed.format, args.format.as_ref());

        if let Some(ref url) = args.site_url {
            self.site.url = Some(url.clone());
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve build paths against the project root.
    ///
    /// `feed.path` stays relative; it is joined onto the output directory
    /// at write time.
    fn normalize_paths(&mut self, root: &Path) {
        self.root = root.to_path_buf();
        self.build.output = root.join(&self.build.output);
        self.build.items = root.join(&self.build.items);
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.feed.validate(&mut diag);
        self.podcast.validate(&mut diag);

        if self.feed.format == FeedFormat::Rss && self.site.url.is_none() {
            diag.error_with_hint(
                "site.url",
                "RSS feeds need absolute links",
                "set site.url or pass --site-url, or use format = \"atom\"",
            );
        }

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> PodcastConfig {
    let config =
        format!("[site]\nname = \"Test Cast\"\nurl = \"https://example.org\"\n{extra}");
    let (parsed, ignored) = PodcastConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn no_args() -> BuildArgs {
        BuildArgs {
            items: None,
            output: None,
            max_items: None,
            site_url: None,
            format: None,
            pretty: None,
            verbose: false,
        }
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = PodcastConfig::from_str("[site\nname = \"My Cast\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_str_minimal() {
        let config = PodcastConfig::from_str("[site]\nname = \"My Cast\"").unwrap();
        assert_eq!(config.site.name, "My Cast");
        assert!(config.site.url.is_none());
        assert_eq!(config.feed.path, PathBuf::from("podcast.xml"));
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\nname = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = PodcastConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.name, "Test");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\nname = \"Test\"\n[feed]\nmax_items = 3";
        let (_, ignored) = PodcastConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = PodcastConfig::from_str("[feed]\npath = \"/abs.xml\"").unwrap();
        let err = config.validate().unwrap_err();
        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err:?}");
        };
        // site.name, feed.path
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_site_name_only_is_valid() {
        let config = PodcastConfig::from_str("[site]\nname = \"Cast\"").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rss_requires_site_url() {
        let config =
            PodcastConfig::from_str("[site]\nname = \"Cast\"\n[feed]\nformat = \"rss\"").unwrap();
        let err = config.validate().unwrap_err();
        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err:?}");
        };
        assert_eq!(diag.errors()[0].field, "site.url");
    }

    #[test]
    fn test_apply_build_args_overrides() {
        let mut config = test_parse_config("[feed]\nmax_items = 5");
        let args = BuildArgs {
            max_items: Some(2),
            site_url: Some("https://cdn.example.org".into()),
            format: Some(FeedFormat::Rss),
            pretty: Some(false),
            ..no_args()
        };
        config.apply_build_args(&args);

        assert_eq!(config.feed.max_items, 2);
        assert_eq!(config.site.url.as_deref(), Some("https://cdn.example.org"));
        assert_eq!(config.feed.format, FeedFormat::Rss);
        assert!(!config.build.pretty);
    }

    #[test]
    fn test_apply_build_args_keeps_file_values() {
        let mut config = test_parse_config("[feed]\nmax_items = 5");
        config.apply_build_args(&no_args());
        assert_eq!(config.feed.max_items, 5);
        assert_eq!(config.feed.format, FeedFormat::Atom);
    }

    #[test]
    fn test_normalize_paths() {
        let mut config = test_parse_config("[feed]\npath = \"feeds/pod.xml\"");
        config.normalize_paths(Path::new("/srv/site"));

        assert_eq!(config.get_root(), Path::new("/srv/site"));
        assert_eq!(config.build.output, PathBuf::from("/srv/site/output"));
        assert_eq!(config.build.items, PathBuf::from("/srv/site/episodes.json"));
        assert_eq!(
            config.output_path(),
            PathBuf::from("/srv/site/output/feeds/pod.xml")
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("podfeed.toml");
        fs::write(
            &path,
            "[site]\nname = \"File Cast\"\nurl = \"https://file.example.org\"\n",
        )
        .unwrap();

        let config = PodcastConfig::load(&path, &no_args()).unwrap();
        assert_eq!(config.site.name, "File Cast");
        assert_eq!(config.get_root(), dir.path());
        assert_eq!(config.build.output, dir.path().join("output"));
    }

    #[test]
    fn test_load_without_site_url() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("podfeed.toml");
        fs::write(&path, "[site]\nname = \"Local Cast\"\n").unwrap();

        let config = PodcastConfig::load(&path, &no_args()).unwrap();
        assert!(config.site.url.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(PodcastConfig::load(&path, &no_args()).is_err());
    }
}
