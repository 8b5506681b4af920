//! Feed building orchestration.
//!
//! Both commands run the same pipeline:
//! - **Config** - Load `podfeed.toml` and apply CLI overrides
//! - **Collect** - Read the episode manifest
//! - **Build** - Resolve settings and render the feed
//!
//! `build` writes the result to `{build.output}/{feed.path}`, `print`
//! sends it to stdout.

use crate::{
    config::PodcastConfig,
    content::{ContentItem, load_items},
    debug,
    generator::feed::{FeedSettings, FeedWritten, PodcastFeed, build_feed},
    log,
};
use anyhow::Result;
use std::io::{Write, stdout};

/// Build the feed and write it to the configured output path.
pub fn build_podcast(config: &PodcastConfig) -> Result<PodcastFeed> {
    let (items, settings) = prepare(config)?;
    let output = config.output_path();

    let report = |event: &FeedWritten<'_>| -> Result<()> {
        debug!("feed"; "written to {} as {}", event.path.display(), event.settings.self_link);
        Ok(())
    };
    let feed = build_feed(&items, &settings, Some(&output), Some(&report))?;

    log!("done"; "{} of {} items published", feed.len(), items.len());
    Ok(feed)
}

/// Build the feed in memory and print the XML to stdout.
pub fn print_podcast(config: &PodcastConfig) -> Result<()> {
    let (items, settings) = prepare(config)?;
    let feed = build_feed(&items, &settings, None, None)?;

    let mut out = stdout().lock();
    out.write_all(feed.xml.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn prepare(config: &PodcastConfig) -> Result<(Vec<ContentItem>, FeedSettings)> {
    let items = load_items(&config.build.items)?;
    debug!("feed"; "loaded {} items from {}", items.len(), config.build.items.display());

    let settings = FeedSettings::from_config(config);
    Ok((items, settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::BuildArgs;
    use std::fs;
    use tempfile::TempDir;

    fn project(manifest: &str) -> (TempDir, PodcastConfig) {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("podfeed.toml");
        fs::write(
            &config_path,
            "[site]\nname = \"Tmp Cast\"\nurl = \"https://tmp.example.org\"\n[feed]\ntitle = \"Audio\"\n",
        )
        .unwrap();
        fs::write(dir.path().join("episodes.json"), manifest).unwrap();

        let config = PodcastConfig::load(&config_path, &BuildArgs::default()).unwrap();
        (dir, config)
    }

    #[test]
    fn test_build_podcast_writes_feed() {
        let (dir, config) = project(
            r#"[
                {"title": "One", "url": "one.html", "date": "2024-01-01", "audio": "one.mp3"},
                {"title": "Post", "url": "post.html", "date": "2024-01-02"}
            ]"#,
        );

        let feed = build_podcast(&config).unwrap();
        assert_eq!(feed.len(), 1);

        let written = fs::read_to_string(dir.path().join("output/podcast.xml")).unwrap();
        assert_eq!(written, feed.xml);
        assert!(written.contains("https://tmp.example.org/one.mp3"));
    }

    #[test]
    fn test_build_podcast_missing_manifest() {
        let (dir, config) = project("[]");
        fs::remove_file(dir.path().join("episodes.json")).unwrap();

        assert!(build_podcast(&config).is_err());
        assert!(!dir.path().join("output").exists());
    }
}
