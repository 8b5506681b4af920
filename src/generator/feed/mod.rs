//! Podcast feed generation (Atom, RSS).
//!
//! [`build_feed`] is the whole pipeline:
//!
//! 1. select episodes (skip items without audio, apply the cutoff)
//! 2. render Atom or RSS with iTunes tags
//! 3. optionally write it and notify a [`FeedListener`]

mod atom;
mod common;
mod error;
mod rss;
mod settings;

pub use common::{AUDIO_MIME, Enclosure, Episode};
pub use error::FeedError;
pub use settings::{FeedSettings, ITUNES_NAMESPACE, ItunesSettings};

use crate::{config::FeedFormat, log};
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// A built feed document.
#[derive(Debug, Clone)]
pub struct PodcastFeed {
    pub format: FeedFormat,
    pub title: String,
    /// Entries in feed order.
    pub episodes: Vec<Episode>,
    /// Serialized document.
    pub xml: String,
}

impl PodcastFeed {
    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }
}

/// Emitted after a feed file has been written.
#[derive(Debug, Clone, Copy)]
pub struct FeedWritten<'a> {
    pub path: &'a Path,
    pub settings: &'a FeedSettings,
    pub feed: &'a PodcastFeed,
}

/// Receives [`FeedWritten`] events.
///
/// Errors are logged and never change the build result.
pub trait FeedListener {
    fn feed_written(&self, event: &FeedWritten<'_>) -> Result<()>;
}

impl<F> FeedListener for F
where
    F: Fn(&FeedWritten<'_>) -> Result<()>,
{
    fn feed_written(&self, event: &FeedWritten<'_>) -> Result<()> {
        self(event)
    }
}

/// Build a podcast feed from `items`.
///
/// Without `output_path` the feed is only built in memory. With it, the
/// parent directory is created if needed and any existing file is replaced.
/// The document is fully rendered before the filesystem is touched.
pub fn build_feed(
    items: &[crate::content::ContentItem],
    settings: &FeedSettings,
    output_path: Option<&Path>,
    listener: Option<&dyn FeedListener>,
) -> Result<PodcastFeed> {
    let episodes = common::select_episodes(items, settings)?;

    let xml = match settings.format {
        FeedFormat::Atom => atom::render_atom(&episodes, settings)?,
        FeedFormat::Rss => rss::render_rss(&episodes, settings)?,
    };

    let feed = PodcastFeed {
        format: settings.format,
        title: settings.title.clone(),
        episodes,
        xml,
    };

    if let Some(path) = output_path {
        write_feed(path, &feed)?;

        if let Some(listener) = listener {
            let event = FeedWritten {
                path,
                settings,
                feed: &feed,
            };
            if let Err(e) = listener.feed_written(&event) {
                log!("warning"; "feed listener failed for {}: {:#}", path.display(), e);
            }
        }
    }

    Ok(feed)
}

fn write_feed(path: &Path, feed: &PodcastFeed) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(path, &feed.xml).with_context(|| format!("failed to write {}", path.display()))?;

    let module = match feed.format {
        FeedFormat::Atom => "atom",
        FeedFormat::Rss => "rss",
    };
    log!(module; "{} ({} episode{})",
        path.display(), feed.len(), if feed.len() == 1 { "" } else { "s" });
    Ok(())
}
