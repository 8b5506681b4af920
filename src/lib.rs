//! Podfeed - podcast Atom/RSS feeds with iTunes tags.
//!
//! Use [`build_feed`] directly, or run the `podfeed` binary which loads
//! `podfeed.toml` and an episode manifest.

pub mod cli;
pub mod config;
pub mod content;
pub mod generator;
pub mod logger;
pub mod utils;

pub use config::{FeedFormat, PodcastConfig};
pub use content::ContentItem;
pub use generator::feed::{
    Episode, FeedError, FeedListener, FeedSettings, FeedWritten, PodcastFeed, build_feed,
};
