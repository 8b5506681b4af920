//! Episode selection shared by the Atom and RSS renderers.

use super::{FeedError, FeedSettings};
use crate::{
    content::ContentItem,
    debug, log,
    utils::{date::parse_date, html::strip_tags},
};
use chrono::{DateTime, FixedOffset};

/// MIME type declared on every enclosure.
pub const AUDIO_MIME: &str = "audio/mpeg";

/// An item validated for feed inclusion (has audio and a valid date).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    /// `"{site_url}/{item.url}"`
    pub id: String,
    /// Plain-text title.
    pub title: String,
    /// Publication time with the item's own UTC offset.
    pub updated: DateTime<FixedOffset>,
    /// Podcast summary, `""` when absent.
    pub description: String,
    pub enclosure: Enclosure,
}

/// Attached audio file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enclosure {
    pub url: String,
    /// Size in bytes; `0` when unknown.
    pub length: u64,
    pub mime_type: &'static str,
}

impl Episode {
    fn from_item(item: &ContentItem, audio: &str, settings: &FeedSettings) -> Result<Self, FeedError> {
        let updated = parse_date(&item.date).ok_or_else(|| FeedError::InvalidDate {
            url: item.url.clone(),
            date: item.date.clone(),
        })?;

        Ok(Self {
            id: settings.site_link(&item.url),
            title: strip_tags(&item.title),
            updated,
            description: item.summary().to_string(),
            enclosure: Enclosure {
                url: settings.audio_link(audio),
                length: 0,
                mime_type: AUDIO_MIME,
            },
        })
    }
}

/// Select the episodes for a feed, in input order.
///
/// Items without audio are skipped; the first `max_items` of the remaining
/// items are kept.
pub fn select_episodes(
    items: &[ContentItem],
    settings: &FeedSettings,
) -> Result<Vec<Episode>, FeedError> {
    let limit = settings.max_items.unwrap_or(usize::MAX);
    let mut episodes = Vec::with_capacity(items.len().min(limit));

    for item in items {
        if episodes.len() >= limit {
            break;
        }
        let Some(audio) = item.audio() else {
            log!("feed"; "no audio, no entry: {}", item.url);
            continue;
        };
        debug!("feed"; "processing {}", settings.site_link(&item.url));
        episodes.push(Episode::from_item(item, audio, settings)?);
    }

    Ok(episodes)
}

/// Latest episode date, the feed's own `updated` value.
pub fn latest_update(episodes: &[Episode]) -> Option<DateTime<FixedOffset>> {
    episodes.iter().map(|episode| episode.updated).max()
}
