//! Feed settings resolved once per build.
//!
//! Every optional config value is replaced by its default here, so the
//! renderers never look anything up at build time.

use crate::config::{FeedFormat, PodcastConfig};
use std::path::PathBuf;

/// iTunes namespace URI.
pub const ITUNES_NAMESPACE: &str = "http://www.itunes.com/dtds/podcast-1.0.dtd";

/// Fully resolved feed metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSettings {
    /// Site name.
    pub site_name: String,
    /// Base site URL without a trailing slash.
    pub site_url: String,
    /// `"{site_name} - {feed_title}"`, or just the site name.
    pub title: String,
    /// Stable feed id.
    pub id: String,
    /// Absolute URL of the feed itself (`rel="self"`).
    pub self_link: String,
    /// Feed path relative to the output directory.
    pub path: PathBuf,
    pub author_name: String,
    pub author_email: Option<String>,
    pub rights: Option<String>,
    pub subtitle: Option<String>,
    pub logo: Option<String>,
    pub icon: Option<String>,
    pub language: String,
    /// Entry cutoff; `None` keeps every qualifying item.
    pub max_items: Option<usize>,
    pub format: FeedFormat,
    pub pretty: bool,
    pub itunes: ItunesSettings,
}

/// Podcast extension values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItunesSettings {
    pub category: String,
    pub subcategory: Option<String>,
    pub author: String,
    pub explicit: bool,
    pub complete: bool,
}

impl ItunesSettings {
    /// `itunes:explicit` value.
    pub const fn explicit_flag(&self) -> &'static str {
        yes_no(self.explicit)
    }

    /// `itunes:complete` value.
    pub const fn complete_flag(&self) -> &'static str {
        yes_no(self.complete)
    }
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

impl FeedSettings {
    /// Resolve settings from a loaded config.
    pub fn from_config(config: &PodcastConfig) -> Self {
        let site_name = config.site.name.trim().to_string();
        let site_url = config
            .site
            .url
            .as_deref()
            .unwrap_or_default()
            .trim_end_matches('/')
            .to_string();

        let feed = &config.feed;
        let title = match non_empty(feed.title.as_deref()) {
            Some(feed_title) => format!("{site_name} - {feed_title}"),
            None => site_name.clone(),
        };

        let domain = non_empty(feed.domain.as_deref())
            .map(|d| d.trim_end_matches('/').to_string())
            .unwrap_or_else(|| site_url.clone());
        let feed_path = feed.path.to_string_lossy().replace('\\', "/");
        let self_link = format!("{}/{}", domain, feed_path.trim_start_matches('/'));

        let id = non_empty(feed.id.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| self_link.clone());

        let author_name = non_empty(feed.author.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| site_name.clone());

        let logo = non_empty(feed.logo.as_deref()).map(str::to_string);
        let icon = non_empty(feed.icon.as_deref())
            .map(str::to_string)
            .or_else(|| logo.clone());

        let podcast = &config.podcast;
        let itunes = ItunesSettings {
            category: podcast.category.trim().to_string(),
            subcategory: non_empty(Some(podcast.subcategory.as_str())).map(str::to_string),
            author: non_empty(podcast.author.as_deref())
                .map(str::to_string)
                .unwrap_or_else(|| author_name.clone()),
            explicit: podcast.explicit,
            complete: podcast.complete,
        };

        Self {
            site_name,
            site_url,
            title,
            id,
            self_link,
            path: feed.path.clone(),
            author_name,
            author_email: non_empty(feed.email.as_deref()).map(str::to_string),
            rights: non_empty(feed.rights.as_deref()).map(str::to_string),
            subtitle: non_empty(feed.subtitle.as_deref()).map(str::to_string),
            logo,
            icon,
            language: feed.language.trim().to_string(),
            max_items: (feed.max_items > 0).then_some(feed.max_items),
            format: feed.format,
            pretty: config.build.pretty,
            itunes,
        }
    }

    /// Absolute URL for a path relative to the site.
    pub fn site_link(&self, path: &str) -> String {
        format!("{}/{}", self.site_url, path.trim_start_matches('/'))
    }

    /// Absolute URL for an audio reference.
    ///
    /// Absolute URLs are kept as-is; relative ones are joined onto the site URL.
    pub fn audio_link(&self, audio: &str) -> String {
        if url::Url::parse(audio).is_ok() {
            audio.to_string()
        } else {
            self.site_link(audio)
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
