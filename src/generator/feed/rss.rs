//! RSS 2.0 podcast feed.
//!
//! Uses the `rss` crate's built-in iTunes extension; the `itunes` namespace
//! is declared by the crate when the extension is present.

use super::{
    FeedError, FeedSettings,
    common::{Episode, latest_update},
};
use crate::generator::with_declaration;
use rss::{
    ChannelBuilder, EnclosureBuilder, GuidBuilder, ImageBuilder, Item, ItemBuilder,
    extension::itunes::{
        ITunesCategory, ITunesCategoryBuilder, ITunesChannelExtension,
        ITunesChannelExtensionBuilder, ITunesItemExtensionBuilder,
    },
    validation::Validate,
};

/// Render the feed as an RSS document.
pub fn render_rss(episodes: &[Episode], settings: &FeedSettings) -> Result<String, FeedError> {
    let items: Vec<Item> = episodes.iter().map(episode_to_rss_item).collect();

    let image = settings.logo.as_ref().map(|logo| {
        ImageBuilder::default()
            .url(logo.clone())
            .title(settings.title.clone())
            .link(settings.site_link(""))
            .build()
    });

    let channel = ChannelBuilder::default()
        .title(settings.title.clone())
        .link(settings.site_link(""))
        .description(
            settings
                .subtitle
                .clone()
                .unwrap_or_else(|| settings.title.clone()),
        )
        .language(Some(settings.language.clone()))
        .copyright(settings.rights.clone())
        .last_build_date(latest_update(episodes).map(|date| date.to_rfc2822()))
        .generator(Some(env!("CARGO_PKG_NAME").to_string()))
        .image(image)
        .itunes_ext(Some(itunes_channel(settings)))
        .items(items)
        .build();

    channel
        .validate()
        .map_err(|e| FeedError::RssValidation(e.to_string()))?;

    let bytes = if settings.pretty {
        channel.pretty_write_to(Vec::new(), b' ', 2)?
    } else {
        channel.write_to(Vec::new())?
    };
    Ok(with_declaration(&String::from_utf8(bytes)?, settings.pretty))
}

fn episode_to_rss_item(episode: &Episode) -> Item {
    let enclosure = EnclosureBuilder::default()
        .url(episode.enclosure.url.clone())
        .length(episode.enclosure.length.to_string())
        .mime_type(episode.enclosure.mime_type.to_string())
        .build();

    let itunes = ITunesItemExtensionBuilder::default()
        .summary(Some(episode.description.clone()).filter(|d| !d.is_empty()))
        .build();

    ItemBuilder::default()
        .title(Some(episode.title.clone()))
        .link(Some(episode.id.clone()))
        .guid(Some(
            GuidBuilder::default()
                .permalink(true)
                .value(episode.id.clone())
                .build(),
        ))
        .description(Some(episode.description.clone()))
        .pub_date(Some(episode.updated.to_rfc2822()))
        .enclosure(Some(enclosure))
        .itunes_ext(Some(itunes))
        .build()
}

fn itunes_channel(settings: &FeedSettings) -> ITunesChannelExtension {
    let itunes = &settings.itunes;

    let subcategory = itunes.subcategory.as_ref().map(|sub| {
        Box::new(
            ITunesCategoryBuilder::default()
                .text(sub.clone())
                .build(),
        )
    });
    let category: ITunesCategory = ITunesCategoryBuilder::default()
        .text(itunes.category.clone())
        .subcategory(subcategory)
        .build();

    ITunesChannelExtensionBuilder::default()
        .author(Some(itunes.author.clone()))
        .categories(vec![category])
        .image(settings.logo.clone())
        .explicit(Some(itunes.explicit_flag().to_string()))
        .complete(Some(itunes.complete_flag().to_string()))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::test_parse_config,
        content::ContentItem,
        generator::feed::common::select_episodes,
    };
    use rss::Channel;

    fn render(extra: &str, items: &[ContentItem]) -> Channel {
        let settings = FeedSettings::from_config(&test_parse_config(extra));
        let episodes = select_episodes(items, &settings).unwrap();
        render_rss(&episodes, &settings).unwrap().parse().unwrap()
    }

    #[test]
    fn test_channel_shell() {
        let channel = render(
            "[feed]\ntitle = \"Audio\"\nsubtitle = \"A show\"\nrights = \"cc-by-nc\"",
            &[],
        );

        assert_eq!(channel.title(), "Test Cast - Audio");
        assert_eq!(channel.link(), "https://example.org/");
        assert_eq!(channel.description(), "A show");
        assert_eq!(channel.copyright(), Some("cc-by-nc"));
        assert_eq!(channel.language(), Some("en"));
        assert!(channel.items().is_empty());
    }

    #[test]
    fn test_itunes_channel_tags() {
        let channel = render("[podcast]\nexplicit = true", &[]);
        let itunes = channel.itunes_ext().expect("itunes extension");

        assert_eq!(itunes.author(), Some("Test Cast"));
        assert_eq!(itunes.explicit(), Some("yes"));
        assert_eq!(itunes.complete(), Some("no"));

        let category = &itunes.categories()[0];
        assert_eq!(category.text(), "Technology");
        assert_eq!(
            category.subcategory().map(|sub| sub.text()),
            Some("Podcasting")
        );
    }

    #[test]
    fn test_item_with_enclosure() {
        let item = ContentItem::new("<b>Hello</b>", "ep1.html", "2024-06-15")
            .with_audio("https://example.org/ep1.mp3");
        let channel = render("", &[item]);

        let item = &channel.items()[0];
        assert_eq!(item.title(), Some("Hello"));
        assert_eq!(item.guid().map(|g| g.value()), Some("https://example.org/ep1.html"));
        assert_eq!(item.pub_date(), Some("Sat, 15 Jun 2024 00:00:00 +0000"));

        let enclosure = item.enclosure().expect("enclosure");
        assert_eq!(enclosure.url(), "https://example.org/ep1.mp3");
        assert_eq!(enclosure.length(), "0");
        assert_eq!(enclosure.mime_type(), "audio/mpeg");
    }
}
