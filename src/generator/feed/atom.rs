//! Atom 1.0 podcast feed.
//!
//! iTunes tags are attached as feed-level extension elements under the
//! `itunes` namespace; each entry carries its audio as an enclosure link.

use super::{
    FeedError, FeedSettings, ITUNES_NAMESPACE,
    common::{Episode, latest_update},
};
use crate::generator::with_declaration;
use atom_syndication::{
    Entry, EntryBuilder, FeedBuilder, FixedDateTime, GeneratorBuilder, Link, LinkBuilder, Person,
    PersonBuilder, Text, WriteConfig,
    extension::{Extension, ExtensionBuilder, ExtensionMap},
};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Render the feed as an Atom document.
pub fn render_atom(episodes: &[Episode], settings: &FeedSettings) -> Result<String, FeedError> {
    let entries: Vec<Entry> = episodes.iter().map(episode_to_atom_entry).collect();

    // Latest episode date; epoch for an empty feed
    let updated: FixedDateTime = latest_update(episodes)
        .unwrap_or_else(|| DateTime::<Utc>::UNIX_EPOCH.fixed_offset());

    let author: Person = PersonBuilder::default()
        .name(settings.author_name.clone())
        .email(settings.author_email.clone())
        .build();

    let self_link: Link = LinkBuilder::default()
        .href(settings.self_link.clone())
        .rel("self".to_string())
        .mime_type(Some("application/atom+xml".to_string()))
        .build();

    let alternate_link: Link = LinkBuilder::default()
        .href(settings.site_link(""))
        .rel("alternate".to_string())
        .build();

    let feed = FeedBuilder::default()
        .title(Text::plain(settings.title.clone()))
        .id(settings.id.clone())
        .updated(updated)
        .authors(vec![author])
        .links(vec![self_link, alternate_link])
        .rights(settings.rights.clone().map(Text::plain))
        .subtitle(settings.subtitle.clone().map(Text::plain))
        .logo(settings.logo.clone())
        .icon(settings.icon.clone())
        .lang(Some(settings.language.clone()))
        .generator(Some(
            GeneratorBuilder::default()
                .value(env!("CARGO_PKG_NAME"))
                .version(Some(env!("CARGO_PKG_VERSION").to_string()))
                .build(),
        ))
        .namespaces(BTreeMap::from([(
            "itunes".to_string(),
            ITUNES_NAMESPACE.to_string(),
        )]))
        .extensions(itunes_extensions(settings))
        .entries(entries)
        .build();

    let config = WriteConfig {
        write_document_declaration: false,
        indent_size: settings.pretty.then_some(2),
    };
    let body = String::from_utf8(feed.write_with_config(Vec::new(), config)?)?;
    Ok(with_declaration(&body, settings.pretty))
}

fn episode_to_atom_entry(episode: &Episode) -> Entry {
    let enclosure: Link = LinkBuilder::default()
        .href(episode.enclosure.url.clone())
        .rel("enclosure".to_string())
        .mime_type(Some(episode.enclosure.mime_type.to_string()))
        .length(Some(episode.enclosure.length.to_string()))
        .build();

    EntryBuilder::default()
        .title(Text::plain(episode.title.clone()))
        .id(episode.id.clone())
        .updated(episode.updated)
        .links(vec![enclosure])
        .summary(Some(Text::html(episode.description.clone())))
        .build()
}

/// Feed-level `itunes:*` elements.
fn itunes_extensions(settings: &FeedSettings) -> ExtensionMap {
    let itunes = &settings.itunes;

    let subcategories: BTreeMap<String, Vec<Extension>> = itunes
        .subcategory
        .iter()
        .map(|sub| ("category".to_string(), vec![itunes_category(sub, BTreeMap::new())]))
        .collect();

    let mut tags: BTreeMap<String, Vec<Extension>> = BTreeMap::new();
    tags.insert(
        "category".into(),
        vec![itunes_category(&itunes.category, subcategories)],
    );
    tags.insert("author".into(), vec![itunes_text("author", &itunes.author)]);
    tags.insert(
        "explicit".into(),
        vec![itunes_text("explicit", itunes.explicit_flag())],
    );
    tags.insert(
        "complete".into(),
        vec![itunes_text("complete", itunes.complete_flag())],
    );
    if let Some(logo) = &settings.logo {
        tags.insert(
            "image".into(),
            vec![
                ExtensionBuilder::default()
                    .name("itunes:image")
                    .attrs(BTreeMap::from([("href".to_string(), logo.clone())]))
                    .build(),
            ],
        );
    }

    ExtensionMap::from([("itunes".to_string(), tags)])
}

fn itunes_text(name: &str, value: &str) -> Extension {
    ExtensionBuilder::default()
        .name(format!("itunes:{name}"))
        .value(Some(value.to_string()))
        .build()
}

fn itunes_category(text: &str, children: BTreeMap<String, Vec<Extension>>) -> Extension {
    ExtensionBuilder::default()
        .name("itunes:category")
        .attrs(BTreeMap::from([("text".to_string(), text.to_string())]))
        .children(children)
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
    use atom_syndication::Feed;

    fn render(extra: &str, items: &[ContentItem]) -> Feed {
        let settings = FeedSettings::from_config(&test_parse_config(extra));
        let episodes = select_episodes(items, &settings).unwrap();
        render_atom(&episodes, &settings).unwrap().parse().unwrap()
    }

    fn itunes_value<'a>(feed: &'a Feed, name: &str) -> Option<&'a str> {
        feed.extensions().get("itunes")?.get(name)?.first()?.value()
    }

    #[test]
    fn test_feed_shell() {
        let feed = render(
            "[feed]\ntitle = \"Audio\"\nrights = \"cc-by-nc\"\nsubtitle = \"A show\"\nlanguage = \"es\"\nlogo = \"https://example.org/logo.png\"",
            &[],
        );

        assert_eq!(feed.title().as_str(), "Test Cast - Audio");
        assert_eq!(feed.id(), "https://example.org/podcast.xml");
        assert_eq!(feed.rights().map(Text::as_str), Some("cc-by-nc"));
        assert_eq!(feed.subtitle().map(Text::as_str), Some("A show"));
        assert_eq!(feed.lang(), Some("es"));
        assert_eq!(feed.logo(), Some("https://example.org/logo.png"));
        assert_eq!(feed.icon(), Some("https://example.org/logo.png"));
        assert_eq!(feed.authors()[0].name(), "Test Cast");

        let self_link = feed.links().iter().find(|l| l.rel() == "self").unwrap();
        assert_eq!(self_link.href(), "https://example.org/podcast.xml");
    }

    #[test]
    fn test_empty_feed_is_valid() {
        let feed = render("", &[]);
        assert!(feed.entries().is_empty());
        assert_eq!(feed.title().as_str(), "Test Cast");
        assert!(feed.updated().to_rfc3339().starts_with("1970-01-01"));
    }

    #[test]
    fn test_itunes_tags() {
        let feed = render("", &[]);

        assert_eq!(
            feed.namespaces().get("itunes").map(String::as_str),
            Some(ITUNES_NAMESPACE)
        );
        assert_eq!(itunes_value(&feed, "author"), Some("Test Cast"));
        assert_eq!(itunes_value(&feed, "explicit"), Some("no"));
        assert_eq!(itunes_value(&feed, "complete"), Some("no"));

        let category = &feed.extensions()["itunes"]["category"][0];
        assert_eq!(category.attrs().get("text").map(String::as_str), Some("Technology"));
        let sub = &category.children()["category"][0];
        assert_eq!(sub.attrs().get("text").map(String::as_str), Some("Podcasting"));
    }

    #[test]
    fn test_entry_with_enclosure() {
        let item = ContentItem::new("<i>Pilot</i>", "ep1.html", "2024-01-15T10:30:00Z")
            .with_audio("https://example.org/ep1.mp3")
            .with_summary("Our <b>first</b> show");
        let feed = render("", &[item]);

        let entry = &feed.entries()[0];
        assert_eq!(entry.id(), "https://example.org/ep1.html");
        assert_eq!(entry.title().as_str(), "Pilot");
        assert_eq!(entry.updated().to_rfc3339(), "2024-01-15T10:30:00+00:00");
        assert_eq!(
            entry.summary().map(Text::as_str),
            Some("Our <b>first</b> show")
        );

        let enclosure = &entry.links()[0];
        assert_eq!(enclosure.rel(), "enclosure");
        assert_eq!(enclosure.href(), "https://example.org/ep1.mp3");
        assert_eq!(enclosure.mime_type(), Some("audio/mpeg"));
        assert_eq!(enclosure.length(), Some("0"));

        assert!(feed.updated().to_rfc3339().starts_with("2024-01-15T10:30:00"));
    }
}
