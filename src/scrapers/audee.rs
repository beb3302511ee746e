//! AuDee program-page extractor.
//!
//! Scrapes a program page on [AuDee](https://audee.jp), the TOKYO FM audio
//! content platform. Program pages are static HTML; the episode listing
//! lives in the "すべて" tab whose section carries `id="content_tab_all"`,
//! and only that section is searched.
//!
//! # URL Pattern
//!
//! Episode anchors use relative hrefs like `/voice/show/210541` which are
//! resolved against the program page's own base URL.

use crate::fetch;
use crate::models::{Article, ChannelInfo};
use crate::outputs::rss;
use crate::scrapers::{UNKNOWN_DESCRIPTION, UNKNOWN_TITLE};
use crate::utils::collapse_whitespace;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::error::Error;
use tracing::{info, instrument};
use url::Url;

static OG_TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("meta[property='og:title']").unwrap());
static META_DESCRIPTION: Lazy<Selector> =
    Lazy::new(|| Selector::parse("meta[name='description']").unwrap());
static CONTENT_SECTION: Lazy<Selector> = Lazy::new(|| Selector::parse("#content_tab_all").unwrap());
static ARTICLE_ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse(".box-article-item").unwrap());
static ITEM_LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());
static ITEM_THUMB: Lazy<Selector> = Lazy::new(|| Selector::parse("a img.lazy").unwrap());
static ITEM_TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("a p.txt-article").unwrap());

/// Extract channel metadata from a program page.
///
/// The title comes from the `og:title` meta tag and the description from the
/// standard description meta tag. A missing or empty tag falls back to a
/// fixed placeholder; extraction never fails. `page_url` becomes the
/// channel link.
pub fn parse_channel_info(html: &str, page_url: &str) -> ChannelInfo {
    let document = Html::parse_document(html);

    let title = document
        .select(&OG_TITLE)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string());

    let description = document
        .select(&META_DESCRIPTION)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .map(str::trim)
        .filter(|description| !description.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN_DESCRIPTION.to_string());

    ChannelInfo {
        title,
        description,
        link: page_url.to_string(),
    }
}

/// Extract the episode listing from a program page.
///
/// Searches `.box-article-item` entries inside the `#content_tab_all`
/// section only; a page without that section yields an empty list. Each
/// entry must contain an anchor, a lazy-loaded image, and a title paragraph;
/// entries missing any of those are skipped, as are entries whose href or
/// title text is empty. The thumbnail URL sits in the image's
/// `data-original` attribute and is optional.
///
/// # Arguments
///
/// * `html` - The program page markup
/// * `base_url` - The page's own URL, used to resolve relative references
pub fn parse_articles(html: &str, base_url: &Url) -> Vec<Article> {
    let document = Html::parse_document(html);
    let Some(section) = document.select(&CONTENT_SECTION).next() else {
        return Vec::new();
    };

    let mut articles = Vec::new();
    for item in section.select(&ARTICLE_ITEM) {
        let Some(link) = item.select(&ITEM_LINK).next() else {
            continue;
        };
        let Some(thumb) = item.select(&ITEM_THUMB).next() else {
            continue;
        };
        let Some(title_el) = item.select(&ITEM_TITLE).next() else {
            continue;
        };

        let Some(href) = link.value().attr("href").filter(|href| !href.is_empty()) else {
            continue;
        };
        let title = collapse_whitespace(&title_el.text().collect::<String>());
        if title.is_empty() {
            continue;
        }
        let Ok(url) = base_url.join(href) else {
            continue;
        };

        let thumbnail = thumb
            .value()
            .attr("data-original")
            .and_then(|src| base_url.join(src).ok())
            .map(Into::into);

        articles.push(Article {
            title,
            url: url.into(),
            thumbnail,
            description: None,
        });
    }
    articles
}

/// Build the RSS feed for an AuDee program page and write it to disk.
///
/// The full per-site pipeline: fetch the page, extract channel metadata and
/// the episode listing, serialize to RSS 2.0, write to `output_path`.
///
/// # Errors
///
/// Propagates fetch and write failures. Malformed markup is not an error;
/// it produces an empty or partial article list instead.
#[instrument(level = "info", skip_all, fields(%url, %output_path))]
pub async fn build_feed(url: &str, output_path: &str) -> Result<(), Box<dyn Error>> {
    let base_url = Url::parse(url)?;
    let html = fetch::get_html(url).await?;

    let channel = parse_channel_info(&html, url);
    let articles = parse_articles(&html, &base_url);
    info!(count = articles.len(), channel = %channel.title, "Extracted AuDee episodes");

    rss::write_feed(&channel, &articles, output_path).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = include_str!("fixtures/audee_program_page.html");
    const PAGE_URL: &str = "https://audee.jp/program/show/40889";

    fn base_url() -> Url {
        Url::parse(PAGE_URL).unwrap()
    }

    #[test]
    fn test_parse_articles_from_program_page() {
        let articles = parse_articles(FIXTURE, &base_url());

        assert_eq!(articles.len(), 3);
        let first = &articles[0];
        assert_eq!(first.title, "第95回 秋の夜長とメッセージ特集！");
        assert_eq!(first.url, "https://audee.jp/voice/show/210541");
        assert_eq!(
            first.thumbnail.as_deref(),
            Some("https://cf.audee.jp/contents/Xa81kQpLm2_thumb.jpg")
        );
    }

    #[test]
    fn test_parse_articles_resolves_relative_urls() {
        let articles = parse_articles(FIXTURE, &base_url());

        // Absolute hrefs pass through; relative thumbnails resolve against the page.
        let second = &articles[1];
        assert_eq!(second.url, "https://audee.jp/voice/show/210498");
        assert_eq!(
            second.thumbnail.as_deref(),
            Some("https://audee.jp/contents/Yb92rRqMn3_thumb.jpg")
        );
    }

    #[test]
    fn test_parse_articles_thumbnail_optional() {
        let articles = parse_articles(FIXTURE, &base_url());

        let third = &articles[2];
        assert_eq!(third.url, "https://audee.jp/voice/show/210455");
        assert_eq!(third.thumbnail, None);
    }

    #[test]
    fn test_parse_articles_skips_incomplete_entries() {
        let articles = parse_articles(FIXTURE, &base_url());

        // Entry without a title paragraph and entry without an image.
        assert!(articles.iter().all(|a| !a.url.ends_with("/210400")));
        assert!(articles.iter().all(|a| !a.url.ends_with("/210322")));
    }

    #[test]
    fn test_parse_articles_scoped_to_all_tab() {
        let articles = parse_articles(FIXTURE, &base_url());
        assert!(articles.iter().all(|a| !a.url.ends_with("/999999")));
    }

    #[test]
    fn test_parse_articles_without_container_is_empty() {
        let html = "<html><body><div class='box-article-item'></div></body></html>";
        assert!(parse_articles(html, &base_url()).is_empty());
    }

    #[test]
    fn test_parse_channel_info() {
        let channel = parse_channel_info(FIXTURE, PAGE_URL);

        assert_eq!(channel.title, "桜井ことはのことばカフェ|AuDee（オーディー）");
        assert_eq!(
            channel.description,
            "毎週金曜よる9時更新。声優・桜井ことはがリスナーのメッセージとともにお届けする30分。"
        );
        assert_eq!(channel.link, PAGE_URL);
    }

    #[test]
    fn test_parse_channel_info_placeholders() {
        let channel = parse_channel_info("<html><head></head><body></body></html>", PAGE_URL);

        assert_eq!(channel.title, "title unknown");
        assert_eq!(channel.description, "description unknown");
    }

    #[test]
    fn test_fixture_page_to_feed() {
        let channel = parse_channel_info(FIXTURE, PAGE_URL);
        let articles = parse_articles(FIXTURE, &base_url());
        let xml = rss::render_feed(&channel, &articles).unwrap();

        assert!(xml.contains("<title>桜井ことはのことばカフェ|AuDee（オーディー）</title>"));
        assert_eq!(xml.matches("<item>").count(), 3);
    }
}
