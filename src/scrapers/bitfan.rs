//! Bitfan updates-page extractor.
//!
//! Scrapes the "UPDATE" listing of a fan club hosted on
//! [Bitfan](https://bitfan.id). The listing lives in a
//! `section.p-clubSection` container; entries are anchors whose href points
//! at `/contents/`. The same content is often linked more than once on the
//! page, so entries are deduplicated by absolute URL, first occurrence wins.

use crate::fetch;
use crate::models::{Article, ChannelInfo};
use crate::outputs::rss;
use crate::scrapers::{UNKNOWN_DESCRIPTION, UNKNOWN_TITLE};
use crate::utils::collapse_whitespace;
use itertools::Itertools;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use std::error::Error;
use tracing::{info, instrument};
use url::Url;

static OG_TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("meta[property='og:title']").unwrap());
static OG_DESCRIPTION: Lazy<Selector> =
    Lazy::new(|| Selector::parse("meta[property='og:description']").unwrap());
static META_DESCRIPTION: Lazy<Selector> =
    Lazy::new(|| Selector::parse("meta[name='description']").unwrap());
static TITLE_TAG: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());
static CLUB_SECTION: Lazy<Selector> =
    Lazy::new(|| Selector::parse("section.p-clubSection").unwrap());
static MEDIA_LINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a.p-clubMedia__inner[href*='/contents/']").unwrap());
static MEDIA_NAME: Lazy<Selector> = Lazy::new(|| Selector::parse(".p-clubMedia__name").unwrap());
static MEDIA_ICON_IMG: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".p-clubMedia__icon img[src]").unwrap());
static ANY_IMG: Lazy<Selector> = Lazy::new(|| Selector::parse("img").unwrap());

/// Extract channel metadata from an updates page.
///
/// The title prefers the `og:title` meta tag and falls back to the
/// `<title>` element; the description prefers `og:description` and falls
/// back to the standard description meta tag. Anything still missing or
/// empty becomes a fixed placeholder.
pub fn parse_channel_info(html: &str, page_url: &str) -> ChannelInfo {
    let document = Html::parse_document(html);

    let title = document
        .select(&OG_TITLE)
        .next()
        .and_then(|meta| meta.value().attr("content").map(str::to_string))
        .or_else(|| {
            document
                .select(&TITLE_TAG)
                .next()
                .map(|title| title.text().collect::<String>())
        })
        .map(|title| collapse_whitespace(&title))
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string());

    let description = document
        .select(&OG_DESCRIPTION)
        .next()
        .or_else(|| document.select(&META_DESCRIPTION).next())
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

/// Collect the text of an element while skipping every `span` subtree.
///
/// Update entries prefix their titles with label badges ("NEW" and the
/// like) rendered as spans inside the name element; those must not leak
/// into the feed item title.
fn text_without_spans(element: ElementRef) -> String {
    let mut out = String::new();
    collect_text_without_spans(element, &mut out);
    out
}

fn collect_text_without_spans(element: ElementRef, out: &mut String) {
    for child in element.children() {
        if let Some(child_el) = ElementRef::wrap(child) {
            if child_el.value().name() != "span" {
                collect_text_without_spans(child_el, out);
            }
        } else if let Some(text) = child.value().as_text() {
            out.push_str(text);
        }
    }
}

/// Extract the update listing from an updates page.
///
/// Searches anchors matching `a.p-clubMedia__inner[href*='/contents/']`
/// inside the `section.p-clubSection` container only; a page without that
/// container yields an empty list. Titles come from the entry's
/// `.p-clubMedia__name` element with label spans removed, falling back to
/// the whole anchor's text; entries whose title is still empty are skipped.
/// Thumbnails come from `.p-clubMedia__icon img[src]`, falling back to any
/// image inside the anchor. All URLs are resolved to absolute against
/// `base_url`, and duplicate article URLs collapse to one entry.
pub fn parse_articles(html: &str, base_url: &Url) -> Vec<Article> {
    let document = Html::parse_document(html);
    let Some(section) = document.select(&CLUB_SECTION).next() else {
        return Vec::new();
    };

    let mut articles = Vec::new();
    for anchor in section.select(&MEDIA_LINK) {
        let Some(href) = anchor.value().attr("href").filter(|href| !href.is_empty()) else {
            continue;
        };
        let Ok(url) = base_url.join(href) else {
            continue;
        };

        let mut title = anchor
            .select(&MEDIA_NAME)
            .next()
            .map(|name| collapse_whitespace(&text_without_spans(name)))
            .unwrap_or_default();
        if title.is_empty() {
            title = collapse_whitespace(&anchor.text().collect::<String>());
        }
        if title.is_empty() {
            continue;
        }

        let thumbnail = anchor
            .select(&MEDIA_ICON_IMG)
            .next()
            .or_else(|| anchor.select(&ANY_IMG).next())
            .and_then(|img| img.value().attr("src"))
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
        .into_iter()
        .unique_by(|article| article.url.clone())
        .collect()
}

/// Build the RSS feed for a Bitfan updates page and write it to disk.
///
/// Same pipeline shape as the AuDee variant: fetch, extract, serialize,
/// write.
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
    info!(count = articles.len(), channel = %channel.title, "Extracted Bitfan updates");

    rss::write_feed(&channel, &articles, output_path).await?;
    Ok(())
}
