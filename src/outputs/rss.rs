//! RSS 2.0 feed serialization.
//!
//! Maps a [`ChannelInfo`] and its ordered [`Article`] list onto an RSS 2.0
//! document and writes it to the target path, overwriting any previous feed.
//! The whole document is rebuilt from scratch on every run; there is no
//! diffing against an earlier version.
//!
//! # Output Shape
//!
//! ```text
//! <?xml version="1.0" encoding="utf-8"?>
//! <rss version="2.0" xmlns:atom="http://www.w3.org/2005/Atom">
//!   <channel>
//!     <title>…</title>
//!     <link>…</link>
//!     <description>…</description>
//!     <atom:link href="…" rel="self"/>
//!     <lastBuildDate>…</lastBuildDate>
//!     <item>…</item>
//!   </channel>
//! </rss>
//! ```
//!
//! The writer indents with two spaces and never emits blank lines.

use crate::models::{Article, ChannelInfo};
use chrono::Utc;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::error::Error;
use std::io::Write;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Thumbnails on both supported sites are served as JPEG.
const ENCLOSURE_MIME_TYPE: &str = "image/jpeg";

fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<(), Box<dyn Error>> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Render a channel and its articles as an RSS 2.0 document.
///
/// Items appear in input order. Each carries a title, link, and description
/// (empty string when the article has none). Articles with a thumbnail get
/// one `<enclosure>`; the enclosure length is reported as `0` since the
/// actual byte size is never fetched.
///
/// # Arguments
///
/// * `channel` - Feed-level metadata
/// * `articles` - The ordered article list
///
/// # Returns
///
/// The serialized document as a UTF-8 string, indented, without blank lines.
pub fn render_feed(channel: &ChannelInfo, articles: &[Article]) -> Result<String, Box<dyn Error>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut rss_start = BytesStart::new("rss");
    rss_start.push_attribute(("version", "2.0"));
    rss_start.push_attribute(("xmlns:atom", "http://www.w3.org/2005/Atom"));
    writer.write_event(Event::Start(rss_start))?;

    writer.write_event(Event::Start(BytesStart::new("channel")))?;
    write_text_element(&mut writer, "title", &channel.title)?;
    write_text_element(&mut writer, "link", &channel.link)?;
    write_text_element(&mut writer, "description", &channel.description)?;

    let mut self_link = BytesStart::new("atom:link");
    self_link.push_attribute(("href", channel.link.as_str()));
    self_link.push_attribute(("rel", "self"));
    writer.write_event(Event::Empty(self_link))?;

    write_text_element(&mut writer, "lastBuildDate", &Utc::now().to_rfc2822())?;

    for article in articles {
        writer.write_event(Event::Start(BytesStart::new("item")))?;
        write_text_element(&mut writer, "title", &article.title)?;
        write_text_element(&mut writer, "link", &article.url)?;
        write_text_element(
            &mut writer,
            "description",
            article.description.as_deref().unwrap_or(""),
        )?;
        if let Some(thumbnail) = &article.thumbnail {
            let mut enclosure = BytesStart::new("enclosure");
            enclosure.push_attribute(("url", thumbnail.as_str()));
            enclosure.push_attribute(("length", "0"));
            enclosure.push_attribute(("type", ENCLOSURE_MIME_TYPE));
            writer.write_event(Event::Empty(enclosure))?;
        }
        writer.write_event(Event::End(BytesEnd::new("item")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("channel")))?;
    writer.write_event(Event::End(BytesEnd::new("rss")))?;

    Ok(String::from_utf8(writer.into_inner())?)
}

/// Render a feed and write it to `output_path`.
///
/// The parent directory is created when missing. An existing file at the
/// path is overwritten.
///
/// # Errors
///
/// Returns an error when serialization, directory creation, or the file
/// write fails.
#[instrument(level = "info", skip_all, fields(%output_path))]
pub async fn write_feed(
    channel: &ChannelInfo,
    articles: &[Article],
    output_path: &str,
) -> Result<(), Box<dyn Error>> {
    let xml = render_feed(channel, articles)?;

    if let Some(parent) = Path::new(output_path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    fs::write(output_path, xml).await?;
    info!(path = %output_path, items = articles.len(), "Wrote RSS feed");
    Ok(())
}
