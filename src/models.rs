//! Data models for scraped listing pages and the feeds built from them.
//!
//! This module defines the two structures that flow through the pipeline:
//! - [`ChannelInfo`]: Feed-level metadata extracted from a listing page
//! - [`Article`]: One listing entry, destined to become one RSS `<item>`
//!
//! Both are derived fresh on every run from the source page and are never
//! persisted anywhere except the generated feed file.

use serde::{Deserialize, Serialize};

/// Feed-level metadata for one listing page.
///
/// Populated from the page's own metadata tags (`og:title`, description
/// metas). When a page is missing those tags the extractors substitute the
/// fixed placeholders `"title unknown"` / `"description unknown"` rather
/// than failing the run.
///
/// # Fields
///
/// * `title` - The channel title, usually the show name
/// * `description` - The channel description
/// * `link` - The listing page URL the feed was generated from
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChannelInfo {
    /// The channel title.
    pub title: String,
    /// The channel description.
    pub description: String,
    /// The URL of the page this channel was extracted from.
    pub link: String,
}

/// One article entry detected on a listing page.
///
/// Every article carries a non-empty title and a non-empty absolute URL;
/// candidates that cannot satisfy that are skipped during extraction rather
/// than emitted. The thumbnail is present only when the source markup
/// carried an image reference.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Article {
    /// The article title with label markup and surrounding whitespace removed.
    pub title: String,
    /// The absolute article URL.
    pub url: String,
    /// Absolute thumbnail image URL, when the listing entry had one.
    pub thumbnail: Option<String>,
    /// Article description; the feed builder substitutes an empty string when absent.
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_creation() {
        let article = Article {
            title: "第95回 秋の夜長とメッセージ特集！".to_string(),
            url: "https://audee.jp/voice/show/210541".to_string(),
            thumbnail: Some("https://cf.audee.jp/contents/Xa81kQpLm2_thumb.jpg".to_string()),
            description: None,
        };
        assert_eq!(article.url, "https://audee.jp/voice/show/210541");
        assert!(article.thumbnail.is_some());
        assert!(article.description.is_none());
    }

    #[test]
    fn test_channel_info_serialization() {
        let channel = ChannelInfo {
            title: "Test Channel".to_string(),
            description: "This is a test channel.".to_string(),
            link: "https://example.com/channel".to_string(),
        };

        let json = serde_json::to_string(&channel).unwrap();
        assert!(json.contains("Test Channel"));
        assert!(json.contains("https://example.com/channel"));
    }

    #[test]
    fn test_article_deserialization() {
        let json = r#"{
            "title": "Article 1",
            "url": "https://example.com/article1",
            "thumbnail": null,
            "description": null
        }"#;

        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.title, "Article 1");
        assert_eq!(article.thumbnail, None);
    }
}
