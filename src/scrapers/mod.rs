//! Site-specific listing-page extractors.
//!
//! One submodule per supported page layout. Each extractor scopes its
//! queries to a single container element and applies a fixed chain of CSS
//! selectors to locate the anchor, image, and title of every listing entry.
//!
//! # Supported Pages
//!
//! | Page | Module | Container | Notes |
//! |------|--------|-----------|-------|
//! | AuDee program page | [`audee`] | `#content_tab_all` | Static HTML listing |
//! | Bitfan updates page | [`bitfan`] | `section.p-clubSection` | Fan-club "UPDATE" feed |
//!
//! # Common Patterns
//!
//! Each extractor module exports:
//! - `parse_channel_info(html, page_url)`: Channel metadata from the page's meta tags
//! - `parse_articles(html, base_url)`: The article list, relative URLs resolved
//! - `build_feed(url, output_path)`: The full fetch → extract → write pipeline
//!
//! Extractors share these policies:
//! - A candidate entry missing a required sub-element is silently skipped
//! - Relative hrefs and image srcs resolve against the page's own base URL
//! - Missing channel metadata falls back to fixed placeholder strings

pub mod audee;
pub mod bitfan;

/// Channel title used when a page carries no usable title metadata.
pub const UNKNOWN_TITLE: &str = "title unknown";

/// Channel description used when a page carries no usable description metadata.
pub const UNKNOWN_DESCRIPTION: &str = "description unknown";
