//! Command-line interface definitions for showfeed.
//!
//! This module defines the CLI arguments using the `clap` crate. Every flag
//! has a default, so a bare `showfeed` invocation scrapes the two known
//! pages and writes both feeds under `docs/`.

use clap::Parser;

/// Command-line arguments for the showfeed application.
///
/// The two page URLs and the two output paths are configurable; defaults
/// point at the pages the tool was built for.
///
/// # Examples
///
/// ```sh
/// # Scrape both known pages with the default output paths
/// showfeed
///
/// # Point the AuDee job at a different program page
/// showfeed --audee-url https://audee.jp/program/show/12345 --audee-output /tmp/feed.xml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// AuDee program page to scrape
    #[arg(long, default_value = "https://audee.jp/program/show/40889")]
    pub audee_url: String,

    /// Output path for the AuDee RSS feed
    #[arg(long, default_value = "docs/audee_rss.xml")]
    pub audee_output: String,

    /// Bitfan club updates page to scrape
    #[arg(long, default_value = "https://ij-matome.bitfan.id/updates")]
    pub bitfan_url: String,

    /// Output path for the Bitfan updates RSS feed
    #[arg(long, default_value = "docs/ij_matome_updates_rss.xml")]
    pub bitfan_output: String,
}
