//! # showfeed
//!
//! Generates RSS 2.0 feeds from two podcast listing pages that publish no
//! feed of their own: an AuDee program page and a Bitfan fan-club "UPDATE"
//! page.
//!
//! ## Usage
//!
//! ```sh
//! showfeed
//! ```
//!
//! ## Architecture
//!
//! Each site job is one linear pipeline, run sequentially:
//! 1. **Fetch**: Download the listing page markup
//! 2. **Extract**: Pull channel metadata and the article list with
//!    site-specific CSS selectors
//! 3. **Serialize**: Build the RSS 2.0 document and write it to disk
//!
//! Every run re-fetches and rebuilds each feed from scratch. A failure in
//! one job is logged and does not block the other.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod fetch;
mod models;
mod outputs;
mod scrapers;
mod utils;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("showfeed starting up");

    let args = Cli::parse();
    debug!(?args.audee_url, ?args.bitfan_url, "Parsed CLI arguments");

    let mut failed_jobs = 0;

    // ---- AuDee program page ----
    info!(url = %args.audee_url, output = %args.audee_output, "Building AuDee feed");
    if let Err(e) = scrapers::audee::build_feed(&args.audee_url, &args.audee_output).await {
        error!(url = %args.audee_url, error = %e, "AuDee feed job failed");
        failed_jobs += 1;
    }

    // ---- Bitfan updates page ----
    info!(url = %args.bitfan_url, output = %args.bitfan_output, "Building Bitfan feed");
    if let Err(e) = scrapers::bitfan::build_feed(&args.bitfan_url, &args.bitfan_output).await {
        error!(url = %args.bitfan_url, error = %e, "Bitfan feed job failed");
        failed_jobs += 1;
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        failed_jobs,
        "Execution complete"
    );

    Ok(())
}
