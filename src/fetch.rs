//! Page fetching.
//!
//! One HTTP GET per listing page. A non-2xx status is an error; there is no
//! timeout override and no retry, a failed fetch simply fails that site's
//! feed job and the runner moves on to the next one.

use std::error::Error;
use tracing::{info, instrument};

/// Fetch a listing page and return its body as text.
///
/// # Errors
///
/// Returns an error when the request fails or the response status indicates
/// a client or server error.
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn get_html(url: &str) -> Result<String, Box<dyn Error>> {
    let response = reqwest::get(url).await?.error_for_status()?;
    let body = response.text().await?;
    info!(bytes = body.len(), "Fetched listing page");
    Ok(body)
}
