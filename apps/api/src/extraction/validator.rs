//! Link Validator — confirms a URL is reachable and serves HTML before any
//! scrape is attempted.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

/// Issues a bounded-timeout GET and accepts the link only if the response
/// succeeds with an HTML content type. Every failure mode (timeout, DNS,
/// refused connection, malformed URL, missing header) collapses to `false`;
/// nothing propagates past this function.
pub async fn validate_link(client: &Client, url: &str, timeout: Duration) -> bool {
    let response = match client.get(url).timeout(timeout).send().await {
        Ok(r) => r,
        Err(e) => {
            debug!("Link validation request failed for {url}: {e}");
            return false;
        }
    };

    if !response.status().is_success() {
        debug!("Link validation: {url} returned {}", response.status());
        return false;
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    is_html_content_type(content_type)
}

/// Accepts `text/html` and `application/xhtml+xml`, with or without charset
/// parameters.
pub fn is_html_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    mime == "text/html" || mime == "application/xhtml+xml"
}
