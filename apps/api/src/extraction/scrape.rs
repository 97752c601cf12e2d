//! Scraper — fetches a validated page and reduces it to visible plain text.

use std::time::Duration;

use reqwest::Client;
use scraper::{Html, Node};
use tracing::debug;

use crate::errors::AppError;

/// Fetches the page body and returns its visible text, capped at
/// `max_chars`. The page may have changed between validation and this fetch,
/// so non-success statuses and transport failures surface as scrape errors
/// rather than escaping the pipeline's error boundary.
pub async fn scrape_page(
    client: &Client,
    url: &str,
    timeout: Duration,
    max_chars: usize,
) -> Result<String, AppError> {
    let response = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| AppError::Scrape(format!("fetch failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::Scrape(format!("page returned status {status}")));
    }

    let html = response
        .text()
        .await
        .map_err(|e| AppError::Scrape(format!("failed to read body: {e}")))?;

    let text = visible_text(&html);
    let (text, truncated) = truncate_chars(text, max_chars);
    if truncated {
        debug!("Scraped text truncated to {max_chars} chars for {url}");
    }

    Ok(text)
}

/// Concatenates the document's visible text nodes in document order,
/// discarding `script`, `style`, and `noscript` subtrees and collapsing
/// whitespace runs to single spaces.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let mut chunks: Vec<&str> = Vec::new();
    for node in document.tree.root().descendants() {
        if let Node::Text(text) = node.value() {
            let hidden = node.ancestors().any(|a| match a.value() {
                Node::Element(el) => matches!(el.name(), "script" | "style" | "noscript"),
                _ => false,
            });
            if !hidden && !text.trim().is_empty() {
                chunks.push(&text.text);
            }
        }
    }

    chunks
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Caps `text` at `max_chars` characters. Returns the (possibly shortened)
/// text and whether truncation happened.
pub fn truncate_chars(text: String, max_chars: usize) -> (String, bool) {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => {
            let mut shortened = text;
            shortened.truncate(byte_idx);
            (shortened, true)
        }
        None => (text, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>Profile</title>
    <style>body { color: red; }</style>
    <script>var tracker = "secret";</script>
  </head>
  <body>
    <h1>Jane Doe</h1>
    <p>PhD in Physics, <b>5 years</b> at Acme Corp</p>
    <noscript>Please enable JavaScript</noscript>
    <div>Skills: simulation, data analysis</div>
  </body>
</html>"#;

    #[test]
    fn test_visible_text_strips_markup() {
        let text = visible_text(FIXTURE);
        assert!(!text.contains('<'));
        assert!(!text.contains('>'));
        assert!(!text.contains("h1"));
    }

    #[test]
    fn test_visible_text_drops_script_style_noscript() {
        let text = visible_text(FIXTURE);
        assert!(!text.contains("tracker"));
        assert!(!text.contains("color: red"));
        assert!(!text.contains("enable JavaScript"));
    }

    #[test]
    fn test_visible_text_preserves_order() {
        let text = visible_text(FIXTURE);
        let title = text.find("Profile").unwrap();
        let name = text.find("Jane Doe").unwrap();
        let degree = text.find("PhD in Physics").unwrap();
        let skills = text.find("Skills:").unwrap();
        assert!(title < name && name < degree && degree < skills);
    }

    #[test]
    fn test_visible_text_keeps_inline_element_text() {
        let text = visible_text(FIXTURE);
        assert!(text.contains("PhD in Physics, 5 years at Acme Corp"));
    }

    #[test]
    fn test_visible_text_collapses_whitespace() {
        let text = visible_text("<p>a\n\n   b</p>\t<p>c</p>");
        assert_eq!(text, "a b c");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let (out, truncated) = truncate_chars("héllo wörld".to_string(), 4);
        assert_eq!(out, "héll");
        assert!(truncated);
    }

    #[test]
    fn test_truncate_noop_under_cap() {
        let (out, truncated) = truncate_chars("short".to_string(), 100);
        assert_eq!(out, "short");
        assert!(!truncated);
    }

    /// Serves exactly one connection with a canned HTTP/1.1 response.
    async fn serve_once(response: &'static [u8]) -> std::net::SocketAddr {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf).await;
            let _ = stream.write_all(response).await;
        });
        addr
    }

    #[tokio::test]
    async fn test_non_success_status_surfaces_as_scrape_error() {
        // The page can go away between validation and this fetch; that must
        // come back as a scrape error, not escape the pipeline.
        let addr = serve_once(
            b"HTTP/1.1 500 Internal Server Error\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
        )
        .await;

        let client = Client::new();
        let err = scrape_page(
            &client,
            &format!("http://{addr}/profile"),
            Duration::from_secs(2),
            1000,
        )
        .await
        .unwrap_err();

        match err {
            AppError::Scrape(msg) => assert!(msg.contains("500")),
            other => panic!("expected Scrape error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_connection_refused_surfaces_as_scrape_error() {
        // Bind then drop to get a port with nothing listening.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = Client::new();
        let err = scrape_page(
            &client,
            &format!("http://{addr}/profile"),
            Duration::from_secs(2),
            1000,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::Scrape(_)));
    }

    #[tokio::test]
    async fn test_successful_fetch_returns_capped_visible_text() {
        let addr = serve_once(
            b"HTTP/1.1 200 OK\r\ncontent-type: text/html\r\ncontent-length: 55\r\nconnection: close\r\n\r\n<html><body><p>PhD in Physics at Acme</p></body></html>",
        )
        .await;

        let client = Client::new();
        let text = scrape_page(
            &client,
            &format!("http://{addr}/profile"),
            Duration::from_secs(2),
            6,
        )
        .await
        .unwrap();

        // Visible text "PhD in Physics at Acme" capped at 6 chars.
        assert_eq!(text, "PhD in");
    }
}
