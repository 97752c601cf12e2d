//! The form-and-button page: one URL field, one button, a results panel.
//!
//! Served as a single embedded document so the binary stays self-contained;
//! all interaction goes through POST /api/v1/extract.

use axum::response::Html;

const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>HTML Data Extractor</title>
<style>
  body { font-family: system-ui, sans-serif; max-width: 52rem; margin: 2rem auto; padding: 0 1rem; }
  input[type=url] { width: 70%; padding: 0.5rem; }
  button { padding: 0.5rem 1rem; }
  #error { color: #b00020; margin-top: 1rem; white-space: pre-wrap; }
  pre { background: #f5f5f5; padding: 1rem; overflow-x: auto; }
  #tokens p { margin: 0.2rem 0; }
</style>
</head>
<body>
<h1>HTML Data Extractor</h1>
<form id="form">
  <input id="url" type="url" placeholder="Enter the URL to scrape" required>
  <button id="go" type="submit">Process</button>
</form>
<div id="error"></div>
<div id="result" hidden>
  <h2>Extraction</h2>
  <pre id="json"></pre>
  <div id="tokens"></div>
</div>
<script>
const form = document.getElementById('form');
const button = document.getElementById('go');
const errorBox = document.getElementById('error');
const result = document.getElementById('result');
const jsonBox = document.getElementById('json');
const tokens = document.getElementById('tokens');

form.addEventListener('submit', async (event) => {
  event.preventDefault();
  errorBox.textContent = '';
  result.hidden = true;
  tokens.innerHTML = '';
  button.disabled = true;
  button.textContent = 'Processing…';
  try {
    const res = await fetch('/api/v1/extract', {
      method: 'POST',
      headers: { 'content-type': 'application/json' },
      body: JSON.stringify({ url: document.getElementById('url').value }),
    });
    const body = await res.json();
    if (!res.ok) {
      errorBox.textContent = body.error ? body.error.message : 'Request failed';
      return;
    }
    // The raw model response is shown exactly as received.
    jsonBox.textContent = body.raw;
    if (body.usage) {
      tokens.innerHTML =
        '<p>Input Tokens: ' + body.usage.prompt_tokens + '</p>' +
        '<p>Output Tokens: ' + body.usage.completion_tokens + '</p>' +
        '<p>Total Tokens: ' + body.usage.total_tokens + '</p>';
    }
    result.hidden = false;
  } catch (e) {
    errorBox.textContent = 'Request failed: ' + e;
  } finally {
    button.disabled = false;
    button.textContent = 'Process';
  }
});
</script>
</body>
</html>
"#;

/// GET /
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_PAGE)
}
