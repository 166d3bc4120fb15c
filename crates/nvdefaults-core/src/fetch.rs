//! Fetches the raw defaults source file over HTTP(S).
//!
//! One blocking GET via the curl crate (libcurl). There is no retry: any
//! transport failure, non-2xx status, or bad UTF-8 is fatal to the caller.

use anyhow::{Context, Result};
use std::str;
use std::time::Duration;

/// Downloads `url` with a single GET and returns the body as UTF-8 text.
///
/// Follows redirects. Runs in the current thread and blocks until the
/// transfer completes or times out.
pub fn fetch_text(url: &str) -> Result<String> {
    url::Url::parse(url).with_context(|| format!("invalid source URL: {}", url))?;

    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(Duration::from_secs(15))?;
    easy.timeout(Duration::from_secs(120))?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform().context("GET request failed")?;
    }

    let code = easy.response_code().context("no response code")?;
    if code < 200 || code >= 300 {
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }

    tracing::debug!("fetched {} bytes from {}", body.len(), url);
    String::from_utf8(body).context("response body is not valid UTF-8")
}
