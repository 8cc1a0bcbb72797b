//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

pub mod analyze;
pub mod info;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes
        && exceeds(metadata.len(), max)
    {
        anyhow::bail!(
            "input too large: {path} is {} bytes (limit: {max} bytes)",
            metadata.len()
        );
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Compare a byte count against a limit without narrowing the count.
fn exceeds(len: u64, max: usize) -> bool {
    len > u64::try_from(max).unwrap_or(u64::MAX)
}

/// Download a page body as text, enforcing the configured size limit.
///
/// Non-success HTTP statuses are errors. A spinner is drawn on stderr while
/// the request is in flight; it is hidden automatically when stderr is not a
/// terminal.
#[cfg(feature = "url")]
pub fn fetch_url(url: &str, max_bytes: Option<usize>) -> anyhow::Result<String> {
    use std::time::Duration;

    use indicatif::{ProgressBar, ProgressStyle};

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("fetching {url}"));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = download(url, max_bytes);
    spinner.finish_and_clear();
    result
}

#[cfg(feature = "url")]
fn download(url: &str, max_bytes: Option<usize>) -> anyhow::Result<String> {
    use std::time::Duration;

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("failed to build HTTP client")?;

    let response = client
        .get(url)
        .send()
        .with_context(|| format!("failed to fetch {url}"))?
        .error_for_status()
        .with_context(|| format!("failed to fetch {url}"))?;

    if let (Some(max), Some(len)) = (max_bytes, response.content_length())
        && exceeds(len, max)
    {
        anyhow::bail!("input too large: {url} is {len} bytes (limit: {max} bytes)");
    }

    let body = response
        .text()
        .with_context(|| format!("failed to read response body from {url}"))?;
    if let Some(max) = max_bytes
        && body.len() > max
    {
        anyhow::bail!(
            "input too large: {url} is {} bytes (limit: {max} bytes)",
            body.len()
        );
    }
    tracing::debug!(url, bytes = body.len(), "fetched page");
    Ok(body)
}

/// Placeholder used when the binary is built without the `url` feature.
#[cfg(not(feature = "url"))]
pub fn fetch_url(url: &str, _max_bytes: Option<usize>) -> anyhow::Result<String> {
    anyhow::bail!("cannot fetch {url}: built without the `url` feature")
}
