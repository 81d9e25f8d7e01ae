//! Fetches a job posting by URL and reduces the page to readable text.

use std::sync::OnceLock;

use regex::Regex;
use reqwest::{Client, Url};
use tracing::{info, warn};

use crate::errors::AppError;

struct HtmlPatterns {
    hidden_blocks: Regex,
    block_breaks: Regex,
    tags: Regex,
    spaces: Regex,
    blank_lines: Regex,
}

fn html_patterns() -> &'static HtmlPatterns {
    static PATTERNS: OnceLock<HtmlPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| HtmlPatterns {
        hidden_blocks: Regex::new(r"(?is)<(script|style|noscript|head)\b.*?</(script|style|noscript|head)>")
            .expect("hidden block pattern is valid"),
        block_breaks: Regex::new(r"(?i)<\s*(br|/p|/div|/li|/h[1-6]|/tr|/section|/article)\b[^>]*>")
            .expect("block break pattern is valid"),
        tags: Regex::new(r"(?s)<[^>]*>").expect("tag pattern is valid"),
        spaces: Regex::new(r"[ \t\r\f\v\x{A0}]+").expect("space pattern is valid"),
        blank_lines: Regex::new(r"\n\s*\n+").expect("blank line pattern is valid"),
    })
}

/// Strips markup and collapses whitespace, keeping paragraph breaks.
pub fn html_to_text(html: &str) -> String {
    let patterns = html_patterns();
    let text = patterns.hidden_blocks.replace_all(html, " ");
    let text = patterns.block_breaks.replace_all(&text, "\n");
    let text = patterns.tags.replace_all(&text, " ");
    let text = html_escape::decode_html_entities(&text);
    let text = patterns.spaces.replace_all(&text, " ");

    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let text = lines.join("\n");
    patterns
        .blank_lines
        .replace_all(&text, "\n\n")
        .trim()
        .to_string()
}

/// Downloads the posting at `url` and returns its text content.
pub async fn fetch_posting_text(http: &Client, url: &str) -> Result<String, AppError> {
    let parsed = Url::parse(url.trim())
        .map_err(|e| AppError::Validation(format!("jobUrl is not a valid URL: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AppError::Validation(
            "jobUrl must use http or https".to_string(),
        ));
    }

    info!("Fetching job posting from {parsed}");

    let response = http.get(parsed.clone()).send().await.map_err(|e| {
        warn!("Job posting {parsed} is unreachable: {e}");
        AppError::UnprocessableEntity(format!("Job posting at {parsed} is unreachable"))
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::UnprocessableEntity(format!(
            "Job posting at {parsed} returned status {status}"
        )));
    }

    let body = response.text().await.map_err(|e| {
        AppError::UnprocessableEntity(format!("Job posting at {parsed} could not be read: {e}"))
    })?;

    let text = html_to_text(&body);
    if text.is_empty() {
        return Err(AppError::UnprocessableEntity(format!(
            "Job posting at {parsed} contains no text"
        )));
    }

    Ok(text)
}
