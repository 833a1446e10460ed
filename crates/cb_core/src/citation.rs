use chrono::{DateTime, Datelike, Utc};

use crate::types::ArticleSnapshot;

const UNKNOWN_AUTHOR: &str = "Unknown Author";
const UNKNOWN_SOURCE: &str = "Unknown Source";

/// Formats a citation with an explicit current instant.
///
/// `now` only supplies the year when the snapshot carries no publish date,
/// which keeps the formatter deterministic under test.
pub fn format_citation_at(snapshot: &ArticleSnapshot, url: &str, now: DateTime<Utc>) -> String {
    let authors: Vec<String> = if snapshot.authors.is_empty() {
        vec![UNKNOWN_AUTHOR.to_string()]
    } else {
        snapshot.authors.clone()
    };

    let year = snapshot
        .published_at
        .map(|date| date.year())
        .unwrap_or_else(|| now.year());

    let mut bracket_parts = Vec::new();
    bracket_parts.push(authors.join(", "));
    if let Some(date) = snapshot.published_at {
        bracket_parts.push(date.format("%B %d").to_string());
    }
    bracket_parts.push("No qualifications available".to_string());
    bracket_parts.push(format!(
        "{}, \"{}\", {}",
        snapshot.source_url.as_deref().unwrap_or(UNKNOWN_SOURCE),
        snapshot.title,
        url
    ));

    // Surname is the last whitespace token; a single-token name is its own surname.
    let surname = authors[0]
        .split_whitespace()
        .last()
        .unwrap_or(authors[0].as_str());

    format!("{} '{} [{}]", surname, year, bracket_parts.join("; "))
}

/// Formats a citation using the system clock for the year fallback.
pub fn format_citation(snapshot: &ArticleSnapshot, url: &str) -> String {
    format_citation_at(snapshot, url, Utc::now())
}
