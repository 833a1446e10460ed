use chrono::{DateTime, Utc};

use crate::citation;
use crate::excerpt;
use crate::extract;
use crate::text;
use crate::types::{ArticleSnapshot, Card};

/// Runs the full per-request pipeline over a fetched snapshot.
///
/// `url` is the original request URL (cited verbatim); `idea` is the user's
/// claim, trimmed and echoed back as the tag and split into the keyword set.
pub fn generate_card(
    snapshot: &ArticleSnapshot,
    url: &str,
    idea: &str,
    now: DateTime<Utc>,
) -> Card {
    let tag = idea.trim().to_string();
    let keywords: Vec<String> = tag.split_whitespace().map(str::to_string).collect();

    let body = text::normalize(&extract::body_text(snapshot));
    let excerpt = excerpt::select_and_highlight(&body, &keywords, excerpt::DEFAULT_MAX_HIGHLIGHTS);
    let citation = citation::format_citation_at(snapshot, url, now);

    Card {
        tag,
        citation,
        excerpt,
    }
}
