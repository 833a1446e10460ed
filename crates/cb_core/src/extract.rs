use scraper::{Html, Selector};
use tracing::debug;

use crate::types::ArticleSnapshot;

/// Primary text shorter than this is treated as a failed extraction and the
/// paragraph fallback kicks in.
const MIN_PRIMARY_LENGTH: usize = 300;

/// Returns usable body text for a snapshot.
///
/// The primary extracted text wins when it is long enough; otherwise every
/// `<p>` element in the raw markup is scraped in document order and joined
/// with single spaces. Pages without paragraph tags yield an empty string,
/// which downstream stages tolerate.
pub fn body_text(snapshot: &ArticleSnapshot) -> String {
    // threshold is in characters, not bytes
    let primary_chars = snapshot.text.chars().count();
    if !snapshot.text.is_empty() && primary_chars > MIN_PRIMARY_LENGTH {
        return snapshot.text.clone();
    }

    debug!(
        "primary text too short ({} chars), scraping paragraphs from raw markup",
        primary_chars
    );
    let document = Html::parse_document(&snapshot.html);
    let paragraph = Selector::parse("p").unwrap();

    document
        .select(&paragraph)
        .map(|el| el.text().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with(text: &str, html: &str) -> ArticleSnapshot {
        ArticleSnapshot {
            text: text.to_string(),
            html: html.to_string(),
            ..ArticleSnapshot::new("Test")
        }
    }

    #[test]
    fn test_long_primary_text_wins() {
        let long = "x".repeat(400);
        let snapshot = snapshot_with(&long, "<p>ignored</p>");
        assert_eq!(body_text(&snapshot), long);
    }

    #[test]
    fn test_short_primary_falls_back_to_paragraphs() {
        let snapshot = snapshot_with(
            "too short",
            "<html><body><p>First paragraph.</p><div><p>Second paragraph.</p></div></body></html>",
        );
        assert_eq!(body_text(&snapshot), "First paragraph. Second paragraph.");
    }

    #[test]
    fn test_empty_primary_falls_back() {
        let snapshot = snapshot_with("", "<p>Only paragraph.</p>");
        assert_eq!(body_text(&snapshot), "Only paragraph.");
    }

    #[test]
    fn test_no_paragraphs_yields_empty() {
        let snapshot = snapshot_with("", "<div>no paragraph tags here</div>");
        assert_eq!(body_text(&snapshot), "");
    }

    #[test]
    fn test_threshold_counts_chars_not_bytes() {
        // 200 chars but 400 bytes; still below the threshold
        let multibyte = "é".repeat(200);
        let snapshot = snapshot_with(&multibyte, "<p>fallback paragraph</p>");
        assert_eq!(body_text(&snapshot), "fallback paragraph");

        let long_multibyte = "é".repeat(301);
        let snapshot = snapshot_with(&long_multibyte, "<p>ignored</p>");
        assert_eq!(body_text(&snapshot), long_multibyte);
    }

    #[test]
    fn test_exactly_threshold_length_falls_back() {
        let at_threshold = "y".repeat(MIN_PRIMARY_LENGTH);
        let snapshot = snapshot_with(&at_threshold, "<p>fallback</p>");
        assert_eq!(body_text(&snapshot), "fallback");
    }
}
