use std::collections::HashSet;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// How many sentences get highlighted unless the caller says otherwise.
pub const DEFAULT_MAX_HIGHLIGHTS: usize = 4;

/// Phrases signaling causal/evidentiary reasoning. A sentence containing one
/// is worth more than a bare keyword hit.
const WARRANT_PHRASES: [&str; 8] = [
    "because",
    "therefore",
    "proves",
    "demonstrates",
    "results in",
    "leads to",
    "shows that",
    "causes",
];

/// Sentences longer than this many whitespace-delimited tokens are penalized.
const LONG_SENTENCE_TOKENS: usize = 40;

/// A sentence paired with its relevance score. Scores can go negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredSentence {
    pub score: i32,
    pub text: String,
}

/// Splits text into trimmed, non-empty sentences using UAX #29 boundaries.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split_sentence_bounds()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Scores each sentence against the keyword set.
///
/// +1 per keyword present as a case-insensitive substring (a keyword listed
/// twice counts twice), +2 per warrant phrase present, -1 for run-on
/// sentences. Substring matching is deliberate here even though rendering
/// matches whole words only; "cause" scores a hit inside "because".
pub fn score_sentences(sentences: &[String], keywords: &[String]) -> Vec<ScoredSentence> {
    sentences
        .iter()
        .map(|sentence| {
            let lowered = sentence.to_lowercase();

            let mut score = keywords
                .iter()
                .filter(|kw| lowered.contains(&kw.to_lowercase()))
                .count() as i32;

            score += 2 * WARRANT_PHRASES
                .iter()
                .filter(|phrase| lowered.contains(*phrase))
                .count() as i32;

            if sentence.split_whitespace().count() > LONG_SENTENCE_TOKENS {
                score -= 1;
            }

            ScoredSentence {
                score,
                text: sentence.clone(),
            }
        })
        .collect()
}

/// Picks the texts of the top `max_highlights` sentences.
///
/// Ranking is score descending; among equal scores the lexicographically
/// smaller sentence wins the slot. Duplicate sentence texts collapse to a
/// single entry, so selection is by value.
pub fn select_top(scored: &[ScoredSentence], max_highlights: usize) -> HashSet<String> {
    let mut ranked: Vec<&ScoredSentence> = scored.iter().collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.text.cmp(&b.text)));

    ranked
        .into_iter()
        .take(max_highlights)
        .map(|s| s.text.clone())
        .collect()
}

/// Reassembles the excerpt in original document order.
///
/// Selected sentences are wrapped in a `<span>` with each keyword bolded;
/// everything else passes through untouched. Keywords are matched as whole
/// words, case-insensitively, longest first so a keyword that is a substring
/// of another cannot corrupt the longer match.
pub fn render(sentences: &[String], selected: &HashSet<String>, keywords: &[String]) -> String {
    let mut ordered_keywords: Vec<&String> = keywords.iter().collect();
    ordered_keywords.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

    let patterns: Vec<Regex> = ordered_keywords
        .iter()
        .filter_map(|kw| Regex::new(&format!(r"(?i)\b({})\b", regex::escape(kw))).ok())
        .collect();

    let mut rebuilt = Vec::with_capacity(sentences.len());
    for sentence in sentences {
        if selected.contains(sentence.as_str()) {
            let mut highlighted = sentence.clone();
            for pattern in &patterns {
                highlighted = pattern
                    .replace_all(&highlighted, r#"<b class="highlight-box">$1</b>"#)
                    .into_owned();
            }
            rebuilt.push(format!("<span>{}</span>", highlighted));
        } else {
            rebuilt.push(sentence.clone());
        }
    }

    rebuilt.join(" ")
}

/// Full pipeline: split, score, select, render.
pub fn select_and_highlight(text: &str, keywords: &[String], max_highlights: usize) -> String {
    let sentences = split_sentences(text);
    let scored = score_sentences(&sentences, keywords);
    let selected = select_top(&scored, max_highlights);
    render(&sentences, &selected, keywords)
}
