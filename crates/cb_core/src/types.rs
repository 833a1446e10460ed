use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable per-request bundle produced by the fetch/parse collaborator.
///
/// `text` is the primary extracted body; `html` keeps the raw page markup so
/// the paragraph fallback can recover content when extraction comes up short.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSnapshot {
    pub text: String,
    pub html: String,
    pub authors: Vec<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub source_url: Option<String>,
    pub title: String,
}

impl ArticleSnapshot {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            html: String::new(),
            authors: Vec::new(),
            published_at: None,
            source_url: None,
            title: title.into(),
        }
    }
}

/// The assembled response: the echoed idea, a formatted citation and the
/// highlighted excerpt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub tag: String,
    pub citation: String,
    pub excerpt: String,
}
