use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub(crate) static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Collapses every run of whitespace (spaces, tabs, newlines) into a single
/// space and strips leading/trailing whitespace. Idempotent.
pub fn normalize(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}
