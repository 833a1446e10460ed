use chrono::{DateTime, NaiveDate, Utc};
use scraper::{Html, Selector};
use serde_json::Value;

/// Resolves the article title: Open Graph first, then the first `<h1>`,
/// then the document `<title>`.
pub fn extract_title(document: &Html) -> String {
    if let Ok(selector) = Selector::parse(r#"meta[property="og:title"]"#) {
        if let Some(content) = document
            .select(&selector)
            .next()
            .and_then(|el| el.value().attr("content"))
        {
            let content = content.trim();
            if !content.is_empty() {
                return content.to_string();
            }
        }
    }

    for raw in ["h1", "title"] {
        if let Ok(selector) = Selector::parse(raw) {
            if let Some(el) = document.select(&selector).next() {
                let text = el.text().collect::<String>().trim().to_string();
                if !text.is_empty() {
                    return text;
                }
            }
        }
    }

    String::new()
}

/// Extracts author names from JSON-LD metadata, falling back to the
/// `<meta name="author">` tag when no structured data names anyone.
pub fn extract_authors(document: &Html) -> Vec<String> {
    let mut authors = Vec::new();

    for json in linked_data(document) {
        collect_authors(json.get("author"), &mut authors);
    }

    if authors.is_empty() {
        if let Ok(selector) = Selector::parse(r#"meta[name="author"]"#) {
            for el in document.select(&selector) {
                if let Some(content) = el.value().attr("content") {
                    let content = content.trim();
                    if !content.is_empty() {
                        authors.push(content.to_string());
                    }
                }
            }
        }
    }

    authors
}

/// Extracts the publish date from JSON-LD `datePublished`, falling back to
/// the `article:published_time` meta tag.
pub fn extract_published_at(document: &Html) -> Option<DateTime<Utc>> {
    for json in linked_data(document) {
        if let Some(raw) = json.get("datePublished").and_then(|v| v.as_str()) {
            if let Some(date) = parse_date(raw) {
                return Some(date);
            }
        }
    }

    if let Ok(selector) = Selector::parse(r#"meta[property="article:published_time"]"#) {
        if let Some(raw) = document
            .select(&selector)
            .next()
            .and_then(|el| el.value().attr("content"))
        {
            return parse_date(raw);
        }
    }

    None
}

/// Yields every parseable JSON-LD document on the page. An array at the root
/// is flattened so callers only ever see objects.
fn linked_data(document: &Html) -> Vec<Value> {
    let mut values = Vec::new();

    if let Ok(selector) = Selector::parse(r#"script[type="application/ld+json"]"#) {
        for script in document.select(&selector) {
            let raw = script.text().collect::<String>();
            match serde_json::from_str::<Value>(raw.trim()) {
                Ok(Value::Array(items)) => values.extend(items),
                Ok(value) => values.push(value),
                Err(_) => {}
            }
        }
    }

    values
}

fn collect_authors(author: Option<&Value>, authors: &mut Vec<String>) {
    match author {
        Some(Value::Array(items)) => {
            for item in items {
                if let Some(name) = item.get("name").and_then(|n| n.as_str()) {
                    authors.push(name.trim().to_string());
                }
            }
        }
        Some(Value::Object(obj)) => {
            if let Some(name) = obj.get("name").and_then(|n| n.as_str()) {
                authors.push(name.trim().to_string());
            }
        }
        Some(Value::String(name)) => authors.push(name.trim().to_string()),
        _ => {}
    }
}

/// RFC 3339 first; bare dates are taken as midnight UTC.
fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(raw.trim()) {
        return Some(date.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| DateTime::from_naive_utc_and_offset(dt, Utc))
}
