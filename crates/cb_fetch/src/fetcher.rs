use std::time::Duration;

use async_trait::async_trait;
use cb_core::{ArticleSnapshot, Error, Result};
use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

use crate::metadata;

const USER_AGENT: &str = concat!("cardbox/", env!("CARGO_PKG_VERSION"));

/// The article download is the only unbounded-latency step in the pipeline,
/// so the client enforces its own deadline.
const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

#[async_trait]
pub trait ArticleFetcher: Send + Sync {
    /// Downloads and parses the article at the given URL
    async fn fetch(&self, url: &str) -> Result<ArticleSnapshot>;
}

/// Fetches articles over HTTP and extracts a snapshot from the page markup.
pub struct HttpArticleFetcher {
    client: reqwest::Client,
}

impl HttpArticleFetcher {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { client }
    }
}

impl Default for HttpArticleFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleFetcher for HttpArticleFetcher {
    async fn fetch(&self, url: &str) -> Result<ArticleSnapshot> {
        let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))?;

        debug!("fetching article from {}", url);
        let response = self.client.get(parsed.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch(format!("{} returned {}", url, status)));
        }
        let html = response.text().await?;

        Ok(parse_snapshot(&html, &parsed))
    }
}

/// Builds a snapshot from raw page markup. The full markup is kept on the
/// snapshot so the core's paragraph fallback can reprocess it.
pub fn parse_snapshot(html: &str, url: &Url) -> ArticleSnapshot {
    let document = Html::parse_document(html);

    ArticleSnapshot {
        text: primary_text(&document),
        html: html.to_string(),
        authors: metadata::extract_authors(&document),
        published_at: metadata::extract_published_at(&document),
        source_url: origin(url),
        title: metadata::extract_title(&document),
    }
}

/// Primary extraction: paragraphs inside the `<article>` element only.
/// Pages without one yield an empty string and rely on the fallback.
fn primary_text(document: &Html) -> String {
    let selector = Selector::parse("article p").unwrap();

    document
        .select(&selector)
        .map(|el| el.text().collect::<String>())
        .filter(|t| !t.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn origin(url: &Url) -> Option<String> {
    url.host_str()
        .map(|host| format!("{}://{}", url.scheme(), host))
}
