pub mod fetcher;
pub mod metadata;

pub use fetcher::{ArticleFetcher, HttpArticleFetcher};

pub mod prelude {
    pub use crate::fetcher::{ArticleFetcher, HttpArticleFetcher};
    pub use cb_core::{ArticleSnapshot, Error, Result};
}
