use std::sync::Arc;

use cb_fetch::ArticleFetcher;

pub struct AppState {
    pub fetcher: Arc<dyn ArticleFetcher>,
}
