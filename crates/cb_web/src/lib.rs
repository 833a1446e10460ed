use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/cards", post(handlers::create_card))
        .route("/health", get(handlers::health))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::AppState;
    pub use cb_core::{Card, Error, Result};
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use cb_core::{ArticleSnapshot, Card, Error, Result};
    use cb_fetch::ArticleFetcher;
    use tower::ServiceExt;

    struct StubFetcher;

    #[async_trait]
    impl ArticleFetcher for StubFetcher {
        async fn fetch(&self, _url: &str) -> Result<ArticleSnapshot> {
            let mut snapshot = ArticleSnapshot::new("Stub Title");
            snapshot.html =
                "<p>Budget cuts hurt schools because funding fell.</p>".to_string();
            snapshot.authors = vec!["Jane Doe".to_string()];
            Ok(snapshot)
        }
    }

    struct FailingFetcher;

    #[async_trait]
    impl ArticleFetcher for FailingFetcher {
        async fn fetch(&self, url: &str) -> Result<ArticleSnapshot> {
            Err(Error::InvalidUrl(url.to_string()))
        }
    }

    async fn app_with(fetcher: Arc<dyn ArticleFetcher>) -> Router {
        create_app(AppState { fetcher }).await
    }

    #[tokio::test]
    async fn test_health() {
        let app = app_with(Arc::new(StubFetcher)).await;
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_card() {
        let app = app_with(Arc::new(StubFetcher)).await;
        let body = serde_json::json!({
            "url": "https://example.com/a",
            "idea": "  budget cuts  "
        })
        .to_string();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/cards")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let card: Card = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(card.tag, "budget cuts");
        assert!(card.excerpt.contains("highlight-box"));
        assert!(card.citation.contains("Doe '"));
    }

    #[tokio::test]
    async fn test_fetch_failure_maps_to_client_error() {
        let app = app_with(Arc::new(FailingFetcher)).await;
        let body = serde_json::json!({ "url": "nope", "idea": "x" }).to_string();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/cards")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
