mod common;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use common::engine_with_scores;
use futures::future::BoxFuture;
use hyodream_ai::{
    api::{recommend_router, sentiment_router},
    error::RecommendError,
    recommend::{CompletionClient, Recommender},
};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn call(router: Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_is_ok() {
    let router = sentiment_router(Arc::new(engine_with_scores(&[])));
    let (status, body) = call(router, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn analyze_returns_summary() {
    let router = sentiment_router(Arc::new(engine_with_scores(&[0.9, 0.2])));
    let request = json!({"reviews": ["좋아요 정말 좋아요", "별로예요"]}).to_string();
    let (status, body) = call(router, "POST", "/analyze", Some(&request)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "total_reviews": 2,
            "positive_percent": 50.0,
            "negative_percent": 50.0,
            "positive_count": 1,
            "negative_count": 1
        })
    );
}

#[tokio::test]
async fn empty_or_absent_reviews_are_client_errors() {
    for request in [r#"{"reviews": []}"#, "{}"] {
        let router = sentiment_router(Arc::new(engine_with_scores(&[])));
        let (status, body) = call(router, "POST", "/analyze", Some(request)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "EMPTY_BATCH");
    }
}

#[tokio::test]
async fn malformed_body_is_a_client_error() {
    let router = sentiment_router(Arc::new(engine_with_scores(&[])));
    let (status, body) = call(router, "POST", "/analyze", Some(r#"{"reviews": "#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_REQUEST");
}

#[tokio::test]
async fn inference_failure_is_a_server_error() {
    let router = sentiment_router(Arc::new(engine_with_scores(&[0.7])));
    let request = json!({"reviews": ["좋아요", "좋아요"]}).to_string();
    let (status, body) = call(router, "POST", "/analyze", Some(&request)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "INFERENCE_FAILED");
}

struct CannedClient(&'static str);

impl CompletionClient for CannedClient {
    fn complete<'a>(
        &'a self,
        system: &'a str,
        user: &'a str,
    ) -> BoxFuture<'a, Result<String, RecommendError>> {
        Box::pin(async move {
            assert!(system.contains("JSON"));
            assert!(user.contains("- 알레르기: 땅콩"));
            Ok(self.0.to_string())
        })
    }
}

fn recommend_app(reply: &'static str) -> Router {
    recommend_router(Recommender::new(Arc::new(CannedClient(reply))))
}

const PROFILE: &str = r#"{"diseases": ["당뇨"], "allergies": ["땅콩"], "goals": []}"#;

#[tokio::test]
async fn recommend_returns_five_ids() {
    for path in ["/recommend", "/recommend-products"] {
        let router = recommend_app(r#"{"product_ids": [101, 102, 103, 104, 105]}"#);
        let (status, body) = call(router, "POST", path, Some(PROFILE)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"product_ids": [101, 102, 103, 104, 105]}));
    }
}

#[tokio::test]
async fn invalid_upstream_reply_is_bad_gateway() {
    for reply in [
        r#"{"product_ids": [1, 2, 3, 4]}"#,
        r#"{"product_ids": [1, 2, 3, 4, 4]}"#,
        "추천 결과입니다",
    ] {
        let (status, body) = call(recommend_app(reply), "POST", "/recommend", Some(PROFILE)).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "UPSTREAM_FAILURE");
    }
}

#[tokio::test]
async fn recommend_health_is_ok() {
    let (status, body) = call(recommend_app("{}"), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
