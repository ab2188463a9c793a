// Runs in its own test binary so no other test has installed the recorder.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use std::sync::Arc;
use tower::ServiceExt; // for oneshot
use web_calculator::calculator::Calculator;
use web_calculator::server::create_server;

#[tokio::test]
async fn test_metrics_endpoint_is_not_found_without_recorder() {
    let app = create_server(Arc::new(Calculator::with_tracing()));
    let request = Request::builder().uri("/metrics").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
