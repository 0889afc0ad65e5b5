// tests/integration/health_tests.rs
use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use crate::common::{app, default_limits};

#[actix_web::test]
async fn test_health() {
    let app = test::init_service(app(&default_limits())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": true, "data": { "status": "ok" } }));
}

#[actix_web::test]
async fn test_metrics_count_requests() {
    let app = test::init_service(app(&default_limits())).await;

    for _ in 0..2 {
        let req = test::TestRequest::get().uri("/health").to_request();
        test::call_service(&app, req).await;
    }
    let req = test::TestRequest::post().uri("/liveness/check").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_client_error());

    let req = test::TestRequest::get().uri("/metrics").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["requests_total"], json!(3));
    assert_eq!(body["data"]["requests_failed"], json!(1));
}
