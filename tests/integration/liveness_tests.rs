// tests/integration/liveness_tests.rs
use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use crate::common::{app, default_limits, MultipartBody};

#[actix_web::test]
async fn test_liveness_check() {
    let app = test::init_service(app(&default_limits())).await;

    let req = MultipartBody::new()
        .file("image", "face.jpg", "image/jpeg", &[b'x'; 123])
        .into_request("/liveness/check")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["liveness"].as_f64(), Some(0.615));
    assert_eq!(body["is_live"], false);
    assert_eq!(body["reasons"], json!(["face_not_centered"]));
}

#[actix_web::test]
async fn test_liveness_check_live_image() {
    let app = test::init_service(app(&default_limits())).await;

    let req = MultipartBody::new()
        .file("image", "face.jpg", "image/jpeg", &[7u8; 180])
        .into_request("/liveness/check")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["liveness"].as_f64(), Some(0.9));
    assert_eq!(body["is_live"], true);
    assert_eq!(body["reasons"], json!([]));
}
