// tests/integration/document_tests.rs
use actix_web::{http::StatusCode, test};
use serde_json::Value;

use crate::common::{app, default_limits, MultipartBody};

#[actix_web::test]
async fn test_document_verify() {
    let app = test::init_service(app(&default_limits())).await;

    let req = MultipartBody::new()
        .file("image", "id.png", "image/png", b"\x00\x01\x02\x03")
        .into_request("/document/verify")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["text_extracted"], "DOC-054edec1d0");
    assert_eq!(body["tamper_flag"], false);
    assert_eq!(body["face_region_base64"], "cGxhY2Vob2xkZXJfcmVnaW9u");
}

#[actix_web::test]
async fn test_document_odd_length_is_flagged() {
    let app = test::init_service(app(&default_limits())).await;

    let req = MultipartBody::new()
        .file("image", "id.png", "image/png", b"\x00\x01\x02")
        .into_request("/document/verify")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["tamper_flag"], true);
    assert!(body["text_extracted"].as_str().unwrap().starts_with("DOC-"));
}
