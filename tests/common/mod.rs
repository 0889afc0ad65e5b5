// tests/common/mod.rs
use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    http::header,
    test, App,
};
use ml_verify::{
    api::{self, middleware::RequestTracker},
    utils::{
        config::{CorsConfig, LimitsConfig},
        metrics::Metrics,
    },
};

pub const BOUNDARY: &str = "----mlverifyboundary7MA4YWxkTrZu0gW";

pub fn app(
    limits: &LimitsConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let metrics = Arc::new(Metrics::new());
    App::new()
        .wrap(RequestTracker::new(metrics.clone()))
        .configure(api::configure(limits, metrics))
}

/// Same stack as the server: CORS outside the request tracker.
pub fn app_with_cors(
    cors: &CorsConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let metrics = Arc::new(Metrics::new());
    App::new()
        .wrap(api::cors(cors))
        .wrap(RequestTracker::new(metrics.clone()))
        .configure(api::configure(&default_limits(), metrics))
}

pub fn default_limits() -> LimitsConfig {
    LimitsConfig {
        max_upload_bytes: 1024 * 1024,
    }
}

/// Hand-built `multipart/form-data` body.
#[derive(Default)]
pub struct MultipartBody {
    body: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, name: &str, filename: &str, content_type: &str, data: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\nContent-Type: text/plain\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn into_request(mut self, uri: &str) -> test::TestRequest {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        test::TestRequest::post()
            .uri(uri)
            .insert_header((
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(self.body)
    }
}
