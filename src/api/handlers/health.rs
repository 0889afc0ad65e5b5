use actix_web::{
    web::{self, Data},
    HttpResponse, Resource,
};

use crate::{
    api::types::{ApiResponse, HealthStatus},
    utils::metrics::Metrics,
};

pub fn health_resource() -> Resource {
    web::resource("/health").route(web::get().to(health))
}

pub fn metrics_resource() -> Resource {
    web::resource("/metrics").route(web::get().to(metrics))
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(HealthStatus { status: "ok" }))
}

async fn metrics(metrics: Data<Metrics>) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(metrics.snapshot()))
}
