pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod types;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::web::{self, Data};

use crate::utils::{
    config::{CorsConfig, LimitsConfig},
    metrics::Metrics,
};

/// Registers form limits, shared metrics and every route of the service.
pub fn configure(
    limits: &LimitsConfig,
    metrics: Arc<Metrics>,
) -> impl FnOnce(&mut web::ServiceConfig) {
    let form_config = forms::form_config(limits);
    let limits = Data::new(limits.clone());

    move |cfg| {
        cfg.app_data(form_config)
            .app_data(limits)
            .app_data(Data::from(metrics))
            .service(handlers::health::health_resource())
            .service(handlers::health::metrics_resource())
            .service(handlers::voice::scope())
            .service(handlers::liveness::scope())
            .service(handlers::document::scope());
    }
}

pub fn cors(config: &CorsConfig) -> Cors {
    if config.allowed_origins.iter().any(|origin| origin == "*") {
        return Cors::permissive();
    }

    config.allowed_origins.iter().fold(
        Cors::default()
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header()
            .max_age(3600),
        |cors, origin| cors.allowed_origin(origin),
    )
}
