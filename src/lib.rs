pub mod api;
pub mod core;
pub mod utils;

use std::sync::Arc;

use actix_web::{dev::Server, App, HttpServer};
use tracing::info;

use crate::{
    api::middleware::RequestTracker,
    utils::{
        config::Config,
        error::{Result, ServiceError},
        metrics::Metrics,
    },
};

pub struct Application {
    config: Arc<Config>,
    metrics: Arc<Metrics>,
}

impl Application {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            metrics: Arc::new(Metrics::new()),
        }
    }

    /// Binds the HTTP server and returns it running; await it to serve.
    pub fn start(&self) -> Result<Server> {
        let config = self.config.clone();
        let metrics = self.metrics.clone();

        info!(
            host = %config.server.host,
            port = config.server.port,
            max_upload_bytes = config.limits.max_upload_bytes,
            "Starting API server..."
        );

        let factory_config = config.clone();
        let mut server = HttpServer::new(move || {
            App::new()
                .wrap(api::cors(&factory_config.cors))
                .wrap(RequestTracker::new(metrics.clone()))
                .configure(api::configure(&factory_config.limits, metrics.clone()))
        });

        if let Some(workers) = config.server.workers {
            server = server.workers(workers);
        }

        let server = server
            .bind(config.bind_address())
            .map_err(|e| ServiceError::Init(format!("Failed to bind API server: {}", e)))?
            .run();

        Ok(server)
    }
}
