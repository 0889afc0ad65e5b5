// src/api/middleware.rs
use std::{
    future::{ready, Ready},
    sync::Arc,
    time::Instant,
};

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use futures::future::LocalBoxFuture;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::utils::metrics::{saturating_micros, Metrics};

/// Opens a span per request and feeds the shared [`Metrics`].
pub struct RequestTracker {
    metrics: Arc<Metrics>,
}

impl RequestTracker {
    pub fn new(metrics: Arc<Metrics>) -> Self {
        Self { metrics }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestTracker
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestTrackerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTrackerMiddleware {
            service,
            metrics: self.metrics.clone(),
        }))
    }
}

pub struct RequestTrackerMiddleware<S> {
    service: S,
    metrics: Arc<Metrics>,
}

impl<S, B> Service<ServiceRequest> for RequestTrackerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let span = info_span!(
            "request",
            request_id = %Uuid::new_v4(),
            method = %req.method(),
            path = %req.path(),
        );
        let started = Instant::now();
        let metrics = self.metrics.clone();
        let fut = span.in_scope(|| self.service.call(req));

        Box::pin(
            async move {
                let res = fut.await;
                let elapsed = started.elapsed();

                match &res {
                    Ok(response) => {
                        let status = response.status();
                        let success = !status.is_client_error() && !status.is_server_error();
                        metrics.record_request(elapsed, success);
                        info!(
                            status = status.as_u16(),
                            elapsed_us = saturating_micros(elapsed),
                            "Request completed"
                        );
                    }
                    Err(e) => {
                        metrics.record_request(elapsed, false);
                        warn!(elapsed_us = saturating_micros(elapsed), "Request failed: {}", e);
                    }
                }

                res
            }
            .instrument(span),
        )
    }
}
