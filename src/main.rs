use anyhow::Context;
use ml_verify::{
    utils::{config::Config, logging},
    Application,
};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let config = Config::new().context("Failed to load configuration")?;

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = logging::init(&config.logging).context("Failed to initialize logging")?;

    info!("Starting ML verification service v{}", env!("CARGO_PKG_VERSION"));

    let app = Application::new(config);
    let server = app.start().map_err(|e| {
        error!("Failed to start application: {}", e);
        e
    })?;

    info!("Application started successfully");

    // actix handles SIGINT/SIGTERM and drains in-flight requests
    if let Err(e) = server.await {
        error!("Server terminated with error: {}", e);
        return Err(e.into());
    }

    info!("Application shutdown complete");
    Ok(())
}
