use price_frontend::config::Settings;
use price_frontend::startup::Application;
use service_core::observability::init_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        "price-frontend",
        &settings.log_level,
        settings.otlp_endpoint.as_deref(),
    )?;

    let address = format!("{}:{}", settings.host, settings.port);
    let application = Application::build(settings).await?;

    info!("Starting price-frontend on {}", address);
    application.run_until_stopped().await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
