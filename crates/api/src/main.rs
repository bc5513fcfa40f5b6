use anyhow::Context;

use stockmap_api::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockmap_observability::init();

    let config = AppConfig::from_env();
    let app = stockmap_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        data_file = %config.data_file.display(),
        "listening"
    );

    axum::serve(listener, app).await.context("server terminated")?;
    Ok(())
}
