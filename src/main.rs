use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cinedex::{
    config::Config,
    routes::{create_router, AppState},
    services::Catalog,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cinedex=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // The catalog is loaded once and never mutated afterwards
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("Failed to load catalog from {}", path))?,
        None => Catalog::seed().context("Failed to load seed catalog")?,
    };
    tracing::info!(entries = catalog.len(), "Catalog ready");

    let app = create_router(AppState::new(catalog, &config));

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr()))?;
    tracing::info!(addr = %config.bind_addr(), "Server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
