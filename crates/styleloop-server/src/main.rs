//! StyleLoop — AI style recommendation and return-analytics backend.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = styleloop_core::StyleLoopConfig::from_env();
    let genai = styleloop_genai::GenAiConfig::from_env();

    if genai.is_configured() {
        info!("Generation service configured with model '{}'", genai.model);
    } else {
        warn!("GEMINI_API_KEY is not set; model-backed endpoints will return errors");
    }

    let catalog = styleloop_catalog::Catalog::load(&config.catalog_path)
        .map_err(|e| anyhow::anyhow!("Failed to load catalog: {}", e))?;
    info!(
        "Loaded {} products from {}",
        catalog.len(),
        config.catalog_path.display()
    );

    let port = config.port;
    let state = Arc::new(AppState::new(config, genai, catalog));

    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("StyleLoop server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
