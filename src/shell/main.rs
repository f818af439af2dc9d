use anyhow::Context;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use cng_portal::config::Config;
use cng_portal::modules::cylinder_tests::adapters::outbound::record_store::TestRecordStore;
use cng_portal::modules::cylinder_tests::adapters::outbound::record_store_in_memory::InMemoryTestRecordStore;
use cng_portal::modules::cylinder_tests::adapters::outbound::record_store_json_file::JsonFileTestRecordStore;
use cng_portal::shell::http::router;
use cng_portal::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    let store: Arc<dyn TestRecordStore> = match &config.data_file {
        Some(path) => {
            let store = JsonFileTestRecordStore::open(path)
                .await
                .with_context(|| format!("opening record store {}", path.display()))?;
            tracing::info!(path = %path.display(), "using JSON file record store");
            Arc::new(store)
        }
        None => {
            tracing::warn!("PORTAL_DATA_FILE not set, records are kept in memory only");
            Arc::new(InMemoryTestRecordStore::new())
        }
    };

    let app = router(AppState::new(store, config.auth_token.as_str()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!("Server running on http://{addr}, GraphiQL at /graphiql");
    axum::serve(listener, app).await?;
    Ok(())
}
