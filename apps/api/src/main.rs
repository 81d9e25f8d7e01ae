use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use features_provider::build_app;
use features_provider::config::Config;
use features_provider::db::{create_pool, ensure_schema};
use features_provider::llm_client::LlmClient;
use features_provider::profiles::store::PgProfileStore;
use features_provider::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "features_provider={level},tower_http={level}",
                level = config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting features-provider v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let pool = create_pool(&config.database_url).await?;
    ensure_schema(&pool).await?;

    // Initialize LLM client
    let llm = LlmClient::new(&config.llm).context("Failed to build LLM HTTP client")?;
    info!("LLM client initialized (model: {})", llm.model());

    let http = reqwest::Client::builder()
        .timeout(config.llm.timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let state = AppState {
        store: Arc::new(PgProfileStore::new(pool)),
        llm: Arc::new(llm),
        http,
    };

    let app = build_app(state);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
