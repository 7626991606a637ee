use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mindspace::chat::Companion;
use mindspace::config::Config;
use mindspace::gateway::{self, AppState, AuthState, PerUserRateLimiter};
use mindspace::llm::{GeminiClient, TextGenerator};
use mindspace::store::MemoryStore;
use mindspace::story::StoryTeller;

/// Mindspace wellness gateway.
#[derive(Debug, Parser)]
#[command(name = "mindspace", version, about)]
struct Args {
    /// Listen address; overrides MINDSPACE_ADDR.
    #[arg(long)]
    addr: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;
    let addr = args.addr.unwrap_or(config.server.addr);

    let generator: Arc<dyn TextGenerator> = Arc::new(GeminiClient::new(config.llm.clone())?);
    tracing::info!(model = generator.model_name(), "using hosted text model");

    let state = Arc::new(AppState {
        store: Arc::new(MemoryStore::new()),
        storyteller: StoryTeller::new(generator.clone()),
        companion: Companion::new(generator),
        model_rate_limiter: PerUserRateLimiter::new(
            config.server.rate_limit_requests,
            config.server.rate_limit_window_secs,
        ),
    });
    let auth = AuthState::from_config(&config.auth);

    gateway::serve(state, auth, addr).await?;
    Ok(())
}
