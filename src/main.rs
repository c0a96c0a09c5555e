use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use bfhl_api::config::load_config;
use bfhl_api::core::error::AppError;
use bfhl_api::features::ai::GeminiClient;
use bfhl_api::features::bfhl::{AnswerProvider, BfhlService};
use bfhl_api::server::{AppState, build_router};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    init_tracing();

    let config = Arc::new(load_config()?);
    let answer_provider: Arc<dyn AnswerProvider> = Arc::new(GeminiClient::new(config.clone())?);
    let service = Arc::new(BfhlService::new(answer_provider));
    let app_state = AppState::new(service, config.official_email.clone());

    let app = build_router(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(%addr, "starting server");
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|err| AppError::internal(format!("failed to bind: {err}")))?;
    axum::serve(listener, app)
        .await
        .map_err(|err| AppError::internal(format!("server error: {err}")))?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}
