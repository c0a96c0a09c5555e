use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::features::bfhl::handle_bfhl;
use crate::features::health::handle_healthcheck;
use crate::server::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_healthcheck))
        .route("/bfhl", post(handle_bfhl))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
