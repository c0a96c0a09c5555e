use axum::Json;
use axum::extract::State;

use crate::core::envelope::ResponseEnvelope;
use crate::server::AppState;

pub async fn handle_healthcheck(State(state): State<AppState>) -> Json<ResponseEnvelope> {
    Json(ResponseEnvelope::healthy(&state.official_email))
}
