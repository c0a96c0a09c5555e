use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde_json::Value;

use crate::core::envelope::{EnvelopeResponse, ResponseEnvelope};
use crate::core::error::AppError;
use crate::features::bfhl::dto::BfhlRequest;
use crate::features::bfhl::helpers::INVALID_JSON_BODY;
use crate::server::AppState;

pub async fn handle_bfhl(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> EnvelopeResponse {
    let result = match payload {
        Ok(Json(body)) => match BfhlRequest::try_from(body) {
            Ok(request) => state.service.handle(request).await,
            Err(err) => Err(err),
        },
        Err(rejection) => {
            tracing::debug!(%rejection, "rejected bfhl body");
            Err(AppError::bad_request(INVALID_JSON_BODY.to_string()))
        }
    };

    match result {
        Ok(data) => EnvelopeResponse::ok(ResponseEnvelope::success(&state.official_email, data)),
        Err(err) => {
            if err.status_code().is_server_error() {
                tracing::error!(error = %err, "bfhl request failed");
            }
            EnvelopeResponse::from_error(&state.official_email, &err)
        }
    }
}
