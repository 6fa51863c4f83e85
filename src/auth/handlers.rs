use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::{error, instrument};

use crate::{
    auth::{dto::RegisterRequest, services},
    response::ServiceResponse,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/register", post(register))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<ServiceResponse<()>, (StatusCode, String)> {
    match services::register(&state.db, payload).await {
        Ok(resp) => Ok(resp),
        Err(e) => {
            error!(error = %e, "register failed");
            Err(internal(e))
        }
    }
}

/// Surface a failure as a 500 carrying the raw error text.
fn internal<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
