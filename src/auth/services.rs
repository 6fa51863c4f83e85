use axum::http::StatusCode;
use sqlx::PgPool;
use tracing::info;

use crate::auth::{
    dto::RegisterRequest,
    password,
    repo_types::{NewUser, User},
};
use crate::response::ServiceResponse;

/// Register a new user: hash the password, persist the row, answer with the
/// fixed success envelope.
///
/// Whatever the database rejects (taken email, malformed email) is returned
/// to the caller as-is; nothing is retried or rephrased here.
pub async fn register(
    db: &PgPool,
    payload: RegisterRequest,
) -> anyhow::Result<ServiceResponse<()>> {
    let password_hash = password::hash_password(&payload.password)?;

    let user = User::create(
        db,
        &NewUser {
            email: &payload.email,
            password_hash: &password_hash,
            full_name: &payload.full_name,
            avatar: payload.avatar.as_deref(),
            date_of_birth: payload.date_of_birth,
        },
    )
    .await?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(ServiceResponse::message(StatusCode::OK, "Register successfully"))
}
