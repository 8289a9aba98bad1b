use axum::{extract::State, Json};
use validator::Validate;

use super::extract::ApiJson;
use crate::auth::verify_password;
use crate::db::repository::admin;
use crate::error::{AppError, AppResult};
use crate::models::{LoginRequest, LoginResponse};
use crate::AppState;

const INVALID_CREDENTIALS: &str = "Invalid Credentials";

/// Check an administrator's credentials
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    req.validate()?;

    let Some(user) = admin::find_by_email(&state.db, &req.email).await? else {
        tracing::info!("Login failed: unknown user {}", req.email);
        return Err(AppError::unauthorized(INVALID_CREDENTIALS));
    };

    if !verify_password(&req.password, &user.password_hash) {
        tracing::info!("Login failed: wrong password for {}", req.email);
        return Err(AppError::unauthorized(INVALID_CREDENTIALS));
    }

    tracing::info!("Login successful for {}", user.email);
    Ok(Json(LoginResponse { user: user.into() }))
}
