use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::credentials::models::Username;
use crate::credentials::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess, ApiError> {
    // An empty username cannot be registered, so it fails the same way an
    // unknown one does. Keeping the 401 here avoids a distinguishable
    // response shape for probing callers.
    let username = Username::new(body.username)
        .map_err(|_| ApiError::Unauthorized("Invalid username or password".to_string()))?;

    let credential = state
        .auth_service
        .login(&username, &body.password)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        format!("Welcome, {}!", credential.username),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}
