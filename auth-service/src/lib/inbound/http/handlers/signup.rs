use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::credentials::errors::UsernameError;
use crate::credentials::models::SignupCommand;
use crate::credentials::models::Username;
use crate::credentials::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequestBody>,
) -> Result<ApiSuccess, ApiError> {
    state
        .auth_service
        .signup(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|()| {
            ApiSuccess::new(
                StatusCode::CREATED,
                "User registered successfully".to_string(),
            )
        })
}

/// HTTP request body for registering a credential (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignupRequestBody {
    username: String,
    password: String,
}

impl SignupRequestBody {
    fn try_into_command(self) -> Result<SignupCommand, UsernameError> {
        let username = Username::new(self.username)?;
        Ok(SignupCommand::new(username, self.password))
    }
}

impl From<UsernameError> for ApiError {
    fn from(err: UsernameError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
