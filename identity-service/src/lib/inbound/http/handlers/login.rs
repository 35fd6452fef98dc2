use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::account::models::AuthSession;
use crate::account::models::LoginCommand;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<SessionResponseData>, ApiError> {
    state
        .account_service
        .login(LoginCommand::new(body.email, body.password))
        .await
        .map_err(ApiError::from)
        .map(|ref session| ApiSuccess::new(StatusCode::OK, session.into()))
}

#[derive(Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionResponseData {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user_id: String,
    pub email: String,
}

impl From<&AuthSession> for SessionResponseData {
    fn from(session: &AuthSession) -> Self {
        Self {
            token: session.token.access_token.clone(),
            expires_at: session.token.expires_at,
            user_id: session.user_id.to_string(),
            email: session.email.as_str().to_string(),
        }
    }
}
