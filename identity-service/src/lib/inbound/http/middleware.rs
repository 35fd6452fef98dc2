use auth::ErrorCode;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use super::handlers::ApiError;
use crate::account::models::UserId;
use crate::inbound::http::router::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Identity of the caller, placed in request extensions once the bearer token checks out.
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount {
    pub user_id: UserId,
    pub email: String,
}

/// Middleware that validates the bearer token and adds the caller to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&req)?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(code = e.code(), "Token validation failed: {}", e);
        ApiError::from(e)
    })?;

    let user_id = claims.subject_id().map(UserId).map_err(|e| {
        tracing::warn!("Token subject is not a user id: {}", e);
        ApiError::from(e)
    })?;

    req.extensions_mut().insert(AuthenticatedAccount {
        user_id,
        email: claims.email,
    });

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, ApiError> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::unauthorized("Auth.MissingToken", "Missing Authorization header"))?;

    let value = value.to_str().map_err(|_| {
        ApiError::unauthorized("Auth.InvalidHeader", "Invalid Authorization header")
    })?;

    value
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            ApiError::unauthorized(
                "Auth.InvalidHeader",
                "Invalid Authorization header format. Expected: Bearer <token>",
            )
        })
}
