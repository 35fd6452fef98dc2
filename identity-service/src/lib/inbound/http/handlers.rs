use auth::ErrorCode;
use auth::JwtError;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::account::errors::AccountError;

pub mod current_account;
pub mod login;
pub mod register;
pub mod update_account;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// HTTP-facing failure. Every variant carries a stable error code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Details are logged, never returned to the client.
    InternalServerError(String),
    UnprocessableEntity(ApiErrorData),
    NotFound(ApiErrorData),
    Conflict(ApiErrorData),
    Unauthorized(ApiErrorData),
}

impl ApiError {
    pub fn unauthorized(code: &'static str, message: impl Into<String>) -> Self {
        ApiError::Unauthorized(ApiErrorData::new(code, message))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, data) = match self {
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorData::new(
                        "Server.Internal",
                        "An unexpected error occurred. Please try again later.",
                    ),
                )
            }
            ApiError::UnprocessableEntity(data) => (StatusCode::UNPROCESSABLE_ENTITY, data),
            ApiError::NotFound(data) => (StatusCode::NOT_FOUND, data),
            ApiError::Conflict(data) => (StatusCode::CONFLICT, data),
            ApiError::Unauthorized(data) => (StatusCode::UNAUTHORIZED, data),
        };

        (status, Json(ApiResponseBody::new(status, data))).into_response()
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        let data = ApiErrorData::from_error(&err);
        match err {
            AccountError::NotFound(_) => ApiError::NotFound(data),
            AccountError::EmailAlreadyExists(_) => ApiError::Conflict(data),
            AccountError::InvalidCredentials => ApiError::Unauthorized(data),
            AccountError::InvalidEmail(_)
            | AccountError::InvalidPassword(_)
            | AccountError::InvalidName(_) => ApiError::UnprocessableEntity(data),
            AccountError::CredentialProcessing(_)
            | AccountError::Token(_)
            | AccountError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<JwtError> for ApiError {
    fn from(err: JwtError) -> Self {
        if err.is_configuration() {
            return ApiError::InternalServerError(err.to_string());
        }
        ApiError::Unauthorized(ApiErrorData::from_error(&err))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub code: String,
    pub message: String,
}

impl ApiErrorData {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn from_error<E: ErrorCode + std::fmt::Display>(err: &E) -> Self {
        Self::new(err.code(), err.to_string())
    }
}
