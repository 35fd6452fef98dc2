use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::current_account::AccountResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::account::errors::AccountError;
use crate::account::models::EmailAddress;
use crate::account::models::Password;
use crate::account::models::PersonName;
use crate::account::models::UpdateAccountCommand;
use crate::inbound::http::middleware::AuthenticatedAccount;
use crate::inbound::http::router::AppState;

/// HTTP request body for changing the caller's account (raw JSON)
#[derive(Deserialize)]
pub struct UpdateAccountRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UpdateAccountRequest {
    fn try_into_command(self) -> Result<UpdateAccountCommand, AccountError> {
        // Validation happens here - errors are automatically converted via #[from]
        let first_name = self.first_name.map(PersonName::first).transpose()?;
        let last_name = self.last_name.map(PersonName::last).transpose()?;
        let email = self.email.map(EmailAddress::new).transpose()?;
        let password = self.password.map(Password::new).transpose()?;

        Ok(UpdateAccountCommand {
            first_name,
            last_name,
            email,
            password,
        })
    }
}

pub async fn update_account(
    State(state): State<AppState>,
    Extension(account): Extension<AuthenticatedAccount>,
    Json(body): Json<UpdateAccountRequest>,
) -> Result<ApiSuccess<AccountResponseData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .account_service
        .update_account(&account.user_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(password: Option<&str>) -> UpdateAccountRequest {
        UpdateAccountRequest {
            first_name: None,
            last_name: Some(" Byron ".to_string()),
            email: None,
            password: password.map(str::to_string),
        }
    }

    #[test]
    fn test_request_into_command() {
        let command = request(Some("Changed456")).try_into_command().unwrap();

        assert!(command.first_name.is_none());
        assert_eq!(command.last_name.unwrap().as_str(), "Byron");
        assert!(command.email.is_none());
        assert_eq!(command.password.unwrap().as_str(), "Changed456");
    }

    #[test]
    fn test_request_rejects_weak_password() {
        let result = request(Some("weak")).try_into_command();
        assert!(matches!(result, Err(AccountError::InvalidPassword(_))));
    }
}
