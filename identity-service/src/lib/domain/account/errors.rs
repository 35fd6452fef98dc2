use auth::ErrorCode;
use auth::JwtError;
use thiserror::Error;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email must not be empty")]
    Empty,

    #[error("Invalid email format")]
    InvalidFormat,

    #[error("Email too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for Password policy failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password must not be empty")]
    Empty,

    #[error("Password too short: minimum {min} characters")]
    TooShort { min: usize },

    #[error("Password too long: maximum {max} characters")]
    TooLong { max: usize },

    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,

    #[error("Password must contain at least one digit")]
    MissingDigit,
}

/// Error for first/last name validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("First name is required")]
    FirstNameRequired,

    #[error("Last name is required")]
    LastNameRequired,

    #[error("First name too long: maximum {max} characters")]
    FirstNameTooLong { max: usize },

    #[error("Last name too long: maximum {max} characters")]
    LastNameTooLong { max: usize },
}

/// Top-level error for all account operations
#[derive(Debug, Clone, Error)]
pub enum AccountError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid password: {0}")]
    InvalidPassword(#[from] PasswordPolicyError),

    #[error("Invalid name: {0}")]
    InvalidName(#[from] NameError),

    // Domain-level errors
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    /// Unknown email and wrong password both end up here.
    #[error("Invalid email or password")]
    InvalidCredentials,

    // Infrastructure errors
    #[error("Credential processing failed: {0}")]
    CredentialProcessing(String),

    #[error("Token error: {0}")]
    Token(#[from] JwtError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl ErrorCode for EmailError {
    fn code(&self) -> &'static str {
        match self {
            EmailError::Empty => "Email.Empty",
            EmailError::InvalidFormat => "Email.InvalidFormat",
            EmailError::TooLong { .. } => "Email.TooLong",
        }
    }
}

impl ErrorCode for PasswordPolicyError {
    fn code(&self) -> &'static str {
        match self {
            PasswordPolicyError::Empty => "Password.Empty",
            PasswordPolicyError::TooShort { .. } => "Password.TooShort",
            PasswordPolicyError::TooLong { .. } => "Password.TooLong",
            PasswordPolicyError::MissingUppercase => "Password.MissingUppercase",
            PasswordPolicyError::MissingDigit => "Password.MissingDigit",
        }
    }
}

impl ErrorCode for NameError {
    fn code(&self) -> &'static str {
        match self {
            NameError::FirstNameRequired => "User.FirstNameRequired",
            NameError::LastNameRequired => "User.LastNameRequired",
            NameError::FirstNameTooLong { .. } => "User.FirstNameTooLong",
            NameError::LastNameTooLong { .. } => "User.LastNameTooLong",
        }
    }
}

impl ErrorCode for AccountError {
    fn code(&self) -> &'static str {
        match self {
            AccountError::InvalidEmail(e) => e.code(),
            AccountError::InvalidPassword(e) => e.code(),
            AccountError::InvalidName(e) => e.code(),
            AccountError::NotFound(_) => "User.NotFound",
            AccountError::EmailAlreadyExists(_) => "User.EmailAlreadyExists",
            AccountError::InvalidCredentials => "User.InvalidCredentials",
            AccountError::CredentialProcessing(_) => "Auth.CredentialProcessingFailed",
            AccountError::Token(e) => e.code(),
            AccountError::DatabaseError(_) => "Database.Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_pass_through_validation_errors() {
        let err: AccountError = PasswordPolicyError::MissingDigit.into();
        assert_eq!(err.code(), "Password.MissingDigit");

        let err: AccountError = EmailError::InvalidFormat.into();
        assert_eq!(err.code(), "Email.InvalidFormat");

        let err: AccountError = NameError::LastNameRequired.into();
        assert_eq!(err.code(), "User.LastNameRequired");
    }

    #[test]
    fn test_invalid_credentials_message_is_generic() {
        let err = AccountError::InvalidCredentials;
        assert_eq!(err.code(), "User.InvalidCredentials");
        assert_eq!(err.to_string(), "Invalid email or password");
    }
}
