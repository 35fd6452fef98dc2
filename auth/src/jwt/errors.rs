use thiserror::Error;

use crate::codes::ErrorCode;

/// Error type for JWT operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Token signing secret is missing")]
    MissingSecret,

    #[error("Token signing secret too short: minimum {min} bytes, got {actual}")]
    SecretTooShort { min: usize, actual: usize },

    #[error("Missing token setting: {0}")]
    MissingSetting(&'static str),

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token is not valid yet")]
    NotYetValid,

    #[error("Token issuer is invalid")]
    InvalidIssuer,

    #[error("Token audience is invalid")]
    InvalidAudience,

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is malformed: {0}")]
    Malformed(String),
}

impl JwtError {
    /// True for errors raised while building [`TokenSettings`](super::TokenSettings).
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            JwtError::MissingSecret | JwtError::SecretTooShort { .. } | JwtError::MissingSetting(_)
        )
    }
}

impl ErrorCode for JwtError {
    fn code(&self) -> &'static str {
        match self {
            JwtError::MissingSecret => "Token.MissingSecret",
            JwtError::SecretTooShort { .. } => "Token.SecretTooShort",
            JwtError::MissingSetting(_) => "Token.MissingSetting",
            JwtError::EncodingFailed(_) => "Token.EncodingFailed",
            JwtError::Expired => "Token.Expired",
            JwtError::NotYetValid => "Token.NotYetValid",
            JwtError::InvalidIssuer => "Token.InvalidIssuer",
            JwtError::InvalidAudience => "Token.InvalidAudience",
            JwtError::InvalidSignature => "Token.InvalidSignature",
            JwtError::Malformed(_) => "Token.Malformed",
        }
    }
}

impl From<jsonwebtoken::errors::Error> for JwtError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::ExpiredSignature => JwtError::Expired,
            ErrorKind::ImmatureSignature => JwtError::NotYetValid,
            ErrorKind::InvalidIssuer => JwtError::InvalidIssuer,
            ErrorKind::InvalidAudience => JwtError::InvalidAudience,
            ErrorKind::InvalidSignature => JwtError::InvalidSignature,
            _ => JwtError::Malformed(err.to_string()),
        }
    }
}
