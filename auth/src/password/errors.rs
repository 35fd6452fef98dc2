use thiserror::Error;

use crate::codes::ErrorCode;

/// Error type for password operations.
///
/// Verification has no error arm: a mismatch and a malformed stored hash are
/// both reported as `false` by [`PasswordHasher::verify`](super::PasswordHasher::verify).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}

impl ErrorCode for PasswordError {
    fn code(&self) -> &'static str {
        match self {
            PasswordError::HashingFailed(_) => "Password.HashingFailed",
        }
    }
}
