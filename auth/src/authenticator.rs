use crate::codes::ErrorCode;
use crate::jwt::IdentityClaims;
use crate::jwt::IssuedToken;
use crate::jwt::JwtError;
use crate::jwt::TokenIdentity;
use crate::jwt::TokenIssuer;
use crate::jwt::TokenSettings;
use crate::jwt::TokenValidator;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and JWT generation.
///
/// Stateless apart from the signing keys; share it behind an `Arc` across
/// request handlers.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
    token_validator: TokenValidator,
}

/// Authentication operation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthenticationError {
    /// Wrong password or unusable stored hash. The two are deliberately
    /// indistinguishable.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl ErrorCode for AuthenticationError {
    fn code(&self) -> &'static str {
        match self {
            AuthenticationError::InvalidCredentials => "User.InvalidCredentials",
            AuthenticationError::JwtError(e) => e.code(),
        }
    }
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `settings` - Validated token settings
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn new(settings: &TokenSettings) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_issuer: TokenIssuer::new(settings),
            token_validator: TokenValidator::new(settings),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a password against a stored hash.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and issue an access token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `identity` - Identity the token is issued for on success
    ///
    /// # Returns
    /// Issued access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match or stored hash is unusable
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        identity: &TokenIdentity,
    ) -> Result<IssuedToken, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.token_issuer.issue(identity)?)
    }

    /// Issue a token without password verification.
    ///
    /// For identities that are already authentic, e.g. a freshly registered user.
    pub fn issue_token(&self, identity: &TokenIdentity) -> Result<IssuedToken, JwtError> {
        self.token_issuer.issue(identity)
    }

    /// Validate and decode an access token.
    pub fn validate_token(&self, token: &str) -> Result<IdentityClaims, JwtError> {
        self.token_validator.validate(token)
    }
}
