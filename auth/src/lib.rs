//! Credential security library
//!
//! Provides the credential core used by the identity service:
//! - Password hashing (Argon2id, fixed cost parameters, `<salt>.<hash>` storage format)
//! - Access token issuance and validation (HS256 JWT, two-hour lifetime)
//! - Authentication coordination
//! - Stable error codes for every error crossing a layer boundary
//!
//! All components are stateless and safe to share between concurrent requests.
//! Each hash or verify call transiently allocates [`MEMORY_PER_CALL_BYTES`];
//! callers should bound how many run at once.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("Secret123").unwrap();
//! assert!(hasher.verify("Secret123", &hash));
//! assert!(!hasher.verify("secret123", &hash));
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{TokenIdentity, TokenIssuer, TokenSettings, TokenValidator};
//! use uuid::Uuid;
//!
//! let settings = TokenSettings::new(
//!     "secret_key_at_least_32_bytes_long!",
//!     "identity-service",
//!     "identity-clients",
//! )
//! .unwrap();
//!
//! let identity = TokenIdentity::new(Uuid::new_v4(), "a@b.com", "A B");
//! let token = TokenIssuer::new(&settings).issue(&identity).unwrap();
//! let claims = TokenValidator::new(&settings).validate(&token.access_token).unwrap();
//! assert_eq!(claims.exp - claims.iat, 7200);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, TokenIdentity, TokenSettings};
//! use uuid::Uuid;
//!
//! let settings = TokenSettings::new(
//!     "secret_key_at_least_32_bytes_long!",
//!     "identity-service",
//!     "identity-clients",
//! )
//! .unwrap();
//! let auth = Authenticator::new(&settings);
//!
//! // Register: hash password
//! let hash = auth.hash_password("Password123").unwrap();
//!
//! // Login: verify and issue token
//! let identity = TokenIdentity::new(Uuid::new_v4(), "alice@example.com", "Alice Liddell");
//! let token = auth.authenticate("Password123", &hash, &identity).unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&token.access_token).unwrap();
//! assert_eq!(claims.email, "alice@example.com");
//! ```

pub mod authenticator;
pub mod codes;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use codes::ErrorCode;
pub use jwt::IdentityClaims;
pub use jwt::IssuedToken;
pub use jwt::JwtError;
pub use jwt::TokenIdentity;
pub use jwt::TokenIssuer;
pub use jwt::TokenSettings;
pub use jwt::TokenValidator;
pub use jwt::TOKEN_LIFETIME_SECONDS;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::MEMORY_PER_CALL_BYTES;
