pub mod claims;
pub mod errors;
pub mod issuer;
pub mod settings;
pub mod validator;

pub use claims::IdentityClaims;
pub use claims::TokenIdentity;
pub use claims::TOKEN_LIFETIME_SECONDS;
pub use errors::JwtError;
pub use issuer::IssuedToken;
pub use issuer::TokenIssuer;
pub use settings::TokenSettings;
pub use settings::MIN_SECRET_LEN;
pub use validator::TokenValidator;
