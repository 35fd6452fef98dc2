use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::errors::JwtError;

/// Lifetime of an issued token.
pub const TOKEN_LIFETIME_SECONDS: i64 = 2 * 60 * 60;

/// Identity an access token is issued for.
///
/// The caller has already authenticated this identity; the issuer trusts it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenIdentity {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
}

impl TokenIdentity {
    pub fn new(id: Uuid, email: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            display_name: display_name.into(),
        }
    }
}

/// Access token payload.
///
/// Standard RFC 7519 claims plus `email` and `name`. Every field is required,
/// a token missing one of them does not decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdentityClaims {
    /// Subject (user identifier)
    pub sub: String,

    pub email: String,

    /// Display name
    pub name: String,

    /// JWT ID, fresh for every issued token
    pub jti: String,

    pub iss: String,

    pub aud: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Not before (Unix timestamp)
    pub nbf: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl IdentityClaims {
    /// Build claims for an identity issued at `issued_at`.
    ///
    /// # Arguments
    /// * `identity` - Authenticated identity
    /// * `issuer` - `iss` claim
    /// * `audience` - `aud` claim
    /// * `issued_at` - Issuance instant; `exp` is this plus [`TOKEN_LIFETIME_SECONDS`]
    pub fn for_identity(
        identity: &TokenIdentity,
        issuer: &str,
        audience: &str,
        issued_at: DateTime<Utc>,
    ) -> Self {
        let expiration = issued_at + Duration::seconds(TOKEN_LIFETIME_SECONDS);

        Self {
            sub: identity.id.to_string(),
            email: identity.email.clone(),
            name: identity.display_name.clone(),
            jti: Uuid::new_v4().to_string(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            iat: issued_at.timestamp(),
            nbf: issued_at.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Parse the subject back into a user identifier.
    ///
    /// # Errors
    /// * `Malformed` - `sub` is not a UUID
    pub fn subject_id(&self) -> Result<Uuid, JwtError> {
        Uuid::parse_str(&self.sub).map_err(|e| JwtError::Malformed(format!("Invalid subject: {}", e)))
    }

    /// Expiration as a timestamp.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> TokenIdentity {
        TokenIdentity::new(
            Uuid::parse_str("11111111-1111-1111-1111-111111111111").unwrap(),
            "a@b.com",
            "A B",
        )
    }

    #[test]
    fn test_for_identity() {
        let issued_at = Utc::now();
        let claims = IdentityClaims::for_identity(&identity(), "issuer", "audience", issued_at);

        assert_eq!(claims.sub, "11111111-1111-1111-1111-111111111111");
        assert_eq!(claims.email, "a@b.com");
        assert_eq!(claims.name, "A B");
        assert_eq!(claims.iss, "issuer");
        assert_eq!(claims.aud, "audience");
        assert_eq!(claims.iat, issued_at.timestamp());
        assert_eq!(claims.nbf, claims.iat);
        assert_eq!(claims.exp - claims.iat, 7200);
        assert!(Uuid::parse_str(&claims.jti).is_ok());
    }

    #[test]
    fn test_fresh_jti_per_claim_set() {
        let issued_at = Utc::now();
        let first = IdentityClaims::for_identity(&identity(), "issuer", "audience", issued_at);
        let second = IdentityClaims::for_identity(&identity(), "issuer", "audience", issued_at);

        assert_ne!(first.jti, second.jti);
        assert_eq!(first.sub, second.sub);
        assert_eq!(first.exp, second.exp);
    }

    #[test]
    fn test_subject_id() {
        let claims = IdentityClaims::for_identity(&identity(), "issuer", "audience", Utc::now());
        assert_eq!(claims.subject_id().unwrap(), identity().id);

        let mut broken = claims.clone();
        broken.sub = "not-a-uuid".to_string();
        assert!(matches!(broken.subject_id(), Err(JwtError::Malformed(_))));
    }

    #[test]
    fn test_serialized_claim_names() {
        let claims = IdentityClaims::for_identity(&identity(), "issuer", "audience", Utc::now());
        let json = serde_json::to_value(&claims).unwrap();

        for name in ["sub", "email", "name", "jti", "iss", "aud", "iat", "nbf", "exp"] {
            assert!(json.get(name).is_some(), "missing claim {name}");
        }
    }
}
