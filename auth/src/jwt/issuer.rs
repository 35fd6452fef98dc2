use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::IdentityClaims;
use super::claims::TokenIdentity;
use super::errors::JwtError;
use super::settings::TokenSettings;

/// Signed access token handed to the client.
#[derive(Clone)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

impl fmt::Debug for IssuedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssuedToken")
            .field("access_token", &"[redacted]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Issues HS256-signed access tokens.
///
/// Holds only the derived signing key; the raw secret stays in [`TokenSettings`].
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    issuer: String,
    audience: String,
}

impl TokenIssuer {
    /// Create a new issuer from validated settings.
    pub fn new(settings: &TokenSettings) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(settings.secret()),
            issuer: settings.issuer().to_string(),
            audience: settings.audience().to_string(),
        }
    }

    /// Issue a token for an authenticated identity, valid for two hours.
    ///
    /// # Arguments
    /// * `identity` - Identity to assert
    ///
    /// # Returns
    /// Signed token and its expiration
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, identity: &TokenIdentity) -> Result<IssuedToken, JwtError> {
        self.issue_at(identity, Utc::now())
    }

    /// Issue a token as if at `issued_at`.
    pub fn issue_at(
        &self,
        identity: &TokenIdentity,
        issued_at: DateTime<Utc>,
    ) -> Result<IssuedToken, JwtError> {
        let claims =
            IdentityClaims::for_identity(identity, &self.issuer, &self.audience, issued_at);
        let expires_at = claims
            .expires_at()
            .ok_or_else(|| JwtError::EncodingFailed("Expiration out of range".to_string()))?;

        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))?;

        Ok(IssuedToken {
            access_token,
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use uuid::Uuid;

    use super::*;

    fn settings() -> TokenSettings {
        TokenSettings::new(
            "test_secret_key_at_least_32_bytes!",
            "identity-service",
            "identity-clients",
        )
        .unwrap()
    }

    fn identity() -> TokenIdentity {
        TokenIdentity::new(
            Uuid::parse_str("11111111-1111-1111-1111-111111111111").unwrap(),
            "a@b.com",
            "A B",
        )
    }

    fn segments(token: &str) -> (serde_json::Value, serde_json::Value) {
        let parts: Vec<&str> = token.split('.').collect();
        assert_eq!(parts.len(), 3);

        let header = serde_json::from_slice(&URL_SAFE_NO_PAD.decode(parts[0]).unwrap()).unwrap();
        let payload = serde_json::from_slice(&URL_SAFE_NO_PAD.decode(parts[1]).unwrap()).unwrap();
        (header, payload)
    }

    #[test]
    fn test_issue_token_layout() {
        let issuer = TokenIssuer::new(&settings());

        let token = issuer.issue(&identity()).expect("Failed to issue token");
        let (header, payload) = segments(&token.access_token);

        assert_eq!(header["alg"], "HS256");
        assert_eq!(header["typ"], "JWT");
        assert_eq!(payload["sub"], "11111111-1111-1111-1111-111111111111");
        assert_eq!(payload["email"], "a@b.com");
        assert_eq!(payload["name"], "A B");
        assert_eq!(payload["iss"], "identity-service");
        assert_eq!(payload["aud"], "identity-clients");
        assert_eq!(
            payload["exp"].as_i64().unwrap() - payload["iat"].as_i64().unwrap(),
            7200
        );
        assert_eq!(payload["exp"].as_i64().unwrap(), token.expires_at.timestamp());
    }

    #[test]
    fn test_consecutive_tokens_differ() {
        let issuer = TokenIssuer::new(&settings());
        let issued_at = Utc::now();

        let first = issuer.issue_at(&identity(), issued_at).unwrap();
        let second = issuer.issue_at(&identity(), issued_at).unwrap();

        assert_ne!(first.access_token, second.access_token);

        let (_, first_payload) = segments(&first.access_token);
        let (_, second_payload) = segments(&second.access_token);
        assert_ne!(first_payload["jti"], second_payload["jti"]);
    }

    #[test]
    fn test_debug_redacts_token() {
        let issuer = TokenIssuer::new(&settings());
        let token = issuer.issue(&identity()).unwrap();

        let debug = format!("{:?}", token);
        assert!(!debug.contains(&token.access_token));
    }
}
