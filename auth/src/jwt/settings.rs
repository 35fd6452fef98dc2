use std::fmt;

use zeroize::Zeroizing;

use super::errors::JwtError;

/// Minimum HMAC-SHA256 key length in bytes (256 bits).
pub const MIN_SECRET_LEN: usize = 32;

/// Immutable token configuration: signing secret, issuer and audience.
///
/// Built once at startup. Construction fails on a missing or short secret so a
/// process can never run with a weak or absent signing key.
#[derive(Clone)]
pub struct TokenSettings {
    secret: Zeroizing<Vec<u8>>,
    issuer: String,
    audience: String,
}

impl TokenSettings {
    /// Validate and build token settings.
    ///
    /// # Arguments
    /// * `secret` - HMAC signing secret
    /// * `issuer` - Value of the `iss` claim
    /// * `audience` - Value of the `aud` claim
    ///
    /// # Errors
    /// * `MissingSecret` - Secret is empty
    /// * `SecretTooShort` - Secret is shorter than [`MIN_SECRET_LEN`] bytes
    /// * `MissingSetting` - Issuer or audience is blank
    pub fn new(
        secret: impl Into<Vec<u8>>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Result<Self, JwtError> {
        let secret = Zeroizing::new(secret.into());
        if secret.is_empty() {
            return Err(JwtError::MissingSecret);
        }
        if secret.len() < MIN_SECRET_LEN {
            return Err(JwtError::SecretTooShort {
                min: MIN_SECRET_LEN,
                actual: secret.len(),
            });
        }

        let issuer = issuer.into();
        if issuer.trim().is_empty() {
            return Err(JwtError::MissingSetting("issuer"));
        }

        let audience = audience.into();
        if audience.trim().is_empty() {
            return Err(JwtError::MissingSetting("audience"));
        }

        Ok(Self {
            secret,
            issuer,
            audience,
        })
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub(crate) fn secret(&self) -> &[u8] {
        &self.secret
    }
}

impl fmt::Debug for TokenSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSettings")
            .field("secret", &"[redacted]")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .finish()
    }
}
