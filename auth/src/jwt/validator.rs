use jsonwebtoken::decode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::Validation;

use super::claims::IdentityClaims;
use super::errors::JwtError;
use super::settings::TokenSettings;

/// Validates access tokens produced by [`TokenIssuer`](super::TokenIssuer).
///
/// Accepts HS256 only. Signature, issuer, audience, `exp` and `nbf` are all
/// checked, with no clock leeway.
pub struct TokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenValidator {
    pub fn new(settings: &TokenSettings) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[settings.issuer()]);
        validation.set_audience(&[settings.audience()]);
        validation.set_required_spec_claims(&["exp", "nbf", "iss", "aud", "sub"]);
        validation.validate_nbf = true;
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(settings.secret()),
            validation,
        }
    }

    /// Decode and validate an access token.
    ///
    /// # Arguments
    /// * `token` - Compact JWT string
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `Expired` - Current time is past `exp`
    /// * `NotYetValid` - Current time is before `nbf`
    /// * `InvalidIssuer` / `InvalidAudience` - Claim does not match the settings
    /// * `InvalidSignature` - Signed with another key
    /// * `Malformed` - Anything else (bad encoding, missing claim, wrong algorithm)
    pub fn validate(&self, token: &str) -> Result<IdentityClaims, JwtError> {
        let token_data = decode::<IdentityClaims>(token, &self.decoding_key, &self.validation)?;
        Ok(token_data.claims)
    }
}
