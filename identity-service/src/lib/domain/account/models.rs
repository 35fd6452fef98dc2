use std::fmt;
use std::str::FromStr;

use auth::IssuedToken;
use auth::TokenIdentity;
use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::account::errors::EmailError;
use crate::account::errors::NameError;
use crate::account::errors::PasswordPolicyError;

/// User aggregate entity.
///
/// Represents a registered account. `password_hash` is the opaque stored hash
/// produced by the credential hasher and is never exposed outside the domain.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Create a new user with a fresh identifier.
    ///
    /// # Arguments
    /// * `first_name` - Validated first name
    /// * `last_name` - Validated last name
    /// * `email` - Validated email address
    /// * `password_hash` - Stored hash of the user's password
    pub fn new(
        first_name: PersonName,
        last_name: PersonName,
        email: EmailAddress,
        password_hash: String,
    ) -> Self {
        Self {
            id: UserId::new(),
            first_name,
            last_name,
            email,
            password_hash,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Full name, `"<first> <last>"`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Apply changed profile fields and stamp `updated_at`.
    ///
    /// `password_hash` is the already hashed replacement password, if any.
    pub fn update_info(
        &mut self,
        first_name: Option<PersonName>,
        last_name: Option<PersonName>,
        email: Option<EmailAddress>,
        password_hash: Option<String>,
    ) {
        if let Some(first_name) = first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = last_name {
            self.last_name = last_name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(password_hash) = password_hash {
            self.password_hash = password_hash;
        }
        self.updated_at = Some(Utc::now());
    }

    /// Identity asserted by access tokens issued for this user.
    pub fn token_identity(&self) -> TokenIdentity {
        TokenIdentity::new(self.id.0, self.email.as_str(), self.display_name())
    }
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    ///
    /// # Returns
    /// UserId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// First or last name of a person.
///
/// Trimmed, non-empty, at most 100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    const MAX_LENGTH: usize = 100;

    /// Validate a first name.
    ///
    /// # Errors
    /// * `FirstNameRequired` - Blank input
    /// * `FirstNameTooLong` - Longer than 100 characters
    pub fn first(name: String) -> Result<Self, NameError> {
        Self::validated(name).map_err(|too_long| {
            if too_long {
                NameError::FirstNameTooLong {
                    max: Self::MAX_LENGTH,
                }
            } else {
                NameError::FirstNameRequired
            }
        })
    }

    /// Validate a last name.
    ///
    /// # Errors
    /// * `LastNameRequired` - Blank input
    /// * `LastNameTooLong` - Longer than 100 characters
    pub fn last(name: String) -> Result<Self, NameError> {
        Self::validated(name).map_err(|too_long| {
            if too_long {
                NameError::LastNameTooLong {
                    max: Self::MAX_LENGTH,
                }
            } else {
                NameError::LastNameRequired
            }
        })
    }

    // Err(true) when too long, Err(false) when blank.
    fn validated(name: String) -> Result<Self, bool> {
        let name = name.trim();
        if name.is_empty() {
            Err(false)
        } else if name.chars().count() > Self::MAX_LENGTH {
            Err(true)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Normalised to trimmed lower case and validated with an RFC 5322 parser.
/// The domain part must contain a dot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    const MAX_LENGTH: usize = 255;

    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `Empty` - Blank input
    /// * `TooLong` - Longer than 255 characters
    /// * `InvalidFormat` - Not a valid address
    pub fn new(email: String) -> Result<Self, EmailError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(EmailError::Empty);
        }

        let length = email.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        let parsed =
            email_address::EmailAddress::from_str(&email).map_err(|_| EmailError::InvalidFormat)?;
        if !parsed.domain().contains('.') {
            return Err(EmailError::InvalidFormat);
        }

        Ok(EmailAddress(email))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password that satisfies the password policy.
///
/// 8 to 100 characters with at least one uppercase letter and one digit.
/// Never printed by `Debug`.
#[derive(Clone)]
pub struct Password(String);

impl Password {
    pub const MIN_LENGTH: usize = 8;
    pub const MAX_LENGTH: usize = 100;

    /// Validate a plaintext password against the policy.
    ///
    /// # Errors
    /// * `Empty` - Blank input
    /// * `TooShort` / `TooLong` - Outside 8..=100 characters
    /// * `MissingUppercase` - No uppercase letter
    /// * `MissingDigit` - No digit
    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        if password.trim().is_empty() {
            return Err(PasswordPolicyError::Empty);
        }

        let length = password.chars().count();
        if length < Self::MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: Self::MIN_LENGTH,
            });
        }
        if length > Self::MAX_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if !password.chars().any(char::is_uppercase) {
            return Err(PasswordPolicyError::MissingUppercase);
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(PasswordPolicyError::MissingDigit);
        }

        Ok(Self(password))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password([redacted])")
    }
}

/// Command to register a new user with domain types
#[derive(Debug)]
pub struct RegisterCommand {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: EmailAddress,
    pub password: Password,
}

impl RegisterCommand {
    /// Construct a new register command.
    ///
    /// # Arguments
    /// * `first_name` - Validated first name
    /// * `last_name` - Validated last name
    /// * `email` - Validated email address
    /// * `password` - Policy-checked password (hashed by the service)
    pub fn new(
        first_name: PersonName,
        last_name: PersonName,
        email: EmailAddress,
        password: Password,
    ) -> Self {
        Self {
            first_name,
            last_name,
            email,
            password,
        }
    }
}

/// Command to log in.
///
/// Fields stay raw: validation failures on login must look exactly like a
/// wrong password.
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl LoginCommand {
    pub fn new(email: String, password: String) -> Self {
        Self { email, password }
    }
}

impl fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCommand")
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// Command to change the caller's own account. `None` leaves a field as is.
#[derive(Debug, Default)]
pub struct UpdateAccountCommand {
    pub first_name: Option<PersonName>,
    pub last_name: Option<PersonName>,
    pub email: Option<EmailAddress>,
    pub password: Option<Password>,
}

/// Outcome of a successful registration or login.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: IssuedToken,
    pub user_id: UserId,
    pub email: EmailAddress,
}

impl AuthSession {
    pub fn new(token: IssuedToken, user: &User) -> Self {
        Self {
            token,
            user_id: user.id,
            email: user.email.clone(),
        }
    }
}
