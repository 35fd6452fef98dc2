use async_trait::async_trait;

use crate::account::errors::AccountError;
use crate::account::models::AuthSession;
use crate::account::models::EmailAddress;
use crate::account::models::LoginCommand;
use crate::account::models::RegisterCommand;
use crate::account::models::UpdateAccountCommand;
use crate::account::models::User;
use crate::account::models::UserId;

/// Port for account domain service operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new user and sign them in.
    ///
    /// # Arguments
    /// * `command` - Validated names, email and password
    ///
    /// # Returns
    /// Session with an access token for the new user
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `CredentialProcessing` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterCommand) -> Result<AuthSession, AccountError>;

    /// Authenticate with email and password.
    ///
    /// # Arguments
    /// * `command` - Raw email and password
    ///
    /// # Returns
    /// Session with an access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email, malformed email or wrong password
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, command: LoginCommand) -> Result<AuthSession, AccountError>;

    /// Retrieve an account by identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_account(&self, id: &UserId) -> Result<User, AccountError>;

    /// Change names, email or password of an existing account.
    ///
    /// A new password is hashed the same way as on registration.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `EmailAlreadyExists` - Email belongs to another user
    /// * `CredentialProcessing` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn update_account(
        &self,
        id: &UserId,
        command: UpdateAccountCommand,
    ) -> Result<User, AccountError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, AccountError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AccountError>;

    /// Retrieve user by normalised email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, AccountError>;

    /// Overwrite a stored user.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `EmailAlreadyExists` - Email belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, user: User) -> Result<User, AccountError>;
}
