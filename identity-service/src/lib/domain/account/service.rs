use std::num::NonZeroUsize;
use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use tokio::sync::Semaphore;

use crate::account::errors::AccountError;
use crate::account::models::AuthSession;
use crate::account::models::EmailAddress;
use crate::account::models::LoginCommand;
use crate::account::models::Password;
use crate::account::models::RegisterCommand;
use crate::account::models::UpdateAccountCommand;
use crate::account::models::User;
use crate::account::models::UserId;
use crate::account::ports::AccountServicePort;
use crate::account::ports::UserRepository;

/// Well-formed stored hash that no password reproduces. Verified against when
/// the email is unknown so both login failure paths cost one full Argon2 run.
const DUMMY_PASSWORD_HASH: &str =
    "AAAAAAAAAAAAAAAAAAAAAA==.AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=";

/// Domain service implementation for account operations.
///
/// Password hashing and verification run on the blocking pool, at most
/// `max_concurrent_hashes` at a time.
pub struct AccountService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
    hashing_permits: Arc<Semaphore>,
}

impl<UR> AccountService<UR>
where
    UR: UserRepository,
{
    /// Create a new account service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Credential hasher and token issuer
    /// * `max_concurrent_hashes` - Hash/verify calls allowed in flight
    pub fn new(
        repository: Arc<UR>,
        authenticator: Arc<Authenticator>,
        max_concurrent_hashes: NonZeroUsize,
    ) -> Self {
        Self {
            repository,
            authenticator,
            hashing_permits: Arc::new(Semaphore::new(max_concurrent_hashes.get())),
        }
    }

    async fn hash_password(&self, password: Password) -> Result<String, AccountError> {
        let authenticator = Arc::clone(&self.authenticator);

        self.run_credential_work(move || authenticator.hash_password(password.as_str()))
            .await?
            .map_err(|e| AccountError::CredentialProcessing(e.to_string()))
    }

    async fn verify_password(
        &self,
        password: String,
        stored_hash: String,
    ) -> Result<bool, AccountError> {
        let authenticator = Arc::clone(&self.authenticator);

        self.run_credential_work(move || authenticator.verify_password(&password, &stored_hash))
            .await
    }

    /// Run CPU and memory heavy credential work on the blocking pool.
    ///
    /// The permit moves into the blocking task, so it is only released once
    /// the computation finishes even if the caller stops waiting.
    async fn run_credential_work<F, T>(&self, work: F) -> Result<T, AccountError>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let permit = Arc::clone(&self.hashing_permits)
            .acquire_owned()
            .await
            .map_err(|e| AccountError::CredentialProcessing(e.to_string()))?;

        tokio::task::spawn_blocking(move || {
            let _permit = permit;
            work()
        })
        .await
        .map_err(|e| AccountError::CredentialProcessing(e.to_string()))
    }
}

#[async_trait]
impl<UR> AccountServicePort for AccountService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<AuthSession, AccountError> {
        if self
            .repository
            .find_by_email(&command.email)
            .await?
            .is_some()
        {
            return Err(AccountError::EmailAlreadyExists(command.email.to_string()));
        }

        let password_hash = self.hash_password(command.password).await?;

        let user = User::new(
            command.first_name,
            command.last_name,
            command.email,
            password_hash,
        );
        let created_user = self.repository.create(user).await?;

        let token = self
            .authenticator
            .issue_token(&created_user.token_identity())?;

        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(AuthSession::new(token, &created_user))
    }

    async fn login(&self, command: LoginCommand) -> Result<AuthSession, AccountError> {
        let LoginCommand { email, password } = command;

        let user = match EmailAddress::new(email) {
            Ok(email) => self.repository.find_by_email(&email).await?,
            Err(_) => None,
        };

        let stored_hash = user
            .as_ref()
            .map(|user| user.password_hash.clone())
            .unwrap_or_else(|| DUMMY_PASSWORD_HASH.to_string());

        let verified = self.verify_password(password, stored_hash).await?;

        let user = match user {
            Some(user) if verified => user,
            _ => {
                tracing::info!("Login rejected");
                return Err(AccountError::InvalidCredentials);
            }
        };

        let token = self.authenticator.issue_token(&user.token_identity())?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(AuthSession::new(token, &user))
    }

    async fn get_account(&self, id: &UserId) -> Result<User, AccountError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AccountError::NotFound(id.to_string()))
    }

    async fn update_account(
        &self,
        id: &UserId,
        command: UpdateAccountCommand,
    ) -> Result<User, AccountError> {
        let mut user = self.get_account(id).await?;

        if let Some(email) = command.email.as_ref().filter(|email| **email != user.email) {
            if let Some(existing) = self.repository.find_by_email(email).await? {
                if existing.id != user.id {
                    return Err(AccountError::EmailAlreadyExists(email.to_string()));
                }
            }
        }

        let password_changed = command.password.is_some();
        let password_hash = match command.password {
            Some(password) => Some(self.hash_password(password).await?),
            None => None,
        };

        user.update_info(
            command.first_name,
            command.last_name,
            command.email,
            password_hash,
        );
        let updated_user = self.repository.update(user).await?;

        tracing::info!(user_id = %updated_user.id, password_changed, "Account updated");

        Ok(updated_user)
    }
}
