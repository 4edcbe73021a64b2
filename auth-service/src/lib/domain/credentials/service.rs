use std::sync::Arc;

use async_trait::async_trait;

use crate::credentials::errors::AuthError;
use crate::credentials::models::Credential;
use crate::credentials::models::SignupCommand;
use crate::credentials::models::Username;
use crate::credentials::ports::AuthServicePort;
use crate::credentials::ports::CredentialRepository;

/// Domain service implementation for credential operations.
///
/// Concrete implementation of AuthServicePort with dependency injection.
pub struct AuthService<CR>
where
    CR: CredentialRepository,
{
    repository: Arc<CR>,
    password_hasher: password::PasswordHasher,
}

impl<CR> AuthService<CR>
where
    CR: CredentialRepository,
{
    /// Create a new auth service with an injected repository.
    ///
    /// # Arguments
    /// * `repository` - Credential persistence implementation
    ///
    /// # Returns
    /// Configured auth service instance
    pub fn new(repository: Arc<CR>) -> Self {
        Self {
            repository,
            password_hasher: password::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<CR> AuthServicePort for AuthService<CR>
where
    CR: CredentialRepository,
{
    async fn signup(&self, command: SignupCommand) -> Result<(), AuthError> {
        if command.password.is_empty() {
            return Err(AuthError::EmptyPassword);
        }

        // Fast-path rejection only; the insert below is the authoritative
        // uniqueness check, so a concurrent signup racing past this point
        // still fails on the store's constraint.
        if self.repository.exists(&command.username).await? {
            return Err(AuthError::UsernameAlreadyExists(
                command.username.to_string(),
            ));
        }

        let password_hash = self.password_hasher.hash(&command.password)?;

        let credential = Credential {
            username: command.username,
            password_hash,
        };

        self.repository.insert(credential).await
    }

    async fn login(&self, username: &Username, password: &str) -> Result<Credential, AuthError> {
        let credential = self
            .repository
            .find(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let verified = self
            .password_hasher
            .verify(password, &credential.password_hash)?;

        if !verified {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(credential)
    }
}
