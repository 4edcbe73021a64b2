use async_trait::async_trait;

use crate::credentials::errors::AuthError;
use crate::credentials::models::Credential;
use crate::credentials::models::SignupCommand;
use crate::credentials::models::Username;

/// Port for credential domain service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new credential.
    ///
    /// Hashes the password and persists the (username, hash) pair.
    ///
    /// # Arguments
    /// * `command` - Validated command containing username and password
    ///
    /// # Errors
    /// * `EmptyPassword` - Password is empty
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn signup(&self, command: SignupCommand) -> Result<(), AuthError>;

    /// Verify a username/password pair against the store.
    ///
    /// # Arguments
    /// * `username` - Username to look up
    /// * `password` - Plaintext password to verify
    ///
    /// # Returns
    /// The stored credential on success
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    ///   (deliberately the same error for both)
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, username: &Username, password: &str) -> Result<Credential, AuthError>;
}

/// Persistence operations for the credential store.
#[async_trait]
pub trait CredentialRepository: Send + Sync + 'static {
    /// Check whether a username is already registered.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn exists(&self, username: &Username) -> Result<bool, AuthError>;

    /// Persist a new credential.
    ///
    /// The store's unique constraint is the authority on duplicates; two
    /// concurrent inserts of one username must not both succeed.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn insert(&self, credential: Credential) -> Result<(), AuthError>;

    /// Retrieve a credential by username.
    ///
    /// # Returns
    /// Optional credential (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find(&self, username: &Username) -> Result<Option<Credential>, AuthError>;
}
