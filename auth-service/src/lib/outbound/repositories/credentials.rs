use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use sqlx::SqlitePool;

use crate::credentials::errors::AuthError;
use crate::credentials::models::Credential;
use crate::credentials::models::Username;
use crate::credentials::ports::CredentialRepository;

/// Credential store backed by a single SQLite table.
///
/// The pool hands out one connection per query and returns it when the
/// future completes, so no handle outlives its request. The UNIQUE
/// constraint on `username` is the authority on uniqueness; concurrent
/// inserts of the same name serialize on it and exactly one succeeds.
pub struct SqliteCredentialRepository {
    pool: SqlitePool,
}

impl SqliteCredentialRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the schema if absent.
    ///
    /// Called once from `main` before the server starts accepting
    /// requests; the schema is fixed and there is no migration mechanism.
    ///
    /// # Errors
    /// * `DatabaseError` - Schema creation failed
    pub async fn init(&self) -> Result<(), AuthError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                username TEXT UNIQUE NOT NULL,
                password TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    fn row_into_credential(row: &SqliteRow) -> Result<Credential, AuthError> {
        let username: String = row
            .try_get("username")
            .map_err(|e| AuthError::DatabaseError(e.to_string()))?;
        let password_hash: String = row
            .try_get("password")
            .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(Credential {
            username: Username::new(username)?,
            password_hash,
        })
    }
}

#[async_trait]
impl CredentialRepository for SqliteCredentialRepository {
    async fn exists(&self, username: &Username) -> Result<bool, AuthError> {
        let row = sqlx::query(
            r#"
            SELECT 1 FROM users WHERE username = ?1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(row.is_some())
    }

    async fn insert(&self, credential: Credential) -> Result<(), AuthError> {
        sqlx::query(
            r#"
            INSERT INTO users (username, password) VALUES (?1, ?2)
            "#,
        )
        .bind(credential.username.as_str())
        .bind(&credential.password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AuthError::UsernameAlreadyExists(
                        credential.username.as_str().to_string(),
                    );
                }
            }
            AuthError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    async fn find(&self, username: &Username) -> Result<Option<Credential>, AuthError> {
        let row = sqlx::query(
            r#"
            SELECT username, password FROM users WHERE username = ?1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Self::row_into_credential(&r)?)),
            None => Ok(None),
        }
    }
}
