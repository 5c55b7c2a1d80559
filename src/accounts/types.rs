use async_trait::async_trait;
use thiserror::Error;

/// Account errors
#[derive(Error, Debug)]
pub enum AccountError {
    #[error("no account named '{username}'")]
    NotFound { username: String },

    #[error("account '{username}' already exists")]
    AlreadyExists { username: String },

    #[error("invalid username or password")]
    InvalidCredential,

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("invalid username '{username}'")]
    InvalidUsername { username: String },

    #[error("account store '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Credential storage. Records map a username to the hex SHA-256 digest of
/// the password; the store never sees plain passwords.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Stored digest for `username`.
    async fn find_credential(&self, username: &str) -> Result<String, AccountError>;

    /// Add a new record. Existing usernames are never overwritten.
    async fn register(&self, username: &str, hashed_secret: &str) -> Result<(), AccountError>;
}

/// Usernames must be non-blank and fit the `username:digest` line format.
pub fn validate_username(username: &str) -> Result<(), AccountError> {
    if username.trim().is_empty() || username.contains([':', '\n', '\r']) {
        return Err(AccountError::InvalidUsername { username: username.to_string() });
    }
    Ok(())
}
