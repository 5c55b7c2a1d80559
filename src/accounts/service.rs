//! Login and registration on top of an [`AccountStore`].

use sha2::{Digest, Sha256};
use tracing::{debug, info};

use super::types::*;

/// Hex SHA-256 digest of a password.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Check a username/password pair and return the authenticated identity.
///
/// Unknown users and wrong passwords are both `InvalidCredential`.
pub async fn authenticate(
    store: &dyn AccountStore,
    username: &str,
    password: &str,
) -> Result<String, AccountError> {
    match store.find_credential(username).await {
        Ok(digest) if digest == hash_password(password) => {
            info!(username, "login succeeded");
            Ok(username.to_string())
        }
        Ok(_) | Err(AccountError::NotFound { .. }) => {
            debug!(username, "login rejected");
            Err(AccountError::InvalidCredential)
        }
        Err(e) => Err(e),
    }
}

/// Register a new account after checking the password confirmation.
pub async fn create_account(
    store: &dyn AccountStore,
    username: &str,
    password: &str,
    confirmation: &str,
) -> Result<(), AccountError> {
    if password != confirmation {
        return Err(AccountError::PasswordMismatch);
    }
    validate_username(username)?;
    store.register(username, &hash_password(password)).await?;
    info!(username, "account created");
    Ok(())
}

/// Whether a username is already taken.
pub async fn username_taken(store: &dyn AccountStore, username: &str) -> Result<bool, AccountError> {
    match store.find_credential(username).await {
        Ok(_) => Ok(true),
        Err(AccountError::NotFound { .. }) => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::MemoryAccountStore;

    #[test]
    fn test_hash_password() {
        assert_eq!(
            hash_password("secret1"),
            "5b11618c2e44027877d0cd0921ed166b9f176f50587fc91e7534dd2946db77d6"
        );
        assert_eq!(hash_password("").len(), 64);
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let store = MemoryAccountStore::new();
        create_account(&store, "alice", "secret1", "secret1").await.unwrap();

        let identity = authenticate(&store, "alice", "secret1").await.unwrap();
        assert_eq!(identity, "alice");

        let err = authenticate(&store, "alice", "wrong").await.unwrap_err();
        assert!(matches!(err, AccountError::InvalidCredential));
    }

    #[tokio::test]
    async fn test_unknown_user_is_invalid_credential() {
        let store = MemoryAccountStore::new();
        let err = authenticate(&store, "ghost", "x").await.unwrap_err();
        assert!(matches!(err, AccountError::InvalidCredential));
    }

    #[tokio::test]
    async fn test_password_mismatch() {
        let store = MemoryAccountStore::new();
        let err = create_account(&store, "alice", "a", "b").await.unwrap_err();
        assert!(matches!(err, AccountError::PasswordMismatch));
        assert!(!username_taken(&store, "alice").await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_account() {
        let store = MemoryAccountStore::new();
        create_account(&store, "alice", "a", "a").await.unwrap();
        assert!(username_taken(&store, "alice").await.unwrap());
        let err = create_account(&store, "alice", "b", "b").await.unwrap_err();
        assert!(matches!(err, AccountError::AlreadyExists { .. }));
    }
}
