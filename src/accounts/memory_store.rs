use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use super::types::*;

/// In-memory account store.
#[derive(Default)]
pub struct MemoryAccountStore {
    records: RwLock<IndexMap<String, String>>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn find_credential(&self, username: &str) -> Result<String, AccountError> {
        self.records
            .read()
            .await
            .get(username)
            .cloned()
            .ok_or_else(|| AccountError::NotFound { username: username.to_string() })
    }

    async fn register(&self, username: &str, hashed_secret: &str) -> Result<(), AccountError> {
        validate_username(username)?;
        let mut records = self.records.write().await;
        if records.contains_key(username) {
            return Err(AccountError::AlreadyExists { username: username.to_string() });
        }
        records.insert(username.to_string(), hashed_secret.to_string());
        Ok(())
    }
}
