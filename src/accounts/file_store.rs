//! File-backed account store.
//!
//! One record per line, `username:hexSha256Digest`. Lines that do not split
//! into exactly two fields are skipped. The file is re-read on every lookup
//! so records added by another process are seen.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use super::types::*;

pub struct FileAccountStore {
    path: PathBuf,
}

impl FileAccountStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> AccountError {
        AccountError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    async fn load(&self) -> Result<IndexMap<String, String>, AccountError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => Ok(parse_records(&text)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "account file missing, treating as empty");
                Ok(IndexMap::new())
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read account file");
                Err(self.io_error(e))
            }
        }
    }
}

/// Parse `username:digest` lines, keeping the first record for a username.
pub fn parse_records(text: &str) -> IndexMap<String, String> {
    let mut records = IndexMap::new();
    for line in text.lines() {
        let fields: Vec<&str> = line.trim().split(':').collect();
        if let [username, digest] = fields.as_slice() {
            records
                .entry(username.to_string())
                .or_insert_with(|| digest.to_string());
        }
    }
    records
}

#[async_trait]
impl AccountStore for FileAccountStore {
    async fn find_credential(&self, username: &str) -> Result<String, AccountError> {
        self.load()
            .await?
            .shift_remove(username)
            .ok_or_else(|| AccountError::NotFound { username: username.to_string() })
    }

    async fn register(&self, username: &str, hashed_secret: &str) -> Result<(), AccountError> {
        validate_username(username)?;
        if self.load().await?.contains_key(username) {
            return Err(AccountError::AlreadyExists { username: username.to_string() });
        }

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| self.io_error(e))?;
        file.write_all(format!("{}:{}\n", username, hashed_secret).as_bytes())
            .await
            .map_err(|e| self.io_error(e))?;
        file.flush().await.map_err(|e| self.io_error(e))?;
        debug!(path = %self.path.display(), username, "account record appended");
        Ok(())
    }
}
