//! Accounts Module
//!
//! Credential storage and the login/registration flows built on it:
//! - FileAccountStore: `username:digest` lines on disk (default)
//! - MemoryAccountStore: in-process records

pub mod types;
pub mod file_store;
pub mod memory_store;
pub mod service;

pub use types::{validate_username, AccountError, AccountStore};
pub use file_store::FileAccountStore;
pub use memory_store::MemoryAccountStore;
pub use service::{authenticate, create_account, hash_password, username_taken};
