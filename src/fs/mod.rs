//! Namespace Module
//!
//! The in-memory directory tree the console operates on:
//! - types: nodes and errors
//! - namespace: the tree itself
//! - path: path strings to locations
//! - operations: the verbs offered to the console

pub mod types;
pub mod namespace;
pub mod path;
pub mod operations;

pub use types::*;
pub use namespace::NamespaceTree;
pub use path::{EntryLocation, NodePath, PathResolver};
pub use operations::RunError;
