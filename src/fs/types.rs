//! Namespace Types
//!
//! Core node types and errors for the in-memory namespace.

use indexmap::IndexMap;
use thiserror::Error;

/// Namespace errors. Each variant names the path segment that failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("ENOENT: no such file or directory '{name}'")]
    NotFound { name: String },

    #[error("EEXIST: file already exists '{name}'")]
    AlreadyExists { name: String },

    #[error("EISDIR: illegal operation on a directory '{name}'")]
    IsADirectory { name: String },

    #[error("ENOTDIR: not a directory '{name}'")]
    NotADirectory { name: String },

    #[error("ENOTEMPTY: directory not empty '{name}'")]
    NotEmpty { name: String },

    #[error("EBUSY: directory is in use by the session '{name}'")]
    InUse { name: String },

    #[error("EINVAL: invalid entry name '{name}'")]
    InvalidName { name: String },
}

impl FsError {
    pub fn not_found(name: impl Into<String>) -> Self {
        FsError::NotFound { name: name.into() }
    }

    pub fn already_exists(name: impl Into<String>) -> Self {
        FsError::AlreadyExists { name: name.into() }
    }

    pub fn is_a_directory(name: impl Into<String>) -> Self {
        FsError::IsADirectory { name: name.into() }
    }

    pub fn not_a_directory(name: impl Into<String>) -> Self {
        FsError::NotADirectory { name: name.into() }
    }

    /// The segment or entry name the error refers to.
    pub fn name(&self) -> &str {
        match self {
            FsError::NotFound { name }
            | FsError::AlreadyExists { name }
            | FsError::IsADirectory { name }
            | FsError::NotADirectory { name }
            | FsError::NotEmpty { name }
            | FsError::InUse { name }
            | FsError::InvalidName { name } => name,
        }
    }
}

/// A text file. Its content is the only payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct File {
    content: String,
}

impl File {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }
}

/// A directory: children keyed by name, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    children: IndexMap<String, Node>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a child by name.
    pub fn get(&self, name: &str) -> Result<&Node, FsError> {
        self.children.get(name).ok_or_else(|| FsError::not_found(name))
    }

    /// Look up a child by name for mutation. Only the namespace walks with
    /// this, so a child's variant cannot be replaced in place.
    pub(super) fn get_mut(&mut self, name: &str) -> Result<&mut Node, FsError> {
        self.children.get_mut(name).ok_or_else(|| FsError::not_found(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.children.contains_key(name)
    }

    /// Insert a new child. Existing names are never overwritten.
    pub fn insert(&mut self, name: impl Into<String>, node: Node) -> Result<(), FsError> {
        let name = name.into();
        if self.children.contains_key(&name) {
            return Err(FsError::AlreadyExists { name });
        }
        self.children.insert(name, node);
        Ok(())
    }

    /// Remove a child, keeping the order of the remaining entries.
    pub fn remove(&mut self, name: &str) -> Result<Node, FsError> {
        self.children.shift_remove(name).ok_or_else(|| FsError::not_found(name))
    }

    /// Child names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// A namespace entry. The variant is fixed when the node is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Directory(Directory),
    File(File),
}

impl Node {
    pub fn empty_directory() -> Self {
        Node::Directory(Directory::new())
    }

    pub fn empty_file() -> Self {
        Node::File(File::new())
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    /// View this node as a directory; `name` is used for the error.
    pub fn as_directory(&self, name: &str) -> Result<&Directory, FsError> {
        match self {
            Node::Directory(dir) => Ok(dir),
            Node::File(_) => Err(FsError::not_a_directory(name)),
        }
    }

    pub fn as_directory_mut(&mut self, name: &str) -> Result<&mut Directory, FsError> {
        match self {
            Node::Directory(dir) => Ok(dir),
            Node::File(_) => Err(FsError::not_a_directory(name)),
        }
    }

    /// View this node as a file; `name` is used for the error.
    pub fn as_file(&self, name: &str) -> Result<&File, FsError> {
        match self {
            Node::File(file) => Ok(file),
            Node::Directory(_) => Err(FsError::is_a_directory(name)),
        }
    }

    pub fn as_file_mut(&mut self, name: &str) -> Result<&mut File, FsError> {
        match self {
            Node::File(file) => Ok(file),
            Node::Directory(_) => Err(FsError::is_a_directory(name)),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
