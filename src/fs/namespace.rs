//! Namespace Tree
//!
//! The process-wide in-memory tree of directories and files. It knows how to
//! walk a segment sequence and nothing about path syntax.

use super::path::NodePath;
use super::types::*;

/// Initial layout created at process start, in listing order.
const SEED_LAYOUT: &[(&str, &[&str])] = &[
    ("home/user", &["documents", "pictures", "downloads"]),
    ("system", &["config", "logs"]),
];

/// In-memory namespace. Owns every node; the root is always a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceTree {
    root: Directory,
}

impl NamespaceTree {
    /// Create a tree holding only an empty root directory.
    pub fn new() -> Self {
        Self { root: Directory::new() }
    }

    /// Create a tree with the standard layout.
    pub fn seeded() -> Self {
        let mut tree = Self::new();
        for (parent, children) in SEED_LAYOUT {
            let mut path = NodePath::root();
            for segment in parent.split('/') {
                tree.ensure_directory(&path, segment);
                path = path.join(segment);
            }
            for child in *children {
                tree.ensure_directory(&path, child);
            }
        }
        tree
    }

    fn ensure_directory(&mut self, parent: &NodePath, name: &str) {
        if let Ok(dir) = self.directory_mut(parent) {
            if !dir.contains(name) {
                let _ = dir.insert(name, Node::empty_directory());
            }
        }
    }

    pub fn root(&self) -> &Directory {
        &self.root
    }

    /// Walk to the directory at `path`. Errors name the failing segment.
    pub fn directory(&self, path: &NodePath) -> Result<&Directory, FsError> {
        let mut dir = &self.root;
        for segment in path.segments() {
            dir = dir.get(segment)?.as_directory(segment)?;
        }
        Ok(dir)
    }

    pub fn directory_mut(&mut self, path: &NodePath) -> Result<&mut Directory, FsError> {
        let mut dir = &mut self.root;
        for segment in path.segments() {
            dir = dir.get_mut(segment)?.as_directory_mut(segment)?;
        }
        Ok(dir)
    }

    /// Walk to the file at `path`.
    pub fn file(&self, path: &NodePath) -> Result<&File, FsError> {
        let (parent, name) = path
            .split_last()
            .ok_or_else(|| FsError::is_a_directory(path.name()))?;
        self.directory(&parent)?.get(name)?.as_file(name)
    }

    pub fn file_mut(&mut self, path: &NodePath) -> Result<&mut File, FsError> {
        let (parent, name) = path
            .split_last()
            .ok_or_else(|| FsError::is_a_directory(path.name()))?;
        self.directory_mut(&parent)?.get_mut(name)?.as_file_mut(name)
    }
}

impl Default for NamespaceTree {
    fn default() -> Self {
        Self::seeded()
    }
}

// ============================================================================
// Tests
// ============================================================================
