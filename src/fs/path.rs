//! Path Resolution
//!
//! Turns absolute and relative path strings into segment sequences and
//! checks them against the namespace. There is no `.`/`..` handling: a
//! relative path is appended literally to the current directory.

use std::fmt;

use super::namespace::NamespaceTree;
use super::types::FsError;

pub const SEPARATOR: char = '/';

/// A location in the namespace as the ordered segments from the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath {
    segments: Vec<String>,
}

impl NodePath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { segments: segments.into_iter().map(Into::into).collect() }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Name of the final segment, `/` for the root.
    pub fn name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or("/")
    }

    pub fn join(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.into());
        Self { segments }
    }

    /// Split into the parent path and the final segment. `None` for the root.
    pub fn split_last(&self) -> Option<(NodePath, &str)> {
        let (last, parent) = self.segments.split_last()?;
        Some((NodePath { segments: parent.to_vec() }, last.as_str()))
    }

    /// True when `self` is `other` or lies below it.
    pub fn starts_with(&self, other: &NodePath) -> bool {
        self.segments.starts_with(&other.segments)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", SEPARATOR, self.segments.join("/"))
    }
}

/// Split a path string into its non-empty segments.
pub fn split_segments(path: &str) -> Vec<String> {
    path.split(SEPARATOR)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Combine a path string with the current directory without touching the tree.
pub fn combine(path: &str, current: &NodePath) -> NodePath {
    if path.starts_with(SEPARATOR) {
        NodePath::from_segments(split_segments(path))
    } else {
        let mut segments = current.segments().to_vec();
        segments.extend(split_segments(path));
        NodePath { segments }
    }
}

/// Where a (possibly not yet existing) entry lives: an existing parent
/// directory and the entry name inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryLocation {
    pub parent: NodePath,
    pub name: String,
}

impl EntryLocation {
    pub fn path(&self) -> NodePath {
        self.parent.join(self.name.clone())
    }
}

/// Resolves path strings against a namespace tree.
pub struct PathResolver<'a> {
    tree: &'a NamespaceTree,
}

impl<'a> PathResolver<'a> {
    pub fn new(tree: &'a NamespaceTree) -> Self {
        Self { tree }
    }

    /// Resolve a path whose every segment, including the last, must be an
    /// existing directory.
    pub fn directory(&self, path: &str, current: &NodePath) -> Result<NodePath, FsError> {
        let target = combine(path, current);
        self.tree.directory(&target)?;
        Ok(target)
    }

    /// Resolve a path whose parent segments must be existing directories.
    /// The final segment is returned as a name and need not exist.
    pub fn entry(&self, path: &str, current: &NodePath) -> Result<EntryLocation, FsError> {
        let target = combine(path, current);
        let (parent, name) = target
            .split_last()
            .ok_or_else(|| FsError::InvalidName { name: path.to_string() })?;
        self.tree.directory(&parent)?;
        Ok(EntryLocation { name: name.to_string(), parent })
    }
}

// ============================================================================
// Tests
// ============================================================================
