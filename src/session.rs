//! Session State
//!
//! Everything one logged-in user carries from login to logout.

use crate::fs::{NamespaceTree, NodePath};
use crate::i18n::Locale;

/// Directory a new session starts in.
pub const HOME_SEGMENTS: &[&str] = &["home", "user"];

/// Per-session state: who is logged in, in which locale, and where they are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    identity: String,
    locale: Locale,
    current_path: NodePath,
}

impl SessionState {
    /// Start a session at the home directory, or at the root if an earlier
    /// session removed it.
    pub fn new(tree: &NamespaceTree, identity: impl Into<String>, locale: Locale) -> Self {
        let home = NodePath::from_segments(HOME_SEGMENTS.iter().copied());
        let current_path = if tree.directory(&home).is_ok() { home } else { NodePath::root() };
        Self {
            identity: identity.into(),
            locale,
            current_path,
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn current_path(&self) -> &NodePath {
        &self.current_path
    }

    /// Only called with a path that was just resolved to a directory.
    pub(crate) fn set_current_path(&mut self, path: NodePath) {
        self.current_path = path;
    }

    /// Command prompt, e.g. `alice@HeliosOS:/home/user$ `.
    pub fn prompt(&self, system_name: &str) -> String {
        format!("{}@{}:{}$ ", self.identity, system_name, self.current_path)
    }
}
