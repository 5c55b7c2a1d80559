//! Namespace Operations
//!
//! The verbs the console offers on the namespace. Every operation resolves
//! its argument through [`PathResolver`] first, so commands never walk the
//! tree themselves.

use thiserror::Error;
use tracing::debug;

use super::namespace::NamespaceTree;
use super::path::{EntryLocation, NodePath, PathResolver};
use super::types::*;
use crate::script::ScriptExecutor;
use crate::session::SessionState;

/// Failure of the `run` verb.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    #[error(transparent)]
    Fs(#[from] FsError),

    #[error("{message}")]
    ExecutionFailed { name: String, message: String },
}

/// Child names of the current directory, in insertion order.
pub fn list(tree: &NamespaceTree, session: &SessionState) -> Result<Vec<String>, FsError> {
    let dir = tree.directory(session.current_path())?;
    Ok(dir.names().map(String::from).collect())
}

/// Move the session to another directory. The session is untouched on error.
pub fn change_directory(
    tree: &NamespaceTree,
    session: &mut SessionState,
    path: &str,
) -> Result<(), FsError> {
    let target = PathResolver::new(tree).directory(path, session.current_path())?;
    debug!(from = %session.current_path(), to = %target, "changing directory");
    session.set_current_path(target);
    Ok(())
}

/// Create an empty file.
pub fn create_file(tree: &mut NamespaceTree, cwd: &NodePath, name: &str) -> Result<EntryLocation, FsError> {
    create(tree, cwd, name, Node::empty_file())
}

/// Create an empty directory.
pub fn create_directory(
    tree: &mut NamespaceTree,
    cwd: &NodePath,
    name: &str,
) -> Result<EntryLocation, FsError> {
    create(tree, cwd, name, Node::empty_directory())
}

fn create(tree: &mut NamespaceTree, cwd: &NodePath, name: &str, node: Node) -> Result<EntryLocation, FsError> {
    let location = PathResolver::new(tree).entry(name, cwd)?;
    tree.directory_mut(&location.parent)?.insert(location.name.clone(), node)?;
    Ok(location)
}

/// Remove a file or a directory together with everything below it.
pub fn remove_entry(tree: &mut NamespaceTree, cwd: &NodePath, name: &str) -> Result<Node, FsError> {
    let location = removable(tree, cwd, name)?;
    tree.directory_mut(&location.parent)?.remove(&location.name)
}

/// Remove an empty directory.
pub fn remove_directory(tree: &mut NamespaceTree, cwd: &NodePath, name: &str) -> Result<(), FsError> {
    let location = removable(tree, cwd, name)?;
    let parent = tree.directory_mut(&location.parent)?;
    let dir = parent.get(&location.name)?.as_directory(&location.name)?;
    if !dir.is_empty() {
        return Err(FsError::NotEmpty { name: location.name });
    }
    parent.remove(&location.name)?;
    Ok(())
}

/// Resolve a removal target, refusing the current directory and its ancestors.
fn removable(tree: &NamespaceTree, cwd: &NodePath, name: &str) -> Result<EntryLocation, FsError> {
    let location = PathResolver::new(tree).entry(name, cwd)?;
    tree.directory(&location.parent)?.get(&location.name)?;
    if cwd.starts_with(&location.path()) {
        return Err(FsError::InUse { name: location.name });
    }
    Ok(location)
}

/// Locate an existing file.
pub fn locate_file(tree: &NamespaceTree, cwd: &NodePath, name: &str) -> Result<EntryLocation, FsError> {
    let location = PathResolver::new(tree).entry(name, cwd)?;
    tree.directory(&location.parent)?
        .get(&location.name)?
        .as_file(&location.name)?;
    Ok(location)
}

/// Content of a file.
pub fn view_file(tree: &NamespaceTree, cwd: &NodePath, name: &str) -> Result<String, FsError> {
    let location = locate_file(tree, cwd, name)?;
    Ok(tree.file(&location.path())?.content().to_string())
}

/// Replace the content of an existing file.
pub fn edit_file(tree: &mut NamespaceTree, cwd: &NodePath, name: &str, content: String) -> Result<(), FsError> {
    let location = locate_file(tree, cwd, name)?;
    tree.file_mut(&location.path())?.set_content(content);
    Ok(())
}

/// Hand the content of a file to the script executor.
///
/// The executor is only invoked once the target is known to be a file.
pub async fn run_file(
    tree: &NamespaceTree,
    cwd: &NodePath,
    name: &str,
    executor: &dyn ScriptExecutor,
) -> Result<String, RunError> {
    let source = view_file(tree, cwd, name)?;
    debug!(file = name, bytes = source.len(), "executing script");
    executor.execute(&source).await.map_err(|e| RunError::ExecutionFailed {
        name: name.to_string(),
        message: e.to_string(),
    })
}

// ============================================================================
// Tests
// ============================================================================
