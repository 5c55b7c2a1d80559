//! helios-shell - A simulated operating-system console
//!
//! Boots a named system, manages local accounts and runs per-user console
//! sessions over an in-memory namespace of directories and files.

pub mod accounts;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod console;
pub mod dispatcher;
pub mod fs;
pub mod host;
pub mod i18n;
pub mod launcher;
pub mod script;
pub mod session;

pub use app::{AppError, Application, ExitReason};
pub use dispatcher::{CommandDispatcher, DispatchState, SessionEnd};
pub use fs::{FsError, NamespaceTree, NodePath, PathResolver};
pub use session::SessionState;
