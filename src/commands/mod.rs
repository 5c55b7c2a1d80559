// src/commands/mod.rs
pub mod registry;
pub mod types;

pub mod cd_cmd;
pub mod devices_cmd;
pub mod echo;
pub mod edit;
pub mod help_cmd;
pub mod logout_cmd;
pub mod ls;
pub mod mkdir;
pub mod open_cmd;
pub mod rm;
pub mod rmdir_cmd;
pub mod run;
pub mod shutdown_cmd;
pub mod sysinfo_cmd;
pub mod touch;
pub mod view;

pub use registry::{create_default_registry, CommandRegistry};
pub use types::{Command, CommandContext, CommandResult, Flow, Services, Syntax};

#[cfg(test)]
pub(crate) use types::test_support;
