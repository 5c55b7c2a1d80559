// src/commands/registry.rs
use indexmap::IndexMap;

use super::types::Command;

/// Verbs by name, in registration order.
pub struct CommandRegistry {
    commands: IndexMap<&'static str, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: IndexMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().copied().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::cd_cmd::CdCommand;
use super::devices_cmd::DevicesCommand;
use super::echo::EchoCommand;
use super::edit::EditCommand;
use super::help_cmd::HelpCommand;
use super::logout_cmd::LogoutCommand;
use super::ls::LsCommand;
use super::mkdir::MkdirCommand;
use super::open_cmd::OpenGoogleCommand;
use super::rm::RmCommand;
use super::rmdir_cmd::RmdirCommand;
use super::run::RunCommand;
use super::shutdown_cmd::ShutdownCommand;
use super::sysinfo_cmd::SysinfoCommand;
use super::touch::TouchCommand;
use super::view::ViewCommand;

/// Registry holding every console verb.
pub fn create_default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(Box::new(HelpCommand));
    registry.register(Box::new(EchoCommand));
    registry.register(Box::new(LogoutCommand));
    registry.register(Box::new(ShutdownCommand));
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(SysinfoCommand));
    registry.register(Box::new(DevicesCommand));
    registry.register(Box::new(TouchCommand));
    registry.register(Box::new(RmCommand));
    registry.register(Box::new(ViewCommand));
    registry.register(Box::new(EditCommand));
    registry.register(Box::new(RunCommand));
    registry.register(Box::new(OpenGoogleCommand));
    registry.register(Box::new(MkdirCommand));
    registry.register(Box::new(RmdirCommand));
    registry
}
