//! Command Dispatcher
//!
//! Reads command lines for one session, picks the verb and runs it until the
//! user logs out or shuts the system down.

use std::io;

use tracing::debug;

use crate::commands::{
    create_default_registry, Command, CommandContext, CommandRegistry, Flow, Services, Syntax,
};
use crate::console::Terminal;
use crate::fs::NamespaceTree;
use crate::i18n::MessageKey;
use crate::session::SessionState;

/// Where the session loop stands after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchState {
    AwaitingCommand,
    Terminated,
    ShuttingDown,
}

impl From<Flow> for DispatchState {
    fn from(flow: Flow) -> Self {
        match flow {
            Flow::Continue => DispatchState::AwaitingCommand,
            Flow::Logout => DispatchState::Terminated,
            Flow::Shutdown => DispatchState::ShuttingDown,
        }
    }
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// `logout`, or end of input at the prompt.
    Logout,
    Shutdown,
}

/// Maps command lines to verbs.
pub struct CommandDispatcher {
    registry: CommandRegistry,
}

impl CommandDispatcher {
    pub fn new(registry: CommandRegistry) -> Self {
        Self { registry }
    }

    /// Pick the verb for a line and its raw argument.
    ///
    /// The line is trimmed and only the verb is case-folded. Exact verbs must
    /// match the whole line; argument verbs take everything after the first
    /// space, untouched.
    pub fn parse(&self, line: &str) -> Option<(&dyn Command, String)> {
        let line = line.trim();
        if let Some(cmd) = self.registry.get(&line.to_lowercase()) {
            if cmd.syntax() == Syntax::Exact {
                return Some((cmd, String::new()));
            }
        }

        let (verb, rest) = line.split_once(' ')?;
        let cmd = self.registry.get(&verb.to_lowercase())?;
        (cmd.syntax() == Syntax::Argument).then(|| (cmd, rest.to_string()))
    }

    /// Run a single command line and write its output.
    pub async fn dispatch(
        &self,
        line: &str,
        tree: &mut NamespaceTree,
        session: &mut SessionState,
        terminal: &mut dyn Terminal,
        services: &Services,
    ) -> io::Result<DispatchState> {
        let Some((cmd, arg)) = self.parse(line) else {
            debug!(line, key = MessageKey::UnknownCommand.as_str(), "unknown command");
            let text = services.translator.render(MessageKey::UnknownCommand, session.locale(), &[]);
            terminal.write_line(&text)?;
            return Ok(DispatchState::AwaitingCommand);
        };

        debug!(verb = cmd.name(), cwd = %session.current_path(), "dispatching");
        let mut ctx = CommandContext {
            arg,
            tree,
            session,
            terminal,
            services,
        };
        let result = cmd.execute(&mut ctx).await?;
        ctx.terminal.write(&result.stdout)?;
        if result.exit_code != 0 {
            debug!(verb = cmd.name(), exit_code = result.exit_code, "command failed");
        }
        Ok(result.flow.into())
    }

    /// Prompt for and run commands until the session ends.
    pub async fn run_session(
        &self,
        tree: &mut NamespaceTree,
        session: &mut SessionState,
        terminal: &mut dyn Terminal,
        services: &Services,
        system_name: &str,
    ) -> io::Result<SessionEnd> {
        loop {
            let Some(line) = terminal.prompt(&session.prompt(system_name))? else {
                debug!(user = session.identity(), "end of input at prompt");
                terminal.write("\n")?;
                return Ok(SessionEnd::Logout);
            };

            match self.dispatch(&line, tree, session, terminal, services).await? {
                DispatchState::AwaitingCommand => {}
                DispatchState::Terminated => return Ok(SessionEnd::Logout),
                DispatchState::ShuttingDown => return Ok(SessionEnd::Shutdown),
            }
        }
    }
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new(create_default_registry())
    }
}

// ============================================================================
// Tests
// ============================================================================
