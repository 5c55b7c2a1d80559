// src/commands/types.rs
use async_trait::async_trait;
use std::io;
use std::sync::Arc;
use tracing::debug;

use crate::console::Terminal;
use crate::fs::{FsError, NamespaceTree};
use crate::i18n::{Catalog, MessageKey, Translator};
use crate::launcher::{ExternalLauncher, SystemLauncher};
use crate::script::{DisabledExecutor, ScriptExecutor};
use crate::host::{HostSystemInfo, SystemInfoProvider};
use crate::session::SessionState;

/// What the session loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Logout,
    Shutdown,
}

/// 命令执行结果
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub stdout: String,
    pub exit_code: i32,
    pub flow: Flow,
}

impl CommandResult {
    pub fn success(stdout: String) -> Self {
        Self { stdout, exit_code: 0, flow: Flow::Continue }
    }

    pub fn error(stdout: String) -> Self {
        Self { stdout, exit_code: 1, flow: Flow::Continue }
    }

    /// Single message line.
    pub fn line(text: String) -> Self {
        Self::success(text + "\n")
    }

    pub fn error_line(text: String) -> Self {
        Self::error(text + "\n")
    }

    pub fn with_flow(mut self, flow: Flow) -> Self {
        self.flow = flow;
        self
    }
}

/// How a verb takes its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    /// The whole line is the verb, e.g. `ls` or `open google`.
    Exact,
    /// `verb <argument>`; the argument is everything after the first space.
    Argument,
}

/// Host-side collaborators shared by every session.
#[derive(Clone)]
pub struct Services {
    pub translator: Arc<dyn Translator>,
    pub sysinfo: Arc<dyn SystemInfoProvider>,
    pub launcher: Arc<dyn ExternalLauncher>,
    pub executor: Arc<dyn ScriptExecutor>,
}

impl Default for Services {
    /// Built-in catalog, real host info, no launching, no script execution.
    fn default() -> Self {
        Self {
            translator: Arc::new(Catalog::new()),
            sysinfo: Arc::new(HostSystemInfo),
            launcher: Arc::new(SystemLauncher::disabled()),
            executor: Arc::new(DisabledExecutor),
        }
    }
}

/// 命令执行上下文
pub struct CommandContext<'a> {
    /// Raw argument, empty for exact verbs.
    pub arg: String,
    pub tree: &'a mut NamespaceTree,
    pub session: &'a mut SessionState,
    pub terminal: &'a mut dyn Terminal,
    pub services: &'a Services,
}

impl CommandContext<'_> {
    /// Render a message in the session locale.
    pub fn message(&self, key: MessageKey, params: &[(&str, &str)]) -> String {
        self.services.translator.render(key, self.session.locale(), params)
    }

    /// Report a namespace failure. `not_found` picks the wording for a
    /// missing target, which differs per verb.
    pub fn fs_failure(&self, err: &FsError, not_found: MessageKey) -> CommandResult {
        let key = match err {
            FsError::NotFound { .. } => not_found,
            FsError::AlreadyExists { .. } => MessageKey::AlreadyExists,
            FsError::IsADirectory { .. } => MessageKey::IsADirectory,
            FsError::NotADirectory { .. } => MessageKey::NotADirectory,
            FsError::NotEmpty { .. } => MessageKey::DirectoryNotEmpty,
            FsError::InUse { .. } => MessageKey::DirectoryInUse,
            FsError::InvalidName { .. } => MessageKey::InvalidName,
        };
        debug!(key = key.as_str(), name = err.name(), "namespace operation refused");
        CommandResult::error_line(self.message(key, &[("name", err.name())]))
    }
}

/// 命令 trait
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;

    fn syntax(&self) -> Syntax {
        Syntax::Exact
    }

    /// Run the verb. Only terminal I/O failures are errors; everything
    /// else is reported to the user through the result.
    async fn execute(&self, ctx: &mut CommandContext<'_>) -> io::Result<CommandResult>;
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::console::ScriptedTerminal;
    use crate::i18n::Locale;

    /// Owns everything a [`CommandContext`] borrows.
    pub struct Fixture {
        pub tree: NamespaceTree,
        pub session: SessionState,
        pub terminal: ScriptedTerminal,
        pub services: Services,
    }

    impl Fixture {
        pub fn new() -> Self {
            Self::with_locale(Locale::English)
        }

        pub fn with_locale(locale: Locale) -> Self {
            let tree = NamespaceTree::seeded();
            let session = SessionState::new(&tree, "alice", locale);
            Self {
                tree,
                session,
                terminal: ScriptedTerminal::default(),
                services: Services::default(),
            }
        }

        pub fn input<I, S>(mut self, lines: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            self.terminal = ScriptedTerminal::new(lines);
            self
        }

        pub async fn run(&mut self, cmd: &dyn Command, arg: &str) -> CommandResult {
            let mut ctx = CommandContext {
                arg: arg.to_string(),
                tree: &mut self.tree,
                session: &mut self.session,
                terminal: &mut self.terminal,
                services: &self.services,
            };
            cmd.execute(&mut ctx).await.unwrap()
        }

        pub fn cwd(&self) -> String {
            self.session.current_path().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::Fixture;
    use super::*;

    #[test]
    fn test_result_constructors() {
        let ok = CommandResult::line("done".to_string());
        assert_eq!(ok.stdout, "done\n");
        assert_eq!(ok.exit_code, 0);
        assert_eq!(ok.flow, Flow::Continue);

        let err = CommandResult::error_line("nope".to_string()).with_flow(Flow::Logout);
        assert_eq!(err.exit_code, 1);
        assert_eq!(err.flow, Flow::Logout);
    }

    #[test]
    fn test_fs_failure_wording() {
        let mut fx = Fixture::new();
        let ctx = CommandContext {
            arg: String::new(),
            tree: &mut fx.tree,
            session: &mut fx.session,
            terminal: &mut fx.terminal,
            services: &fx.services,
        };
        let missing = FsError::not_found("x");
        assert_eq!(
            ctx.fs_failure(&missing, MessageKey::FileNotFound).stdout,
            "File 'x' does not exist.\n"
        );
        assert_eq!(
            ctx.fs_failure(&missing, MessageKey::DirectoryNotFound).stdout,
            "Directory 'x' does not exist.\n"
        );
        let busy = FsError::InUse { name: "home".to_string() };
        assert_eq!(ctx.fs_failure(&busy, MessageKey::EntryNotFound).exit_code, 1);
    }
}
