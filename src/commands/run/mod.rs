// src/commands/run/mod.rs
use async_trait::async_trait;
use std::io;

use crate::commands::{Command, CommandContext, CommandResult, Syntax};
use crate::fs::{operations, RunError};
use crate::i18n::MessageKey;

/// `run <name>`: hands a file's content to the configured script executor.
pub struct RunCommand;

#[async_trait]
impl Command for RunCommand {
    fn name(&self) -> &'static str {
        "run"
    }

    fn syntax(&self) -> Syntax {
        Syntax::Argument
    }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> io::Result<CommandResult> {
        let name = ctx.arg.trim().to_string();
        let executor = ctx.services.executor.as_ref();
        let outcome = operations::run_file(ctx.tree, ctx.session.current_path(), &name, executor).await;

        match outcome {
            Ok(output) => {
                let mut stdout = ctx.message(MessageKey::Running, &[("name", &name)]);
                stdout.push('\n');
                stdout.push_str(&output);
                if !output.is_empty() && !output.ends_with('\n') {
                    stdout.push('\n');
                }
                Ok(CommandResult::success(stdout))
            }
            Err(RunError::Fs(e)) => Ok(ctx.fs_failure(&e, MessageKey::FileNotFound)),
            Err(RunError::ExecutionFailed { name, message }) => {
                let text = ctx.message(
                    MessageKey::ExecutionFailed,
                    &[("name", &name), ("error", &message)],
                );
                Ok(CommandResult::error_line(text))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::Fixture;
    use crate::script::RestrictedExecutor;
    use std::sync::Arc;

    fn script(fx: &mut Fixture, body: &str) {
        let cwd = fx.session.current_path().clone();
        operations::create_file(&mut fx.tree, &cwd, "job.txt").unwrap();
        operations::edit_file(&mut fx.tree, &cwd, "job.txt", body.to_string()).unwrap();
    }

    #[tokio::test]
    async fn test_run_disabled_by_default() {
        let mut fx = Fixture::new();
        script(&mut fx, "print hi");
        let result = fx.run(&RunCommand, "job.txt").await;
        assert_eq!(result.exit_code, 1);
        assert_eq!(
            result.stdout,
            "Error running 'job.txt': script execution is disabled\n"
        );
    }

    #[tokio::test]
    async fn test_run_restricted() {
        let mut fx = Fixture::new();
        fx.services.executor = Arc::new(RestrictedExecutor::default());
        script(&mut fx, "print hello\necho world");
        let result = fx.run(&RunCommand, "job.txt").await;
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout, "Running 'job.txt'...\nhello\nworld\n");
    }

    #[tokio::test]
    async fn test_run_missing_file() {
        let mut fx = Fixture::new();
        fx.services.executor = Arc::new(RestrictedExecutor::default());
        let result = fx.run(&RunCommand, "missing.txt").await;
        assert_eq!(result.stdout, "File 'missing.txt' does not exist.\n");
        assert_eq!(result.exit_code, 1);
    }
}
