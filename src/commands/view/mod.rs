// src/commands/view/mod.rs
use async_trait::async_trait;
use std::io;

use crate::commands::{Command, CommandContext, CommandResult, Syntax};
use crate::fs::operations;
use crate::i18n::MessageKey;

/// `view <name>`: prints a file under a header.
pub struct ViewCommand;

#[async_trait]
impl Command for ViewCommand {
    fn name(&self) -> &'static str {
        "view"
    }

    fn syntax(&self) -> Syntax {
        Syntax::Argument
    }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> io::Result<CommandResult> {
        let name = ctx.arg.trim();
        match operations::view_file(ctx.tree, ctx.session.current_path(), name) {
            Ok(content) => {
                let mut stdout = format!("\n{}\n", ctx.message(MessageKey::FileContentHeader, &[]));
                stdout.push_str(&content);
                stdout.push('\n');
                Ok(CommandResult::success(stdout))
            }
            Err(e) => Ok(ctx.fs_failure(&e, MessageKey::FileNotFound)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::Fixture;

    #[tokio::test]
    async fn test_view_file() {
        let mut fx = Fixture::new();
        let cwd = fx.session.current_path().clone();
        operations::create_file(&mut fx.tree, &cwd, "notes.txt").unwrap();
        operations::edit_file(&mut fx.tree, &cwd, "notes.txt", "hello\nworld".to_string()).unwrap();

        let result = fx.run(&ViewCommand, "notes.txt").await;
        assert_eq!(result.stdout, "\n--- File Content ---\nhello\nworld\n");
    }

    #[tokio::test]
    async fn test_view_missing() {
        let mut fx = Fixture::new();
        let result = fx.run(&ViewCommand, "ghost.txt").await;
        assert_eq!(result.stdout, "File 'ghost.txt' does not exist.\n");
        assert_eq!(result.exit_code, 1);
    }

    #[tokio::test]
    async fn test_view_directory() {
        let mut fx = Fixture::new();
        let result = fx.run(&ViewCommand, "documents").await;
        assert_eq!(result.stdout, "'documents' is a directory.\n");
    }
}
