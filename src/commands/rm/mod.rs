// src/commands/rm/mod.rs
use async_trait::async_trait;
use std::io;
use tracing::debug;

use crate::commands::{Command, CommandContext, CommandResult, Syntax};
use crate::fs::operations;
use crate::i18n::MessageKey;

/// `rm <name>`: removes a file, or a directory with all of its contents.
pub struct RmCommand;

#[async_trait]
impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn syntax(&self) -> Syntax {
        Syntax::Argument
    }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> io::Result<CommandResult> {
        let name = ctx.arg.trim().to_string();
        let cwd = ctx.session.current_path().clone();
        match operations::remove_entry(ctx.tree, &cwd, &name) {
            Ok(node) => {
                debug!(entry = %name, directory = node.is_directory(), "entry removed");
                let text = ctx.message(MessageKey::EntryRemoved, &[("name", &name)]);
                Ok(CommandResult::line(text))
            }
            Err(e) => Ok(ctx.fs_failure(&e, MessageKey::EntryNotFound)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::Fixture;

    #[tokio::test]
    async fn test_rm_file() {
        let mut fx = Fixture::new();
        let cwd = fx.session.current_path().clone();
        operations::create_file(&mut fx.tree, &cwd, "notes.txt").unwrap();

        let result = fx.run(&RmCommand, "notes.txt").await;
        assert_eq!(result.stdout, "File or directory 'notes.txt' removed.\n");
        assert!(operations::view_file(&fx.tree, &cwd, "notes.txt").is_err());
    }

    #[tokio::test]
    async fn test_rm_non_empty_directory() {
        let mut fx = Fixture::new();
        let cwd = fx.session.current_path().clone();
        operations::create_file(&mut fx.tree, &cwd, "documents/a.txt").unwrap();

        let result = fx.run(&RmCommand, "documents").await;
        assert_eq!(result.exit_code, 0);
        let names = operations::list(&fx.tree, &fx.session).unwrap();
        assert_eq!(names, ["pictures", "downloads"]);
    }

    #[tokio::test]
    async fn test_rm_missing() {
        let mut fx = Fixture::new();
        let result = fx.run(&RmCommand, "ghost").await;
        assert_eq!(result.stdout, "File or directory 'ghost' does not exist.\n");
        assert_eq!(result.exit_code, 1);
    }

    #[tokio::test]
    async fn test_rm_ancestor_of_cwd_refused() {
        let mut fx = Fixture::new();
        let result = fx.run(&RmCommand, "/home").await;
        assert_eq!(result.exit_code, 1);
        assert_eq!(
            result.stdout,
            "'home' contains the current directory and cannot be removed.\n"
        );
        assert_eq!(fx.cwd(), "/home/user");
    }
}
