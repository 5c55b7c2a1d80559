// src/commands/ls/mod.rs
use async_trait::async_trait;
use std::io;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::operations;
use crate::i18n::MessageKey;

/// `ls`: one child name per line, in creation order.
pub struct LsCommand;

#[async_trait]
impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> io::Result<CommandResult> {
        match operations::list(ctx.tree, ctx.session) {
            Ok(names) => {
                let mut stdout = String::new();
                for name in names {
                    stdout.push_str(&name);
                    stdout.push('\n');
                }
                Ok(CommandResult::success(stdout))
            }
            Err(e) => Ok(ctx.fs_failure(&e, MessageKey::DirectoryNotFound)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::Fixture;
    use crate::fs::operations::create_file;
    use crate::fs::NodePath;

    #[tokio::test]
    async fn test_ls_home() {
        let mut fx = Fixture::new();
        let result = fx.run(&LsCommand, "").await;
        assert_eq!(result.stdout, "documents\npictures\ndownloads\n");
        assert_eq!(result.exit_code, 0);
    }

    #[tokio::test]
    async fn test_ls_root() {
        let mut fx = Fixture::new();
        operations::change_directory(&fx.tree, &mut fx.session, "/").unwrap();
        let result = fx.run(&LsCommand, "").await;
        assert_eq!(result.stdout, "home\nsystem\n");
    }

    #[tokio::test]
    async fn test_ls_empty_directory() {
        let mut fx = Fixture::new();
        operations::change_directory(&fx.tree, &mut fx.session, "documents").unwrap();
        let result = fx.run(&LsCommand, "").await;
        assert_eq!(result.stdout, "");
    }

    #[tokio::test]
    async fn test_ls_insertion_order() {
        let mut fx = Fixture::new();
        let cwd = NodePath::from_segments(["home", "user"]);
        create_file(&mut fx.tree, &cwd, "b.txt").unwrap();
        create_file(&mut fx.tree, &cwd, "a.txt").unwrap();
        let result = fx.run(&LsCommand, "").await;
        assert_eq!(result.stdout, "documents\npictures\ndownloads\nb.txt\na.txt\n");
    }
}
