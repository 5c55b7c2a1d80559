use async_trait::async_trait;
use std::io;

use crate::commands::{Command, CommandContext, CommandResult, Syntax};
use crate::fs::operations;
use crate::i18n::MessageKey;

pub struct CdCommand;

#[async_trait]
impl Command for CdCommand {
    fn name(&self) -> &'static str { "cd" }

    fn syntax(&self) -> Syntax { Syntax::Argument }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> io::Result<CommandResult> {
        let path = ctx.arg.trim();
        match operations::change_directory(ctx.tree, ctx.session, path) {
            Ok(()) => Ok(CommandResult::success(String::new())),
            Err(e) => Ok(ctx.fs_failure(&e, MessageKey::DirectoryNotFound)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::Fixture;

    #[tokio::test]
    async fn test_cd_relative_and_absolute() {
        let mut fx = Fixture::new();
        let result = fx.run(&CdCommand, "documents").await;
        assert_eq!(result.stdout, "");
        assert_eq!(fx.cwd(), "/home/user/documents");

        fx.run(&CdCommand, "/system/logs").await;
        assert_eq!(fx.cwd(), "/system/logs");

        fx.run(&CdCommand, "/").await;
        assert_eq!(fx.cwd(), "/");
    }

    #[tokio::test]
    async fn test_cd_missing_keeps_cwd() {
        let mut fx = Fixture::new();
        let result = fx.run(&CdCommand, "nowhere").await;
        assert_eq!(result.stdout, "Directory 'nowhere' does not exist.\n");
        assert_eq!(result.exit_code, 1);
        assert_eq!(fx.cwd(), "/home/user");
    }

    #[tokio::test]
    async fn test_cd_into_file() {
        let mut fx = Fixture::new();
        let cwd = fx.session.current_path().clone();
        operations::create_file(&mut fx.tree, &cwd, "notes.txt").unwrap();
        let result = fx.run(&CdCommand, "notes.txt").await;
        assert_eq!(result.stdout, "'notes.txt' is not a directory.\n");
        assert_eq!(fx.cwd(), "/home/user");
    }

    #[tokio::test]
    async fn test_cd_trims_argument() {
        let mut fx = Fixture::new();
        fx.run(&CdCommand, " pictures ").await;
        assert_eq!(fx.cwd(), "/home/user/pictures");
    }
}
