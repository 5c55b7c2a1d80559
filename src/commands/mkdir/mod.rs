// src/commands/mkdir/mod.rs
use async_trait::async_trait;
use std::io;

use crate::commands::{Command, CommandContext, CommandResult, Syntax};
use crate::fs::operations;
use crate::i18n::MessageKey;

/// `mkdir <name>`: creates one empty directory. Parents must exist.
pub struct MkdirCommand;

#[async_trait]
impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn syntax(&self) -> Syntax {
        Syntax::Argument
    }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> io::Result<CommandResult> {
        let name = ctx.arg.trim();
        let cwd = ctx.session.current_path().clone();
        match operations::create_directory(ctx.tree, &cwd, name) {
            Ok(location) => {
                let text = ctx.message(MessageKey::DirectoryCreated, &[("name", &location.name)]);
                Ok(CommandResult::line(text))
            }
            Err(e) => Ok(ctx.fs_failure(&e, MessageKey::DirectoryNotFound)),
        }
    }
}
