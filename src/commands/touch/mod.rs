// src/commands/touch/mod.rs
use async_trait::async_trait;
use std::io;

use crate::commands::{Command, CommandContext, CommandResult, Syntax};
use crate::fs::operations;
use crate::i18n::MessageKey;

/// `touch <name>`: creates an empty file. Existing entries are never
/// overwritten.
pub struct TouchCommand;

#[async_trait]
impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn syntax(&self) -> Syntax {
        Syntax::Argument
    }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> io::Result<CommandResult> {
        let name = ctx.arg.trim();
        let cwd = ctx.session.current_path().clone();
        match operations::create_file(ctx.tree, &cwd, name) {
            Ok(location) => {
                let text = ctx.message(MessageKey::FileCreated, &[("name", &location.name)]);
                Ok(CommandResult::line(text))
            }
            Err(e) => Ok(ctx.fs_failure(&e, MessageKey::DirectoryNotFound)),
        }
    }
}
