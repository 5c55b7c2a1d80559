use async_trait::async_trait;
use std::io;

use crate::commands::{Command, CommandContext, CommandResult, Syntax};
use crate::fs::operations;
use crate::i18n::MessageKey;

pub struct RmdirCommand;

#[async_trait]
impl Command for RmdirCommand {
    fn name(&self) -> &'static str { "rmdir" }

    fn syntax(&self) -> Syntax { Syntax::Argument }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> io::Result<CommandResult> {
        let name = ctx.arg.trim().to_string();
        let cwd = ctx.session.current_path().clone();
        match operations::remove_directory(ctx.tree, &cwd, &name) {
            Ok(()) => {
                let text = ctx.message(MessageKey::DirectoryRemoved, &[("name", &name)]);
                Ok(CommandResult::line(text))
            }
            Err(e) => Ok(ctx.fs_failure(&e, MessageKey::DirectoryNotFound)),
        }
    }
}
