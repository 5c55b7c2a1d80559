use async_trait::async_trait;
use std::io;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::i18n::MessageKey;

pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &'static str { "help" }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> io::Result<CommandResult> {
        let mut stdout = ctx.message(MessageKey::HelpHeader, &[]);
        stdout.push('\n');
        stdout.push_str(&ctx.message(MessageKey::HelpBody, &[]));
        stdout.push('\n');
        Ok(CommandResult::success(stdout))
    }
}
