use async_trait::async_trait;
use std::io;

use crate::commands::{Command, CommandContext, CommandResult, Flow};
use crate::i18n::MessageKey;

pub struct LogoutCommand;

#[async_trait]
impl Command for LogoutCommand {
    fn name(&self) -> &'static str { "logout" }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> io::Result<CommandResult> {
        let text = ctx.message(MessageKey::LoggingOut, &[]);
        Ok(CommandResult::line(text).with_flow(Flow::Logout))
    }
}
