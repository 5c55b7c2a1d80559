use async_trait::async_trait;
use std::io;

use crate::commands::{Command, CommandContext, CommandResult, Flow};
use crate::i18n::MessageKey;

pub struct ShutdownCommand;

#[async_trait]
impl Command for ShutdownCommand {
    fn name(&self) -> &'static str { "shutdown" }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> io::Result<CommandResult> {
        let text = ctx.message(MessageKey::ShutdownMessage, &[]);
        Ok(CommandResult::line(text).with_flow(Flow::Shutdown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::Fixture;
    use crate::i18n::Locale;

    #[tokio::test]
    async fn test_shutdown_stops_console() {
        let mut fx = Fixture::with_locale(Locale::Serbian);
        let result = fx.run(&ShutdownCommand, "").await;
        assert_eq!(result.flow, Flow::Shutdown);
        assert_eq!(result.stdout, "Isključujemo sistem...\n");
    }
}
