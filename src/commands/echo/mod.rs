// src/commands/echo/mod.rs
use async_trait::async_trait;
use std::io;

use crate::commands::{Command, CommandContext, CommandResult, Syntax};

/// `echo <text>`: prints the argument exactly as typed.
pub struct EchoCommand;

#[async_trait]
impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn syntax(&self) -> Syntax {
        Syntax::Argument
    }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> io::Result<CommandResult> {
        Ok(CommandResult::line(ctx.arg.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::Fixture;

    #[tokio::test]
    async fn test_echo_simple_text() {
        let mut fx = Fixture::new();
        let result = fx.run(&EchoCommand, "hello world").await;
        assert_eq!(result.stdout, "hello world\n");
        assert_eq!(result.exit_code, 0);
    }

    #[tokio::test]
    async fn test_echo_keeps_spacing_and_case() {
        let mut fx = Fixture::new();
        let result = fx.run(&EchoCommand, "  Mixed   CASE ").await;
        assert_eq!(result.stdout, "  Mixed   CASE \n");
    }

    #[tokio::test]
    async fn test_echo_leaves_namespace_alone() {
        let mut fx = Fixture::new();
        let before = fx.tree.clone();
        fx.run(&EchoCommand, "x").await;
        assert_eq!(fx.tree, before);
        assert_eq!(fx.cwd(), "/home/user");
    }
}
