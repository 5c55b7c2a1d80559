// src/commands/edit/mod.rs
use async_trait::async_trait;
use std::io;
use tracing::debug;

use crate::commands::{Command, CommandContext, CommandResult, Syntax};
use crate::fs::operations;
use crate::i18n::MessageKey;

/// Line that ends multi-line input, compared case-insensitively after trimming.
pub const EDIT_SENTINEL: &str = "END";

/// `edit <name>`: replaces a file's content with the lines typed until
/// [`EDIT_SENTINEL`]. Lines are joined with `\n`, with no trailing newline.
pub struct EditCommand;

fn is_sentinel(line: &str) -> bool {
    line.trim().to_uppercase() == EDIT_SENTINEL
}

#[async_trait]
impl Command for EditCommand {
    fn name(&self) -> &'static str {
        "edit"
    }

    fn syntax(&self) -> Syntax {
        Syntax::Argument
    }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> io::Result<CommandResult> {
        let name = ctx.arg.trim().to_string();
        let cwd = ctx.session.current_path().clone();
        if let Err(e) = operations::locate_file(ctx.tree, &cwd, &name) {
            return Ok(ctx.fs_failure(&e, MessageKey::FileNotFound));
        }

        let instructions = ctx.message(MessageKey::EditInstructions, &[("sentinel", EDIT_SENTINEL)]);
        ctx.terminal.write_line(&instructions)?;

        let mut lines = Vec::new();
        loop {
            match ctx.terminal.read_line()? {
                Some(line) if is_sentinel(&line) => break,
                Some(line) => lines.push(line),
                None => {
                    debug!(file = %name, "input ended during edit");
                    let text = ctx.message(
                        MessageKey::EditAborted,
                        &[("sentinel", EDIT_SENTINEL), ("name", &name)],
                    );
                    return Ok(CommandResult::error_line(text));
                }
            }
        }

        match operations::edit_file(ctx.tree, &cwd, &name, lines.join("\n")) {
            Ok(()) => {
                let text = ctx.message(MessageKey::FileUpdated, &[("name", &name)]);
                Ok(CommandResult::line(text))
            }
            Err(e) => Ok(ctx.fs_failure(&e, MessageKey::FileNotFound)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::Fixture;

    fn with_file(fx: &mut Fixture, content: &str) {
        let cwd = fx.session.current_path().clone();
        operations::create_file(&mut fx.tree, &cwd, "notes.txt").unwrap();
        operations::edit_file(&mut fx.tree, &cwd, "notes.txt", content.to_string()).unwrap();
    }

    fn content(fx: &Fixture) -> String {
        operations::view_file(&fx.tree, fx.session.current_path(), "notes.txt").unwrap()
    }

    #[test]
    fn test_sentinel_matching() {
        assert!(is_sentinel("END"));
        assert!(is_sentinel("  end "));
        assert!(!is_sentinel("ENDING"));
        assert!(!is_sentinel(""));
    }

    #[tokio::test]
    async fn test_edit_replaces_content() {
        let mut fx = Fixture::new().input(["hello", "world", "END", "ls"]);
        with_file(&mut fx, "old");

        let result = fx.run(&EditCommand, "notes.txt").await;
        assert_eq!(result.stdout, "File 'notes.txt' updated.\n");
        assert_eq!(content(&fx), "hello\nworld");
        assert_eq!(fx.terminal.remaining_input(), 1);
        assert!(fx.terminal.output().contains("type 'END' on a new line"));
    }

    #[tokio::test]
    async fn test_edit_lowercase_sentinel_and_empty_body() {
        let mut fx = Fixture::new().input(["end"]);
        with_file(&mut fx, "old");
        fx.run(&EditCommand, "notes.txt").await;
        assert_eq!(content(&fx), "");
    }

    #[tokio::test]
    async fn test_edit_keeps_blank_lines() {
        let mut fx = Fixture::new().input(["a", "", "b", "End"]);
        with_file(&mut fx, "");
        fx.run(&EditCommand, "notes.txt").await;
        assert_eq!(content(&fx), "a\n\nb");
    }

    #[tokio::test]
    async fn test_edit_eof_aborts() {
        let mut fx = Fixture::new().input(["half"]);
        with_file(&mut fx, "old");
        let result = fx.run(&EditCommand, "notes.txt").await;
        assert_eq!(result.exit_code, 1);
        assert_eq!(content(&fx), "old");
    }

    #[tokio::test]
    async fn test_edit_missing_reads_nothing() {
        let mut fx = Fixture::new().input(["text", "END"]);
        let result = fx.run(&EditCommand, "ghost.txt").await;
        assert_eq!(result.stdout, "File 'ghost.txt' does not exist.\n");
        assert_eq!(fx.terminal.remaining_input(), 2);
    }

    #[tokio::test]
    async fn test_edit_directory() {
        let mut fx = Fixture::new().input(["END"]);
        let result = fx.run(&EditCommand, "documents").await;
        assert_eq!(result.stdout, "'documents' is a directory.\n");
        assert_eq!(fx.terminal.remaining_input(), 1);
    }
}
