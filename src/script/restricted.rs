//! Restricted Script Executor
//!
//! A line-oriented evaluator with no access to the host, the namespace, or
//! the network. Supported statements:
//!
//! ```text
//! # comment
//! print hello world
//! print("quoted text")
//! echo text
//! fail something went wrong
//! ```

use async_trait::async_trait;
use tracing::debug;

use super::types::*;

pub struct RestrictedExecutor {
    limits: ScriptLimits,
}

impl RestrictedExecutor {
    pub fn new(limits: ScriptLimits) -> Self {
        Self { limits }
    }

    fn run(&self, source: &str) -> Result<String, ScriptError> {
        let mut output = String::new();
        let mut executed: u64 = 0;

        for (index, raw) in source.lines().enumerate() {
            let line = index + 1;
            let statement = raw.trim();
            if statement.is_empty() || statement.starts_with('#') {
                continue;
            }

            executed += 1;
            if executed > self.limits.max_statements {
                return Err(ScriptError::TooManyStatements { limit: self.limits.max_statements });
            }

            match parse_statement(statement) {
                Some(Statement::Print(text)) => {
                    if output.len() + text.len() + 1 > self.limits.max_output_bytes {
                        return Err(ScriptError::OutputTooLarge { limit: self.limits.max_output_bytes });
                    }
                    output.push_str(text);
                    output.push('\n');
                }
                Some(Statement::Fail(message)) => {
                    return Err(ScriptError::Raised { line, message: message.to_string() });
                }
                None => {
                    return Err(ScriptError::Unsupported { line, statement: statement.to_string() });
                }
            }
        }

        debug!(statements = executed, bytes = output.len(), "script finished");
        Ok(output)
    }
}

impl Default for RestrictedExecutor {
    fn default() -> Self {
        Self::new(ScriptLimits::default())
    }
}

#[async_trait]
impl ScriptExecutor for RestrictedExecutor {
    async fn execute(&self, source: &str) -> Result<String, ScriptError> {
        self.run(source)
    }
}

enum Statement<'a> {
    Print(&'a str),
    Fail(&'a str),
}

fn parse_statement(statement: &str) -> Option<Statement<'_>> {
    let (keyword, rest) = match statement.find(|c: char| c == ' ' || c == '(') {
        Some(pos) => (&statement[..pos], &statement[pos..]),
        None => (statement, ""),
    };

    match keyword {
        "print" | "echo" => Some(Statement::Print(argument(rest)?)),
        "fail" => Some(Statement::Fail(argument(rest)?)),
        _ => None,
    }
}

/// Argument text: ` text`, `(text)`, with one pair of matching quotes removed.
fn argument(rest: &str) -> Option<&str> {
    let text = if let Some(inner) = rest.strip_prefix('(') {
        inner.strip_suffix(')')?
    } else if rest.is_empty() {
        rest
    } else {
        rest.strip_prefix(' ')?
    };
    Some(unquote(text.trim()))
}

fn unquote(text: &str) -> &str {
    for quote in ['"', '\''] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            return &text[1..text.len() - 1];
        }
    }
    text
}

// ============================================================================
// Tests
// ============================================================================
