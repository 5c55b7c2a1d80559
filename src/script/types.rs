use async_trait::async_trait;
use thiserror::Error;

/// Errors reported by a script executor. The message is shown to the user
/// verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("script execution is disabled")]
    Disabled,

    #[error("line {line}: unsupported statement '{statement}'")]
    Unsupported { line: usize, statement: String },

    #[error("line {line}: {message}")]
    Raised { line: usize, message: String },

    #[error("maximum statement count ({limit}) exceeded")]
    TooManyStatements { limit: u64 },

    #[error("maximum output size ({limit} bytes) exceeded")]
    OutputTooLarge { limit: usize },
}

/// Resource limits for script execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLimits {
    /// Maximum number of statements executed per run
    pub max_statements: u64,
    /// Maximum number of output bytes per run
    pub max_output_bytes: usize,
}

impl Default for ScriptLimits {
    fn default() -> Self {
        Self {
            max_statements: 1_000,
            max_output_bytes: 64 * 1024,
        }
    }
}

/// Runs the text stored in a file. This is a trust boundary: implementations
/// must never hand the source to a host interpreter.
#[async_trait]
pub trait ScriptExecutor: Send + Sync {
    /// Execute `source` and return its output.
    async fn execute(&self, source: &str) -> Result<String, ScriptError>;
}

/// Executor used when scripts are not enabled. Every run fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledExecutor;

#[async_trait]
impl ScriptExecutor for DisabledExecutor {
    async fn execute(&self, _source: &str) -> Result<String, ScriptError> {
        Err(ScriptError::Disabled)
    }
}
