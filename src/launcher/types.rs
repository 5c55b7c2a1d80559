use async_trait::async_trait;
use thiserror::Error;

/// Launcher errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LaunchError {
    #[error("opening '{url}' is not permitted")]
    NotAllowed { url: String },

    #[error("invalid allow-list entry: {0}")]
    InvalidAllowList(String),

    #[error("no opener available on {platform}")]
    Unsupported { platform: String },

    #[error("failed to start '{program}': {message}")]
    Spawn { program: String, message: String },

    #[error("'{program}' exited with {status}")]
    Exited { program: String, status: String },
}

/// Opens external resources, such as a web page, outside the console.
#[async_trait]
pub trait ExternalLauncher: Send + Sync {
    async fn open(&self, url: &str) -> Result<(), LaunchError>;
}
