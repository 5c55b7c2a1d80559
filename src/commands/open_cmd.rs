use async_trait::async_trait;
use std::io;
use tracing::warn;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::i18n::MessageKey;
use crate::launcher::GOOGLE_URL;

/// `open google`: asks the external launcher to open the search page.
pub struct OpenGoogleCommand;

#[async_trait]
impl Command for OpenGoogleCommand {
    fn name(&self) -> &'static str { "open google" }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> io::Result<CommandResult> {
        match ctx.services.launcher.open(GOOGLE_URL).await {
            Ok(()) => Ok(CommandResult::line(ctx.message(MessageKey::GoogleOpened, &[]))),
            Err(e) => {
                warn!(error = %e, "could not open browser");
                let text = ctx.message(MessageKey::GoogleOpenFailed, &[("error", &e.to_string())]);
                Ok(CommandResult::error_line(text))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::Fixture;
    use crate::launcher::{ExternalLauncher, LaunchError};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingLauncher {
        opened: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ExternalLauncher for RecordingLauncher {
        async fn open(&self, url: &str) -> Result<(), LaunchError> {
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_open_google() {
        let launcher = Arc::new(RecordingLauncher::default());
        let mut fx = Fixture::new();
        fx.services.launcher = launcher.clone();

        let result = fx.run(&OpenGoogleCommand, "").await;
        assert_eq!(result.stdout, "Google opened in your default browser.\n");
        assert_eq!(*launcher.opened.lock().unwrap(), ["https://www.google.com"]);
    }

    #[tokio::test]
    async fn test_open_refused() {
        let mut fx = Fixture::new();
        let result = fx.run(&OpenGoogleCommand, "").await;
        assert_eq!(result.exit_code, 1);
        assert_eq!(
            result.stdout,
            "Failed to open Google: opening 'https://www.google.com' is not permitted\n"
        );
    }
}
