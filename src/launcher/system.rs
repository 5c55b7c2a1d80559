use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

use super::allow_list::AllowList;
use super::types::*;

/// Program and leading arguments that open a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Opener {
    program: String,
    args: Vec<String>,
}

impl Opener {
    fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// The default handler on this platform.
    fn platform() -> Option<Self> {
        match std::env::consts::OS {
            "linux" | "freebsd" | "openbsd" | "netbsd" => Some(Self::new("xdg-open", &[])),
            "macos" => Some(Self::new("open", &[])),
            "windows" => Some(Self::new("cmd", &["/C", "start", ""])),
            _ => None,
        }
    }
}

/// Opens allow-listed URLs with the platform's default handler.
pub struct SystemLauncher {
    allow_list: AllowList,
    opener: Option<Opener>,
}

impl SystemLauncher {
    pub fn new(allow_list: AllowList) -> Self {
        Self { allow_list, opener: Opener::platform() }
    }

    /// A launcher that refuses every URL.
    pub fn disabled() -> Self {
        Self::new(AllowList::empty())
    }

    /// Open URLs with `program args.. <url>` instead of the platform handler.
    pub fn with_opener(mut self, program: &str, args: &[&str]) -> Self {
        self.opener = Some(Opener::new(program, args));
        self
    }
}

#[async_trait]
impl ExternalLauncher for SystemLauncher {
    async fn open(&self, url: &str) -> Result<(), LaunchError> {
        if !self.allow_list.permits(url) {
            debug!(url, "launch refused by allow-list");
            return Err(LaunchError::NotAllowed { url: url.to_string() });
        }

        let Opener { program, args } = self.opener.as_ref().ok_or_else(|| LaunchError::Unsupported {
            platform: std::env::consts::OS.to_string(),
        })?;
        let spawn_failed = |e: std::io::Error| LaunchError::Spawn {
            program: program.clone(),
            message: e.to_string(),
        };

        let mut child = Command::new(program)
            .args(args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(spawn_failed)?;
        // The handlers hand off to the desktop and exit; waiting reaps them.
        let status = child.wait().await.map_err(spawn_failed)?;
        if !status.success() {
            return Err(LaunchError::Exited {
                program: program.clone(),
                status: status.to_string(),
            });
        }
        info!(url, program = %program, "opened external resource");
        Ok(())
    }
}
