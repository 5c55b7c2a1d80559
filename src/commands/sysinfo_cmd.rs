use async_trait::async_trait;
use std::io;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::host::format_gb;
use crate::i18n::MessageKey;

pub struct SysinfoCommand;

#[async_trait]
impl Command for SysinfoCommand {
    fn name(&self) -> &'static str { "sysinfo" }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> io::Result<CommandResult> {
        let info = ctx.services.sysinfo.host_info();
        let unknown = ctx.message(MessageKey::UnknownValue, &[]);
        let ram = |bytes: Option<u64>| bytes.map(format_gb).unwrap_or_else(|| unknown.clone());

        let rows = [
            (MessageKey::SysinfoOs, info.operating_system()),
            (MessageKey::SysinfoPlatform, info.platform.clone()),
            (MessageKey::SysinfoProcessor, info.processor.clone()),
            (MessageKey::SysinfoVersion, info.version.clone()),
            (MessageKey::SysinfoTotalRam, ram(info.total_ram_bytes)),
            (MessageKey::SysinfoAvailableRam, ram(info.available_ram_bytes)),
        ];

        let mut stdout = format!("\n{}\n", ctx.message(MessageKey::SysinfoHeader, &[]));
        for (key, value) in rows {
            stdout.push_str(&ctx.message(key, &[("value", &value)]));
            stdout.push('\n');
        }
        stdout.push('\n');
        Ok(CommandResult::success(stdout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::Fixture;
    use crate::host::{Device, HostInfo, SystemInfoProvider};
    use std::sync::Arc;

    struct FixedHost;

    impl SystemInfoProvider for FixedHost {
        fn host_info(&self) -> HostInfo {
            HostInfo {
                os_name: "Linux".to_string(),
                os_release: Some("6.1.0".to_string()),
                platform: "Linux-6.1.0-x86_64-unix".to_string(),
                processor: "x86_64".to_string(),
                version: "0.1.0".to_string(),
                total_ram_bytes: Some(16 * 1024 * 1024 * 1024),
                available_ram_bytes: None,
            }
        }

        fn devices(&self) -> Vec<Device> {
            Vec::new()
        }
    }

    #[tokio::test]
    async fn test_sysinfo_report() {
        let mut fx = Fixture::new();
        fx.services.sysinfo = Arc::new(FixedHost);
        let result = fx.run(&SysinfoCommand, "").await;
        assert_eq!(
            result.stdout,
            "\n--- System Information ---\n\
             Operating System: Linux 6.1.0\n\
             Platform: Linux-6.1.0-x86_64-unix\n\
             Processor: x86_64\n\
             Shell Version: 0.1.0\n\
             Total RAM: 16 GB\n\
             Available RAM: unknown\n\n"
        );
    }
}
