use async_trait::async_trait;
use std::io;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::host::DeviceKind;
use crate::i18n::MessageKey;

pub struct DevicesCommand;

fn kind_key(kind: DeviceKind) -> MessageKey {
    match kind {
        DeviceKind::Usb => MessageKey::DeviceUsb,
        DeviceKind::Network => MessageKey::DeviceNetwork,
        DeviceKind::Graphics => MessageKey::DeviceGraphics,
        DeviceKind::Peripheral => MessageKey::DevicePeripheral,
    }
}

#[async_trait]
impl Command for DevicesCommand {
    fn name(&self) -> &'static str { "devices" }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> io::Result<CommandResult> {
        let mut stdout = format!("\n{}\n", ctx.message(MessageKey::DevicesHeader, &[]));
        for (i, device) in ctx.services.sysinfo.devices().into_iter().enumerate() {
            let kind = ctx.message(kind_key(device.kind), &[]);
            stdout.push_str(&format!("{}. {}: {}\n", i + 1, kind, device.name));
        }
        stdout.push('\n');
        Ok(CommandResult::success(stdout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::Fixture;
    use crate::i18n::Locale;

    #[tokio::test]
    async fn test_devices_list() {
        let mut fx = Fixture::new();
        let result = fx.run(&DevicesCommand, "").await;
        assert_eq!(
            result.stdout,
            "\n--- Connected Devices ---\n\
             1. USB Device: Flash Drive\n\
             2. Network Adapter: Ethernet\n\
             3. Graphics Card: NVIDIA GeForce RTX 3080\n\
             4. Peripheral: Logitech Keyboard\n\n"
        );
    }

    #[tokio::test]
    async fn test_devices_serbian_labels() {
        let mut fx = Fixture::with_locale(Locale::Serbian);
        let result = fx.run(&DevicesCommand, "").await;
        assert!(result.stdout.contains("3. Grafička kartica: NVIDIA GeForce RTX 3080\n"));
    }
}
