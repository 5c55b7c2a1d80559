//! Host Information
//!
//! Backs the `sysinfo` and `devices` verbs. Host facts come from the
//! `sysinfo` crate with the Rust target constants as fallback. The device
//! list is simulated.

use std::env::consts;

use sysinfo::System;

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Facts about the machine the console runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    pub os_name: String,
    pub os_release: Option<String>,
    pub platform: String,
    pub processor: String,
    pub version: String,
    pub total_ram_bytes: Option<u64>,
    pub available_ram_bytes: Option<u64>,
}

impl HostInfo {
    /// `Linux 6.1.0`, or just the OS name when the release is unknown.
    pub fn operating_system(&self) -> String {
        match &self.os_release {
            Some(release) => format!("{} {}", self.os_name, release),
            None => self.os_name.clone(),
        }
    }
}

/// Round a byte count to whole gibibytes, e.g. `16 GB`.
pub fn format_gb(bytes: u64) -> String {
    format!("{} GB", (bytes as f64 / GIB).round() as u64)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Usb,
    Network,
    Graphics,
    Peripheral,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub kind: DeviceKind,
    pub name: String,
}

/// Source of host information.
pub trait SystemInfoProvider: Send + Sync {
    fn host_info(&self) -> HostInfo;
    fn devices(&self) -> Vec<Device>;
}

/// Queries the real host through `sysinfo`; the device list is fixed.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostSystemInfo;

impl SystemInfoProvider for HostSystemInfo {
    fn host_info(&self) -> HostInfo {
        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_cpu();

        let os_name = System::name().unwrap_or_else(|| consts::OS.to_string());
        let os_release = System::kernel_version().filter(|s| !s.is_empty());
        let platform = match System::os_version().filter(|s| !s.is_empty()) {
            Some(version) => format!("{}-{}-{}", os_name, version, consts::ARCH),
            None => format!("{}-{}", os_name, consts::ARCH),
        };
        let processor = sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty())
            .unwrap_or_else(|| consts::ARCH.to_string());

        HostInfo {
            os_name,
            os_release,
            platform,
            processor,
            version: env!("CARGO_PKG_VERSION").to_string(),
            total_ram_bytes: known(sys.total_memory()),
            available_ram_bytes: known(sys.available_memory()),
        }
    }

    fn devices(&self) -> Vec<Device> {
        [
            (DeviceKind::Usb, "Flash Drive"),
            (DeviceKind::Network, "Ethernet"),
            (DeviceKind::Graphics, "NVIDIA GeForce RTX 3080"),
            (DeviceKind::Peripheral, "Logitech Keyboard"),
        ]
        .into_iter()
        .map(|(kind, name)| Device { kind, name: name.to_string() })
        .collect()
    }
}

/// `sysinfo` reports zero where a platform has no figure.
fn known(bytes: u64) -> Option<u64> {
    (bytes > 0).then_some(bytes)
}
