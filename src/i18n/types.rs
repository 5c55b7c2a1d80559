//! Localization Types
//!
//! Locales, message keys, and the translator capability.

use serde::Deserialize;

/// Display language chosen at boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    #[serde(alias = "en")]
    #[value(alias = "en")]
    English,
    #[serde(alias = "sr")]
    #[value(alias = "sr")]
    Serbian,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::English, Locale::Serbian];

    /// Name shown in the language menu.
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::English => "English",
            Locale::Serbian => "Serbian",
        }
    }
}

/// Every user-visible message the console renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    // boot
    ChooseSystemName,
    SystemNameOption,
    InvalidChoice,
    ChooseLanguage,
    LanguageOption,
    LanguageDefaulted,
    Booting,
    SystemLoaded,
    Welcome,

    // menu and accounts
    MainMenu,
    MenuOptions,
    MenuPrompt,
    InvalidOption,
    UsernamePrompt,
    PasswordPrompt,
    NewUsernamePrompt,
    NewPasswordPrompt,
    ConfirmPasswordPrompt,
    LoginSuccess,
    LoginFailure,
    AccountCreated,
    UsernameExists,
    PasswordMismatch,
    InvalidUsername,
    AccountStoreFailure,

    // session
    SessionWelcome,
    UnknownCommand,
    ShutdownMessage,
    LoggingOut,
    HelpHeader,
    HelpBody,

    // namespace
    DirectoryNotFound,
    FileNotFound,
    EntryNotFound,
    AlreadyExists,
    IsADirectory,
    NotADirectory,
    DirectoryNotEmpty,
    DirectoryInUse,
    InvalidName,
    FileCreated,
    DirectoryCreated,
    EntryRemoved,
    DirectoryRemoved,
    FileContentHeader,
    EditInstructions,
    FileUpdated,
    EditAborted,
    Running,
    ExecutionFailed,

    // host
    GoogleOpened,
    GoogleOpenFailed,
    SysinfoHeader,
    SysinfoOs,
    SysinfoPlatform,
    SysinfoProcessor,
    SysinfoVersion,
    SysinfoTotalRam,
    SysinfoAvailableRam,
    UnknownValue,
    DevicesHeader,
    DeviceUsb,
    DeviceNetwork,
    DeviceGraphics,
    DevicePeripheral,
}

impl MessageKey {
    /// Stable identifier used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::ChooseSystemName => "choose-system-name",
            MessageKey::SystemNameOption => "system-name-option",
            MessageKey::InvalidChoice => "invalid-choice",
            MessageKey::ChooseLanguage => "choose-language",
            MessageKey::LanguageOption => "language-option",
            MessageKey::LanguageDefaulted => "language-defaulted",
            MessageKey::Booting => "booting",
            MessageKey::SystemLoaded => "system-loaded",
            MessageKey::Welcome => "welcome",
            MessageKey::MainMenu => "main-menu",
            MessageKey::MenuOptions => "menu-options",
            MessageKey::MenuPrompt => "menu-prompt",
            MessageKey::InvalidOption => "invalid-option",
            MessageKey::UsernamePrompt => "username-prompt",
            MessageKey::PasswordPrompt => "password-prompt",
            MessageKey::NewUsernamePrompt => "new-username-prompt",
            MessageKey::NewPasswordPrompt => "new-password-prompt",
            MessageKey::ConfirmPasswordPrompt => "confirm-password-prompt",
            MessageKey::LoginSuccess => "login-success",
            MessageKey::LoginFailure => "login-failure",
            MessageKey::AccountCreated => "account-created",
            MessageKey::UsernameExists => "username-exists",
            MessageKey::PasswordMismatch => "password-mismatch",
            MessageKey::InvalidUsername => "invalid-username",
            MessageKey::AccountStoreFailure => "account-store-failure",
            MessageKey::SessionWelcome => "session-welcome",
            MessageKey::UnknownCommand => "unknown-command",
            MessageKey::ShutdownMessage => "shutdown-message",
            MessageKey::LoggingOut => "logging-out",
            MessageKey::HelpHeader => "help-header",
            MessageKey::HelpBody => "help-body",
            MessageKey::DirectoryNotFound => "directory-not-found",
            MessageKey::FileNotFound => "file-not-found",
            MessageKey::EntryNotFound => "entry-not-found",
            MessageKey::AlreadyExists => "already-exists",
            MessageKey::IsADirectory => "is-a-directory",
            MessageKey::NotADirectory => "not-a-directory",
            MessageKey::DirectoryNotEmpty => "directory-not-empty",
            MessageKey::DirectoryInUse => "directory-in-use",
            MessageKey::InvalidName => "invalid-name",
            MessageKey::FileCreated => "file-created",
            MessageKey::DirectoryCreated => "directory-created",
            MessageKey::EntryRemoved => "entry-removed",
            MessageKey::DirectoryRemoved => "directory-removed",
            MessageKey::FileContentHeader => "file-content-header",
            MessageKey::EditInstructions => "edit-instructions",
            MessageKey::FileUpdated => "file-updated",
            MessageKey::EditAborted => "edit-aborted",
            MessageKey::Running => "running",
            MessageKey::ExecutionFailed => "execution-failed",
            MessageKey::GoogleOpened => "google-opened",
            MessageKey::GoogleOpenFailed => "google-open-failed",
            MessageKey::SysinfoHeader => "sysinfo-header",
            MessageKey::SysinfoOs => "sysinfo-os",
            MessageKey::SysinfoPlatform => "sysinfo-platform",
            MessageKey::SysinfoProcessor => "sysinfo-processor",
            MessageKey::SysinfoVersion => "sysinfo-version",
            MessageKey::SysinfoTotalRam => "sysinfo-total-ram",
            MessageKey::SysinfoAvailableRam => "sysinfo-available-ram",
            MessageKey::UnknownValue => "unknown-value",
            MessageKey::DevicesHeader => "devices-header",
            MessageKey::DeviceUsb => "device-usb",
            MessageKey::DeviceNetwork => "device-network",
            MessageKey::DeviceGraphics => "device-graphics",
            MessageKey::DevicePeripheral => "device-peripheral",
        }
    }
}

/// Renders a message key in a locale, substituting `{param}` placeholders.
pub trait Translator: Send + Sync {
    fn render(&self, key: MessageKey, locale: Locale, params: &[(&str, &str)]) -> String;
}

/// Substitute `{name}` placeholders in a single pass.
///
/// Unknown placeholders are left as written; substituted values are never
/// rescanned.
pub fn fill(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match params.iter().find(|(k, _)| *k == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
