//! Application
//!
//! Boot sequence, main menu and the account flows around console sessions.
//! The namespace lives here, so it survives logout and is shared by every
//! session until the process exits.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::accounts::{self, validate_username, AccountError, AccountStore, FileAccountStore};
use crate::commands::Services;
use crate::config::{Config, ConfigError, SYSTEM_NAMES};
use crate::console::Terminal;
use crate::dispatcher::{CommandDispatcher, SessionEnd};
use crate::fs::NamespaceTree;
use crate::host::HostSystemInfo;
use crate::i18n::{Catalog, Locale, MessageKey};
use crate::launcher::SystemLauncher;
use crate::script::{DisabledExecutor, RestrictedExecutor, ScriptExecutor};
use crate::session::SessionState;

const BOX_WIDTH: usize = 50;
const BOOT_STEPS: u32 = 5;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// How the console stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// `shutdown` from a session.
    Shutdown,
    /// `Exit` from the main menu.
    MenuExit,
    /// Input ran out outside a session.
    EndOfInput,
}

pub struct Application {
    config: Config,
    tree: NamespaceTree,
    accounts: Arc<dyn AccountStore>,
    services: Services,
    dispatcher: CommandDispatcher,
}

impl Application {
    pub fn new(config: Config, accounts: Arc<dyn AccountStore>, services: Services) -> Self {
        Self {
            config,
            tree: NamespaceTree::seeded(),
            accounts,
            services,
            dispatcher: CommandDispatcher::default(),
        }
    }

    /// Wire the host implementations selected by `config`.
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        config.validate()?;
        let accounts = Arc::new(FileAccountStore::new(config.accounts_file.clone()));
        debug!(path = %accounts.path().display(), "account file");
        let executor: Arc<dyn ScriptExecutor> = if config.scripts.enabled {
            Arc::new(RestrictedExecutor::new(config.script_limits()))
        } else {
            Arc::new(DisabledExecutor)
        };
        let services = Services {
            translator: Arc::new(Catalog::new()),
            sysinfo: Arc::new(HostSystemInfo),
            launcher: Arc::new(SystemLauncher::new(config.allow_list()?)),
            executor,
        };
        Ok(Self::new(config, accounts, services))
    }

    pub fn tree(&self) -> &NamespaceTree {
        &self.tree
    }

    fn text(&self, key: MessageKey, locale: Locale, params: &[(&str, &str)]) -> String {
        self.services.translator.render(key, locale, params)
    }

    fn say(
        &self,
        terminal: &mut dyn Terminal,
        key: MessageKey,
        locale: Locale,
        params: &[(&str, &str)],
    ) -> io::Result<()> {
        terminal.write_line(&self.text(key, locale, params))
    }

    fn ask(&self, terminal: &mut dyn Terminal, key: MessageKey, locale: Locale) -> io::Result<Option<String>> {
        terminal.prompt(&self.text(key, locale, &[]))
    }

    /// Boot, then serve the main menu until exit or shutdown.
    pub async fn run(&mut self, terminal: &mut dyn Terminal) -> Result<ExitReason, AppError> {
        let Some(system_name) = self.choose_system_name(terminal)? else {
            return Ok(ExitReason::EndOfInput);
        };
        let Some(locale) = self.choose_locale(terminal)? else {
            return Ok(ExitReason::EndOfInput);
        };
        info!(system_name = %system_name, ?locale, "booting");

        self.boot_screen(terminal, &system_name, locale).await?;
        let reason = self.main_menu(terminal, &system_name, locale).await?;
        info!(?reason, "console stopped");
        Ok(reason)
    }

    fn choose_system_name(&self, terminal: &mut dyn Terminal) -> io::Result<Option<String>> {
        if let Some(name) = &self.config.system_name {
            return Ok(Some(name.clone()));
        }

        let locale = Locale::English;
        self.say(terminal, MessageKey::ChooseSystemName, locale, &[])?;
        for (i, name) in SYSTEM_NAMES.iter().enumerate() {
            terminal.write_line(&format!("{}. {}", i + 1, name))?;
        }

        let max = SYSTEM_NAMES.len().to_string();
        let prompt = self.text(MessageKey::SystemNameOption, locale, &[("max", &max)]);
        loop {
            let Some(answer) = terminal.prompt(&prompt)? else {
                return Ok(None);
            };
            match answer.trim().parse::<usize>() {
                Ok(n) if (1..=SYSTEM_NAMES.len()).contains(&n) => {
                    return Ok(Some(SYSTEM_NAMES[n - 1].to_string()));
                }
                _ => self.say(terminal, MessageKey::InvalidChoice, locale, &[])?,
            }
        }
    }

    fn choose_locale(&self, terminal: &mut dyn Terminal) -> io::Result<Option<Locale>> {
        if let Some(locale) = self.config.locale {
            return Ok(Some(locale));
        }

        let prompt_locale = Locale::English;
        terminal.write_line("")?;
        self.say(terminal, MessageKey::ChooseLanguage, prompt_locale, &[])?;
        for (i, locale) in Locale::ALL.iter().enumerate() {
            terminal.write_line(&format!("{}. {}", i + 1, locale.display_name()))?;
        }

        let Some(answer) = self.ask(terminal, MessageKey::LanguageOption, prompt_locale)? else {
            return Ok(None);
        };
        let locale = match answer.trim() {
            "1" => Locale::English,
            "2" => Locale::Serbian,
            _ => {
                self.say(terminal, MessageKey::LanguageDefaulted, prompt_locale, &[])?;
                Locale::English
            }
        };
        Ok(Some(locale))
    }

    async fn boot_screen(&self, terminal: &mut dyn Terminal, system_name: &str, locale: Locale) -> io::Result<()> {
        for line in boot_banner(system_name) {
            terminal.write_line(&line)?;
        }
        terminal.write_line("")?;
        self.say(terminal, MessageKey::Booting, locale, &[("system_name", system_name)])?;

        let delay = Duration::from_millis(self.config.boot_delay_ms);
        for step in 1..=BOOT_STEPS {
            tokio::time::sleep(delay).await;
            terminal.write_line(&format!("{}%", step * 100 / BOOT_STEPS))?;
        }

        self.say(terminal, MessageKey::SystemLoaded, locale, &[])?;
        tokio::time::sleep(delay).await;
        self.say(terminal, MessageKey::Welcome, locale, &[("system_name", system_name)])
    }

    async fn main_menu(
        &mut self,
        terminal: &mut dyn Terminal,
        system_name: &str,
        locale: Locale,
    ) -> io::Result<ExitReason> {
        loop {
            terminal.write_line("")?;
            self.say(terminal, MessageKey::MainMenu, locale, &[])?;
            self.say(terminal, MessageKey::MenuOptions, locale, &[])?;

            let Some(choice) = self.ask(terminal, MessageKey::MenuPrompt, locale)? else {
                debug!("end of input at main menu");
                terminal.write_line("")?;
                return Ok(ExitReason::EndOfInput);
            };

            match choice.trim() {
                "1" => {
                    if let Some(identity) = self.login_flow(terminal, locale).await? {
                        let end = self.start_session(terminal, identity, system_name, locale).await?;
                        if end == SessionEnd::Shutdown {
                            return Ok(ExitReason::Shutdown);
                        }
                    }
                }
                "2" => self.registration_flow(terminal, locale).await?,
                "3" => {
                    self.say(terminal, MessageKey::ShutdownMessage, locale, &[])?;
                    return Ok(ExitReason::MenuExit);
                }
                _ => self.say(terminal, MessageKey::InvalidOption, locale, &[])?,
            }
        }
    }

    /// Identity of the logged-in user, or `None` after a failed attempt.
    async fn login_flow(&self, terminal: &mut dyn Terminal, locale: Locale) -> io::Result<Option<String>> {
        let Some(username) = self.ask(terminal, MessageKey::UsernamePrompt, locale)? else {
            return Ok(None);
        };
        let Some(password) = self.ask(terminal, MessageKey::PasswordPrompt, locale)? else {
            return Ok(None);
        };
        let username = username.trim();

        match accounts::authenticate(self.accounts.as_ref(), username, &password).await {
            Ok(identity) => {
                self.say(terminal, MessageKey::LoginSuccess, locale, &[("username", &identity)])?;
                Ok(Some(identity))
            }
            Err(AccountError::InvalidCredential) => {
                self.say(terminal, MessageKey::LoginFailure, locale, &[])?;
                Ok(None)
            }
            Err(e) => {
                self.store_failure(terminal, locale, &e)?;
                Ok(None)
            }
        }
    }

    async fn registration_flow(&self, terminal: &mut dyn Terminal, locale: Locale) -> io::Result<()> {
        let username = loop {
            let Some(answer) = self.ask(terminal, MessageKey::NewUsernamePrompt, locale)? else {
                return Ok(());
            };
            let candidate = answer.trim().to_string();
            if validate_username(&candidate).is_err() {
                self.say(terminal, MessageKey::InvalidUsername, locale, &[])?;
                continue;
            }
            match accounts::username_taken(self.accounts.as_ref(), &candidate).await {
                Ok(false) => break candidate,
                Ok(true) => self.say(terminal, MessageKey::UsernameExists, locale, &[])?,
                Err(e) => return self.store_failure(terminal, locale, &e),
            }
        };

        loop {
            let Some(password) = self.ask(terminal, MessageKey::NewPasswordPrompt, locale)? else {
                return Ok(());
            };
            let Some(confirmation) = self.ask(terminal, MessageKey::ConfirmPasswordPrompt, locale)? else {
                return Ok(());
            };

            match accounts::create_account(self.accounts.as_ref(), &username, &password, &confirmation).await {
                Ok(()) => {
                    return self.say(terminal, MessageKey::AccountCreated, locale, &[("username", &username)]);
                }
                Err(AccountError::PasswordMismatch) => {
                    self.say(terminal, MessageKey::PasswordMismatch, locale, &[])?;
                }
                Err(AccountError::AlreadyExists { .. }) => {
                    return self.say(terminal, MessageKey::UsernameExists, locale, &[]);
                }
                Err(e) => return self.store_failure(terminal, locale, &e),
            }
        }
    }

    fn store_failure(&self, terminal: &mut dyn Terminal, locale: Locale, err: &AccountError) -> io::Result<()> {
        warn!(error = %err, "account store failure");
        self.say(terminal, MessageKey::AccountStoreFailure, locale, &[("error", &err.to_string())])
    }

    async fn start_session(
        &mut self,
        terminal: &mut dyn Terminal,
        identity: String,
        system_name: &str,
        locale: Locale,
    ) -> io::Result<SessionEnd> {
        let mut session = SessionState::new(&self.tree, identity, locale);
        self.say(terminal, MessageKey::SessionWelcome, locale, &[("username", session.identity())])?;

        let end = self
            .dispatcher
            .run_session(&mut self.tree, &mut session, terminal, &self.services, system_name)
            .await?;
        info!(user = session.identity(), ?end, "session ended");
        Ok(end)
    }
}

/// The framed system name shown while booting.
fn boot_banner(system_name: &str) -> [String; 5] {
    let inner = BOX_WIDTH - 2;
    let border = "#".repeat(BOX_WIDTH);
    let blank = format!("#{}#", " ".repeat(inner));
    let title = format!("#{:^inner$}#", system_name);
    [border.clone(), blank.clone(), title, blank, border]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::MemoryAccountStore;
    use crate::console::ScriptedTerminal;

    fn quiet_config() -> Config {
        Config {
            boot_delay_ms: 0,
            ..Config::default()
        }
    }

    fn app_with(config: Config) -> (Application, Arc<MemoryAccountStore>) {
        let store = Arc::new(MemoryAccountStore::new());
        let app = Application::new(config, store.clone(), Services::default());
        (app, store)
    }

    async fn drive(app: &mut Application, lines: &[&str]) -> (ExitReason, ScriptedTerminal) {
        let mut terminal = ScriptedTerminal::new(lines.iter().copied());
        let reason = app.run(&mut terminal).await.unwrap();
        (reason, terminal)
    }

    #[test]
    fn test_boot_banner() {
        let banner = boot_banner("HeliosOS");
        assert!(banner.iter().all(|line| line.chars().count() == BOX_WIDTH));
        assert_eq!(banner[2], format!("#{}HeliosOS{}#", " ".repeat(20), " ".repeat(20)));
    }

    #[tokio::test]
    async fn test_register_login_and_logout() {
        let (mut app, store) = app_with(quiet_config());
        let (reason, terminal) = drive(
            &mut app,
            &[
                "2", "1", // AstraOS, English
                "2", "alice", "secret1", "secret1", // create account
                "1", "alice", "secret1", // login
                "ls", "logout", "3",
            ],
        )
        .await;

        assert_eq!(reason, ExitReason::MenuExit);
        assert_eq!(store.len().await, 1);
        let out = terminal.output();
        assert!(out.contains("Booting AstraOS..."));
        assert!(out.contains("20%\n40%\n60%\n80%\n100%\n"));
        assert!(out.contains("Account for user 'alice' created successfully!"));
        assert!(out.contains("Successfully logged in as 'alice'!"));
        assert!(out.contains("alice@AstraOS:/home/user$ documents\npictures\ndownloads\n"));
        assert!(out.ends_with("Shutting down...\n"));
    }

    #[tokio::test]
    async fn test_wrong_password() {
        let config = Config {
            system_name: Some("HeliosOS".to_string()),
            locale: Some(Locale::English),
            ..quiet_config()
        };
        let (mut app, store) = app_with(config);
        accounts::create_account(store.as_ref(), "alice", "secret1", "secret1").await.unwrap();

        let (_, terminal) = drive(&mut app, &["1", "alice", "nope", "3"]).await;
        assert!(terminal.output().contains("Invalid username or password."));
        assert!(!terminal.output().contains("alice@HeliosOS"));
    }

    #[tokio::test]
    async fn test_registration_retries() {
        let config = Config {
            system_name: Some("HeliosOS".to_string()),
            locale: Some(Locale::English),
            ..quiet_config()
        };
        let (mut app, store) = app_with(config);
        accounts::create_account(store.as_ref(), "alice", "x", "x").await.unwrap();

        let (_, terminal) = drive(
            &mut app,
            &["2", "alice", "  ", "bob", "a", "b", "c", "c", "3"],
        )
        .await;
        let out = terminal.output();
        assert!(out.contains("Username already exists. Please try again."));
        assert!(out.contains("Username must not be empty"));
        assert!(out.contains("Passwords do not match. Please try again."));
        assert!(out.contains("Account for user 'bob' created successfully!"));
        assert_eq!(store.len().await, 2);
        assert!(accounts::authenticate(store.as_ref(), "bob", "c").await.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_choices_reprompt() {
        let (mut app, _) = app_with(quiet_config());
        let (reason, terminal) = drive(&mut app, &["9", "x", "4", "fr", "7", "3"]).await;
        assert_eq!(reason, ExitReason::MenuExit);
        let out = terminal.output();
        assert_eq!(out.matches("Invalid choice. Please try again.").count(), 2);
        assert!(out.contains("Invalid choice. Defaulting to English."));
        assert!(out.contains("Booting OrionOS..."));
        assert!(out.contains("Invalid option. Please try again."));
    }

    #[tokio::test]
    async fn test_serbian_session() {
        let (mut app, store) = app_with(quiet_config());
        accounts::create_account(store.as_ref(), "marko", "pw", "pw").await.unwrap();

        let (_, terminal) = drive(&mut app, &["1", "2", "1", "marko", "pw", "cd nigde", "logout", "3"]).await;
        let out = terminal.output();
        assert!(out.contains("Pokrećemo HeliosOS..."));
        assert!(out.contains("Direktorijum 'nigde' ne postoji."));
        assert!(out.ends_with("Isključujemo sistem...\n"));
    }

    #[tokio::test]
    async fn test_namespace_survives_logout() {
        let config = Config {
            system_name: Some("HeliosOS".to_string()),
            locale: Some(Locale::English),
            ..quiet_config()
        };
        let (mut app, store) = app_with(config);
        accounts::create_account(store.as_ref(), "alice", "pw", "pw").await.unwrap();

        let (_, terminal) = drive(
            &mut app,
            &["1", "alice", "pw", "mkdir projects", "cd projects", "logout", "1", "alice", "pw", "ls", "logout", "3"],
        )
        .await;
        assert!(terminal.output().contains("alice@HeliosOS:/home/user$ documents\npictures\ndownloads\nprojects\n"));
    }

    #[tokio::test]
    async fn test_shutdown_from_session() {
        let config = Config {
            system_name: Some("NebulaOS".to_string()),
            locale: Some(Locale::English),
            ..quiet_config()
        };
        let (mut app, store) = app_with(config);
        accounts::create_account(store.as_ref(), "alice", "pw", "pw").await.unwrap();

        let (reason, terminal) = drive(&mut app, &["1", "alice", "pw", "shutdown", "3"]).await;
        assert_eq!(reason, ExitReason::Shutdown);
        assert_eq!(terminal.remaining_input(), 1);
    }

    #[tokio::test]
    async fn test_end_of_input() {
        let (mut app, _) = app_with(quiet_config());
        let (reason, _) = drive(&mut app, &[]).await;
        assert_eq!(reason, ExitReason::EndOfInput);

        let (mut app, _) = app_with(quiet_config());
        let (reason, _) = drive(&mut app, &["1", "1"]).await;
        assert_eq!(reason, ExitReason::EndOfInput);
    }

    #[tokio::test]
    async fn test_from_config_uses_account_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.txt");
        let config = Config {
            system_name: Some("HeliosOS".to_string()),
            locale: Some(Locale::English),
            accounts_file: path.clone(),
            ..quiet_config()
        };
        let mut app = Application::from_config(config).unwrap();
        let (_, _) = drive(&mut app, &["2", "alice", "secret1", "secret1", "3"]).await;

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "alice:5b11618c2e44027877d0cd0921ed166b9f176f50587fc91e7534dd2946db77d6\n"
        );
        assert!(app.tree().directory(&crate::fs::NodePath::root()).is_ok());
    }
}
