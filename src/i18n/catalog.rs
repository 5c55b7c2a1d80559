//! Built-in message catalog for English and Serbian.

use super::types::*;

/// Translator backed by the compiled-in catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    pub fn new() -> Self {
        Self
    }

    fn template(key: MessageKey, locale: Locale) -> &'static str {
        use Locale::{English as En, Serbian as Sr};
        use MessageKey::*;

        match (key, locale) {
            (ChooseSystemName, En) => "Choose system name:",
            (ChooseSystemName, Sr) => "Izaberite ime sistema:",
            (SystemNameOption, En) => "Option (1-{max}): ",
            (SystemNameOption, Sr) => "Opcija (1-{max}): ",
            (InvalidChoice, En) => "Invalid choice. Please try again.",
            (InvalidChoice, Sr) => "Nevažeći izbor. Molimo pokušajte ponovo.",
            (ChooseLanguage, En) => "Choose your language:",
            (ChooseLanguage, Sr) => "Izaberite jezik:",
            (LanguageOption, En) => "Option (1/2): ",
            (LanguageOption, Sr) => "Opcija (1/2): ",
            (LanguageDefaulted, En) => "Invalid choice. Defaulting to English.",
            (LanguageDefaulted, Sr) => "Nevažeći izbor. Koristi se engleski.",
            (Booting, En) => "Booting {system_name}...",
            (Booting, Sr) => "Pokrećemo {system_name}...",
            (SystemLoaded, En) => "System loaded successfully!",
            (SystemLoaded, Sr) => "Sistem je uspešno učitan!",
            (Welcome, En) => "Welcome to {system_name}!",
            (Welcome, Sr) => "Dobrodošli u {system_name}!",

            (MainMenu, En) => "Main Menu:",
            (MainMenu, Sr) => "Glavni Meni:",
            (MenuOptions, En) => "1. Login\n2. Create Account\n3. Exit",
            (MenuOptions, Sr) => "1. Prijavi se\n2. Kreiraj nalog\n3. Izlaz",
            (MenuPrompt, En) => "Option (1/2/3): ",
            (MenuPrompt, Sr) => "Opcija (1/2/3): ",
            (InvalidOption, En) => "Invalid option. Please try again.",
            (InvalidOption, Sr) => "Nevažeća opcija. Molimo pokušajte ponovo.",
            (UsernamePrompt, En) => "Username: ",
            (UsernamePrompt, Sr) => "Korisničko ime: ",
            (PasswordPrompt, En) => "Password: ",
            (PasswordPrompt, Sr) => "Lozinka: ",
            (NewUsernamePrompt, En) => "Enter username: ",
            (NewUsernamePrompt, Sr) => "Unesite korisničko ime: ",
            (NewPasswordPrompt, En) => "Enter password: ",
            (NewPasswordPrompt, Sr) => "Unesite lozinku: ",
            (ConfirmPasswordPrompt, En) => "Confirm password: ",
            (ConfirmPasswordPrompt, Sr) => "Potvrdite lozinku: ",
            (LoginSuccess, En) => "Successfully logged in as '{username}'!",
            (LoginSuccess, Sr) => "Uspešno ste se prijavili kao '{username}'!",
            (LoginFailure, En) => "Invalid username or password.",
            (LoginFailure, Sr) => "Nevažeće korisničko ime ili lozinka.",
            (AccountCreated, En) => "Account for user '{username}' created successfully!",
            (AccountCreated, Sr) => "Nalog za korisnika '{username}' je uspešno kreiran!",
            (UsernameExists, En) => "Username already exists. Please try again.",
            (UsernameExists, Sr) => "Ovo korisničko ime već postoji. Molimo pokušajte ponovo.",
            (PasswordMismatch, En) => "Passwords do not match. Please try again.",
            (PasswordMismatch, Sr) => "Lozinke se ne podudaraju. Molimo pokušajte ponovo.",
            (InvalidUsername, En) => "Username must not be empty or contain ':'. Please try again.",
            (InvalidUsername, Sr) => "Korisničko ime ne sme biti prazno niti sadržati ':'. Molimo pokušajte ponovo.",
            (AccountStoreFailure, En) => "Account storage error: {error}",
            (AccountStoreFailure, Sr) => "Greška skladišta naloga: {error}",

            (SessionWelcome, En) => "Welcome, {username}! Type 'help' for a list of commands.",
            (SessionWelcome, Sr) => "Dobrodošli, {username}! Unesite 'help' za listu komandi.",
            (UnknownCommand, En) => "Unknown command. Type 'help' for a list of commands.",
            (UnknownCommand, Sr) => "Nepoznata komanda. Unesite 'help' za listu komandi.",
            (ShutdownMessage, En) => "Shutting down...",
            (ShutdownMessage, Sr) => "Isključujemo sistem...",
            (LoggingOut, En) => "Logging out...",
            (LoggingOut, Sr) => "Odjavljujemo se...",
            (HelpHeader, En) => "--- Available Commands ---",
            (HelpHeader, Sr) => "--- Dostupne Komande ---",
            (HelpBody, En) => HELP_EN,
            (HelpBody, Sr) => HELP_SR,

            (DirectoryNotFound, En) => "Directory '{name}' does not exist.",
            (DirectoryNotFound, Sr) => "Direktorijum '{name}' ne postoji.",
            (FileNotFound, En) => "File '{name}' does not exist.",
            (FileNotFound, Sr) => "Fajl '{name}' ne postoji.",
            (EntryNotFound, En) => "File or directory '{name}' does not exist.",
            (EntryNotFound, Sr) => "Fajl ili direktorijum '{name}' ne postoji.",
            (AlreadyExists, En) => "File or directory '{name}' already exists.",
            (AlreadyExists, Sr) => "Fajl ili direktorijum '{name}' već postoji.",
            (IsADirectory, En) => "'{name}' is a directory.",
            (IsADirectory, Sr) => "'{name}' je direktorijum.",
            (NotADirectory, En) => "'{name}' is not a directory.",
            (NotADirectory, Sr) => "'{name}' nije direktorijum.",
            (DirectoryNotEmpty, En) => "Directory '{name}' is not empty.",
            (DirectoryNotEmpty, Sr) => "Direktorijum '{name}' nije prazan.",
            (DirectoryInUse, En) => "'{name}' contains the current directory and cannot be removed.",
            (DirectoryInUse, Sr) => "'{name}' sadrži trenutni direktorijum i ne može se obrisati.",
            (InvalidName, En) => "'{name}' is not a valid name.",
            (InvalidName, Sr) => "'{name}' nije ispravno ime.",
            (FileCreated, En) => "File '{name}' created.",
            (FileCreated, Sr) => "Fajl '{name}' je kreiran.",
            (DirectoryCreated, En) => "Directory '{name}' created.",
            (DirectoryCreated, Sr) => "Direktorijum '{name}' je kreiran.",
            (EntryRemoved, En) => "File or directory '{name}' removed.",
            (EntryRemoved, Sr) => "Fajl ili direktorijum '{name}' je obrisan.",
            (DirectoryRemoved, En) => "Directory '{name}' removed.",
            (DirectoryRemoved, Sr) => "Direktorijum '{name}' je obrisan.",
            (FileContentHeader, En) => "--- File Content ---",
            (FileContentHeader, Sr) => "--- Sadržaj Fajla ---",
            (EditInstructions, En) => "Enter content (type '{sentinel}' on a new line to finish):",
            (EditInstructions, Sr) => "Unesite sadržaj (unesite '{sentinel}' na novoj liniji da završite):",
            (FileUpdated, En) => "File '{name}' updated.",
            (FileUpdated, Sr) => "Fajl '{name}' je ažuriran.",
            (EditAborted, En) => "Input ended before '{sentinel}'; '{name}' was not changed.",
            (EditAborted, Sr) => "Unos je prekinut pre '{sentinel}'; '{name}' nije izmenjen.",
            (Running, En) => "Running '{name}'...",
            (Running, Sr) => "Pokrećem '{name}'...",
            (ExecutionFailed, En) => "Error running '{name}': {error}",
            (ExecutionFailed, Sr) => "Greška pri pokretanju '{name}': {error}",

            (GoogleOpened, En) => "Google opened in your default browser.",
            (GoogleOpened, Sr) => "Google je otvoren u vašem podrazumevanom pregledaču.",
            (GoogleOpenFailed, En) => "Failed to open Google: {error}",
            (GoogleOpenFailed, Sr) => "Neuspešno otvaranje Google-a: {error}",
            (SysinfoHeader, En) => "--- System Information ---",
            (SysinfoHeader, Sr) => "--- Informacije o sistemu ---",
            (SysinfoOs, En) => "Operating System: {value}",
            (SysinfoOs, Sr) => "Operativni sistem: {value}",
            (SysinfoPlatform, En) => "Platform: {value}",
            (SysinfoPlatform, Sr) => "Platforma: {value}",
            (SysinfoProcessor, En) => "Processor: {value}",
            (SysinfoProcessor, Sr) => "Procesor: {value}",
            (SysinfoVersion, En) => "Shell Version: {value}",
            (SysinfoVersion, Sr) => "Verzija ljuske: {value}",
            (SysinfoTotalRam, En) => "Total RAM: {value}",
            (SysinfoTotalRam, Sr) => "Ukupna RAM: {value}",
            (SysinfoAvailableRam, En) => "Available RAM: {value}",
            (SysinfoAvailableRam, Sr) => "Slobodna RAM: {value}",
            (UnknownValue, En) => "unknown",
            (UnknownValue, Sr) => "nepoznato",
            (DevicesHeader, En) => "--- Connected Devices ---",
            (DevicesHeader, Sr) => "--- Povezani uređaji ---",
            (DeviceUsb, En) => "USB Device",
            (DeviceUsb, Sr) => "USB uređaj",
            (DeviceNetwork, En) => "Network Adapter",
            (DeviceNetwork, Sr) => "Mrežni adapter",
            (DeviceGraphics, En) => "Graphics Card",
            (DeviceGraphics, Sr) => "Grafička kartica",
            (DevicePeripheral, En) => "Peripheral",
            (DevicePeripheral, Sr) => "Periferni uređaj",
        }
    }
}

impl Translator for Catalog {
    fn render(&self, key: MessageKey, locale: Locale, params: &[(&str, &str)]) -> String {
        fill(Self::template(key, locale), params)
    }
}

const HELP_EN: &str = "\
help - Show this help message
echo [text] - Display the entered text
logout - Log out of the system
shutdown - Shut down the system
ls - List contents of the current directory
cd [path] - Change the current directory
sysinfo - Show system information
devices - Show connected devices
touch [filename] - Create a new empty file
rm [filename] - Remove a file or directory
view [filename] - View the content of a file
edit [filename] - Edit the content of a file
run [filename] - Run a script from a file (sandboxed)
open google - Open Google in your default browser
mkdir [dirname] - Create a new directory
rmdir [dirname] - Remove a directory (must be empty)";

const HELP_SR: &str = "\
help - Prikaži ovu listu komandi
echo [text] - Prikazuje uneseni tekst
logout - Odjavljuje se iz sistema
shutdown - Isključuje sistem
ls - Prikazuje sadržaj trenutnog direktorijuma
cd [path] - Menja trenutni direktorijum
sysinfo - Prikazuje sistemske informacije
devices - Prikazuje listu povezanih uređaja
touch [filename] - Kreira novi prazan fajl
rm [filename] - Briše fajl ili direktorijum
view [filename] - Prikazuje sadržaj fajla
edit [filename] - Uređuje sadržaj fajla
run [filename] - Pokreće skriptu iz fajla (u zaštićenom okruženju)
open google - Otvara Google u vašem podrazumevanom pregledaču
mkdir [dirname] - Kreira novi direktorijum
rmdir [dirname] - Briše direktorijum (mora biti prazan)";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_english_and_serbian() {
        let catalog = Catalog::new();
        assert_eq!(
            catalog.render(MessageKey::FileCreated, Locale::English, &[("name", "a.txt")]),
            "File 'a.txt' created."
        );
        assert_eq!(
            catalog.render(MessageKey::FileCreated, Locale::Serbian, &[("name", "a.txt")]),
            "Fajl 'a.txt' je kreiran."
        );
    }

    #[test]
    fn test_every_key_has_both_locales() {
        let catalog = Catalog::new();
        for locale in Locale::ALL {
            assert!(!catalog.render(MessageKey::UnknownCommand, locale, &[]).is_empty());
            assert!(!catalog.render(MessageKey::HelpBody, locale, &[]).is_empty());
        }
    }

    #[test]
    fn test_help_lists_every_verb() {
        let help = Catalog::new().render(MessageKey::HelpBody, Locale::English, &[]);
        for verb in [
            "help", "echo", "logout", "shutdown", "ls", "cd", "sysinfo", "devices", "touch", "rm",
            "view", "edit", "run", "open google", "mkdir", "rmdir",
        ] {
            assert!(help.lines().any(|l| l.starts_with(verb)), "missing {}", verb);
        }
    }
}
