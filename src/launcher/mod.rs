//! External Launcher Module
//!
//! Opens resources outside the console (the `open google` verb), limited to
//! an allow-list of URLs.

pub mod types;
pub mod allow_list;
pub mod system;

pub use types::{ExternalLauncher, LaunchError};
pub use allow_list::AllowList;
pub use system::SystemLauncher;

/// The page opened by `open google`.
pub const GOOGLE_URL: &str = "https://www.google.com";
