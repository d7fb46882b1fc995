//! Configuration management for the Paperrag CLI.
//!
//! Profiles live in a TOML file under the user's home directory; a profile
//! named `all` supplies fallback values for every other profile.

mod app;
mod file;
mod profile;
mod types;

#[cfg(test)]
mod tests;

pub use app::AppConfig;
pub use file::ConfigFile;
pub use profile::ProfileConfig;
#[allow(unused_imports)]
pub use types::Settings;

// Constants
pub const PAPERRAG_API_ENDPOINT: &str = "http://localhost:3000";
pub const PAPERRAG_CONFIG_PATH: &str = ".paperrag/config.toml";
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
