//! noitaedit - Noita save directory locator
//!
//! Finds the directory holding Noita's save data and remembers it in a small
//! `key = value` config file (`<config dir>/NoitaEdit/setup.cf`).
//!
//! # Resolution order
//!
//! - A `savePath` entry already in the config file
//! - The platform default (Windows, or Steam Proton on Linux)
//! - Asking on the console
//!
//! Filesystem, platform and console access are injected, so the whole chain
//! runs in tests against [`fs::MemoryFs`], [`platform::FixedPlatform`] and
//! [`console::ScriptedConsole`].

pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod fs;
pub mod platform;
pub mod resolver;
pub mod utils;

pub use config::{ConfigStore, SAVE_PATH_KEY};
pub use error::{PlatformError, ResolveError, StoreError};
pub use platform::{Platform, PlatformInfo};
pub use resolver::{PathResolver, PathSource, Resolution};

use console::StdConsole;
use platform::SystemPlatform;

/// Save path for this machine, from the default config file, platform
/// defaults, or the console, in that order
pub fn get_config_save_path() -> Result<String, ResolveError> {
    let store = ConfigStore::open_default()?;
    PathResolver::new(store, SystemPlatform, StdConsole::new()).resolve_save_path()
}
