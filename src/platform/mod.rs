//! Platform detection and default save locations
//!
//! Default save directory per platform:
//! - Windows: `<home>\AppData\LocalLow\Nolla_Games_Noita\`
//! - Linux (Steam Proton): `<home>/.steam/steam/steamapps/compatdata/881100/pfx/drive_c/users/<user>/AppData/LocalLow/Nolla_Games_Noita/`
//!
//! Paths are assembled as strings with the platform's own separator, so the
//! mapping gives the same answer whatever OS it is evaluated on.

use std::path::PathBuf;

use crate::error::PlatformError;

/// Steam application id of Noita
pub const NOITA_STEAM_APP_ID: u32 = 881100;

const SAVE_DIR_NAME: &str = "Nolla_Games_Noita";

/// OS family as far as save locations are concerned
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    /// Backslash paths, per-user data under `AppData\LocalLow`
    WindowsLike,
    /// Forward-slash paths, game running under Proton
    LinuxLike,
    /// Anything else, carrying the OS name for diagnostics
    Unsupported(String),
}

impl Platform {
    /// Platform of the running process
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::WindowsLike
        } else if cfg!(target_os = "linux") {
            Platform::LinuxLike
        } else {
            Platform::Unsupported(std::env::consts::OS.to_string())
        }
    }
}

/// Source of OS identity and the user's home directory
pub trait PlatformInfo {
    fn platform(&self) -> Platform;

    fn home_dir(&self) -> Option<String>;
}

/// The platform the process is actually running on
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPlatform;

impl PlatformInfo for SystemPlatform {
    fn platform(&self) -> Platform {
        Platform::current()
    }

    fn home_dir(&self) -> Option<String> {
        dirs::home_dir()
            .map(|p: PathBuf| p.to_string_lossy().to_string())
            .filter(|s| !s.is_empty())
    }
}

/// Fixed platform answer, for tests and for callers that already know
#[derive(Debug, Clone)]
pub struct FixedPlatform {
    pub platform: Platform,
    pub home: Option<String>,
}

impl FixedPlatform {
    pub fn new(platform: Platform, home: impl Into<String>) -> Self {
        Self {
            platform,
            home: Some(home.into()),
        }
    }
}

impl PlatformInfo for FixedPlatform {
    fn platform(&self) -> Platform {
        self.platform.clone()
    }

    fn home_dir(&self) -> Option<String> {
        self.home.clone()
    }
}

/// Default save directory for `platform`, rooted at `home`
pub fn default_save_path(platform: &Platform, home: &str) -> Result<String, PlatformError> {
    match platform {
        Platform::WindowsLike => Ok(join(
            home,
            &format!(r"AppData\LocalLow\{}\", SAVE_DIR_NAME),
            '\\',
        )),
        Platform::LinuxLike => {
            let user = last_segment(home, &['/']);
            let relative = format!(
                ".steam/steam/steamapps/compatdata/{}/pfx/drive_c/users/{}/AppData/LocalLow/{}/",
                NOITA_STEAM_APP_ID, user, SAVE_DIR_NAME
            );
            Ok(join(home, &relative, '/'))
        }
        Platform::Unsupported(os) => Err(PlatformError::Unsupported(os.clone())),
    }
}

/// Default save directory as reported by `info`
pub fn platform_default(info: &impl PlatformInfo) -> Result<String, PlatformError> {
    let platform = info.platform();
    if let Platform::Unsupported(os) = platform {
        return Err(PlatformError::Unsupported(os));
    }
    let home = info.home_dir().ok_or(PlatformError::NoHomeDir)?;
    default_save_path(&platform, &home)
}

fn join(base: &str, relative: &str, sep: char) -> String {
    let separators: &[char] = if sep == '\\' { &['\\', '/'] } else { &['/'] };
    if base.is_empty() || base.ends_with(separators) {
        format!("{}{}", base, relative)
    } else {
        format!("{}{}{}", base, sep, relative)
    }
}

fn last_segment<'a>(path: &'a str, separators: &[char]) -> &'a str {
    path.trim_end_matches(separators)
        .rsplit(separators)
        .next()
        .unwrap_or("")
}
