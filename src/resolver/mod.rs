//! Save path resolution
//!
//! Fallback chain, each stage tried only when the previous one fails:
//! 1. `savePath` entry in the config file
//! 2. platform default location
//! 3. interactive prompt
//!
//! A path obtained from stage 2 or 3 is written back to the config file so
//! the next run stops at stage 1.

use crate::config::{ConfigStore, SAVE_PATH_KEY};
use crate::console::ConsoleIo;
use crate::error::{ResolveError, StoreError};
use crate::fs::FileSystem;
use crate::platform::{platform_default, PlatformInfo};

const ENTER_PATH_PROMPT: &str = "Please enter the path to your save file:";
const NOT_FOUND_PROMPT: &str = "Can't find path to the directory of save files. Enter path:";
const EMPTY_INPUT_ERROR: &str = "No input received. Please enter the path to Noita saves:";

/// Which stage of the chain produced the path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSource {
    Config,
    PlatformDefault,
    UserInput,
}

/// A resolved save path and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub path: String,
    pub source: PathSource,
}

impl Resolution {
    /// Whether resolving wrote a new entry to the config file
    pub fn was_persisted(&self) -> bool {
        self.source != PathSource::Config
    }
}

/// Runs the fallback chain against injected filesystem, platform and console
pub struct PathResolver<F: FileSystem, P: PlatformInfo, C: ConsoleIo> {
    store: ConfigStore<F>,
    platform: P,
    console: C,
}

impl<F: FileSystem, P: PlatformInfo, C: ConsoleIo> PathResolver<F, P, C> {
    pub fn new(store: ConfigStore<F>, platform: P, console: C) -> Self {
        Self {
            store,
            platform,
            console,
        }
    }

    pub fn store(&self) -> &ConfigStore<F> {
        &self.store
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Resolve the save path, persisting it on first discovery
    pub fn resolve_save_path(&mut self) -> Result<String, ResolveError> {
        self.resolve().map(|r| r.path)
    }

    pub fn resolve(&mut self) -> Result<Resolution, ResolveError> {
        let config_path = self.store.ensure_file_exists()?;

        match self.store.get_value(&config_path, SAVE_PATH_KEY) {
            Ok(path) => {
                return Ok(Resolution {
                    path,
                    source: PathSource::Config,
                })
            }
            Err(e @ StoreError::KeyNotFound { .. }) => self.console.write_info(&e.to_string()),
            Err(e) => return Err(e.into()),
        }

        let (path, source) = match platform_default(&self.platform) {
            Ok(path) => (path, PathSource::PlatformDefault),
            Err(e) => {
                self.console.write_error(&e.to_string());
                (self.prompt_for_path()?, PathSource::UserInput)
            }
        };

        self.store.set_value(&config_path, SAVE_PATH_KEY, &path)?;
        Ok(Resolution { path, source })
    }

    /// Ask until a non-blank line is entered
    fn prompt_for_path(&mut self) -> Result<String, ResolveError> {
        self.console.write_line(ENTER_PATH_PROMPT);
        self.console.write_line(NOT_FOUND_PROMPT);

        loop {
            let line = self
                .console
                .read_line()
                .map_err(ResolveError::Input)?
                .ok_or(ResolveError::InputClosed)?;

            let path = line.trim();
            if path.is_empty() {
                self.console.write_error(EMPTY_INPUT_ERROR);
                continue;
            }
            return Ok(path.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::fs::MemoryFs;
    use crate::platform::{FixedPlatform, Platform};
    use std::path::Path;

    const FILE: &str = "/cfg/NoitaEdit/setup.cf";

    fn resolver(
        fs: MemoryFs,
        platform: FixedPlatform,
        console: ScriptedConsole,
    ) -> PathResolver<MemoryFs, FixedPlatform, ScriptedConsole> {
        PathResolver::new(ConfigStore::new(fs, FILE), platform, console)
    }

    fn unsupported() -> FixedPlatform {
        FixedPlatform::new(Platform::Unsupported("haiku".into()), "/home/x")
    }

    #[test]
    fn test_stored_value_short_circuits() {
        let fs = MemoryFs::new().with_file(FILE, "savePath = \"/existing/path\"\n");
        let mut r = resolver(fs, unsupported(), ScriptedConsole::default());

        let resolution = r.resolve().unwrap();

        assert_eq!(resolution.path, "/existing/path");
        assert_eq!(resolution.source, PathSource::Config);
        assert!(!resolution.was_persisted());
        assert_eq!(r.store().fs().write_count(), 0);
        assert!(r.console().is_untouched());
    }

    #[test]
    fn test_platform_default_is_persisted() {
        let platform = FixedPlatform::new(Platform::LinuxLike, "/home/bob");
        let mut r = resolver(MemoryFs::new(), platform, ScriptedConsole::default());

        let resolution = r.resolve().unwrap();

        assert_eq!(resolution.source, PathSource::PlatformDefault);
        let stored = r.store().fs().content(Path::new(FILE)).unwrap();
        assert_eq!(stored, format!("savePath = \"{}\"\n", resolution.path));
        assert_eq!(r.console().reads, 0);
        assert_eq!(r.console().stderr.len(), 1);
        assert!(r.console().stderr[0].contains("Key 'savePath' not found"));
    }

    #[test]
    fn test_blank_input_reprompts() {
        let console = ScriptedConsole::new(["", "  ", "/home/bob/saves"]);
        let mut r = resolver(MemoryFs::new(), unsupported(), console);

        let resolution = r.resolve().unwrap();

        assert_eq!(resolution.path, "/home/bob/saves");
        assert_eq!(resolution.source, PathSource::UserInput);
        assert_eq!(r.console().reads, 3);
        let reprompts = r
            .console()
            .stderr
            .iter()
            .filter(|m| m.as_str() == EMPTY_INPUT_ERROR)
            .count();
        assert_eq!(reprompts, 2);
        assert!(r.console().stderr.iter().any(|m| m == "Unsupported OS: haiku"));
    }

    #[test]
    fn test_input_is_trimmed() {
        let console = ScriptedConsole::new(["  /saves  "]);
        let mut r = resolver(MemoryFs::new(), unsupported(), console);
        assert_eq!(r.resolve_save_path().unwrap(), "/saves");
    }

    #[test]
    fn test_missing_home_prompts() {
        let platform = FixedPlatform {
            platform: Platform::WindowsLike,
            home: None,
        };
        let console = ScriptedConsole::new([r"D:\Noita"]);
        let mut r = resolver(MemoryFs::new(), platform, console);

        let resolution = r.resolve().unwrap();

        assert_eq!(resolution.path, r"D:\Noita");
        assert_eq!(resolution.source, PathSource::UserInput);
    }

    #[test]
    fn test_end_of_input_is_fatal() {
        let console = ScriptedConsole::new([""]);
        let mut r = resolver(MemoryFs::new(), unsupported(), console);

        let err = r.resolve().unwrap_err();

        assert!(matches!(err, ResolveError::InputClosed));
        assert_eq!(r.store().fs().content(Path::new(FILE)).as_deref(), Some(""));
    }

    #[test]
    fn test_read_error_is_fatal() {
        let mut r = resolver(MemoryFs::new(), unsupported(), ScriptedConsole::broken());
        let err = r.resolve().unwrap_err();
        match err {
            ResolveError::Input(e) => assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unwritable_config_dir_is_fatal() {
        let fs = MemoryFs::new().deny_writes("/cfg");
        let platform = FixedPlatform::new(Platform::LinuxLike, "/home/bob");
        let mut r = resolver(fs, platform, ScriptedConsole::default());

        let err = r.resolve().unwrap_err();

        assert!(matches!(err, ResolveError::Store(StoreError::Io { .. })));
        assert!(r.console().is_untouched());
    }

    #[test]
    fn test_second_call_reads_back() {
        let platform = FixedPlatform::new(Platform::WindowsLike, r"C:\Users\Alice");
        let mut r = resolver(MemoryFs::new(), platform, ScriptedConsole::default());

        let first = r.resolve().unwrap();
        let writes = r.store().fs().write_count();
        let second = r.resolve().unwrap();

        assert_eq!(first.path, second.path);
        assert_eq!(second.source, PathSource::Config);
        assert_eq!(r.store().fs().write_count(), writes);
    }
}
