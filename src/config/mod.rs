//! Flat key/value config store backed by a single file

pub mod entry;

use std::io;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::fs::{FileSystem, RealFs};

/// Directory created under the per-user config root
pub const CONFIG_DIR_NAME: &str = "NoitaEdit";

/// Name of the config file inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "setup.cf";

/// Key under which the resolved save path is stored
pub const SAVE_PATH_KEY: &str = "savePath";

/// Default location of the config file: `<config dir>/NoitaEdit/setup.cf`
pub fn default_config_file() -> Result<PathBuf, StoreError> {
    let config_dir = dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|p| p.join(".config")))
        .ok_or(StoreError::NoConfigDir)?;

    Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Key/value store over one `key = value` file.
///
/// Every operation opens, reads or writes, and releases the file before
/// returning. There is no locking; one process is expected to own the file.
#[derive(Debug, Clone)]
pub struct ConfigStore<F: FileSystem = RealFs> {
    fs: F,
    file: PathBuf,
}

impl ConfigStore<RealFs> {
    /// Store at the default per-user location on the real filesystem
    pub fn open_default() -> Result<Self, StoreError> {
        Ok(Self::new(RealFs, default_config_file()?))
    }
}

impl<F: FileSystem> ConfigStore<F> {
    pub fn new(fs: F, file: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            file: file.into(),
        }
    }

    /// Path of the config file this store manages
    pub fn file_path(&self) -> &Path {
        &self.file
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Make sure the config directory and file exist, creating either as
    /// needed. Never truncates an existing file.
    pub fn ensure_file_exists(&self) -> Result<PathBuf, StoreError> {
        if let Some(dir) = self.file.parent().filter(|d| !d.as_os_str().is_empty()) {
            if !self.fs.dir_exists(dir) {
                self.fs
                    .create_dir_all(dir)
                    .map_err(|e| StoreError::io(dir, e))?;
            }
        }

        if !self.fs.file_exists(&self.file) {
            self.fs
                .create_file(&self.file)
                .map_err(|e| StoreError::io(&self.file, e))?;
        }

        Ok(self.file.clone())
    }

    /// Value of the first entry whose key equals `key`, quotes stripped.
    ///
    /// A read the filesystem rejects as not text (`InvalidData`) reads as
    /// [`StoreError::KeyNotFound`].
    pub fn get_value(&self, file: &Path, key: &str) -> Result<String, StoreError> {
        let not_found = || StoreError::KeyNotFound {
            key: key.to_string(),
            path: file.to_path_buf(),
        };

        let lines = match self.fs.read_lines(file) {
            Ok(lines) => lines,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => return Err(not_found()),
            Err(e) => return Err(StoreError::io(file, e)),
        };

        lines
            .iter()
            .filter_map(|line| entry::split_entry(line))
            .find(|(found, _)| *found == key)
            .map(|(_, value)| entry::unquote(value).to_string())
            .ok_or_else(not_found)
    }

    /// Upsert `key`.
    ///
    /// The first matching line is replaced with `key = value` (value used
    /// verbatim, later duplicates untouched). Without a match a new line
    /// `key = "value"` is appended. The whole file is rewritten.
    pub fn set_value(&self, file: &Path, key: &str, value: &str) -> Result<(), StoreError> {
        let mut lines = if self.fs.file_exists(file) {
            self.fs
                .read_lines(file)
                .map_err(|e| StoreError::io(file, e))?
        } else {
            Vec::new()
        };

        match lines.iter().position(|line| entry::matches_key(line, key)) {
            Some(index) => lines[index] = entry::replaced_line(key, value),
            None => lines.push(entry::appended_line(key, value)),
        }

        self.fs
            .write_lines(file, &lines)
            .map_err(|e| StoreError::io(file, e))
    }
}
