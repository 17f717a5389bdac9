//! In-memory filesystem

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use super::FileSystem;
use crate::utils::strings::{join_lines, split_lines};

/// [`FileSystem`] kept entirely in memory.
///
/// Counts every mutating call so callers can assert that an operation
/// performed no writes. Paths can be marked read-only to simulate
/// permission failures.
#[derive(Debug, Default)]
pub struct MemoryFs {
    dirs: RefCell<BTreeSet<PathBuf>>,
    files: RefCell<BTreeMap<PathBuf, String>>,
    read_only: RefCell<BTreeSet<PathBuf>>,
    writes: Cell<usize>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file (and its parent directories) without counting a write
    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        let path = path.into();
        self.add_parents(&path);
        self.files.borrow_mut().insert(path, content.to_string());
        self
    }

    /// Make creating or writing anything under `path` fail
    pub fn deny_writes(self, path: impl Into<PathBuf>) -> Self {
        self.read_only.borrow_mut().insert(path.into());
        self
    }

    /// Raw content of a file, if present
    pub fn content(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    /// Number of create/write calls that succeeded
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    fn add_parents(&self, path: &Path) {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }

    fn check_writable(&self, path: &Path) -> io::Result<()> {
        let denied = self
            .read_only
            .borrow()
            .iter()
            .any(|p| path.starts_with(p));
        if denied {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied: {}", path.display()),
            ));
        }
        Ok(())
    }

    fn check_parent(&self, path: &Path) -> io::Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !self.dir_exists(parent) => {
                Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("directory not found: {}", parent.display()),
                ))
            }
            _ => Ok(()),
        }
    }

    fn bump(&self) {
        self.writes.set(self.writes.get() + 1);
    }
}

impl FileSystem for MemoryFs {
    fn dir_exists(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path)
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.check_writable(path)?;
        self.add_parents(path);
        self.dirs.borrow_mut().insert(path.to_path_buf());
        self.bump();
        Ok(())
    }

    fn create_file(&self, path: &Path) -> io::Result<()> {
        self.check_writable(path)?;
        self.check_parent(path)?;
        self.files
            .borrow_mut()
            .entry(path.to_path_buf())
            .or_default();
        self.bump();
        Ok(())
    }

    fn read_lines(&self, path: &Path) -> io::Result<Vec<String>> {
        let files = self.files.borrow();
        let content = files.get(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found: {}", path.display()),
            )
        })?;
        Ok(split_lines(content).into_iter().map(String::from).collect())
    }

    fn write_lines(&self, path: &Path, lines: &[String]) -> io::Result<()> {
        self.check_writable(path)?;
        self.check_parent(path)?;
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), join_lines(lines));
        self.bump();
        Ok(())
    }
}
