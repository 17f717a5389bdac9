//! Filesystem capability used by the config store
//!
//! The store never calls `std::fs` directly; it goes through [`FileSystem`]
//! so the resolution chain can run against [`MemoryFs`] in tests.

mod memory;

pub use memory::MemoryFs;

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use crate::utils::strings::{join_lines, split_lines};

/// Minimal set of file operations the config store needs
pub trait FileSystem {
    fn dir_exists(&self, path: &Path) -> bool;

    fn file_exists(&self, path: &Path) -> bool;

    /// Create a directory and all missing parents
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Create an empty file. An existing file is left untouched.
    fn create_file(&self, path: &Path) -> io::Result<()>;

    /// Read the whole file as text, split into lines. Bytes that are not
    /// valid UTF-8 are replaced with U+FFFD.
    fn read_lines(&self, path: &Path) -> io::Result<Vec<String>>;

    /// Replace the file's content with `lines`, each terminated by `\n`
    fn write_lines(&self, path: &Path, lines: &[String]) -> io::Result<()>;
}

/// [`FileSystem`] backed by the real disk
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFs;

impl FileSystem for RealFs {
    fn dir_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn create_file(&self, path: &Path) -> io::Result<()> {
        // No truncate: the handle is dropped immediately
        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map(drop)
    }

    fn read_lines(&self, path: &Path) -> io::Result<Vec<String>> {
        let bytes = fs::read(path)?;
        let content = String::from_utf8_lossy(&bytes);
        Ok(split_lines(&content).into_iter().map(String::from).collect())
    }

    fn write_lines(&self, path: &Path, lines: &[String]) -> io::Result<()> {
        fs::write(path, join_lines(lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_create_file_does_not_truncate() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("setup.cf");
        fs::write(&file, "savePath = \"/x\"\n").unwrap();

        RealFs.create_file(&file).unwrap();

        assert_eq!(fs::read_to_string(&file).unwrap(), "savePath = \"/x\"\n");
    }

    #[test]
    fn test_write_then_read_lines() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("setup.cf");
        let lines = vec!["a = 1".to_string(), String::new(), "b = 2".to_string()];

        RealFs.write_lines(&file, &lines).unwrap();

        assert_eq!(fs::read_to_string(&file).unwrap(), "a = 1\n\nb = 2\n");
        assert_eq!(RealFs.read_lines(&file).unwrap(), lines);
    }

    #[test]
    fn test_read_lines_replaces_invalid_utf8() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("setup.cf");
        fs::write(&file, b"a = \xff\nb = 2\n").unwrap();

        let lines = RealFs.read_lines(&file).unwrap();
        assert_eq!(lines, vec!["a = \u{FFFD}".to_string(), "b = 2".to_string()]);
    }
}
