//! Append-only line writer with size-based rotation.
//!
//! When the live file grows past the size limit it is renamed to `<name>.1`,
//! older backups shift up by one (`.1` → `.2`, ...) and anything beyond the
//! retention count is deleted.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rotation threshold for trace files.
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Rotated files kept next to the live file.
pub const MAX_BACKUP_FILES: usize = 3;

pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    file: Mutex<Option<File>>,
}

impl RotatingFile {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    #[must_use]
    pub const fn with_limits(path: PathBuf, max_bytes: u64, backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            backups,
            file: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `line` and a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from rotating, opening or writing the file.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::other(format!("trace file lock poisoned: {e}")))?;

        if fs::metadata(&self.path).is_ok_and(|m| m.len() >= self.max_bytes) {
            *guard = None;
            self.rotate()?;
        }

        if guard.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            *guard = Some(file);
        }
        let file = guard
            .as_mut()
            .ok_or_else(|| io::Error::other("trace file unavailable"))?;

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    fn rotate(&self) -> io::Result<()> {
        if self.backups == 0 {
            return fs::remove_file(&self.path);
        }

        let oldest = self.backup_path(self.backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for n in (1..self.backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1))
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("backups", &self.backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn appends_lines() {
        let dir = TempDir::new().unwrap();
        let writer = RotatingFile::new(dir.path().join("spans.jsonl"));
        writer.write_line("one").unwrap();
        writer.write_line("two").unwrap();
        assert_eq!(fs::read_to_string(writer.path()).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn rotates_and_keeps_limited_backups() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("spans.jsonl");
        let writer = RotatingFile::with_limits(path.clone(), 4, 2);

        for line in ["aaaa", "bbbb", "cccc", "dddd"] {
            writer.write_line(line).unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "dddd\n");
        assert_eq!(fs::read_to_string(dir.path().join("spans.jsonl.1")).unwrap(), "cccc\n");
        assert_eq!(fs::read_to_string(dir.path().join("spans.jsonl.2")).unwrap(), "bbbb\n");
        assert!(!dir.path().join("spans.jsonl.3").exists());
    }
}
