//! Temp-file discipline for downloads.
//!
//! Each fetch writes into `<final>.part`, then atomically renames to the
//! final path on success or deletes the temp file on failure. A half-written
//! download therefore never shows up in the output directory.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Sequential writer for a `.part` temp file next to `final_path`.
pub struct TempDownload {
    file: File,
    temp_path: PathBuf,
    final_path: PathBuf,
}

impl TempDownload {
    /// Create `<final_path>.part`, truncating any stale leftover from a
    /// previous interrupted run.
    pub fn create(final_path: &Path) -> Result<Self> {
        let mut temp_path = final_path.as_os_str().to_owned();
        temp_path.push(".part");
        let temp_path = PathBuf::from(temp_path);

        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("failed to create temp file: {}", temp_path.display()))?;
        Ok(Self {
            file,
            temp_path,
            final_path: final_path.to_path_buf(),
        })
    }

    /// Append `data` at the current end of the temp file.
    pub fn append(&mut self, data: &[u8]) -> std::io::Result<()> {
        self.file.write_all(data)
    }

    /// Path to the temp file currently being written.
    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    /// Sync data and atomically rename the temp file to the final path.
    /// Consumes the writer and closes the file.
    pub fn finalize(self) -> Result<PathBuf> {
        self.file.sync_all().context("storage sync failed")?;
        drop(self.file);
        fs::rename(&self.temp_path, &self.final_path).with_context(|| {
            format!(
                "failed to rename {} to {}",
                self.temp_path.display(),
                self.final_path.display()
            )
        })?;
        Ok(self.final_path)
    }

    /// Delete the temp file (failed or aborted download). Consumes the writer.
    pub fn discard(self) {
        drop(self.file);
        if let Err(e) = fs::remove_file(&self.temp_path) {
            tracing::warn!(
                "failed to remove temp file {}: {}",
                self.temp_path.display(),
                e
            );
        }
    }
}

/// Create the download directory if absent.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory: {}", dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finalize_renames_atomically() {
        let dir = tempfile::tempdir().unwrap();
        let final_path = dir.path().join("book.txt");

        let mut tmp = TempDownload::create(&final_path).unwrap();
        tmp.append(b"call me ishmael").unwrap();
        assert!(tmp.temp_path().exists());
        assert!(!final_path.exists());

        let out = tmp.finalize().unwrap();
        assert_eq!(out, final_path);
        assert!(final_path.exists());
        assert!(!dir.path().join("book.txt.part").exists());
        assert_eq!(fs::read(&final_path).unwrap(), b"call me ishmael");
    }

    #[test]
    fn discard_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let final_path = dir.path().join("book.txt");

        let mut tmp = TempDownload::create(&final_path).unwrap();
        tmp.append(b"partial").unwrap();
        tmp.discard();

        assert!(!final_path.exists());
        assert!(!dir.path().join("book.txt.part").exists());
    }

    #[test]
    fn create_truncates_stale_part_file() {
        let dir = tempfile::tempdir().unwrap();
        let final_path = dir.path().join("book.txt");
        fs::write(dir.path().join("book.txt.part"), b"stale leftovers").unwrap();

        let tmp = TempDownload::create(&final_path).unwrap();
        assert_eq!(fs::metadata(tmp.temp_path()).unwrap().len(), 0);
    }

    #[test]
    fn ensure_dir_creates_nested() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/c");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
