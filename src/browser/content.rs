//! File content pass-through (read, write)

use std::ffi::OsStr;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use super::Browser;
use crate::error::{BrowserError, Result};

/// Permission bits for files created by a save
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

impl Browser {
    /// Join `name` onto the current location
    pub fn resolve_path(&self, name: impl AsRef<OsStr>) -> PathBuf {
        self.current_path.join(name.as_ref())
    }

    /// Read the whole file `name` in the current location as text
    pub fn read_file_content(&self, name: impl AsRef<OsStr>) -> Result<String> {
        let path = self.resolve_path(name);
        std::fs::read_to_string(&path).map_err(|err| {
            log::warn!("Error reading file {}: {}", path.display(), err);
            BrowserError::io(path, err)
        })
    }

    /// Replace the file `name` in the current location with `content`
    ///
    /// Creates the file if needed. Not atomic: a failed write may leave it truncated.
    pub fn write_file_content(&self, name: impl AsRef<OsStr>, content: &str) -> Result<()> {
        let path = self.resolve_path(name);
        write_truncate(&path, content).map_err(|err| {
            log::warn!("Error writing file {}: {}", path.display(), err);
            BrowserError::io(path, err)
        })
    }
}

fn write_truncate(path: &std::path::Path, content: &str) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }
    let mut file = options.open(path)?;
    file.write_all(content.as_bytes())?;
    file.flush()
}
