//! Fresh directory reads with a degraded, empty fallback

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

use super::Entry;

/// Why the last directory read came back empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadFailure {
    /// Directory that could not be read
    pub path: PathBuf,
    pub kind: io::ErrorKind,
    pub message: String,
}

impl ReadFailure {
    fn new(path: &Path, err: &io::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Result of reading one directory
///
/// Entries keep the order the filesystem returned them in.
#[derive(Debug, Default)]
pub struct Listing {
    pub entries: Vec<Entry>,
    pub failure: Option<ReadFailure>,
}

impl Listing {
    /// Read `dir` from storage. Any read error yields an empty listing with a recorded failure.
    pub fn read(dir: &Path) -> Self {
        match read_entries(dir) {
            Ok(entries) => Self {
                entries,
                failure: None,
            },
            Err(err) => {
                log::warn!("Error reading directory {}: {}", dir.display(), err);
                Self {
                    entries: Vec::new(),
                    failure: Some(ReadFailure::new(dir, &err)),
                }
            }
        }
    }

    /// Find an entry by its on-disk name, falling back to the display name
    ///
    /// The fallback lets a name typed as text reach an entry whose raw name is not
    /// UTF-8. When several raw names share a display name the first one wins.
    pub fn find(&self, name: &OsStr) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|e| e.file_name() == name)
            .or_else(|| {
                let text = name.to_str()?;
                self.entries.iter().find(|e| e.name == text)
            })
    }
}

fn read_entries(dir: &Path) -> io::Result<Vec<Entry>> {
    std::fs::read_dir(dir)?
        .map(|entry| entry.map(|e| Entry::from_dir_entry(&e)))
        .collect()
}
