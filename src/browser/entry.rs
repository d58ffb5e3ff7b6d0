//! Directory entry definition

use std::ffi::{OsStr, OsString};
use std::fs::DirEntry;
use std::path::Path;

use serde::Serialize;

/// Kind of a directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
}

/// A single child of a directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Display name (lossy for names that are not UTF-8)
    pub name: String,
    pub kind: EntryKind,
    /// Name as stored on disk, unique within its directory
    #[serde(skip)]
    file_name: OsString,
}

impl Entry {
    pub fn new(file_name: impl Into<OsString>, kind: EntryKind) -> Self {
        let file_name = file_name.into();
        Self {
            name: file_name.to_string_lossy().into_owned(),
            kind,
            file_name,
        }
    }

    /// Directory entry, also used for the synthetic current-location entry
    pub fn directory(file_name: impl Into<OsString>) -> Self {
        Self::new(file_name, EntryKind::Directory)
    }

    pub fn file(file_name: impl Into<OsString>) -> Self {
        Self::new(file_name, EntryKind::File)
    }

    /// Synthetic directory entry named after the last component of `path`
    ///
    /// Paths without a final component (`/`, `..`) keep their full text.
    pub fn for_dir_path(path: &Path) -> Self {
        let file_name = path.file_name().unwrap_or(path.as_os_str());
        Self::directory(file_name)
    }

    /// Build from a directory read result (symlinks to directories count as directories)
    pub(crate) fn from_dir_entry(entry: &DirEntry) -> Self {
        let kind = if entry.path().is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        Self::new(entry.file_name(), kind)
    }

    /// Raw on-disk name, for joining onto the parent path
    pub fn file_name(&self) -> &OsStr {
        &self.file_name
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}
