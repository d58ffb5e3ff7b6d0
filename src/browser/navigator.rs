//! Moving the current location

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use super::{Browser, Entry, Listing};
use crate::error::{BrowserError, Result};

impl Browser {
    /// Move into the subdirectory `name` of the current location
    ///
    /// The name is looked up in a fresh read of the directory, not the cached listing.
    pub fn navigate_into(&mut self, name: impl AsRef<OsStr>) -> Result<()> {
        let name = name.as_ref();
        let listing = Listing::read(&self.current_path);
        let entry = listing
            .find(name)
            .ok_or_else(|| BrowserError::not_found(name.to_string_lossy()))?;
        if !entry.is_dir() {
            return Err(BrowserError::not_a_directory(entry.name.clone()));
        }

        let target = check_accessible(self.current_path.join(entry.file_name()))?;
        log::debug!("navigate into {}", target.display());
        let entry = entry.clone();
        self.relocate(target, entry);
        Ok(())
    }

    /// Move to the parent of the current location
    pub fn navigate_up(&mut self) -> Result<()> {
        let parent = parent_dir(&self.current_path).ok_or_else(|| BrowserError::AtRoot {
            path: self.current_path.clone(),
        })?;

        log::debug!("navigate up to {}", parent.display());
        let entry = Entry::for_dir_path(&parent);
        self.relocate(parent, entry);
        Ok(())
    }

    /// Make the child `name` (file or directory) the current entry without moving
    pub fn set_current_dir_entry(&mut self, name: impl AsRef<OsStr>) -> Result<()> {
        let name = name.as_ref();
        let listing = Listing::read(&self.current_path);
        let entry = listing
            .find(name)
            .cloned()
            .ok_or_else(|| BrowserError::not_found(name.to_string_lossy()))?;
        self.current_entry = entry;
        Ok(())
    }
}

/// Live existence check on a listed directory, which may have vanished since the read
fn check_accessible(target: PathBuf) -> Result<PathBuf> {
    match std::fs::metadata(&target) {
        Ok(_) => Ok(target),
        Err(source) => Err(BrowserError::AccessDenied {
            path: target,
            source,
        }),
    }
}

/// Parent of `path`, or None when going up would not change the location
///
/// A single relative component (`docs`) has `.` as its parent.
fn parent_dir(path: &Path) -> Option<PathBuf> {
    let parent = match path.parent() {
        Some(p) if p.as_os_str().is_empty() => PathBuf::from("."),
        Some(p) => p.to_path_buf(),
        None => return None,
    };
    (parent != path).then_some(parent)
}
