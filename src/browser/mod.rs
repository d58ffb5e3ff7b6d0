//! Browser module - current location, listing, and scoped search
//!
//! A [`Browser`] is positioned at one directory. Navigation re-reads the
//! filesystem and rebuilds the listing, the filtered view and the search index
//! together; search only replaces the filtered view.

mod content;
pub mod entry;
mod listing;
mod navigator;
mod search;

use std::path::{Path, PathBuf};

pub use entry::{Entry, EntryKind};
pub use listing::{Listing, ReadFailure};
pub use search::SearchIndex;

use crate::error::{BrowserError, Result};

/// Stateful view of one directory
#[derive(Debug)]
pub struct Browser {
    current_path: PathBuf,
    current_entry: Entry,
    entries: Vec<Entry>,
    filtered_entries: Vec<Entry>,
    search_index: SearchIndex,
    /// Set when the last refresh could not read the current directory
    read_failure: Option<ReadFailure>,
}

impl Browser {
    /// Open a browser at `initial_path`
    ///
    /// Fails with [`BrowserError::StartupFault`] when the path is missing,
    /// inaccessible, or not a directory. An unreadable but existing directory
    /// still yields a browser with an empty listing.
    pub fn new(initial_path: impl Into<PathBuf>) -> Result<Self> {
        let current_path = initial_path.into();
        match std::fs::metadata(&current_path) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(BrowserError::StartupFault {
                    path: current_path,
                    source: std::io::Error::from(std::io::ErrorKind::NotADirectory),
                })
            }
            Err(source) => {
                return Err(BrowserError::StartupFault {
                    path: current_path,
                    source,
                })
            }
        }

        let current_entry = Entry::for_dir_path(&current_path);
        let mut browser = Self {
            current_path: PathBuf::new(),
            current_entry: current_entry.clone(),
            entries: Vec::new(),
            filtered_entries: Vec::new(),
            search_index: SearchIndex::default(),
            read_failure: None,
        };
        browser.relocate(current_path, current_entry);
        Ok(browser)
    }

    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    /// Entry describing the current location (or the last selected child)
    pub fn current_entry(&self) -> &Entry {
        &self.current_entry
    }

    /// Full listing of the current location
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Listing as narrowed by the last search
    pub fn filtered_entries(&self) -> &[Entry] {
        &self.filtered_entries
    }

    pub fn search_index(&self) -> &SearchIndex {
        &self.search_index
    }

    /// Diagnostic from the last refresh, if the directory could not be read
    pub fn read_failure(&self) -> Option<&ReadFailure> {
        self.read_failure.as_ref()
    }

    /// Point the browser at `path` and rebuild listing, index and filtered view
    fn relocate(&mut self, path: PathBuf, entry: Entry) {
        let listing = Listing::read(&path);
        self.search_index = SearchIndex::build(&path, &listing.entries);
        self.filtered_entries = listing.entries.clone();
        self.entries = listing.entries;
        self.read_failure = listing.failure;
        self.current_entry = entry;
        self.current_path = path;
    }
}
