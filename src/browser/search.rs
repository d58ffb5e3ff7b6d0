//! Search index and multi-term filtering

use std::collections::BTreeMap;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use super::{Browser, Entry};

/// Absolute child path -> entry, for the current directory only
#[derive(Debug, Default)]
pub struct SearchIndex {
    by_path: BTreeMap<PathBuf, Entry>,
}

impl SearchIndex {
    /// Build the index for `entries` of `dir`
    pub fn build(dir: &Path, entries: &[Entry]) -> Self {
        let by_path = entries
            .iter()
            .map(|entry| (dir.join(entry.file_name()), entry.clone()))
            .collect();
        Self { by_path }
    }

    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }

    #[cfg(test)]
    fn get(&self, path: &Path) -> Option<&Entry> {
        self.by_path.get(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.by_path.keys().map(PathBuf::as_path)
    }

    /// Entries whose absolute path contains `term` and lies under `scope`
    fn matches<'a>(&'a self, scope: &'a str, term: &'a str) -> impl Iterator<Item = &'a Entry> {
        self.by_path.iter().filter_map(move |(path, entry)| {
            let path = path.to_string_lossy();
            (path.contains(term) && path.starts_with(scope)).then_some(entry)
        })
    }
}

/// `dir` followed by exactly one separator
fn scope_prefix(dir: &Path) -> String {
    let mut prefix = dir.to_string_lossy().into_owned();
    if !prefix.ends_with(MAIN_SEPARATOR) {
        prefix.push(MAIN_SEPARATOR);
    }
    prefix
}

impl Browser {
    /// Filter the listing by whitespace-separated terms
    ///
    /// Each term contributes every indexed entry whose absolute path contains it,
    /// in index order. Results of different terms are concatenated, so an entry
    /// matching two terms shows up twice. An empty query restores the full listing.
    pub fn search(&mut self, query: &str) {
        let terms: Vec<&str> = query.split_whitespace().collect();
        if terms.is_empty() {
            self.filtered_entries = self.entries.clone();
            return;
        }

        let scope = scope_prefix(&self.current_path);
        let index = &self.search_index;
        let matched: Vec<Entry> = terms
            .iter()
            .copied()
            .flat_map(|term| index.matches(scope.as_str(), term))
            .cloned()
            .collect();

        log::debug!(
            "search {:?} in {}: {} match(es)",
            terms,
            self.current_path.display(),
            matched.len()
        );
        self.filtered_entries = matched;
    }
}
