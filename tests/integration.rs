//! Integration tests for the browser core
//!
//! These tests build small directory trees and drive navigation, search and
//! content access through the public API.

use std::collections::BTreeSet;
use std::path::Path;

use clif::{Browser, BrowserError, Entry};
use tempfile::TempDir;

/// `/tmp/x`-style fixture: a `sub` directory and an `a.txt` file
fn fixture() -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("sub")).unwrap();
    std::fs::write(temp.path().join("a.txt"), "hello").unwrap();
    temp
}

fn name_set(entries: &[Entry]) -> BTreeSet<String> {
    entries.iter().map(|e| e.name.clone()).collect()
}

fn names(entries: &[Entry]) -> Vec<String> {
    entries.iter().map(|e| e.name.clone()).collect()
}

// =============================================================================
// Construction
// =============================================================================

mod construction_tests {
    use super::*;

    #[test]
    fn test_lists_actual_children() {
        let temp = fixture();
        let browser = Browser::new(temp.path()).unwrap();

        assert_eq!(browser.current_path(), temp.path());
        let mut entries = browser.entries().to_vec();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(entries, vec![Entry::file("a.txt"), Entry::directory("sub")]);
    }

    #[test]
    fn test_empty_directory() {
        let temp = TempDir::new().unwrap();
        let browser = Browser::new(temp.path()).unwrap();

        assert!(browser.entries().is_empty());
        assert!(browser.filtered_entries().is_empty());
        assert!(browser.read_failure().is_none());
    }

    #[test]
    fn test_missing_start_directory() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nowhere");

        match Browser::new(&missing) {
            Err(BrowserError::StartupFault { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected startup fault, got {:?}", other),
        }
    }
}

// =============================================================================
// Navigation
// =============================================================================

mod navigation_tests {
    use super::*;

    #[test]
    fn test_into_and_up_round_trip() {
        let temp = fixture();
        std::fs::write(temp.path().join("sub").join("inner.txt"), "").unwrap();
        let mut browser = Browser::new(temp.path()).unwrap();
        let original = name_set(browser.entries());

        browser.navigate_into("sub").unwrap();
        assert_eq!(browser.current_path(), temp.path().join("sub"));
        assert_eq!(browser.current_entry(), &Entry::directory("sub"));
        assert_eq!(names(browser.entries()), vec!["inner.txt"]);
        assert_eq!(browser.filtered_entries(), browser.entries());

        browser.navigate_up().unwrap();
        assert_eq!(browser.current_path(), temp.path());
        assert_eq!(name_set(browser.entries()), original);
        assert_eq!(browser.current_entry(), &Entry::for_dir_path(temp.path()));
    }

    #[test]
    fn test_into_missing_is_not_found() {
        let temp = fixture();
        let mut browser = Browser::new(temp.path()).unwrap();

        let err = browser.navigate_into("missing").unwrap_err();
        assert!(matches!(err, BrowserError::NotFound { .. }));
        assert_eq!(browser.current_path(), temp.path());
    }

    #[test]
    fn test_into_file_is_not_a_directory() {
        let temp = fixture();
        let mut browser = Browser::new(temp.path()).unwrap();

        let err = browser.navigate_into("a.txt").unwrap_err();
        assert!(matches!(err, BrowserError::NotADirectory { .. }));
        assert!(err.is_not_found());
        assert_eq!(browser.current_path(), temp.path());
        assert_eq!(browser.entries().len(), 2);
    }

    #[test]
    fn test_into_rereads_filesystem() {
        let temp = fixture();
        let mut browser = Browser::new(temp.path()).unwrap();

        // Created after the listing was cached
        std::fs::create_dir(temp.path().join("late")).unwrap();
        browser.navigate_into("late").unwrap();
        assert_eq!(browser.current_path(), temp.path().join("late"));
    }

    #[test]
    fn test_into_removed_directory_fails_without_change() {
        let temp = fixture();
        let mut browser = Browser::new(temp.path()).unwrap();
        browser.search("sub");
        let filtered_before = browser.filtered_entries().to_vec();

        std::fs::remove_dir(temp.path().join("sub")).unwrap();
        let err = browser.navigate_into("sub").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(browser.current_path(), temp.path());
        assert_eq!(browser.filtered_entries(), filtered_before.as_slice());
    }

    #[cfg(unix)]
    #[test]
    fn test_up_at_root_is_at_root() {
        let mut browser = Browser::new("/").unwrap();
        let entries_before = browser.entries().len();

        let err = browser.navigate_up().unwrap_err();
        assert!(matches!(err, BrowserError::AtRoot { .. }));
        assert_eq!(browser.current_path(), Path::new("/"));
        assert_eq!(browser.entries().len(), entries_before);
    }

    #[test]
    fn test_up_resets_filter() {
        let temp = fixture();
        let mut browser = Browser::new(temp.path().join("sub")).unwrap();
        browser.search("zzz-no-match");
        assert!(browser.filtered_entries().is_empty());

        browser.navigate_up().unwrap();
        assert_eq!(browser.filtered_entries(), browser.entries());
        assert_eq!(browser.search_index().len(), 2);
    }

    #[test]
    fn test_set_current_dir_entry() {
        let temp = fixture();
        let mut browser = Browser::new(temp.path()).unwrap();
        let entries_before = browser.entries().to_vec();

        browser.set_current_dir_entry("a.txt").unwrap();
        assert_eq!(browser.current_entry(), &Entry::file("a.txt"));
        assert_eq!(browser.current_path(), temp.path());
        assert_eq!(browser.entries(), entries_before.as_slice());

        browser.set_current_dir_entry("sub").unwrap();
        assert_eq!(browser.current_entry(), &Entry::directory("sub"));

        let err = browser.set_current_dir_entry("missing").unwrap_err();
        assert!(matches!(err, BrowserError::NotFound { .. }));
        assert_eq!(browser.current_entry(), &Entry::directory("sub"));
    }
}

#[cfg(target_os = "linux")]
mod raw_name_tests {
    use super::*;
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    #[test]
    fn test_lossy_collisions_stay_distinct() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(OsStr::from_bytes(b"a\xff")), "").unwrap();
        std::fs::write(temp.path().join(OsStr::from_bytes(b"a\xfe")), "").unwrap();

        let mut browser = Browser::new(temp.path()).unwrap();
        assert_eq!(browser.entries().len(), 2);
        assert_eq!(browser.search_index().len(), 2);

        browser.search("a");
        assert_eq!(browser.filtered_entries().len(), 2);
    }

    #[test]
    fn test_listed_entry_can_be_entered_and_read() {
        let temp = TempDir::new().unwrap();
        let raw = OsStr::from_bytes(b"d\xff");
        std::fs::create_dir(temp.path().join(raw)).unwrap();
        std::fs::write(temp.path().join(raw).join("f\u{e9}.txt"), "body").unwrap();

        let mut browser = Browser::new(temp.path()).unwrap();
        let listed = browser.entries()[0].clone();
        assert!(listed.is_dir());

        browser.navigate_into(listed.file_name()).unwrap();
        assert_eq!(browser.current_path(), temp.path().join(raw));
        assert_eq!(browser.read_file_content("f\u{e9}.txt").unwrap(), "body");
    }
}

// =============================================================================
// Search
// =============================================================================

mod search_tests {
    use super::*;

    fn search_fixture() -> TempDir {
        let temp = TempDir::new().unwrap();
        for name in ["foobar.txt", "barfoo.txt", "baz.txt"] {
            std::fs::write(temp.path().join(name), "").unwrap();
        }
        temp
    }

    #[test]
    fn test_multi_term_union_keeps_duplicates() {
        let temp = search_fixture();
        let mut browser = Browser::new(temp.path()).unwrap();

        browser.search("foo bar");
        let found = names(browser.filtered_entries());

        // Each term contributes both files, in index (path) order
        assert_eq!(
            found,
            vec!["barfoo.txt", "foobar.txt", "barfoo.txt", "foobar.txt"]
        );
        assert_eq!(
            name_set(browser.filtered_entries()),
            BTreeSet::from(["barfoo.txt".to_string(), "foobar.txt".to_string()])
        );
    }

    #[test]
    fn test_single_term() {
        let temp = search_fixture();
        let mut browser = Browser::new(temp.path()).unwrap();

        browser.search("baz");
        assert_eq!(names(browser.filtered_entries()), vec!["baz.txt"]);
    }

    #[test]
    fn test_case_sensitive() {
        let temp = search_fixture();
        let mut browser = Browser::new(temp.path()).unwrap();

        browser.search("BAZ");
        assert!(browser.filtered_entries().is_empty());
    }

    #[test]
    fn test_empty_query_resets() {
        let temp = search_fixture();
        let mut browser = Browser::new(temp.path()).unwrap();

        browser.search("baz");
        assert_eq!(browser.filtered_entries().len(), 1);

        browser.search("");
        assert_eq!(browser.filtered_entries(), browser.entries());

        browser.search("baz");
        browser.search("   \t ");
        assert_eq!(browser.filtered_entries(), browser.entries());
    }

    #[test]
    fn test_no_match_is_empty() {
        let temp = search_fixture();
        let mut browser = Browser::new(temp.path()).unwrap();

        browser.search("qqq-nothing");
        assert!(browser.filtered_entries().is_empty());
    }

    #[test]
    fn test_term_matches_full_path() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("zebra");
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(dir.join("one.txt"), "").unwrap();
        std::fs::write(dir.join("two.txt"), "").unwrap();
        let mut browser = Browser::new(&dir).unwrap();

        // The directory name is part of every indexed path
        browser.search("zebra");
        assert_eq!(
            name_set(browser.filtered_entries()),
            name_set(browser.entries())
        );
    }

    #[test]
    fn test_search_leaves_listing_and_index() {
        let temp = search_fixture();
        let mut browser = Browser::new(temp.path()).unwrap();
        let entries_before = browser.entries().to_vec();

        browser.search("foo");
        assert_eq!(browser.entries(), entries_before.as_slice());
        assert_eq!(browser.search_index().len(), 3);
        assert_eq!(browser.current_path(), temp.path());
    }
}

// =============================================================================
// Content
// =============================================================================

mod content_tests {
    use super::*;

    #[test]
    fn test_read_existing_file() {
        let temp = fixture();
        let browser = Browser::new(temp.path()).unwrap();

        assert_eq!(browser.read_file_content("a.txt").unwrap(), "hello");
    }

    #[test]
    fn test_write_read_round_trip_after_navigation() {
        let temp = fixture();
        let mut browser = Browser::new(temp.path()).unwrap();
        browser.navigate_into("sub").unwrap();

        browser.write_file_content("draft.md", "# Title\n").unwrap();
        assert_eq!(browser.read_file_content("draft.md").unwrap(), "# Title\n");
        assert!(temp.path().join("sub").join("draft.md").is_file());

        // Cached listing is not refreshed by a write
        assert!(browser.entries().is_empty());
    }

    #[test]
    fn test_resolve_path() {
        let temp = fixture();
        let browser = Browser::new(temp.path()).unwrap();

        assert_eq!(browser.resolve_path("a.txt"), temp.path().join("a.txt"));
    }
}
