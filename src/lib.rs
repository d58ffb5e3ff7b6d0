//! clif - a small terminal file browser
//!
//! The [`browser`] module holds all state: the current directory, its listing,
//! and a scoped multi-term search over it. The [`app`] module is a thin
//! line-oriented front end.

pub mod app;
pub mod browser;
pub mod error;

pub use browser::{Browser, Entry, EntryKind};
pub use error::{BrowserError, Result};
