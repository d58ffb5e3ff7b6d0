//! Listing output for the shell

use std::io::{self, Write};
use std::str::FromStr;

use crate::browser::Entry;

/// Exit codes for the application
///
/// These codes are stable and can be relied upon for scripting:
/// - `SUCCESS` (0): Normal exit
/// - `ERROR` (2): Runtime error (I/O error on stdin/stdout, etc.)
/// - `INVALID` (3): Invalid arguments, or the start directory is unusable
pub mod exit_code {
    /// Normal exit
    pub const SUCCESS: i32 = 0;
    /// Runtime error occurred
    pub const ERROR: i32 = 2;
    /// Invalid arguments or start directory
    pub const INVALID: i32 = 3;
}

/// How listings are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One entry per line, directories suffixed with `/` (default)
    #[default]
    Lines,
    /// JSON array of `{"name", "kind"}` objects
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lines" | "line" => Ok(Self::Lines),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

/// Print `entries` followed by the navigation affordances (lines format only)
pub fn write_listing<W: Write>(
    out: &mut W,
    entries: &[Entry],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Lines => {
            for entry in entries {
                if entry.is_dir() {
                    writeln!(out, "{}/", entry.name)?;
                } else {
                    writeln!(out, "{}", entry.name)?;
                }
            }
            writeln!(out, "..")?;
            writeln!(out, "quit")?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, entries).map_err(io::Error::other)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
