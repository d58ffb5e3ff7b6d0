//! Application module
//!
//! Command-line configuration, logging setup, and the line-oriented shell
//! that drives a [`crate::browser::Browser`].

mod config;
pub mod logging;
pub mod output;
pub mod shell;

pub use config::{print_help, Command, Config, LOG_ENV};
pub use output::{exit_code, write_listing, OutputFormat};
pub use shell::{Shell, ShellCommand};
