//! Application configuration from CLI arguments

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use super::output::OutputFormat;

/// Environment variable naming a log file
pub const LOG_ENV: &str = "CLIF_LOG";

/// What the command line asked for
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(Config),
    Help,
    Version,
}

/// Application configuration from CLI args
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Start directory (not validated here)
    pub root: PathBuf,
    pub output_format: OutputFormat,
    /// Append logs to this file at debug level
    pub log_file: Option<PathBuf>,
    /// Log debug output to stderr
    pub verbose: bool,
}

impl Config {
    /// Parse the process arguments
    pub fn from_args() -> anyhow::Result<Command> {
        let log_file = env::var_os(LOG_ENV).map(PathBuf::from);
        Self::parse(env::args().skip(1), env::current_dir()?, log_file)
    }

    /// Parse `args` (without the program name)
    ///
    /// `cwd` is the default root; `log_file` is the environment default for `--log`.
    pub fn parse<I>(args: I, cwd: PathBuf, log_file: Option<PathBuf>) -> anyhow::Result<Command>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut root: Option<PathBuf> = None;
        let mut output_format = OutputFormat::default();
        let mut log_file = log_file;
        let mut verbose = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--format" | "-f" => {
                    if let Some(fmt) = args.next() {
                        output_format = OutputFormat::from_str(&fmt).map_err(|_| {
                            anyhow::anyhow!("Invalid format '{}'. Valid formats: lines, json", fmt)
                        })?;
                    } else {
                        anyhow::bail!("--format requires a value (lines or json)");
                    }
                }
                "--log" => {
                    if let Some(file) = args.next() {
                        log_file = Some(PathBuf::from(file));
                    } else {
                        anyhow::bail!("--log requires a file path");
                    }
                }
                "--verbose" | "-v" => verbose = true,
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-V" => return Ok(Command::Version),
                path if !path.starts_with('-') => {
                    if root.is_some() {
                        anyhow::bail!("Only one start directory may be given, got '{}'", path);
                    }
                    root = Some(PathBuf::from(path));
                }
                unknown => {
                    anyhow::bail!(
                        "Unknown option: {}. Use --help for usage information.",
                        unknown
                    );
                }
            }
        }

        Ok(Command::Run(Self {
            root: root.unwrap_or(cwd),
            output_format,
            log_file,
            verbose,
        }))
    }
}

pub fn print_help() {
    println!(
        r#"clif - browse and search a directory from the terminal

USAGE:
    clif [OPTIONS] [PATH]

PATH defaults to the current directory.

OPTIONS:
    -f, --format FMT    Listing format: lines, json
    --log FILE          Append debug logs to FILE
    -v, --verbose       Log debug output to stderr
    -h, --help          Show this help message
    -V, --version       Show version

ENVIRONMENT:
    CLIF_LOG            Same as --log
    RUST_LOG            Log filter when neither --log nor --verbose is given

COMMANDS (read from stdin):
    ls                  Show the filtered listing
    all                 Show the full listing
    cd NAME             Enter a subdirectory (cd .. goes up)
    up                  Go to the parent directory
    find [TERMS...]     Filter by terms; no terms clears the filter
    sel NAME            Select an entry without moving
    pwd                 Show the current directory and selection
    path NAME           Show the full path of NAME
    cat NAME            Print a file
    write NAME          Replace a file with the following lines, ended by ".";
                        every line is saved with a newline, and a leading
                        "." is dropped, so ".." stores "."
    help                Show commands
    quit, q             Exit"#
    );
}
