//! Line-oriented front end over a [`Browser`]
//!
//! Reads one command per line and prints results. Failed commands print an
//! error and leave the browser where it was.

use std::io::{self, BufRead, Write};

use crate::browser::Browser;

use super::output::{write_listing, OutputFormat};

/// Terminates the body of a `write` command
const END_OF_BODY: &str = ".";

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Show the filtered listing
    List,
    /// Show the full listing
    ListAll,
    Enter(String),
    Up,
    /// Filter by whitespace-separated terms (empty clears)
    Find(String),
    Select(String),
    Pwd,
    Path(String),
    Cat(String),
    /// Replace a file with the lines that follow
    Write(String),
    Help,
    Quit,
    /// Blank line
    Nothing,
}

impl ShellCommand {
    /// Parse one input line. Names are the rest of the line, so they may contain spaces.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let needs_name = |make: fn(String) -> ShellCommand| {
            if rest.is_empty() {
                Err(format!("{} requires a name", word))
            } else {
                Ok(make(rest.to_string()))
            }
        };

        match word {
            "" => Ok(Self::Nothing),
            "ls" => Ok(Self::List),
            "all" => Ok(Self::ListAll),
            "cd" if rest == ".." => Ok(Self::Up),
            "cd" => needs_name(Self::Enter),
            "up" | ".." => Ok(Self::Up),
            "find" | "/" => Ok(Self::Find(rest.to_string())),
            "sel" => needs_name(Self::Select),
            "pwd" => Ok(Self::Pwd),
            "path" => needs_name(Self::Path),
            "cat" => needs_name(Self::Cat),
            "write" => needs_name(Self::Write),
            "help" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Err(format!("unknown command '{}', try 'help'", other)),
        }
    }
}

/// Interactive session state around a browser
pub struct Shell<'a> {
    browser: &'a mut Browser,
    format: OutputFormat,
    /// Print a prompt before each command
    prompt: bool,
}

impl<'a> Shell<'a> {
    pub fn new(browser: &'a mut Browser, format: OutputFormat) -> Self {
        Self {
            browser,
            format,
            prompt: false,
        }
    }

    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    /// Run until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> io::Result<()> {
        loop {
            if self.prompt {
                write!(out, "{}> ", self.browser.current_entry().name)?;
                out.flush()?;
            }
            let Some(line) = read_line(&mut input)? else {
                break;
            };

            let command = match ShellCommand::parse(&line) {
                Ok(command) => command,
                Err(msg) => {
                    writeln!(out, "error: {}", msg)?;
                    continue;
                }
            };
            log::debug!("shell command: {:?}", command);

            match command {
                ShellCommand::Quit => break,
                ShellCommand::Write(name) => match read_body(&mut input)? {
                    Some(content) => {
                        let result = self.browser.write_file_content(&name, &content);
                        self.report(out, result)?;
                    }
                    None => {
                        writeln!(out, "error: write {} not saved, missing closing '.'", name)?;
                    }
                },
                other => self.execute(other, out)?,
            }
        }
        out.flush()
    }

    fn execute<W: Write>(&mut self, command: ShellCommand, out: &mut W) -> io::Result<()> {
        match command {
            ShellCommand::List => write_listing(out, self.browser.filtered_entries(), self.format),
            ShellCommand::ListAll => write_listing(out, self.browser.entries(), self.format),
            ShellCommand::Enter(name) => {
                let result = self.browser.navigate_into(&name);
                self.report_move(out, result)
            }
            ShellCommand::Up => {
                let result = self.browser.navigate_up();
                self.report_move(out, result)
            }
            ShellCommand::Find(query) => {
                self.browser.search(&query);
                write_listing(out, self.browser.filtered_entries(), self.format)
            }
            ShellCommand::Select(name) => {
                let result = self.browser.set_current_dir_entry(&name);
                self.report(out, result)
            }
            ShellCommand::Pwd => {
                writeln!(out, "{}", self.browser.current_path().display())?;
                let entry = self.browser.current_entry();
                if entry.is_dir() {
                    writeln!(out, "selected: {}/", entry.name)
                } else {
                    writeln!(out, "selected: {}", entry.name)
                }
            }
            ShellCommand::Path(name) => {
                writeln!(out, "{}", self.browser.resolve_path(&name).display())
            }
            ShellCommand::Cat(name) => match self.browser.read_file_content(&name) {
                Ok(content) => {
                    write!(out, "{}", content)?;
                    if !content.is_empty() && !content.ends_with('\n') {
                        writeln!(out)?;
                    }
                    Ok(())
                }
                Err(e) => writeln!(out, "error: {}", e),
            },
            ShellCommand::Help => {
                writeln!(out, "ls | all | cd NAME | up | find [TERMS] | sel NAME | pwd")?;
                writeln!(out, "path NAME | cat NAME | write NAME | quit")?;
                writeln!(out, "write: end the body with \".\", every line gets a newline,")?;
                writeln!(out, "       a leading \".\" is dropped, so \"..\" saves \".\"")
            }
            ShellCommand::Write(_) | ShellCommand::Quit | ShellCommand::Nothing => Ok(()),
        }
    }

    /// Print an error, if any
    fn report<W: Write>(&self, out: &mut W, result: crate::Result<()>) -> io::Result<()> {
        if let Err(e) = result {
            writeln!(out, "error: {}", e)?;
        }
        Ok(())
    }

    /// After a move: print the new location, or the error
    fn report_move<W: Write>(&self, out: &mut W, result: crate::Result<()>) -> io::Result<()> {
        match result {
            Ok(()) => {
                writeln!(out, "{}", self.browser.current_path().display())?;
                if let Some(failure) = self.browser.read_failure() {
                    writeln!(
                        out,
                        "warning: cannot read {}: {}",
                        failure.path.display(),
                        failure.message
                    )?;
                }
                Ok(())
            }
            Err(e) => writeln!(out, "error: {}", e),
        }
    }
}

/// Next line without its terminator; None at end of input
///
/// Bytes that are not UTF-8 are replaced rather than treated as a read error.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Collect lines up to a lone `.`; None if input ends first
///
/// Every line, including the last, ends with a newline. A line starting with
/// `.` loses that first dot, so `..` stores a literal `.`.
fn read_body<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut body = String::new();
    while let Some(line) = read_line(input)? {
        if line == END_OF_BODY {
            return Ok(Some(body));
        }
        body.push_str(line.strip_prefix('.').unwrap_or(&line));
        body.push('\n');
    }
    Ok(None)
}
