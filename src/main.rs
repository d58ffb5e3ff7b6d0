//! clif - browse and search a directory from the terminal

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clif::app::{exit_code, logging, print_help, Command, Config, Shell};
use clif::Browser;

fn main() -> ExitCode {
    // Parse config first to return INVALID exit code for argument errors
    let config = match Config::from_args() {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            print_help();
            return ExitCode::from(exit_code::SUCCESS as u8);
        }
        Ok(Command::Version) => {
            println!("clif {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::from(exit_code::SUCCESS as u8);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(exit_code::INVALID as u8);
        }
    };

    if let Err(e) = logging::init(&config) {
        eprintln!("Error: {}", e);
        return ExitCode::from(exit_code::INVALID as u8);
    }

    // No usable start directory means nothing to browse
    let mut browser = match Browser::new(&config.root) {
        Ok(browser) => browser,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            return ExitCode::from(exit_code::INVALID as u8);
        }
    };

    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match Shell::new(&mut browser, config.output_format)
        .with_prompt(prompt)
        .run(stdin.lock(), &mut out)
    {
        Ok(()) => ExitCode::from(exit_code::SUCCESS as u8),
        Err(e) => {
            log::error!("shell failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(exit_code::ERROR as u8)
        }
    }
}
