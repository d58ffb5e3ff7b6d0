//! Logger setup

use std::fs::OpenOptions;

use env_logger::{Builder, Env, Target};

use super::Config;

/// Install the global logger for `config`
///
/// A log file gets everything at debug level; `--verbose` sends debug to stderr;
/// otherwise only warnings reach stderr unless `RUST_LOG` says otherwise.
pub fn init(config: &Config) -> anyhow::Result<()> {
    if let Some(path) = &config.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| anyhow::anyhow!("Failed to open log file {}: {}", path.display(), e))?;
        Builder::new()
            .target(Target::Pipe(Box::new(file)))
            .filter_level(log::LevelFilter::Debug)
            .try_init()?;
    } else if config.verbose {
        Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .try_init()?;
    } else {
        Builder::from_env(Env::default().default_filter_or("warn")).try_init()?;
    }

    log::info!("clif {} starting in {}", env!("CARGO_PKG_VERSION"), config.root.display());
    Ok(())
}
