use std::fs::File;

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, WriteLogger};

use crate::config::Config;

// The terminal is owned by the UI, so logs go to a file.
pub fn init(config: &Config) -> Result<()> {
    let file = File::create(&config.log_path)
        .with_context(|| format!("Failed to create log file {}", config.log_path.display()))?;

    let log_config = ConfigBuilder::new()
        .set_target_level(log::LevelFilter::Error)
        .build();

    WriteLogger::init(config.log_level, log_config, file)?;
    log::info!("Logging to {} at {}", config.log_path.display(), config.log_level);
    Ok(())
}
