//! File logging setup.

use std::fs::File;

use simplelog::{Config, WriteLogger};

use crate::config::TermConfig;
use crate::error::TermError;

/// Send all log output to the configured file.
pub fn init(config: &TermConfig) -> Result<(), TermError> {
    let log_file = File::create(&config.log_file)?;
    WriteLogger::init(config.log_level, Config::default(), log_file)?;
    Ok(())
}
