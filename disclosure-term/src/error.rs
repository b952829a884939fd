//! Host error types.

use disclosure::ConfigError;
use thiserror::Error;

/// Errors that can stop the terminal host.
#[derive(Debug, Error)]
pub enum TermError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
