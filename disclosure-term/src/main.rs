use std::path::PathBuf;
use std::process::ExitCode;

use disclosure_term::{TermConfig, TermError, app, logging};

async fn try_main() -> Result<(), TermError> {
    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = TermConfig::load(path.as_deref())?;
    logging::init(&config)?;
    app::run(config).await
}

#[tokio::main]
async fn main() -> ExitCode {
    match try_main().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
