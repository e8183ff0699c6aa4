use clap::Parser;
use std::process::ExitCode;

mod app;
mod cli;
mod logger;
mod output;

use cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env before parsing so it can provide tokens and env-backed flags
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();
    logger::init(cli.verbose);

    match dotenv {
        Ok(path) => log::debug!("Loaded .env file from: {:?}", path),
        Err(_) => log::debug!(".env file not found, will rely on environment variables"),
    }

    log::info!("Starting gh-release-notes");

    match app::run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
