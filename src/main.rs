use std::io;
use std::process::ExitCode;

use colored::Colorize;
use fbrowse::{commander, logging, BrowserConfig, BrowserSession, SessionOptions};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "fatal");
            eprintln!("{}", e.to_string().red());
            ExitCode::FAILURE
        }
    }
}

fn run() -> fbrowse::Result<()> {
    let config = BrowserConfig::load()?;
    logging::init(&config);

    let commander = commander::for_host(&config)?;
    let start_dir = config.resolve_start_dir()?;

    let stdin = io::stdin();
    let mut session = BrowserSession::new(commander, start_dir, stdin.lock(), io::stdout())
        .with_options(SessionOptions { clear_screen: config.clear_screen });
    session.run()
}
