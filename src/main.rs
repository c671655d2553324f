use std::process::ExitCode;

use clap::Parser;
use tofudeck::{
    Config,
    Match,
    OutputFormat,
};
use tracing_subscriber::{
    fmt,
    prelude::*,
    EnvFilter,
};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();

    match tofudeck::run(&config).and_then(|matches| print_matches(&matches, config.format)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tofudeck: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_matches(matches: &[Match], format: OutputFormat) -> Result<(), tofudeck::DeckError> {
    match format {
        OutputFormat::Plain => {
            for m in matches {
                println!("{m}");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(matches)
                .map_err(|e| tofudeck::DeckError::encode("search results", e))?;
            println!("{json}");
        }
    }
    Ok(())
}
