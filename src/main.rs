//! CLI entry point for the bikeshare explorer.
//!
//! All interaction happens through prompts; the flags only say where the
//! city files live.

use anyhow::Result;
use bikeshare_explorer::{config::CityCatalog, console::Console, logging, session};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::error;

#[derive(Parser)]
#[command(name = "bikeshare")]
#[command(about = "Explore US bikeshare trip data interactively", long_about = None)]
struct Cli {
    /// Directory holding the city files
    #[arg(
        short,
        long,
        value_name = "DIR",
        env = "BIKESHARE_DATA_DIR",
        default_value = "."
    )]
    data_dir: PathBuf,

    /// JSON object mapping city names to file names, overriding the defaults
    #[arg(long, value_name = "JSON")]
    city_config: Option<PathBuf>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let log_file_path = std::env::var("LOG_FILE_PATH").ok();
    let _log_guard = logging::init(log_file_path.as_deref())?;

    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = &result {
        error!(error = %format!("{e:#}"), "Session aborted");
    }
    result
}

fn run(cli: Cli) -> Result<()> {
    let mut catalog = CityCatalog::new(cli.data_dir);
    if let Some(path) = &cli.city_config {
        catalog = catalog.with_overrides(path)?;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    session::run(&mut console, &catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_data_dir_flag() {
        let cli = Cli::try_parse_from(["bikeshare", "--data-dir", "/srv/trips"]).unwrap();
        assert_eq!(cli.data_dir, PathBuf::from("/srv/trips"));
        assert!(cli.city_config.is_none());
    }
}
