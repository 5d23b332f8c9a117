pub mod cli;
pub mod config;
pub mod evensum;
pub mod fixture;

use anyhow::{Result, anyhow};
use cli::{CliArgs, CliCommand, FixtureArgs};
use config::AppConfig;
use fixture::FixtureFormat;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub fn run(args: CliArgs) -> Result<()> {
    match &args.command {
        CliCommand::EvenSum => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            evensum::run(stdin.lock(), stdout.lock())
        }
        CliCommand::Fixture(fixture_args) => run_fixture(args.config.as_deref(), fixture_args),
    }
}

fn run_fixture(config_path: Option<&Path>, args: &FixtureArgs) -> Result<()> {
    let config = match config_path {
        Some(path) => AppConfig::load_with_path(path)?,
        None => AppConfig::load()?,
    };

    let format = args.format.unwrap_or(config.fixture_format);
    let document = match format {
        FixtureFormat::Prompt => fixture::render_prompt()?,
        FixtureFormat::Json => fixture::render_json()?,
    };

    write_document(&document, args.output.as_deref())
}

fn write_document(document: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => fs::write(path, format!("{document}\n"))
            .map_err(|err| anyhow!("Failed to write fixture to {}: {err}", path.display())),
        None => {
            let stdout = io::stdout();
            writeln!(stdout.lock(), "{document}")
                .map_err(|err| anyhow!("Failed to write fixture to standard output: {err}"))
        }
    }
}
