use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::fixture::FixtureFormat;

#[derive(Debug, Parser, Clone, PartialEq, Eq)]
#[command(name = "promptpack")]
#[command(
    about = "Single-shot function-calling fixtures plus a sample arithmetic exercise",
    long_about = "Single-shot function-calling fixtures plus a sample arithmetic exercise\n\nConfig file loading:\n  - --config <path> (explicit file, overrides default path discovery)\n  - Default probe path when --config is not provided:\n    1. $XDG_CONFIG_HOME/promptpack/config.toml\n    2. ~/.config/promptpack/config.toml"
)]
pub struct CliArgs {
    /// Load config from this file path instead of the default discovery path.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Read a bound from standard input and print the sum of the even
    /// numbers up to it.
    EvenSum,

    /// Emit the get_user_info single-shot fixture document.
    Fixture(FixtureArgs),
}

#[derive(Debug, clap::Args, Clone, PartialEq, Eq)]
pub struct FixtureArgs {
    /// Document format to emit (overrides the configured default).
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<FixtureFormat>,

    /// Write the document to this file instead of standard output.
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}
