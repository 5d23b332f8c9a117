use anyhow::Result;
use clap::Parser;
use promptpack::cli::CliArgs;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    promptpack::run(args)
}
