//! CLI entry point for the layout-guided part sorter

use clap::Parser;
use partsort::io::cli::{Cli, SortCommand};
use tracing_subscriber::EnvFilter;

fn main() -> partsort::Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    SortCommand::new(cli).run()
}
