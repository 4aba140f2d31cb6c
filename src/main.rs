//! CLI entry point for the tile reassembly tool

use clap::Parser;
use std::process::ExitCode;
use tilestitch::io::cli::{Cli, Reassembler};
use tilestitch::io::logging;
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(logging::level_for(cli.verbose, cli.quiet));

    match Reassembler::new(cli).run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Reassembly failed: {e}");
            ExitCode::FAILURE
        }
    }
}
