//! CLI entry point for the photomosaic builder

use clap::Parser;
use photomosaic::io::cli::{Cli, MosaicRunner};
use photomosaic::io::logging::init_tracing;

fn main() -> photomosaic::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    let runner = MosaicRunner::new(cli);
    runner
        .process()
        .inspect_err(|e| tracing::error!(error = %e, "mosaic run failed"))
}
