//! CLI entry point for the antline restyling tool

use antline_style::io::cli::{Cli, MapProcessor};
use clap::Parser;

fn main() -> antline_style::Result<()> {
    let cli = Cli::parse();
    cli.init_logging();
    let mut processor = MapProcessor::new(cli);
    processor.process().map(|_| ())
}
