//! CLI entry point for the Cell-DEVS scenario conversion tool

use cellgrid::io::cli::{Cli, ConversionRunner};
use clap::Parser;

fn main() -> cellgrid::Result<()> {
    let cli = Cli::parse();
    let mut runner = ConversionRunner::new(cli);
    runner.run()
}
