//! confkit CLI — conference catalog enrichment tool.
//!
//! Turns an event catalog plus talk, transcript, and subtitle sources
//! into a fully-resolved context ready for rendering.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
