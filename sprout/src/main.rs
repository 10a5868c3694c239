mod cli;
mod logging;
mod ops;
mod reports;

use clap::Parser;
use eyre::Result;

use crate::cli::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init()?;

    Cli::parse().run()
}
