use clap::Parser;
use findreadme_core::Cli;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    findreadme_core::run(cli)?;
    Ok(())
}
