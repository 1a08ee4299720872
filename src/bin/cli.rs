// src/bin/cli.rs
use clap::Parser;
use foss_scrape::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = cli::Args::parse();
    log::init(args.verbose);
    cli::run(args)
}
