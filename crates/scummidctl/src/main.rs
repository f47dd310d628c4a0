//! scummidctl - identify ScummVM game directories

use anyhow::Result;
use clap::Parser;
use scummidctl::cli::{Cli, Commands};
use scummidctl::{commands, logging, ScummidConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ScummidConfig::load(cli.config.as_deref())?;
    logging::init(&config.log.level, cli.verbose);

    match cli.command {
        Commands::Scan {
            binary,
            data_dir,
            output_dir,
            dry_run,
        } => commands::scan(&config, &binary, &data_dir, output_dir, dry_run),
        Commands::Parse { input } => commands::parse(&config, &input),
    }
}
