mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match &cli.command {
        Commands::Generate {
            sheet,
            class,
            title,
            output,
        } => commands::generate(config, sheet, class, title, output),
        Commands::Convert { file, output } => commands::convert(file.as_deref(), output),
        Commands::Classes { sheet } => commands::classes(sheet),
        Commands::Config(args) => commands::configure(config, args),
    }
}
