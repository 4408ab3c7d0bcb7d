use clap::{CommandFactory, Parser};
use treedrift::config::{Cli, Config};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Convert CLI args to Config - this validates both sources immediately
    let config = match Config::try_from(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}\n");
            Cli::command().print_help()?;
            std::process::exit(2);
        }
    };

    treedrift::commands::diff::run(config)?;

    Ok(())
}
