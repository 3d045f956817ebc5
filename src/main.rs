//! StarData CLI - star observation catalog
//!
//! Usage: stardata [COMMAND]
//!
//! Commands:
//!   parse  Validate one star line and print the clamped entry
//!   add    Parse one star line and append it to the data file
//!   show   Load a data file and print its entries and coordinate tables
//!
//! Without a command, an interactive shell is started.

mod commands;

use anyhow::Result;
use clap::Parser;

use stardata::presentation::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ctx = commands::Context::from_cli(&cli)?;

    match cli.command {
        Some(Commands::Parse { line }) => commands::parse::cmd_parse(&ctx, &line.join(" ")),
        Some(Commands::Add { line, file }) => {
            commands::add::cmd_add(&ctx, &line.join(" "), file.as_deref())
        }
        Some(Commands::Show { file, section }) => {
            commands::show::cmd_show(&ctx, file.as_deref(), section)
        }
        None => commands::interactive::run(&ctx),
    }
}
