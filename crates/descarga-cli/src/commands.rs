use std::path::PathBuf;

use anyhow::Result;

use crate::args::{Cli, Commands, InventoryCommand};
use crate::config::Config;
use crate::handlers;
use crate::handlers::run::RunOptions;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Inventory { command } => match command {
            InventoryCommand::Check { file } => {
                handlers::inventory_check::handle(&file, cli.format)
            }
        },

        Commands::Run {
            inventory,
            output,
            no_report,
        } => {
            let config = Config::load(cli.config.as_deref())?;
            let options = RunOptions {
                inventory,
                output: output.unwrap_or_else(|| PathBuf::from(".")),
                no_report,
            };
            handlers::run::handle(&options, &config, cli.format)
        }
    }
}
