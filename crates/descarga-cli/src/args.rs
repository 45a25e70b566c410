use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "descarga")]
#[command(about = "Track and time warehouse unloading runs against an inventory", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to the config file")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Validate and inspect inventory files")]
    Inventory {
        #[command(subcommand)]
        command: InventoryCommand,
    },

    #[command(about = "Run an unloading session, reading one barcode per stdin line")]
    Run {
        #[arg(long, help = "Inventory CSV with a 'codigo_barras' column")]
        inventory: PathBuf,

        #[arg(long, help = "Directory where the report CSV is written")]
        output: Option<PathBuf>,

        #[arg(long, help = "Skip writing the report CSV")]
        no_report: bool,
    },
}

#[derive(Subcommand)]
pub enum InventoryCommand {
    #[command(about = "Parse an inventory file and report its shape")]
    Check { file: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}
