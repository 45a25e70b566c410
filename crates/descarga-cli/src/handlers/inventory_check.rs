use std::path::Path;

use anyhow::{Result, anyhow};
use descarga_ingest::read_inventory;
use owo_colors::OwoColorize;
use serde_json::json;

use crate::args::OutputFormat;

pub fn handle(file: &Path, format: OutputFormat) -> Result<()> {
    match read_inventory(file) {
        Ok(set) => {
            match format {
                OutputFormat::Plain => {
                    println!("File: {}", file.display());
                    println!("Status: {}", "✓ Valid".green().bold());
                    println!("  - Records: {}", set.len());
                    println!("  - Columns: {}", set.columns().join(", "));
                }
                OutputFormat::Json => {
                    let payload = json!({
                        "file": file.display().to_string(),
                        "valid": true,
                        "records": set.len(),
                        "columns": set.columns(),
                    });
                    println!("{}", serde_json::to_string_pretty(&payload)?);
                }
            }
            Ok(())
        }
        Err(err) => {
            match format {
                OutputFormat::Plain => {
                    println!("File: {}", file.display());
                    println!("Status: {}", "✗ Invalid".red().bold());
                    println!("  {}", err.to_string().red());
                }
                OutputFormat::Json => {
                    let payload = json!({
                        "file": file.display().to_string(),
                        "valid": false,
                        "error": err.to_string(),
                    });
                    println!("{}", serde_json::to_string_pretty(&payload)?);
                }
            }
            Err(anyhow!("inventory file is not usable: {}", err))
        }
    }
}
