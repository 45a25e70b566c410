use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use descarga_engine::{SessionStore, build_report};
use descarga_ingest::read_inventory;
use descarga_types::ScanOutcome;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde_json::json;

use crate::args::OutputFormat;
use crate::auth;
use crate::config::Config;
use crate::output;

/// Line that ends the run, mirroring the original tool's finalize button.
const FINISH_COMMAND: &str = "fim";

pub struct RunOptions {
    pub inventory: PathBuf,
    pub output: PathBuf,
    pub no_report: bool,
}

pub fn handle(options: &RunOptions, config: &Config, format: OutputFormat) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut input = stdin.lock();
    run_loop(options, config, format, &mut input, interactive)
}

fn run_loop(
    options: &RunOptions,
    config: &Config,
    format: OutputFormat,
    input: &mut impl BufRead,
    interactive: bool,
) -> Result<()> {
    auth::gate(&config.auth, input)?;

    let inventory = read_inventory(&options.inventory).with_context(|| {
        format!(
            "failed to load inventory from {}",
            options.inventory.display()
        )
    })?;
    let inventory_size = inventory.len();

    let mut store = SessionStore::new();
    store.load_inventory(inventory);
    store.start_run(Utc::now())?;

    if format == OutputFormat::Plain {
        println!(
            "Run started with {} inventory items. One barcode per line; '{}' or EOF finishes.",
            inventory_size, FINISH_COMMAND
        );
    }

    let mut line = String::new();
    loop {
        if interactive {
            print!("scan> ");
            io::stdout().flush()?;
        }
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let code = line.trim();
        if code.is_empty() {
            continue;
        }
        if code == FINISH_COMMAND {
            break;
        }

        let now = Utc::now();
        match store.record_scan(code, now)? {
            ScanOutcome::Matched(event) => {
                if format == OutputFormat::Plain {
                    output::print_scan_feedback(
                        &event.record.description,
                        event.seconds_since_previous,
                        &store.summary(now),
                    );
                }
            }
            ScanOutcome::NotFound => {
                if format == OutputFormat::Plain {
                    output::print_not_found(code);
                }
            }
        }
    }

    let now = Utc::now();
    let summary = store.finish_run(now)?;

    // An empty run has nothing to export; the summary still shows.
    let report = if store.events().is_empty() {
        None
    } else {
        Some(build_report(&store, now)?)
    };

    let report_path = match (&report, options.no_report) {
        (Some(report), false) => Some(output::write_report(report, &options.output)?),
        _ => None,
    };

    match format {
        OutputFormat::Plain => {
            output::print_summary(&summary);
            match &report_path {
                Some(path) => println!("\nReport written: {}", path.display()),
                None => println!("\n{}", "No report written.".dimmed()),
            }
        }
        OutputFormat::Json => {
            let payload = json!({
                "summary": summary,
                "metadata": report.as_ref().map(|r| &r.metadata),
                "report_path": report_path.as_ref().map(|p| p.display().to_string()),
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }

    Ok(())
}
