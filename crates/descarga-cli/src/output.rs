use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use descarga_engine::Report;
use descarga_types::RunSummary;
use owo_colors::OwoColorize;

/// Render a report as CSV text, UTF-8 with BOM.
///
/// The BOM keeps the file double-clickable in spreadsheet tools that
/// otherwise guess a legacy encoding for accented column values.
pub fn render_csv(report: &Report) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(&report.header)?;
    for row in &report.rows {
        wtr.write_record(row)?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush report CSV: {}", e))?;
    let body = String::from_utf8(bytes).context("report CSV was not valid UTF-8")?;
    Ok(format!("\u{feff}{}", body))
}

/// Write the report into `dir` under its own timestamped file name.
pub fn write_report(report: &Report, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    let path = dir.join(&report.file_name);
    std::fs::write(&path, render_csv(report)?)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(path)
}

/// `"12min 37s"` from fractional seconds.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{}min {}s", total / 60, total % 60)
}

pub fn print_scan_feedback(description: &str, delta_seconds: f64, summary: &RunSummary) {
    println!(
        "{} {}  +{:.1}s | {}/{} scanned | elapsed {} | avg {:.1}s",
        "✓".green().bold(),
        description,
        delta_seconds,
        summary.scanned_count,
        summary.inventory_size,
        format_duration(summary.elapsed_seconds),
        summary.mean_delta_seconds,
    );
}

pub fn print_not_found(code: &str) {
    println!("{} barcode not in inventory: {}", "✗".red().bold(), code);
}

pub fn print_summary(summary: &RunSummary) {
    println!();
    println!("{}", "Run summary".bold());
    println!(
        "  Total time:   {:.1}s ({})",
        summary.elapsed_seconds,
        format_duration(summary.elapsed_seconds)
    );
    println!(
        "  Items:        {}/{} ({:.1}%)",
        summary.scanned_count,
        summary.inventory_size,
        summary.completion_ratio * 100.0
    );
    println!("  Avg per item: {:.1}s", summary.mean_delta_seconds);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use descarga_engine::{SessionStore, build_report};
    use descarga_ingest::parse_inventory;

    fn sample_report() -> Report {
        let inventory = parse_inventory(
            "codigo_barras,descricao\nA1,Widget\nB2,Gadget\n".as_bytes(),
        )
        .unwrap();
        let mut store = SessionStore::new();
        store.load_inventory(inventory);

        let start = Utc.with_ymd_and_hms(2026, 8, 29, 10, 0, 0).unwrap();
        store.start_run(start).unwrap();
        store
            .record_scan("A1", start + chrono::Duration::seconds(5))
            .unwrap();
        store
            .record_scan("B2", start + chrono::Duration::seconds(9))
            .unwrap();
        let end = start + chrono::Duration::seconds(9);
        store.finish_run(end).unwrap();
        build_report(&store, end).unwrap()
    }

    #[test]
    fn rendered_csv_starts_with_bom() {
        let csv = render_csv(&sample_report()).unwrap();
        assert!(csv.starts_with('\u{feff}'));
    }

    // Exported rows re-parse to the same barcode/description/timestamp text.
    #[test]
    fn report_round_trips_through_the_parser() {
        let csv = render_csv(&sample_report()).unwrap();
        let reparsed = parse_inventory(csv.as_bytes()).unwrap();

        assert_eq!(reparsed.len(), 2);
        let first = &reparsed.records()[0];
        assert_eq!(first.barcode, "A1");
        assert_eq!(first.description, "Widget");
        assert_eq!(
            first.field("hora_escaneamento"),
            Some("2026-08-29 10:00:05")
        );
        assert_eq!(first.field("tempo_desde_ultimo"), Some("5"));
        assert_eq!(reparsed.records()[1].field("tempo_desde_ultimo"), Some("4"));
    }

    #[test]
    fn report_lands_in_requested_directory() {
        let report = sample_report();
        let dir = tempfile::tempdir().unwrap();
        let path = write_report(&report, dir.path()).unwrap();

        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("relatorio_descarga_20260829_100009.csv")
        );
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("codigo_barras"));
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(0.0), "0min 0s");
        assert_eq!(format_duration(9.4), "0min 9s");
        assert_eq!(format_duration(125.0), "2min 5s");
        assert_eq!(format_duration(-3.0), "0min 0s");
    }
}
