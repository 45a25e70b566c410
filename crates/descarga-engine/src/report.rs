use chrono::{DateTime, Utc};
use descarga_types::{
    DELTA_COLUMN, Error, REPORT_TIME_FORMAT, ReportMetadata, Result, SCANNED_AT_COLUMN,
};

use crate::session::SessionStore;

/// Fully assembled run report, ready for serialization.
///
/// The engine stays pure: it lays out header, rows and metadata, and the
/// presentation layer decides where the bytes go.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// `relatorio_descarga_<YYYYMMDD>_<HHMMSS>.csv`
    pub file_name: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub metadata: ReportMetadata,
}

/// Build the export report for the store's current run.
///
/// Fails with a state error when nothing was scanned; an empty report is
/// never written.
pub fn build_report(store: &SessionStore, now: DateTime<Utc>) -> Result<Report> {
    let inventory = store
        .inventory()
        .ok_or_else(|| Error::State("no inventory loaded".to_string()))?;
    if store.events().is_empty() {
        return Err(Error::State("no scans recorded".to_string()));
    }

    let mut header: Vec<String> = inventory.columns().to_vec();
    header.push(SCANNED_AT_COLUMN.to_string());
    header.push(DELTA_COLUMN.to_string());

    let rows = store
        .events()
        .iter()
        .map(|event| {
            let mut row: Vec<String> = inventory
                .columns()
                .iter()
                .map(|column| event.record.field(column).unwrap_or_default().to_string())
                .collect();
            row.push(event.scanned_at.format(REPORT_TIME_FORMAT).to_string());
            row.push(event.seconds_since_previous.to_string());
            row
        })
        .collect();

    let summary = store.summary(now);
    let metadata = ReportMetadata {
        processed_at: now.format(REPORT_TIME_FORMAT).to_string(),
        total_seconds: summary.elapsed_seconds,
        mean_seconds_between_items: summary.mean_delta_seconds,
        items_processed: summary.scanned_count,
        items_in_inventory: summary.inventory_size,
    };

    Ok(Report {
        file_name: format!("relatorio_descarga_{}.csv", now.format("%Y%m%d_%H%M%S")),
        header,
        rows,
        metadata,
    })
}
