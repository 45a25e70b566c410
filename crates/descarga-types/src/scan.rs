use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::inventory::InventoryRecord;

/// One successfully matched barcode read during a run.
///
/// Carries a copy of the matched inventory record so the event survives a
/// later inventory replacement unchanged. Created once per successful scan,
/// never mutated, only bulk-cleared on reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanEvent {
    pub record: InventoryRecord,
    pub scanned_at: DateTime<Utc>,
    /// Seconds elapsed since the previous successful scan (or run start).
    pub seconds_since_previous: f64,
}

/// Outcome of reconciling one scanned code against the inventory.
///
/// `NotFound` is a normal negative result, not an error: a mis-read barcode
/// must not perturb the session or its timing statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "event")]
pub enum ScanOutcome {
    Matched(ScanEvent),
    NotFound,
}

impl ScanOutcome {
    pub fn is_matched(&self) -> bool {
        matches!(self, ScanOutcome::Matched(_))
    }
}

/// Aggregate statistics over one unloading run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub elapsed_seconds: f64,
    pub scanned_count: usize,
    pub inventory_size: usize,
    /// `scanned_count / inventory_size`; 0.0 when the inventory is empty.
    pub completion_ratio: f64,
    /// Arithmetic mean of inter-scan deltas; 0.0 when nothing was scanned.
    pub mean_delta_seconds: f64,
}
