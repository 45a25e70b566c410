use chrono::{DateTime, Utc};
use descarga_types::{Error, InventorySet, Result, RunSummary, ScanEvent, ScanOutcome};

use crate::stats;

/// Authoritative state for one unloading run.
///
/// Single-writer, fully synchronous: each transition runs to completion and
/// either mutates the store or leaves it byte-identical. One store is scoped
/// to one operator session; there is no global instance.
///
/// Invariants held after every operation:
/// - `events.len() == deltas.len()`
/// - `last_scan_at` equals `started_at` or the newest event's `scanned_at`
#[derive(Debug, Default)]
pub struct SessionStore {
    inventory: Option<InventorySet>,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
    last_scan_at: Option<DateTime<Utc>>,
    events: Vec<ScanEvent>,
    deltas: Vec<f64>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the loaded inventory.
    ///
    /// Does not touch an in-progress run: already-recorded events keep the
    /// record copies they were created with.
    pub fn load_inventory(&mut self, inventory: InventorySet) {
        self.inventory = Some(inventory);
    }

    pub fn inventory(&self) -> Option<&InventorySet> {
        self.inventory.as_ref()
    }

    pub fn events(&self) -> &[ScanEvent] {
        &self.events
    }

    pub fn deltas(&self) -> &[f64] {
        &self.deltas
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn last_scan_at(&self) -> Option<DateTime<Utc>> {
        self.last_scan_at
    }

    /// A run is in progress once started and neither finished nor reset.
    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.finished_at.is_none()
    }

    /// Begin a new run at `now`, clearing any previous (finished) run.
    pub fn start_run(&mut self, now: DateTime<Utc>) -> Result<()> {
        if self.inventory.is_none() {
            return Err(Error::State("no inventory loaded".to_string()));
        }
        if self.is_running() {
            return Err(Error::State("a run is already in progress".to_string()));
        }

        self.started_at = Some(now);
        self.finished_at = None;
        self.last_scan_at = Some(now);
        self.events.clear();
        self.deltas.clear();
        Ok(())
    }

    /// Reconcile one scanned code against the inventory.
    ///
    /// `NotFound` leaves the store untouched: a mis-read must not cost the
    /// operator anything in recorded timing. Callers must supply
    /// monotonically non-decreasing `now` values.
    pub fn record_scan(&mut self, code: &str, now: DateTime<Utc>) -> Result<ScanOutcome> {
        if !self.is_running() {
            return Err(Error::State("no run in progress".to_string()));
        }
        let inventory = self
            .inventory
            .as_ref()
            .ok_or_else(|| Error::State("no inventory loaded".to_string()))?;
        let last_scan_at = self
            .last_scan_at
            .ok_or_else(|| Error::State("no run in progress".to_string()))?;

        let Some(record) = inventory.find(code) else {
            return Ok(ScanOutcome::NotFound);
        };

        let delta = (now - last_scan_at).as_seconds_f64();
        let event = ScanEvent {
            record: record.clone(),
            scanned_at: now,
            seconds_since_previous: delta,
        };

        self.events.push(event.clone());
        self.deltas.push(delta);
        self.last_scan_at = Some(now);
        Ok(ScanOutcome::Matched(event))
    }

    /// End the run at `now` and return its final summary.
    ///
    /// State is retained so the summary stays viewable and exportable;
    /// only `reset_run` clears it.
    pub fn finish_run(&mut self, now: DateTime<Utc>) -> Result<RunSummary> {
        if !self.is_running() {
            return Err(Error::State("no run in progress".to_string()));
        }
        self.finished_at = Some(now);
        Ok(self.summary(now))
    }

    /// Unconditionally clear all run state. Idempotent; keeps the inventory.
    pub fn reset_run(&mut self) {
        self.started_at = None;
        self.finished_at = None;
        self.last_scan_at = None;
        self.events.clear();
        self.deltas.clear();
    }

    /// Current run statistics; pure read over the stored state.
    ///
    /// Elapsed time runs against `now` while the run is active and freezes
    /// at the last scan once finished.
    pub fn summary(&self, now: DateTime<Utc>) -> RunSummary {
        let elapsed_seconds = match self.started_at {
            None => 0.0,
            Some(started_at) => {
                if self.finished_at.is_some() {
                    self.last_scan_at
                        .map(|last| (last - started_at).as_seconds_f64())
                        .unwrap_or(0.0)
                } else {
                    (now - started_at).as_seconds_f64()
                }
            }
        };

        let inventory_size = self.inventory.as_ref().map(InventorySet::len).unwrap_or(0);
        stats::calculate_run_summary(
            elapsed_seconds,
            self.events.len(),
            inventory_size,
            &self.deltas,
        )
    }
}
