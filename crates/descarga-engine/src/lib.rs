// Engine module - the scan-session state machine and reconciliation logic.
// This layer sits between ingested inventory data (types) and CLI presentation.

pub mod report;
pub mod session;
pub mod stats;

pub use report::{Report, build_report};
pub use session::SessionStore;
pub use stats::calculate_run_summary;
