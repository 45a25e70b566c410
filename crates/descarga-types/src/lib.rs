pub mod error;
pub mod inventory;
pub mod report;
pub mod scan;

pub use error::{Error, Result};
pub use inventory::*;
pub use report::*;
pub use scan::*;
