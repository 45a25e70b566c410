// Error types
pub mod error;

// Inventory table parsing
pub mod inventory;

pub use error::{Error, Result};
pub use inventory::{parse_inventory, read_inventory};
