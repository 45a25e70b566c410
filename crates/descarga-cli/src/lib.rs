// Why an interactive stdin loop (not a rescan-the-screen UI)?
// - Each external event (load, start, scan, finish, reset) maps to one
//   state-transition call on the session store; the loop is only plumbing
// - Scanners behave as keyboards: one code per line is the native shape
// - Piped stdin gives scripted runs and tests the exact production path

mod args;
mod commands;
pub mod auth;
pub mod config;
mod handlers;
pub mod output;

pub use args::{Cli, Commands, InventoryCommand, OutputFormat};
pub use commands::run;
