//! CLI module
//!
//! Command-line interface for running exports.
//!
//! # Commands
//!
//! - `export <resource>` - Export all records of a resource to CSV
//! - `resources` - List exportable resources and their columns

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
