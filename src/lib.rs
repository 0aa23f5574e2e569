//! # firehydrant-export
//!
//! Exports paginated FireHydrant records (incidents, users) into flat CSV
//! files.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use firehydrant_export::config::{ExportConfig, DEFAULT_TOKEN_FIELD};
//! use firehydrant_export::engine::ExportEngine;
//! use firehydrant_export::resources::Resource;
//!
//! #[tokio::main]
//! async fn main() -> firehydrant_export::Result<()> {
//!     let config = ExportConfig::from_file("config.json", DEFAULT_TOKEN_FIELD)?;
//!     let engine = ExportEngine::new(config)?;
//!
//!     let report = engine.export(Resource::Incidents).await?;
//!     println!("{} rows in {}", report.stats.records_written, report.output.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐   ┌──────────┐   ┌──────────┐   ┌───────────┐   ┌────────────┐
//! │   config   │──▶│   http   │──▶│  decode  │──▶│  schema   │──▶│   output   │
//! │ token file │   │ GET page │   │ `data`   │   │ flatten   │   │ CSV writer │
//! └────────────┘   └──────────┘   └──────────┘   └───────────┘   └────────────┘
//!                        ▲
//!                  ┌─────┴──────┐
//!                  │ pagination │  page / per_page, short or empty page stops
//!                  └────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Token authentication
pub mod auth;

/// HTTP client
pub mod http;

/// Page number pagination
pub mod pagination;

/// Response decoding
pub mod decode;

/// Column schemas and record flattening
pub mod schema;

/// CSV output
pub mod output;

/// Built-in resource definitions
pub mod resources;

/// Run configuration and credential loading
pub mod config;

/// Export engine
pub mod engine;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ExportConfig;
pub use engine::{ExportEngine, ExportReport};
pub use error::{Error, Result};
pub use resources::Resource;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
