//! Output module
//!
//! Streams flattened rows into a CSV file: header first, then rows in
//! arrival order. The destination is truncated when the writer is created.

mod writer;

pub use writer::CsvWriter;
