//! Column schemas and record flattening
//!
//! A `Schema` is the ordered list of CSV columns for a resource. Each
//! column pulls its value from a top-level field or from one field of a
//! nested object. `flatten` turns one JSON record into one row of strings
//! aligned with the schema; absent data becomes an empty string.

mod flatten;
mod types;

pub use flatten::{flatten, stringify, Row};
pub use types::{Column, FieldSource, Schema};
