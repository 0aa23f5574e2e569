//! Schema types

use crate::error::{Error, Result};
use serde_json::Value;
use std::collections::HashSet;

/// Where a column reads its value from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSource {
    /// A top-level field of the record
    Field(String),
    /// A field of a nested object, one level down
    Nested {
        /// Top-level object field
        parent: String,
        /// Field inside the parent object
        field: String,
    },
}

impl FieldSource {
    /// Look up the source value in a record
    ///
    /// Returns `None` when the field, or its parent object, is absent.
    pub fn resolve<'a>(&self, record: &'a Value) -> Option<&'a Value> {
        match self {
            FieldSource::Field(name) => record.get(name),
            FieldSource::Nested { parent, field } => record.get(parent)?.get(field),
        }
    }
}

impl std::fmt::Display for FieldSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldSource::Field(name) => write!(f, "{name}"),
            FieldSource::Nested { parent, field } => write!(f, "{parent}.{field}"),
        }
    }
}

/// A single output column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Header name
    pub name: String,
    /// Value source
    pub source: FieldSource,
}

impl Column {
    /// Column copied from the top-level field of the same name
    pub fn direct(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            source: FieldSource::Field(name.clone()),
            name,
        }
    }

    /// Column copied from a top-level field with a different name
    pub fn renamed(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: FieldSource::Field(field.into()),
        }
    }

    /// Column copied from `parent.field`
    pub fn nested(
        name: impl Into<String>,
        parent: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            source: FieldSource::Nested {
                parent: parent.into(),
                field: field.into(),
            },
        }
    }
}

/// Ordered set of output columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    /// Create a schema, rejecting empty or duplicate column names
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        if columns.is_empty() {
            return Err(Error::config("schema must have at least one column"));
        }

        let mut seen = HashSet::new();
        for column in &columns {
            if column.name.is_empty() {
                return Err(Error::config("schema column name cannot be empty"));
            }
            if !seen.insert(column.name.as_str()) {
                return Err(Error::config(format!(
                    "duplicate schema column: {}",
                    column.name
                )));
            }
        }

        Ok(Self { columns })
    }

    /// Columns in declared order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Header names in declared order
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the schema has no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
