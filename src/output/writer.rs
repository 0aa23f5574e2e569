//! CSV file writer

use crate::error::{Error, Result, ResultExt};
use crate::schema::Schema;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// CSV writer bound to a fixed column schema
pub struct CsvWriter<W: Write> {
    /// Underlying csv writer
    writer: csv::Writer<W>,
    /// Columns per row
    width: usize,
    /// Number of data rows written
    rows_written: usize,
}

impl CsvWriter<BufWriter<File>> {
    /// Create (or truncate) the file at `path` and write the header row
    ///
    /// Missing parent directories are created.
    pub fn create(path: impl AsRef<Path>, schema: &Schema) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        Self::from_writer(BufWriter::new(file), schema)
    }
}

impl<W: Write> CsvWriter<W> {
    /// Wrap any writer and write the header row
    pub fn from_writer(inner: W, schema: &Schema) -> Result<Self> {
        let mut writer = csv::Writer::from_writer(inner);
        writer.write_record(schema.headers())?;

        Ok(Self {
            writer,
            width: schema.len(),
            rows_written: 0,
        })
    }

    /// Append one row
    pub fn write_row<I, S>(&mut self, row: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        self.writer.write_record(row)?;
        self.rows_written += 1;
        Ok(())
    }

    /// Flush buffered rows to the underlying writer
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Number of columns per row
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of data rows written so far
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush and return the underlying writer and the row count
    pub fn into_inner(self) -> Result<(W, usize)> {
        let rows = self.rows_written;
        let inner = self
            .writer
            .into_inner()
            .map_err(|e| Error::Io(e.into_error()))?;
        Ok((inner, rows))
    }

    /// Flush and close, returning the number of data rows
    pub fn close(self) -> Result<usize> {
        let (mut inner, rows) = self.into_inner()?;
        inner.flush()?;
        Ok(rows)
    }
}
