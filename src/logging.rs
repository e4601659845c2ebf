//! Append-only measurement log and its CSV serialization.
//!
//! The log is an in-memory table with the fixed schema
//! `Time, -x, +x, 2x, -y, +y, 2y`; rows are kept in insertion order and are
//! never rewritten or deduplicated. Serialization prepends an unlabeled
//! row-index column, matching the historical file format consumed by the
//! bench tooling.
use crate::types::MeasurementVector;
use std::fs;
use std::path::Path;

/// Default destination filename for a flushed log.
pub const DEFAULT_LOG_FILE: &str = "FOV_data.csv";

/// Named value columns, in file order after the index column.
pub const LOG_COLUMNS: [&str; 7] = ["Time", "-x", "+x", "2x", "-y", "+y", "2y"];

/// One logged sample: a caller-supplied timestamp and the six components.
#[derive(Clone, Debug, PartialEq)]
pub struct LogRow {
    pub time: String,
    pub values: MeasurementVector,
}

/// Append-only log of smoothed measurements for one session.
#[derive(Clone, Debug, Default)]
pub struct FovLog {
    rows: Vec<LogRow>,
}

impl FovLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one row. Rows keep insertion order; nothing is overwritten.
    pub fn append(&mut self, time: impl Into<String>, values: MeasurementVector) {
        self.rows.push(LogRow {
            time: time.into(),
            values,
        });
    }

    pub fn rows(&self) -> &[LogRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as CSV text: header row, then one line per sample
    /// with a leading row index.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        out.push(',');
        out.push_str(&LOG_COLUMNS.join(","));
        out.push('\n');
        for (i, row) in self.rows.iter().enumerate() {
            out.push_str(&i.to_string());
            out.push(',');
            out.push_str(&row.time);
            for v in row.values.iter() {
                out.push(',');
                out.push_str(&v.to_string());
            }
            out.push('\n');
        }
        out
    }

    /// Write the full table to `path`.
    ///
    /// The log itself is untouched by failure: an I/O error leaves every row
    /// in place and the log appendable, so a flush can be retried once the
    /// destination recovers.
    pub fn write_csv(&self, path: &Path) -> Result<(), String> {
        fs::write(path, self.to_csv())
            .map_err(|e| format!("Failed to write {}: {} ({e})", path.display(), e.kind()))
    }
}
