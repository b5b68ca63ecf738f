use super::{SheetStore, TransportError};
use crate::models::RawTable;
use csv::{ByteRecord, ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::{Path, PathBuf};

/// Workout sheet stored as a CSV file. The first record is the header.
pub struct CsvSheet {
    path: PathBuf,
}

impl CsvSheet {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create the sheet with the given header unless it already exists.
    /// Returns true when a new file was written.
    pub fn create_if_missing(&self, headers: &[String]) -> Result<bool, TransportError> {
        if self.path.exists() {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
        }

        self.write_table(&RawTable::new(headers.to_vec()))?;
        Ok(true)
    }

    fn path_str(&self) -> String {
        self.path.display().to_string()
    }

    fn io_err(&self, source: std::io::Error) -> TransportError {
        TransportError::Io {
            path: self.path_str(),
            source,
        }
    }

    fn csv_err(&self, source: csv::Error) -> TransportError {
        TransportError::Csv {
            path: self.path_str(),
            source,
        }
    }
}

/// Cells as text; invalid UTF-8 becomes U+FFFD instead of failing the row.
fn lossy_cells(rec: &ByteRecord) -> Vec<String> {
    rec.iter()
        .map(|f| String::from_utf8_lossy(f).into_owned())
        .collect()
}

impl SheetStore for CsvSheet {
    fn read_table(&self) -> Result<RawTable, TransportError> {
        if !self.path.exists() {
            return Err(TransportError::NotFound(self.path_str()));
        }

        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| self.csv_err(e))?;

        // decoded per cell: one bad byte never drops a row
        let mut records = rdr.byte_records();

        let headers: Vec<String> = match records.next() {
            Some(rec) => lossy_cells(&rec.map_err(|e| self.csv_err(e))?),
            None => return Ok(RawTable::default()),
        };

        let mut table = RawTable::new(headers);
        for rec in records {
            let rec = rec.map_err(|e| self.csv_err(e))?;
            table.push_row(lossy_cells(&rec));
        }

        Ok(table)
    }

    fn write_table(&self, table: &RawTable) -> Result<(), TransportError> {
        let mut wtr = WriterBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| self.csv_err(e))?;

        if !table.headers.is_empty() {
            wtr.write_record(&table.headers)
                .map_err(|e| self.csv_err(e))?;
        }

        for row in &table.rows {
            wtr.write_record(row).map_err(|e| self.csv_err(e))?;
        }

        wtr.flush().map_err(|e| self.io_err(e))?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path_str()
    }
}
