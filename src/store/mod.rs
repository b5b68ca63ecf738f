//! Sheet transport: where the raw workout table lives.
//!
//! The core only ever sees a `RawTable`; a store reads the whole table and
//! overwrites the whole table. There is no partial update and no
//! concurrency check, the last writer wins.

pub mod csv_sheet;
pub mod memory;

pub use csv_sheet::CsvSheet;
pub use memory::MemorySheet;

use crate::models::RawTable;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("sheet not found: {0}")]
    NotFound(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed sheet {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("{0}")]
    Unavailable(String),
}

pub trait SheetStore {
    /// Fetch the full table.
    fn read_table(&self) -> Result<RawTable, TransportError>;

    /// Overwrite the full table.
    fn write_table(&self, table: &RawTable) -> Result<(), TransportError>;

    /// Human readable location, used in messages and the audit log.
    fn describe(&self) -> String;
}
