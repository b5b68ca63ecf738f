use super::{SheetStore, TransportError};
use crate::models::RawTable;
use std::cell::{Cell, RefCell};

/// In-process sheet. Useful when embedding the pipeline and in tests,
/// where reads and writes can be made to fail on demand.
#[derive(Default)]
pub struct MemorySheet {
    table: RefCell<RawTable>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
    drop_writes: Cell<bool>,
    writes: Cell<usize>,
}

impl MemorySheet {
    pub fn new(table: RawTable) -> Self {
        Self {
            table: RefCell::new(table),
            ..Default::default()
        }
    }

    /// Current contents.
    pub fn snapshot(&self) -> RawTable {
        self.table.borrow().clone()
    }

    /// Number of successful `write_table` calls.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Accept writes without storing them.
    pub fn set_drop_writes(&self, drop: bool) {
        self.drop_writes.set(drop);
    }
}

impl SheetStore for MemorySheet {
    fn read_table(&self) -> Result<RawTable, TransportError> {
        if self.fail_reads.get() {
            return Err(TransportError::Unavailable("memory sheet read failure".into()));
        }
        Ok(self.snapshot())
    }

    fn write_table(&self, table: &RawTable) -> Result<(), TransportError> {
        if self.fail_writes.get() {
            return Err(TransportError::Unavailable("memory sheet write failure".into()));
        }
        if !self.drop_writes.get() {
            *self.table.borrow_mut() = table.clone();
        }
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
