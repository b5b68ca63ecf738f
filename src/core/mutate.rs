//! Write path: append a row or drop the last appended row, then overwrite
//! the whole sheet.

use crate::errors::{AppError, AppResult};
use crate::models::{LogEntry, RawTable};
use crate::store::SheetStore;

/// New table with `entry` as the last row. Existing rows keep their order.
///
/// Canonical columns the table lacks are added to its header, so
/// `delete_most_recent(append(t, e)) == t` only holds when `t` already
/// carries them; otherwise the widened header stays.
pub fn append(raw: &RawTable, entry: &LogEntry) -> RawTable {
    let mut table = if raw.headers.is_empty() {
        RawTable::with_canonical_headers()
    } else {
        raw.clone()
    };

    let cells = entry.to_raw_cells();
    for (name, _) in &cells {
        table.ensure_column(name);
    }

    let mut row = vec![String::new(); table.headers.len()];
    for (name, value) in cells {
        if let Some(idx) = table.column_index(name) {
            row[idx] = value;
        }
    }

    table.push_row(row);
    table
}

/// New table without its last row.
///
/// This follows append order, not dates: a back-dated entry added last is
/// the one removed, even when newer dates exist above it.
pub fn delete_most_recent(raw: &RawTable) -> RawTable {
    let mut table = raw.clone();
    table.rows.pop();
    table
}

/// Overwrite the sheet and, when `verify` is set, read it back to make sure
/// the expected number of rows landed.
pub fn write_back(store: &dyn SheetStore, table: &RawTable, verify: bool) -> AppResult<()> {
    store.write_table(table)?;

    if verify {
        let stored = store.read_table()?;
        if stored.len() != table.len() {
            return Err(AppError::WriteNotConfirmed(format!(
                "{} holds {} rows after write, expected {}",
                store.describe(),
                stored.len(),
                table.len()
            )));
        }
    }

    Ok(())
}
