pub mod columns;
pub mod log_entry;
pub mod raw_table;
pub mod summary;
pub mod time_view;

pub use log_entry::LogEntry;
pub use raw_table::RawTable;
pub use time_view::TimeView;
