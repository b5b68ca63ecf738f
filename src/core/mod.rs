pub mod add;
pub mod backup;
pub mod config;
pub mod context;
pub mod del;
pub mod ingest;
pub mod log;
pub mod logic;
pub mod mutate;
pub mod query;
