//! Result sinks and catalog generation.
//!
//! Two [`crate::scanner::ExceptionReporter`] implementations live here:
//! [`CsvReporter`] streams one scan's findings into a per-platform CSV
//! document, and [`DatabaseReporter`] feeds a [`ScanDatabase`], which merges
//! findings across platforms and writes the exceptions catalog consumed by
//! [`crate::store::parse_exceptions`].

mod csv;
mod database;

pub use csv::{CsvReporter, SCAN_HEADERS};
pub use database::{DatabaseEntry, DatabaseReporter, ScanDatabase};
