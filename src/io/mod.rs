//! Text input for scan sets.

mod scan_set;

pub use scan_set::{ScanSetError, parse_scan_set, read_scan_set};
