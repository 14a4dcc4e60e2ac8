//! Line-oriented scan set parsing.
//!
//! The text format carries one scan per block: a `--- scanner N ---`
//! header line, then one `x,y,z` integer triple per line. Blank lines
//! separate blocks; a trailing block without a final blank line is
//! accepted.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

use crate::core::{BeaconScan, Point3};

/// Scan set parse error.
#[derive(Error, Debug)]
pub enum ScanSetError {
    /// File could not be read.
    #[error("failed to read scan set: {0}")]
    Io(#[from] std::io::Error),

    /// Coordinates appeared before any scanner header.
    #[error("line {line}: expected scanner header before coordinates")]
    MissingHeader {
        /// 1-based line number.
        line: usize,
    },

    /// A coordinate line was not three comma-separated integers.
    #[error("line {line}: expected three comma-separated integers, got {text:?}")]
    InvalidTriple {
        /// 1-based line number.
        line: usize,
        /// The offending line text.
        text: String,
    },

    /// The input contained no scans at all.
    #[error("scan set contains no scans")]
    Empty,
}

/// Parse a scan set from text.
pub fn parse_scan_set(input: &str) -> Result<Vec<BeaconScan>, ScanSetError> {
    let mut scans = Vec::new();
    let mut current: Option<HashSet<Point3>> = None;

    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        let lineno = idx + 1;

        if line.is_empty() {
            if let Some(points) = current.take() {
                scans.push(BeaconScan::new(points));
            }
        } else if line.starts_with("---") {
            // Tolerate a header directly after the previous block.
            if let Some(points) = current.take() {
                scans.push(BeaconScan::new(points));
            }
            current = Some(HashSet::new());
        } else {
            let points = current
                .as_mut()
                .ok_or(ScanSetError::MissingHeader { line: lineno })?;
            points.insert(parse_triple(line, lineno)?);
        }
    }

    if let Some(points) = current.take() {
        scans.push(BeaconScan::new(points));
    }

    if scans.is_empty() {
        return Err(ScanSetError::Empty);
    }
    Ok(scans)
}

/// Read and parse a scan set file.
pub fn read_scan_set(path: &Path) -> Result<Vec<BeaconScan>, ScanSetError> {
    parse_scan_set(&std::fs::read_to_string(path)?)
}

fn parse_triple(text: &str, line: usize) -> Result<Point3, ScanSetError> {
    let mut parts = text.split(',').map(|t| t.trim().parse::<i32>());
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(Ok(x)), Some(Ok(y)), Some(Ok(z)), None) => Ok(Point3::new(x, y, z)),
        _ => Err(ScanSetError::InvalidTriple {
            line,
            text: text.to_string(),
        }),
    }
}
