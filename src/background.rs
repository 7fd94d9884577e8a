//! Background scheduling wrappers around the synchronous core
//!
//! Parsing and writing semantics are identical to the synchronous calls;
//! these helpers only move the whole operation onto a worker thread. There
//! is no cancellation: a started job runs to completion or error.

use crate::error::Result;
use crate::{read_csv_file, write_csv_file};
use std::path::PathBuf;
use std::thread::{self, JoinHandle};

/// Parse a CSV file on a worker thread
///
/// # Examples
///
/// ```no_run
/// use csvflow::background::parse_in_background;
///
/// let handle = parse_in_background("data.csv", ',');
/// let rows = handle.join().unwrap().unwrap();
/// println!("{} rows", rows.len());
/// ```
pub fn parse_in_background(
    path: impl Into<PathBuf>,
    delimiter: char,
) -> JoinHandle<Result<Vec<Vec<String>>>> {
    let path = path.into();
    thread::spawn(move || read_csv_file(path, delimiter))
}

/// Write a document to a CSV file on a worker thread
pub fn write_in_background(
    path: impl Into<PathBuf>,
    rows: Vec<Vec<String>>,
    delimiter: char,
) -> JoinHandle<Result<()>> {
    let path = path.into();
    thread::spawn(move || write_csv_file(path, &rows, delimiter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_background_write_then_parse() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bg.csv");
        let rows = vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string(), "d".to_string()],
        ];

        write_in_background(&path, rows.clone(), ',')
            .join()
            .unwrap()
            .unwrap();

        let parsed = parse_in_background(&path, ',').join().unwrap().unwrap();
        assert_eq!(parsed, rows);
    }

    #[test]
    fn test_background_parse_reports_missing_file() {
        let result = parse_in_background("no/such/file.csv", ',')
            .join()
            .unwrap();
        assert!(result.is_err());
    }
}
