//! # csvflow
//!
//! Event-driven CSV parsing and writing with configurable delimiters and
//! strict quoting.
//!
//! Two independent components share only the row/cell value model:
//!
//! - The [`tokenizer::Tokenizer`] turns a character stream into ordered
//!   document/row/cell events, delivered to a [`events::CsvEventHandler`].
//!   Quoted fields may contain the delimiter, embedded line terminators,
//!   and doubled quote characters; malformed quoting halts the parse with
//!   the offending row and column.
//! - The [`writer::CsvWriter`] serializes rows back to text, quoting a
//!   field only when it contains the delimiter, the quote character, or a
//!   line terminator, so that parsing the output reproduces the input cells
//!   exactly.
//!
//! Rows and columns are numbered from 1.
//!
//! # Examples
//!
//! Materialize a whole document:
//!
//! ```no_run
//! use csvflow::read_csv_file;
//!
//! let rows = read_csv_file("data.csv", ',').unwrap();
//! for row in &rows {
//!     println!("{:?}", row);
//! }
//! ```
//!
//! Stream events from an in-memory buffer:
//!
//! ```
//! use csvflow::{CsvEventHandler, CsvReader};
//!
//! struct Printer;
//!
//! impl CsvEventHandler for Printer {
//!     fn cell(&mut self, value: &str, column: usize, row: usize) {
//!         println!("r{row} c{column}: {value}");
//!     }
//! }
//!
//! let reader = CsvReader::from_string("a,b\n\"c,d\",e");
//! reader.parse_with(&mut Printer).unwrap();
//! ```

pub mod background;
pub mod encoding;
pub mod error;
pub mod events;
pub mod quote;
pub mod reader;
pub mod tokenizer;
pub mod writer;

pub use error::{CsvError, Result};
pub use events::{CsvEventHandler, DocumentCollector};
pub use quote::Quoter;
pub use reader::CsvReader;
pub use tokenizer::Tokenizer;
pub use writer::{document_to_string, CsvWriter};

use std::path::Path;

/// Read a CSV file and return it as rows of strings
///
/// Stateless convenience over [`CsvReader`]; constructs a fresh reader per
/// call, so no state is shared between invocations.
pub fn read_csv_file<P: AsRef<Path>>(path: P, delimiter: char) -> Result<Vec<Vec<String>>> {
    CsvReader::open(path)?.delimiter(delimiter).read_document()
}

/// Write rows to a CSV file, quoting fields as needed
///
/// Stateless convenience over [`CsvWriter`]; either the whole document is
/// written or the first error aborts the operation.
pub fn write_csv_file<P: AsRef<Path>>(
    path: P,
    rows: &[Vec<String>],
    delimiter: char,
) -> Result<()> {
    let mut writer = CsvWriter::create(path)?.delimiter(delimiter);
    writer.write_document(rows)?;
    writer.save()
}
