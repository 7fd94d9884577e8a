//! Event handler trait for parse and write notifications

use crate::error::CsvError;

/// Observer for parse and write progress
///
/// Every method has a default empty body, so implementors override only the
/// hooks they care about. Row and column numbers are 1-based; columns reset
/// at each row start.
///
/// # Examples
///
/// ```
/// use csvflow::events::CsvEventHandler;
/// use csvflow::tokenizer::Tokenizer;
///
/// struct CellCounter {
///     cells: usize,
/// }
///
/// impl CsvEventHandler for CellCounter {
///     fn cell(&mut self, _value: &str, _column: usize, _row: usize) {
///         self.cells += 1;
///     }
/// }
///
/// let mut counter = CellCounter { cells: 0 };
/// Tokenizer::new(',').run("a,b\nc,d", &mut counter).unwrap();
/// assert_eq!(counter.cells, 4);
/// ```
pub trait CsvEventHandler {
    /// Parsing of a document has started
    fn document_begin(&mut self) {}

    /// The document was fully parsed
    fn document_end(&mut self) {}

    /// A new row is about to be read
    fn row_begin(&mut self, _row: usize) {}

    /// The current row is complete
    fn row_end(&mut self, _row: usize) {}

    /// A cell value was read at the given column and row
    fn cell(&mut self, _value: &str, _column: usize, _row: usize) {}

    /// Parsing failed; no further events follow
    fn failure(&mut self, _error: &CsvError) {}

    /// The writer finished emitting the given row
    fn row_written(&mut self, _row: usize) {}
}

/// Handler that materializes the parsed document as rows of strings
#[derive(Debug, Default)]
pub struct DocumentCollector {
    rows: Vec<Vec<String>>,
}

impl DocumentCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the collector, returning the accumulated rows
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }
}

impl CsvEventHandler for DocumentCollector {
    fn row_begin(&mut self, _row: usize) {
        self.rows.push(Vec::new());
    }

    fn cell(&mut self, value: &str, _column: usize, _row: usize) {
        if let Some(row) = self.rows.last_mut() {
            row.push(value.to_string());
        }
    }
}
