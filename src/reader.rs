//! CSV file reading with event delivery or whole-document materialization

use crate::encoding::decode_bytes;
use crate::error::{CsvError, Result};
use crate::events::CsvEventHandler;
use crate::tokenizer::Tokenizer;
use encoding_rs::{Encoding, UTF_8};
use std::fs;
use std::path::Path;

/// CSV file reader
///
/// Loads and decodes the source once, then parses it on demand, either
/// delivering events to a [`CsvEventHandler`] or materializing the whole
/// document. A reader handles one source; it never writes.
///
/// # Examples
///
/// ```no_run
/// use csvflow::reader::CsvReader;
///
/// let reader = CsvReader::open("data.csv").unwrap().delimiter(';');
/// let rows = reader.read_document().unwrap();
/// println!("{} rows", rows.len());
/// ```
#[derive(Debug)]
pub struct CsvReader {
    content: String,
    delimiter: char,
    quote: char,
}

impl CsvReader {
    /// Open a CSV file, decoding it as UTF-8 (BOM-aware)
    ///
    /// A missing file is a configuration error (`InvalidPath`), surfaced
    /// here, before any parsing takes place.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_encoding(path, UTF_8)
    }

    /// Open a CSV file with an explicit source encoding
    ///
    /// A byte-order mark in the file overrides the given encoding. Bytes
    /// that do not decode are a configuration error (`Decode`) surfaced
    /// before parsing starts.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use csvflow::reader::CsvReader;
    /// use encoding_rs::WINDOWS_1252;
    ///
    /// let reader = CsvReader::open_with_encoding("legacy.csv", WINDOWS_1252).unwrap();
    /// ```
    pub fn open_with_encoding<P: AsRef<Path>>(
        path: P,
        encoding: &'static Encoding,
    ) -> Result<Self> {
        let path_ref = path.as_ref();
        let bytes = fs::read(path_ref).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CsvError::InvalidPath(path_ref.display().to_string())
            } else {
                CsvError::Read(format!("failed to read {}: {}", path_ref.display(), e))
            }
        })?;

        Ok(Self::from_string(decode_bytes(&bytes, encoding)?))
    }

    /// Build a reader over an in-memory buffer instead of a file
    pub fn from_string(content: impl Into<String>) -> Self {
        CsvReader {
            content: content.into(),
            delimiter: ',',
            quote: '"',
        }
    }

    /// Set custom delimiter (builder pattern)
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set custom quote character (builder pattern)
    pub fn quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    /// Parse the source, delivering events to the handler
    ///
    /// The event sequence is document-begin, then row-begin / cell / row-end
    /// per record, then document-end; or a single failure event on malformed
    /// content, after which parsing halts.
    pub fn parse_with<H: CsvEventHandler>(&self, handler: &mut H) -> Result<()> {
        Tokenizer::with_quote(self.delimiter, self.quote).run(&self.content, handler)
    }

    /// Parse the source and return it as rows of strings
    pub fn read_document(&self) -> Result<Vec<Vec<String>>> {
        Tokenizer::with_quote(self.delimiter, self.quote).read_all(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_from_string() {
        let reader = CsvReader::from_string("a,b\nc,d");
        let rows = reader.read_document().unwrap();
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_missing_file_is_invalid_path() {
        let err = CsvReader::open("no/such/file.csv").unwrap_err();
        assert!(matches!(err, CsvError::InvalidPath(_)));
    }

    #[test]
    fn test_custom_delimiter() {
        let reader = CsvReader::from_string("a;b;c").delimiter(';');
        assert_eq!(reader.read_document().unwrap(), vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn test_malformed_content_halts() {
        let reader = CsvReader::from_string("a,\"b");
        let err = reader.read_document().unwrap_err();
        assert!(matches!(err, CsvError::MalformedContent { row: 1, .. }));
    }
}
