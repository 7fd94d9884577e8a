//! CSV file writing with per-row progress notifications

use crate::encoding::encode_text;
use crate::error::{CsvError, Result};
use crate::events::CsvEventHandler;
use crate::quote::Quoter;
use encoding_rs::{Encoding, UTF_8};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Normalized record terminator on output, regardless of input style
const LINE_ENDING: char = '\n';

/// CSV file writer
///
/// Writes rows incrementally, quoting any field that contains the delimiter,
/// the quote character, or a line terminator. Every record is terminated
/// with a single `\n`. A writer handles one destination; it never reads.
///
/// # Examples
///
/// ```no_run
/// use csvflow::writer::CsvWriter;
///
/// let mut writer = CsvWriter::create("out.csv").unwrap();
/// writer.write_row(["Name", "City"]).unwrap();
/// writer.write_row(["Alice", "NYC"]).unwrap();
/// writer.save().unwrap();
/// ```
#[derive(Debug)]
pub struct CsvWriter {
    writer: BufWriter<File>,
    row_count: u64,
    buffer: String,
    delimiter: char,
    quote: char,
    encoding: &'static Encoding,
}

impl CsvWriter {
    /// Create (or truncate) the destination file
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let file = File::create(path_ref).map_err(|e| {
            CsvError::Write(format!("failed to create {}: {}", path_ref.display(), e))
        })?;
        Ok(Self::from_file(file))
    }

    /// Create the destination file, failing if it already exists
    ///
    /// An existing file is a configuration error (`FileExists`), surfaced
    /// here, before any row is written.
    pub fn create_new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path_ref)
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::AlreadyExists {
                    CsvError::FileExists(path_ref.display().to_string())
                } else {
                    CsvError::Write(format!("failed to create {}: {}", path_ref.display(), e))
                }
            })?;
        Ok(Self::from_file(file))
    }

    fn from_file(file: File) -> Self {
        CsvWriter {
            writer: BufWriter::new(file),
            row_count: 0,
            buffer: String::with_capacity(1024),
            delimiter: ',',
            quote: '"',
            encoding: UTF_8,
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

    /// Set the output text encoding, UTF-8 by default (builder pattern)
    pub fn encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Write one row, quoting fields as needed
    pub fn write_row<I, S>(&mut self, row: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // Reuse the row buffer
        self.buffer.clear();
        Quoter::with_quote(self.delimiter, self.quote).write_row(row, &mut self.buffer);
        self.buffer.push(LINE_ENDING);

        let bytes = encode_text(&self.buffer, self.encoding);
        self.writer
            .write_all(&bytes)
            .map_err(|e| CsvError::Write(format!("failed to write row: {}", e)))?;

        self.row_count += 1;
        Ok(())
    }

    /// Write an entire document, row by row, in order
    pub fn write_document(&mut self, rows: &[Vec<String>]) -> Result<()> {
        for row in rows {
            self.write_row(row)?;
        }
        Ok(())
    }

    /// Write an entire document, notifying the handler after each row
    ///
    /// The handler receives `row_written(n)` with 1-based row numbers, in
    /// document order.
    pub fn write_document_with<H: CsvEventHandler>(
        &mut self,
        rows: &[Vec<String>],
        handler: &mut H,
    ) -> Result<()> {
        for (i, row) in rows.iter().enumerate() {
            self.write_row(row)?;
            handler.row_written(i + 1);
        }
        Ok(())
    }

    /// Get the number of rows written so far
    pub fn row_count(&self) -> u64 {
        self.row_count
    }

    /// Flush and close the destination, consuming the writer
    pub fn save(mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| CsvError::Write(format!("failed to flush file: {}", e)))
    }
}

/// Render a document to a single in-memory string
///
/// For callers that persist the blob themselves. Same quoting rules and
/// `\n` record terminator as [`CsvWriter`].
pub fn document_to_string(rows: &[Vec<String>], delimiter: char) -> String {
    let quoter = Quoter::new(delimiter);
    let mut out = String::new();
    for row in rows {
        quoter.write_row(row, &mut out);
        out.push(LINE_ENDING);
    }
    out
}
