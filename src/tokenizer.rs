//! Tokenizing CSV parser with RFC 4180-like quoting behavior
//!
//! The tokenizer walks the full character stream and reports structure
//! through a [`CsvEventHandler`]: document begin/end, row begin/end, and one
//! cell event per field. Quoted fields may contain the delimiter, literal
//! line terminators, and doubled quote characters.

use crate::error::{CsvError, Result};
use crate::events::{CsvEventHandler, DocumentCollector};
use std::iter::Peekable;
use std::str::Chars;

/// Tokenizing parser over an in-memory character stream
///
/// Rows and columns are numbered from 1. Input line terminators may be
/// `\r\n`, `\n`, or a lone `\r`; a trailing terminator does not produce an
/// empty final row. Malformed quoting halts the parse with
/// [`CsvError::MalformedContent`] carrying the offending cell position.
///
/// # Examples
///
/// ```
/// use csvflow::tokenizer::Tokenizer;
///
/// let rows = Tokenizer::new(',').read_all("a,\"b,c\"\nd").unwrap();
/// assert_eq!(rows, vec![vec!["a".to_string(), "b,c".to_string()],
///                       vec!["d".to_string()]]);
/// ```
pub struct Tokenizer {
    delimiter: char,
    quote: char,
}

impl Tokenizer {
    /// Create a tokenizer with the given delimiter and `"` as quote character
    pub fn new(delimiter: char) -> Self {
        Self {
            delimiter,
            quote: '"',
        }
    }

    /// Create a tokenizer with custom delimiter and quote character
    pub fn with_quote(delimiter: char, quote: char) -> Self {
        Self { delimiter, quote }
    }

    /// Parse the input, reporting structure through the handler
    ///
    /// Emits `document_begin`, then per row `row_begin`, one `cell` per
    /// field, `row_end`, and finally `document_end`. On malformed content
    /// the handler receives a single `failure` event, no further events
    /// follow, and the error is also returned.
    pub fn run<H: CsvEventHandler>(&self, input: &str, handler: &mut H) -> Result<()> {
        handler.document_begin();
        match self.tokenize(input, handler) {
            Ok(()) => {
                handler.document_end();
                Ok(())
            }
            Err(err) => {
                handler.failure(&err);
                Err(err)
            }
        }
    }

    /// Parse the input and materialize it as rows of strings
    pub fn read_all(&self, input: &str) -> Result<Vec<Vec<String>>> {
        let mut collector = DocumentCollector::new();
        self.run(input, &mut collector)?;
        Ok(collector.into_rows())
    }

    fn tokenize<H: CsvEventHandler>(&self, input: &str, handler: &mut H) -> Result<()> {
        let mut chars = input.chars().peekable();
        let mut row = 0;

        while chars.peek().is_some() {
            row += 1;
            handler.row_begin(row);

            let mut column = 0;
            loop {
                column += 1;
                let value = self.read_field(&mut chars, row, column)?;
                handler.cell(&value, column, row);

                match chars.peek().copied() {
                    Some(c) if c == self.delimiter => {
                        chars.next();
                    }
                    Some('\r') | Some('\n') => {
                        consume_line_terminator(&mut chars);
                        break;
                    }
                    None => break,
                    // read_field stops only at the delimiter, a terminator,
                    // or end of input
                    Some(_) => unreachable!(),
                }
            }

            handler.row_end(row);
        }

        Ok(())
    }

    /// Read one field, leaving the stream at the delimiter, terminator, or EOF
    fn read_field(
        &self,
        chars: &mut Peekable<Chars<'_>>,
        row: usize,
        column: usize,
    ) -> Result<String> {
        if chars.peek() == Some(&self.quote) {
            self.read_quoted_field(chars, row, column)
        } else {
            self.read_unquoted_field(chars, row, column)
        }
    }

    fn read_unquoted_field(
        &self,
        chars: &mut Peekable<Chars<'_>>,
        row: usize,
        column: usize,
    ) -> Result<String> {
        let mut value = String::new();

        while let Some(&c) = chars.peek() {
            if c == self.delimiter || c == '\n' || c == '\r' {
                break;
            }
            if c == self.quote {
                return Err(CsvError::malformed(
                    row,
                    column,
                    "quote character inside unquoted field",
                ));
            }
            value.push(c);
            chars.next();
        }

        Ok(value)
    }

    fn read_quoted_field(
        &self,
        chars: &mut Peekable<Chars<'_>>,
        row: usize,
        column: usize,
    ) -> Result<String> {
        chars.next(); // opening quote
        let mut value = String::new();

        loop {
            match chars.next() {
                None => {
                    return Err(CsvError::malformed(
                        row,
                        column,
                        "quoted field is never closed",
                    ));
                }
                Some(c) if c == self.quote => {
                    // Doubled quote is a literal quote; a lone quote closes
                    // the field.
                    if chars.peek() == Some(&self.quote) {
                        chars.next();
                        value.push(self.quote);
                        continue;
                    }

                    match chars.peek().copied() {
                        None | Some('\r') | Some('\n') => break,
                        Some(c) if c == self.delimiter => break,
                        Some(_) => {
                            return Err(CsvError::malformed(
                                row,
                                column,
                                "unexpected character after closing quote",
                            ));
                        }
                    }
                }
                Some(c) => value.push(c),
            }
        }

        Ok(value)
    }
}

/// Consume one line terminator: `\r\n`, `\n`, or a lone `\r`
fn consume_line_terminator(chars: &mut Peekable<Chars<'_>>) {
    if chars.peek() == Some(&'\r') {
        chars.next();
        if chars.peek() == Some(&'\n') {
            chars.next();
        }
    } else if chars.peek() == Some(&'\n') {
        chars.next();
    }
}
