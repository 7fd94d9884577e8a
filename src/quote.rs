//! Field quoting rules for CSV output
//!
//! A field is quoted only when it needs to be: when it contains the
//! delimiter, the quote character, a carriage return, or a line feed.
//! Embedded quote characters are doubled inside a quoted field.

/// Applies quoting and escaping when rendering fields and rows
pub struct Quoter {
    delimiter: char,
    quote: char,
}

impl Quoter {
    /// Create a quoter with the given delimiter and `"` as quote character
    pub fn new(delimiter: char) -> Self {
        Self {
            delimiter,
            quote: '"',
        }
    }

    /// Create a quoter with custom delimiter and quote character
    pub fn with_quote(delimiter: char, quote: char) -> Self {
        Self { delimiter, quote }
    }

    /// Render one row into the output buffer, fields joined by the delimiter
    ///
    /// No line terminator is appended; the caller owns record separation.
    pub fn write_row<I, S>(&self, fields: I, out: &mut String)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (i, field) in fields.into_iter().enumerate() {
            if i > 0 {
                out.push(self.delimiter);
            }
            self.write_field(field.as_ref(), out);
        }
    }

    /// Render a single field, quoting and escaping it if required
    pub fn write_field(&self, field: &str, out: &mut String) {
        if self.needs_quoting(field) {
            out.push(self.quote);
            for c in field.chars() {
                if c == self.quote {
                    // Escape by doubling: " -> ""
                    out.push(self.quote);
                    out.push(self.quote);
                } else {
                    out.push(c);
                }
            }
            out.push(self.quote);
        } else {
            out.push_str(field);
        }
    }

    /// A field needs quoting iff it contains the delimiter, the quote
    /// character, or a line terminator
    pub fn needs_quoting(&self, field: &str) -> bool {
        field
            .chars()
            .any(|c| c == self.delimiter || c == self.quote || c == '\n' || c == '\r')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(quoter: &Quoter, fields: &[&str]) -> String {
        let mut out = String::new();
        quoter.write_row(fields, &mut out);
        out
    }

    #[test]
    fn test_plain_fields_stay_unquoted() {
        let quoter = Quoter::new(',');
        assert_eq!(render(&quoter, &["a", "b", "c"]), "a,b,c");
    }

    #[test]
    fn test_delimiter_forces_quoting() {
        let quoter = Quoter::new(',');
        assert_eq!(render(&quoter, &["a,b", "c"]), r#""a,b",c"#);
    }

    #[test]
    fn test_quotes_are_doubled() {
        let quoter = Quoter::new(',');
        assert_eq!(
            render(&quoter, &[r#"He said "hi""#]),
            r#""He said ""hi""""#
        );
    }

    #[test]
    fn test_newlines_force_quoting() {
        let quoter = Quoter::new(',');
        assert_eq!(
            render(&quoter, &["line1\nline2", "x"]),
            "\"line1\nline2\",x"
        );
    }

    #[test]
    fn test_carriage_return_forces_quoting() {
        let quoter = Quoter::new(',');
        assert_eq!(render(&quoter, &["a\rb"]), "\"a\rb\"");
    }

    #[test]
    fn test_empty_fields() {
        let quoter = Quoter::new(',');
        assert_eq!(render(&quoter, &["a", "", "c"]), "a,,c");
        assert_eq!(render(&quoter, &["", "", ""]), ",,");
    }

    #[test]
    fn test_custom_delimiter() {
        let quoter = Quoter::new(';');
        assert_eq!(render(&quoter, &["a", "b;c", "d"]), r#"a;"b;c";d"#);
        // Commas are plain text under a semicolon delimiter
        assert_eq!(render(&quoter, &["a,b"]), "a,b");
    }
}
