//! Line-oriented CSV reading and writing for the catalog formats.
//!
//! Deliberately small: the catalog documents never put line breaks inside
//! fields, so the reader works line by line. One format quirk is load-bearing
//! and preserved on both sides: a row ending in a comma does *not* produce a
//! trailing empty field. Catalog rows for members with no data set therefore
//! parse to exactly the four identity columns.
//!
//! # Key Types
//! - [`CsvReader`] - Pulls one record per line from any [`BufRead`]
//! - [`CsvWriter`] - Streams fields with minimal quoting into any [`Write`]

use std::io::{BufRead, Write};

use crate::Result;

/// Reads CSV records line by line.
pub struct CsvReader<R>
where
    R: BufRead,
{
    reader: R,
}

impl<R> CsvReader<R>
where
    R: BufRead,
{
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        CsvReader { reader }
    }

    /// Reads the next record, or `None` at end of input.
    ///
    /// Empty fields between commas are materialized; a trailing comma is
    /// not. Quoted fields may contain commas and doubled quotes.
    ///
    /// # Errors
    /// Returns an error when the underlying reader fails.
    pub fn read_line(&mut self) -> Result<Option<Vec<String>>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(parse_record(&line)))
    }
}

fn parse_record(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut fields = Vec::new();
    let mut index = 0;
    while index < chars.len() {
        let value = read_value(&chars, &mut index);
        // Skip the separating comma. A comma at end of line ends the record
        // without an empty field behind it.
        index += 1;
        fields.push(value);
    }
    fields
}

fn read_value(chars: &[char], index: &mut usize) -> String {
    if chars[*index] != '"' {
        let start = *index;
        while *index < chars.len() && chars[*index] != ',' {
            *index += 1;
        }
        return chars[start..*index].iter().collect();
    }

    // Quoted field: doubled quotes unescape to one, a lone quote ends the
    // field.
    *index += 1;
    let mut value = String::new();
    while *index < chars.len() {
        let c = chars[*index];
        if c == '"' {
            if chars.get(*index + 1) == Some(&'"') {
                *index += 1;
            } else {
                break;
            }
        }
        value.push(c);
        *index += 1;
    }
    *index += 1;
    value
}

const SPECIAL_CHARS: [char; 4] = [',', '"', '\n', '\r'];

/// Writes CSV records field by field.
///
/// Fields are quoted only when they contain a separator, a quote or a line
/// break; quotes inside quoted fields are doubled.
pub struct CsvWriter<W>
where
    W: Write,
{
    writer: W,
    needs_comma: bool,
}

impl<W> CsvWriter<W>
where
    W: Write,
{
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        CsvWriter {
            writer,
            needs_comma: false,
        }
    }

    /// Appends one field to the current record.
    ///
    /// # Errors
    /// Returns an error when the underlying writer fails.
    pub fn write(&mut self, text: &str) -> Result<()> {
        if self.needs_comma {
            self.writer.write_all(b",")?;
        }
        self.needs_comma = true;

        if !text.contains(SPECIAL_CHARS) {
            self.writer.write_all(text.as_bytes())?;
            return Ok(());
        }

        self.writer.write_all(b"\"")?;
        for c in text.chars() {
            if c == '"' {
                write!(self.writer, "\"")?;
            }
            write!(self.writer, "{c}")?;
        }
        self.writer.write_all(b"\"")?;
        Ok(())
    }

    /// Ends the current record.
    ///
    /// # Errors
    /// Returns an error when the underlying writer fails.
    pub fn write_line(&mut self) -> Result<()> {
        self.writer.write_all(b"\n")?;
        self.needs_comma = false;
        Ok(())
    }

    /// Consumes the writer and hands the underlying sink back.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
