use std::io::BufRead;

use crate::csv::CsvReader;
use crate::store::{ApiRow, ApiStore};
use crate::Result;

/// The identity columns every catalog document starts with.
pub const IDENTITY_HEADERS: [&str; 4] = ["DocId", "Namespace", "Type", "Member"];

/// Parses one catalog document format into an [`ApiStore`].
///
/// The shared driver ([`ApiDocumentParser::parse`]) validates the identity
/// header prefix and splits each row into identity and data columns; format
/// implementations validate the data header names in
/// [`ApiDocumentParser::initialize`] and turn data cells into typed values
/// in [`ApiDocumentParser::parse_data`]. Validation is fail-fast: the first
/// malformed row aborts the parse.
///
/// Because the CSV layer drops a single trailing empty field, rows whose
/// data columns are all empty can come up short; `parse_data` receives only
/// the cells actually present.
pub trait ApiDocumentParser {
    /// The per-entry value this document format carries.
    type Data;

    /// Validates the data column headers (everything after the identity
    /// prefix).
    ///
    /// # Errors
    /// Returns an error when the headers do not fit the format.
    fn initialize(&mut self, headers: &[String]) -> Result<()> {
        let _ = headers;
        Ok(())
    }

    /// Parses the data cells of one row.
    ///
    /// # Errors
    /// Returns an error when the cells do not fit the format.
    fn parse_data(&mut self, values: &[String]) -> Result<Self::Data>;

    /// Parses a whole document.
    ///
    /// A document with a valid header and no rows parses to an empty store.
    ///
    /// # Errors
    /// Returns an error when the header is missing or malformed, when any
    /// row fails data validation, or when reading fails.
    fn parse<R>(&mut self, reader: R) -> Result<ApiStore<Self::Data>>
    where
        R: BufRead,
    {
        let mut csv = CsvReader::new(reader);
        let mut rows = Vec::new();
        let mut is_header = true;

        while let Some(row) = csv.read_line()? {
            if is_header {
                let is_valid = row.len() >= IDENTITY_HEADERS.len()
                    && row
                        .iter()
                        .zip(IDENTITY_HEADERS)
                        .all(|(cell, expected)| cell == expected);
                if !is_valid {
                    return Err(malformed_error!(
                        "document header must start with 'DocId,Namespace,Type,Member'"
                    ));
                }
                self.initialize(&row[IDENTITY_HEADERS.len()..])?;
                is_header = false;
            } else {
                if row.len() < 2 {
                    return Err(malformed_error!(
                        "document row is missing identity columns"
                    ));
                }
                let value_start = row.len().min(IDENTITY_HEADERS.len());
                let data = self.parse_data(&row[value_start..])?;

                let mut cells = row.into_iter();
                let doc_id = cells.next().unwrap_or_default();
                let namespace_name = cells.next().unwrap_or_default();
                let type_name = cells.next().unwrap_or_default();
                let signature = cells.next().unwrap_or_default();
                rows.push(ApiRow {
                    doc_id,
                    namespace_name,
                    type_name,
                    signature,
                    data,
                });
            }
        }

        Ok(ApiStore::create(rows))
    }
}
