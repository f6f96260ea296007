use std::io::BufRead;

use crate::store::{ApiDocumentParser, ApiStore};
use crate::Result;

/// Parser for the deprecation catalog: exactly one data column holding a
/// semicolon-separated list of diagnostic ids.
#[derive(Debug, Default)]
pub struct DeprecatedParser;

impl ApiDocumentParser for DeprecatedParser {
    type Data = Vec<String>;

    fn initialize(&mut self, headers: &[String]) -> Result<()> {
        if headers.len() != 1 {
            return Err(malformed_error!(
                "deprecation document must declare exactly one data column, found {}",
                headers.len()
            ));
        }
        Ok(())
    }

    fn parse_data(&mut self, values: &[String]) -> Result<Vec<String>> {
        let [value] = values else {
            return Err(malformed_error!(
                "deprecation row must carry exactly one data cell, found {}",
                values.len()
            ));
        };
        Ok(value.split(';').map(str::to_string).collect())
    }
}

/// Parses a deprecation catalog document.
///
/// # Errors
/// Returns an error on a malformed header, a row without exactly one data
/// cell, or a read failure.
pub fn parse_deprecated<R>(reader: R) -> Result<ApiStore<Vec<String>>>
where
    R: BufRead,
{
    DeprecatedParser.parse(reader)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_diagnostic_ids() {
        let doc = "DocId,Namespace,Type,Member,Ids\n\
                   M:C.M,N,C,M(),DE0001;DE0002\n\
                   M:C.N,N,C,N(),DE0003\n";
        let store = parse_deprecated(doc.as_bytes()).unwrap();

        assert_eq!(
            store.find_doc_id("M:C.M").unwrap().data(),
            &["DE0001", "DE0002"]
        );
        assert_eq!(store.find_doc_id("M:C.N").unwrap().data(), &["DE0003"]);
    }

    #[test]
    fn test_rejects_wrong_column_count() {
        assert!(parse_deprecated("DocId,Namespace,Type,Member\n".as_bytes()).is_err());
        assert!(parse_deprecated("DocId,Namespace,Type,Member,A,B\n".as_bytes()).is_err());
    }

    #[test]
    fn test_rejects_row_without_data_cell() {
        let doc = "DocId,Namespace,Type,Member,Ids\nM:C.M,N,C,M()\n";
        assert!(parse_deprecated(doc.as_bytes()).is_err());
    }
}
