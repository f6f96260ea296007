use std::io::BufRead;

use crate::store::{ApiDocumentParser, ApiStore};
use crate::Result;

/// Parser for membership catalogs: no data columns, presence of a row is
/// the fact being recorded.
#[derive(Debug, Default)]
pub struct SdkParser;

impl ApiDocumentParser for SdkParser {
    type Data = ();

    fn initialize(&mut self, headers: &[String]) -> Result<()> {
        if !headers.is_empty() {
            return Err(malformed_error!(
                "membership document must not declare data columns, found {}",
                headers.len()
            ));
        }
        Ok(())
    }

    fn parse_data(&mut self, values: &[String]) -> Result<()> {
        if !values.is_empty() {
            return Err(malformed_error!(
                "membership row must not carry data cells, found {}",
                values.len()
            ));
        }
        Ok(())
    }
}

/// Parses a membership catalog document.
///
/// # Errors
/// Returns an error when the document declares or carries data columns, or
/// when reading fails.
pub fn parse_sdk<R>(reader: R) -> Result<ApiStore<()>>
where
    R: BufRead,
{
    SdkParser.parse(reader)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_is_presence() {
        let doc = "DocId,Namespace,Type,Member\n\
                   M:C.M,N,C,M()\n";
        let store = parse_sdk(doc.as_bytes()).unwrap();
        assert!(store.find_doc_id("M:C.M").is_some());
        assert!(store.find_doc_id("M:C.N").is_none());
    }

    #[test]
    fn test_rejects_data_columns() {
        assert!(parse_sdk("DocId,Namespace,Type,Member,Extra\n".as_bytes()).is_err());
    }

    #[test]
    fn test_rejects_data_cells() {
        let doc = "DocId,Namespace,Type,Member\nM:C.M,N,C,M(),X\n";
        assert!(parse_sdk(doc.as_bytes()).is_err());
    }
}
