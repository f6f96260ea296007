use std::io::BufRead;

use crate::store::{ApiDocumentParser, ApiStore, Platform};
use crate::Result;

/// Cell marker for "throws on this platform".
pub const THROW_INDICATOR: &str = "X";

/// Parser for the exceptions catalog: one data column per platform, each
/// cell empty or [`THROW_INDICATOR`].
#[derive(Debug, Default)]
pub struct ExceptionsParser {
    platforms: Vec<Platform>,
}

impl ApiDocumentParser for ExceptionsParser {
    type Data = Platform;

    fn initialize(&mut self, headers: &[String]) -> Result<()> {
        if headers.is_empty() {
            return Err(malformed_error!(
                "exceptions document declares no platform columns"
            ));
        }
        self.platforms = headers
            .iter()
            .map(|header| {
                Platform::from_header(header)
                    .ok_or_else(|| malformed_error!("unknown platform column '{}'", header))
            })
            .collect::<Result<_>>()?;
        Ok(())
    }

    fn parse_data(&mut self, values: &[String]) -> Result<Platform> {
        if values.len() > self.platforms.len() {
            return Err(malformed_error!(
                "row has more cells than declared platform columns"
            ));
        }

        let mut data = Platform::empty();
        for (value, &platform) in values.iter().zip(&self.platforms) {
            match value.as_str() {
                "" => {}
                THROW_INDICATOR => data |= platform,
                other => {
                    return Err(malformed_error!(
                        "platform cell must be empty or '{}', found '{}'",
                        THROW_INDICATOR,
                        other
                    ))
                }
            }
        }
        Ok(data)
    }
}

/// Parses an exceptions catalog document.
///
/// # Errors
/// Returns an error on a malformed header, an unknown platform column, an
/// invalid cell, or a read failure.
pub fn parse_exceptions<R>(reader: R) -> Result<ApiStore<Platform>>
where
    R: BufRead,
{
    ExceptionsParser::default().parse(reader)
}
