use std::io::Write;

use crate::csv::CsvWriter;
use crate::metadata::MemberDesc;
use crate::scanner::{ExceptionInfo, ExceptionReporter};
use crate::Result;

/// Header of a scan result document, in column order.
pub const SCAN_HEADERS: [&str; 5] = ["DocId", "Namespace", "Type", "Member", "Nesting"];

/// Streams positive scan results into a CSV document.
///
/// One row per throwing member: the four identity columns plus the
/// call-graph depth, and optionally the witness site. Negative results are
/// dropped, so the document lists exactly the flagged surface.
pub struct CsvReporter<W>
where
    W: Write,
{
    writer: CsvWriter<W>,
    site: bool,
}

impl<W> CsvReporter<W>
where
    W: Write,
{
    /// Creates a reporter and writes the header row.
    ///
    /// # Errors
    /// Returns an error when writing the header fails.
    pub fn new(writer: W) -> Result<Self> {
        Self::create(writer, false)
    }

    /// Creates a reporter that additionally writes a `Site` column naming
    /// the method the throw was found in, so the witness survives a
    /// document-mediated merge.
    ///
    /// # Errors
    /// Returns an error when writing the header fails.
    pub fn with_site(writer: W) -> Result<Self> {
        Self::create(writer, true)
    }

    fn create(writer: W, site: bool) -> Result<Self> {
        let mut writer = CsvWriter::new(writer);
        for header in SCAN_HEADERS {
            writer.write(header)?;
        }
        if site {
            writer.write("Site")?;
        }
        writer.write_line()?;
        Ok(CsvReporter { writer, site })
    }

    /// Consumes the reporter and hands the underlying sink back.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W> ExceptionReporter for CsvReporter<W>
where
    W: Write,
{
    fn report(&mut self, info: &ExceptionInfo, member: &MemberDesc) -> Result<()> {
        if !info.throws() {
            return Ok(());
        }

        self.writer.write(member.doc_id())?;
        self.writer.write(member.namespace_name())?;
        self.writer.write(member.type_name())?;
        self.writer.write(member.signature())?;
        self.writer.write(&info.level().to_string())?;
        if self.site {
            self.writer.write(info.site().unwrap_or_default())?;
        }
        self.writer.write_line()
    }
}
