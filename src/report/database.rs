use std::collections::{BTreeSet, HashMap};
use std::io::{BufRead, Write};

use crate::csv::{CsvReader, CsvWriter};
use crate::metadata::MemberDesc;
use crate::report::SCAN_HEADERS;
use crate::scanner::{ExceptionInfo, ExceptionReporter};
use crate::store::THROW_INDICATOR;
use crate::Result;

/// One member of the merged database, with the platforms it was flagged on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseEntry {
    doc_id: String,
    namespace_name: String,
    type_name: String,
    member_name: String,
    site: Option<String>,
    platforms: BTreeSet<String>,
}

impl DatabaseEntry {
    /// The member's stable identifier.
    #[must_use]
    pub fn doc_id(&self) -> &str {
        &self.doc_id
    }

    /// Witness of the throw, when the producing scan recorded one.
    #[must_use]
    pub fn site(&self) -> Option<&str> {
        self.site.as_deref()
    }

    /// Platforms the member was flagged on, sorted.
    #[must_use]
    pub fn platforms(&self) -> &BTreeSet<String> {
        &self.platforms
    }
}

/// Accumulates per-platform scan results into one table keyed by DocId.
///
/// Feed it through a [`DatabaseReporter`] during a scan, or from previously
/// written scan documents via [`ScanDatabase::import_scan_csv`], then write
/// the merged exceptions catalog with [`ScanDatabase::export_csv`].
#[derive(Debug, Default)]
pub struct ScanDatabase {
    platforms: BTreeSet<String>,
    entries: HashMap<String, DatabaseEntry>,
}

impl ScanDatabase {
    /// Creates an empty database.
    #[must_use]
    pub fn new() -> Self {
        ScanDatabase::default()
    }

    /// Records one flagged member for a platform.
    ///
    /// The first record for a DocId fixes its display columns and witness;
    /// later records only extend the platform set.
    pub fn add(&mut self, member: &MemberDesc, site: Option<&str>, platform: &str) {
        self.platforms.insert(platform.to_string());
        let entry = self
            .entries
            .entry(member.doc_id().to_string())
            .or_insert_with(|| DatabaseEntry {
                doc_id: member.doc_id().to_string(),
                namespace_name: member.namespace_name().to_string(),
                type_name: member.type_name().to_string(),
                member_name: member.signature().to_string(),
                site: site.map(str::to_string),
                platforms: BTreeSet::new(),
            });
        entry.platforms.insert(platform.to_string());
    }

    /// All platforms seen so far, sorted.
    #[must_use]
    pub fn platforms(&self) -> &BTreeSet<String> {
        &self.platforms
    }

    /// All entries, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = &DatabaseEntry> {
        self.entries.values()
    }

    /// Number of distinct members recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no member was recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes the merged exceptions catalog.
    ///
    /// Columns are the four identity columns, optionally `Site`, then one
    /// column per recorded platform in sorted order with
    /// [`THROW_INDICATOR`] marks. Rows are ordered by namespace, type,
    /// member and DocId.
    ///
    /// # Errors
    /// Returns an error when writing fails.
    pub fn export_csv<W>(&self, writer: W, write_site: bool) -> Result<()>
    where
        W: Write,
    {
        let mut csv = CsvWriter::new(writer);

        csv.write("DocId")?;
        csv.write("Namespace")?;
        csv.write("Type")?;
        csv.write("Member")?;
        if write_site {
            csv.write("Site")?;
        }
        for platform in &self.platforms {
            csv.write(platform)?;
        }
        csv.write_line()?;

        let mut entries: Vec<&DatabaseEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| {
            (&a.namespace_name, &a.type_name, &a.member_name, &a.doc_id).cmp(&(
                &b.namespace_name,
                &b.type_name,
                &b.member_name,
                &b.doc_id,
            ))
        });

        for entry in entries {
            csv.write(&entry.doc_id)?;
            csv.write(&entry.namespace_name)?;
            csv.write(&entry.type_name)?;
            csv.write(&entry.member_name)?;
            if write_site {
                csv.write(entry.site.as_deref().unwrap_or_default())?;
            }
            for platform in &self.platforms {
                let mark = if entry.platforms.contains(platform) {
                    THROW_INDICATOR
                } else {
                    ""
                };
                csv.write(mark)?;
            }
            csv.write_line()?;
        }

        Ok(())
    }

    /// Imports a scan result document, attributing every row to `platform`.
    ///
    /// The document must carry the scan header, optionally extended with a
    /// `Site` column.
    ///
    /// # Errors
    /// Returns an error on a malformed header or row, or when reading
    /// fails.
    pub fn import_scan_csv<R>(&mut self, reader: R, platform: &str) -> Result<()>
    where
        R: BufRead,
    {
        let mut csv = CsvReader::new(reader);

        let Some(header) = csv.read_line()? else {
            return Err(malformed_error!("scan document is empty"));
        };
        let has_site = match header.len() {
            n if n == SCAN_HEADERS.len() => false,
            n if n == SCAN_HEADERS.len() + 1 && header[SCAN_HEADERS.len()] == "Site" => true,
            _ => return Err(malformed_error!("scan document header is malformed")),
        };
        if !header.iter().zip(SCAN_HEADERS).all(|(cell, expected)| cell == expected) {
            return Err(malformed_error!("scan document header is malformed"));
        }

        while let Some(row) = csv.read_line()? {
            if row.len() < SCAN_HEADERS.len() {
                return Err(malformed_error!(
                    "scan row has {} columns, expected at least {}",
                    row.len(),
                    SCAN_HEADERS.len()
                ));
            }
            row[4].parse::<i32>().map_err(|_| {
                malformed_error!("scan row nesting level '{}' is not a number", row[4])
            })?;

            let member = MemberDesc::from_columns(
                row[0].clone(),
                row[1].clone(),
                row[2].clone(),
                row[3].clone(),
            );
            let site = if has_site {
                row.get(5).map(String::as_str).filter(|s| !s.is_empty())
            } else {
                None
            };
            self.add(&member, site, platform);
        }

        Ok(())
    }
}

/// Routes positive scan results into one or more databases under a fixed
/// platform name.
pub struct DatabaseReporter<'a> {
    databases: Vec<&'a mut ScanDatabase>,
    platform: String,
}

impl<'a> DatabaseReporter<'a> {
    /// Creates a reporter feeding the given databases.
    pub fn new(databases: Vec<&'a mut ScanDatabase>, platform: impl Into<String>) -> Self {
        DatabaseReporter {
            databases,
            platform: platform.into(),
        }
    }
}

impl ExceptionReporter for DatabaseReporter<'_> {
    fn report(&mut self, info: &ExceptionInfo, member: &MemberDesc) -> Result<()> {
        if info.throws() {
            for database in &mut self.databases {
                database.add(member, info.site(), &self.platform);
            }
        }
        Ok(())
    }
}
