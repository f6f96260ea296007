//! Catalog documents and the lookup store built from them.
//!
//! A catalog is a CSV document whose rows describe .NET members, keyed by
//! DocId with `Namespace`/`Type`/`Member` display columns, followed by
//! format-specific data columns. Three formats exist:
//!
//! - **exceptions** - one column per platform, cells flagging members that
//!   throw `PlatformNotSupportedException` there ([`parse_exceptions`])
//! - **deprecated** - one column of semicolon-separated diagnostic ids
//!   ([`parse_deprecated`])
//! - **sdk** - no data columns, row presence is membership ([`parse_sdk`])
//!
//! All three parse into an [`ApiStore`], a two-level map that buckets
//! entries under a coarse (namespace, type, member) key and resolves exact
//! matches by DocId.
//!
//! # Key Types
//! - [`ApiStore`] / [`ApiEntry`] - The lookup structure
//! - [`ApiDocumentParser`] - Shared parse driver the formats plug into
//! - [`Platform`] - Flag set for the exceptions format's data

mod api;
mod deprecated;
mod exceptions;
mod parser;
mod platform;
mod sdk;

pub use api::{ApiEntry, ApiRow, ApiStore};
pub use deprecated::{parse_deprecated, DeprecatedParser};
pub use exceptions::{parse_exceptions, ExceptionsParser, THROW_INDICATOR};
pub use parser::{ApiDocumentParser, IDENTITY_HEADERS};
pub use platform::Platform;
pub use sdk::{parse_sdk, SdkParser};
