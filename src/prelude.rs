//! # pnscan Prelude
//!
//! Convenient re-exports of the most commonly used types. Import this module
//! to get quick access to the essentials for scanning and catalog handling.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all pnscan operations
pub use crate::Error;

/// The result type used throughout pnscan
pub use crate::Result;

// ================================================================================================
// Assembly Object Model
// ================================================================================================

/// The assembly model and its identity types
pub use crate::metadata::{Assembly, Member, MemberDesc, MethodDef, MethodRef, Token, TypeDef};

/// Member accessibility
pub use crate::metadata::Visibility;

/// Constructor name constant
pub use crate::metadata::CTOR_NAME;

/// Fluent construction of fixture assemblies
pub use crate::metadata::{
    AssemblyBuilder, EventBuilder, IlAssembler, MethodBuilder, PropertyBuilder, TypeBuilder,
};

/// Stable member identifiers
pub use crate::metadata::method_doc_id;

// ================================================================================================
// Scanning
// ================================================================================================

/// The analysis driver and its constants
pub use crate::scanner::{ExceptionScanner, MAX_NESTING_LEVEL, PLATFORM_NOT_SUPPORTED};

/// Per-member verdicts
pub use crate::scanner::ExceptionInfo;

/// Result sinks
pub use crate::scanner::{DelegatedReporter, ExceptionReporter};

// ================================================================================================
// Reporting and Catalogs
// ================================================================================================

/// CSV scan output and cross-platform merging
pub use crate::report::{CsvReporter, DatabaseReporter, ScanDatabase};

/// Catalog parsing and lookup
pub use crate::store::{
    parse_deprecated, parse_exceptions, parse_sdk, ApiEntry, ApiStore, Platform,
};
