// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![allow(clippy::too_many_arguments)]

//! # pnscan
//!
//! Static analysis for .NET platform compatibility: finds externally visible
//! members that unconditionally throw `System.PlatformNotSupportedException`,
//! and manages the CSV catalogs built from those findings.
//!
//! ## Features
//!
//! - **Bounded call-graph scanning** - Detects throws in a member's own body
//!   and up to three calls away, including throw-helper factory methods
//! - **Accessor folding** - Properties and events are classified through
//!   their accessors, reported as one member
//! - **Catalog tooling** - Parse, merge, query and validate the exceptions,
//!   deprecation and SDK-membership document formats
//! - **Pluggable reporting** - Stream results into CSV documents, merge
//!   databases, or custom sinks via a small trait
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pnscan::prelude::*;
//!
//! # fn main() -> pnscan::Result<()> {
//! let assembly = AssemblyBuilder::new("demo")
//!     .ty(TypeBuilder::new("Demo", "Clipboard").public().method(
//!         MethodBuilder::new("Copy").public().il(|il| {
//!             il.newobj(MethodRef::new(CTOR_NAME, PLATFORM_NOT_SUPPORTED))
//!                 .throw();
//!         }),
//!     ))
//!     .build()?;
//!
//! let reporter = CsvReporter::new(std::io::stdout())?;
//! let mut scanner = ExceptionScanner::new(reporter);
//! scanner.scan_assembly(&assembly)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`metadata`] - The in-memory assembly object model and its builders
//! - [`il`] - The instruction stream representation method bodies carry
//! - [`scanner`] - The bounded-depth reachability analysis
//! - [`csv`] - Line-oriented CSV primitives shared by all formats
//! - [`store`] - Catalog document parsing and the DocId lookup store
//! - [`report`] - Result sinks: per-platform documents and merged catalogs

#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types.
///
/// # Example
///
/// ```rust,no_run
/// use pnscan::prelude::*;
///
/// let mut database = ScanDatabase::new();
/// database.import_scan_csv("DocId,Namespace,Type,Member,Nesting\n".as_bytes(), "linux")?;
/// # Ok::<(), pnscan::Error>(())
/// ```
pub mod prelude;

/// The in-memory assembly object model the scanner walks.
///
/// Types, members, method definitions and references, plus the fluent
/// [`metadata::AssemblyBuilder`] used to construct fixture assemblies.
///
/// # Key Types
///
/// - [`metadata::Assembly`] - Root of the model
/// - [`metadata::Member`] - Closed sum over the member kinds
/// - [`metadata::MemberDesc`] - Identity strings reporters key on
/// - [`metadata::Token`] - Method-table handle
pub mod metadata;

/// The instruction stream representation carried by method bodies.
///
/// Only the handful of opcodes the analysis interprets are modeled;
/// everything else an assembly might contain is irrelevant to the throw
/// pattern and folded away by whatever populates the model.
///
/// # Key Types
///
/// - [`il::MethodBody`] - An instruction sequence
/// - [`il::Instruction`] / [`il::Operand`] - One operation and its inline
///   operand
/// - [`il::OpCode`] - The modeled operations
pub mod il;

/// Bounded-depth reachability analysis for unconditional
/// `PlatformNotSupportedException` throws.
///
/// # Key Types
///
/// - [`scanner::ExceptionScanner`] - The analysis driver
/// - [`scanner::ExceptionInfo`] - Per-member verdict
/// - [`scanner::ExceptionReporter`] - Result sink trait
pub mod scanner;

/// Line-oriented CSV reading and writing shared by all document formats.
pub mod csv;

/// Catalog documents and the DocId lookup store built from them.
///
/// # Key Types
///
/// - [`store::ApiStore`] - Two-level lookup keyed by coarse identity and
///   DocId
/// - [`store::Platform`] - Flag set for the exceptions format
/// - [`store::ApiDocumentParser`] - Shared parse driver
pub mod store;

/// Result sinks and catalog generation.
///
/// # Key Types
///
/// - [`report::CsvReporter`] - Per-platform scan documents
/// - [`report::ScanDatabase`] - Cross-platform merge and catalog export
pub mod report;

/// The result type used throughout pnscan.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for all pnscan operations.
pub use error::Error;
