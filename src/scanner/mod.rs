//! Bounded-depth reachability analysis for unconditional
//! `System.PlatformNotSupportedException` throws.
//!
//! The entry point is [`ExceptionScanner::scan_assembly`]: it walks every
//! externally visible member of an assembly, classifies it as throwing (with
//! a call-graph depth and a witness method) or not, and streams one result
//! per member into an [`ExceptionReporter`].
//!
//! # Key Types
//! - [`ExceptionScanner`] - The analysis driver
//! - [`ExceptionInfo`] - Per-member verdict: depth and witness, or negative
//! - [`ExceptionReporter`] / [`DelegatedReporter`] - Result sinks
//!
//! # Example
//! ```rust,no_run
//! use pnscan::metadata::{AssemblyBuilder, MethodBuilder, MethodRef, TypeBuilder, CTOR_NAME};
//! use pnscan::scanner::{DelegatedReporter, ExceptionScanner, PLATFORM_NOT_SUPPORTED};
//!
//! # fn main() -> pnscan::Result<()> {
//! let assembly = AssemblyBuilder::new("demo")
//!     .ty(TypeBuilder::new("Demo", "Widget").public().method(
//!         MethodBuilder::new("Rotate").public().il(|il| {
//!             il.newobj(MethodRef::new(CTOR_NAME, PLATFORM_NOT_SUPPORTED))
//!                 .throw();
//!         }),
//!     ))
//!     .build()?;
//!
//! let mut scanner = ExceptionScanner::new(DelegatedReporter::new(|info, member| {
//!     if info.throws() {
//!         println!("{} throws at depth {}", member.doc_id(), info.level());
//!     }
//!     Ok(())
//! }));
//! scanner.scan_assembly(&assembly)?;
//! # Ok(())
//! # }
//! ```

mod reporter;
mod result;
mod scan;

pub use reporter::{DelegatedReporter, ExceptionReporter};
pub use result::ExceptionInfo;
pub use scan::{ExceptionScanner, MAX_NESTING_LEVEL, PLATFORM_NOT_SUPPORTED};
