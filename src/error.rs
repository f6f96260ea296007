use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, covering all errors this library can return.
///
/// The scanner core is a pure computation over already-resident metadata and
/// produces no errors of its own; failures surface either from lookup-table
/// documents that do not match the expected shape, or from the I/O a reporter
/// performs while exporting results.
#[derive(Error, Debug)]
pub enum Error {
    /// A lookup-table document is damaged and could not be parsed.
    ///
    /// Raised at load time when a CSV document does not carry the expected
    /// `DocId,Namespace,Type,Member` header prefix, names an unknown
    /// platform, or contains a data cell outside its column's vocabulary.
    /// Store construction aborts; no partial store is ever produced.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// File I/O error.
    ///
    /// Wraps standard I/O errors that can occur while reading lookup-table
    /// documents or while a reporter writes scan output.
    #[error("{0}")]
    FileError(#[from] std::io::Error),
}
