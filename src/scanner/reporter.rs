use crate::metadata::MemberDesc;
use crate::scanner::ExceptionInfo;
use crate::Result;

/// Sink for per-member scan results.
///
/// The scanner calls [`ExceptionReporter::report`] once for every member it
/// classifies, negative results included; sinks that only care about
/// findings filter on [`ExceptionInfo::throws`]. Report errors abort the
/// scan.
pub trait ExceptionReporter {
    /// Records the result for one member.
    ///
    /// # Errors
    /// Returns an error when the sink fails to record the result, typically
    /// an I/O failure on a file-backed sink.
    fn report(&mut self, info: &ExceptionInfo, member: &MemberDesc) -> Result<()>;
}

/// Adapts a closure into an [`ExceptionReporter`].
///
/// Mostly used by tests and callers that collect results into their own
/// structures without defining a sink type.
pub struct DelegatedReporter<F>
where
    F: FnMut(&ExceptionInfo, &MemberDesc) -> Result<()>,
{
    handler: F,
}

impl<F> DelegatedReporter<F>
where
    F: FnMut(&ExceptionInfo, &MemberDesc) -> Result<()>,
{
    /// Wraps the handler.
    pub fn new(handler: F) -> Self {
        DelegatedReporter { handler }
    }
}

impl<F> ExceptionReporter for DelegatedReporter<F>
where
    F: FnMut(&ExceptionInfo, &MemberDesc) -> Result<()>,
{
    fn report(&mut self, info: &ExceptionInfo, member: &MemberDesc) -> Result<()> {
        (self.handler)(info, member)
    }
}
