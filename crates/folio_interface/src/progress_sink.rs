//! Progress consumer trait.

use folio_core::ProgressEvent;

/// Synchronous consumer of generation progress events.
///
/// Every failure is reported through the same channel as normal progress, so
/// a caller can distinguish upstream-service failure from malformed-content
/// failure and decide whether to retry, edit the prompt, or abandon the run.
pub trait ProgressSink: Send {
    /// Consumes one progress event.
    fn emit(&mut self, event: ProgressEvent);
}

/// A closure over progress events is a sink.
impl<F> ProgressSink for F
where
    F: FnMut(ProgressEvent) + Send,
{
    fn emit(&mut self, event: ProgressEvent) {
        self(event)
    }
}
