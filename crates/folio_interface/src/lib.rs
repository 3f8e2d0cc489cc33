//! Trait seams between the Folio orchestrator and its collaborators.
//!
//! The orchestrator drives three capabilities it does not implement itself:
//! a text-generation source, an output sink for finished blocks, and a
//! progress consumer. Each is a trait here so backends and tests can swap in
//! their own implementations.

mod content_source;
mod output_sink;
mod progress_sink;

pub use content_source::ContentSource;
pub use output_sink::OutputSink;
pub use progress_sink::ProgressSink;
