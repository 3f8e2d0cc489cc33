//! Book generation orchestrator for Folio.
//!
//! [`BookGenerator`] sequences the whole run: table-of-contents generation,
//! the optional manual-edit pause, and the chapter-by-chapter content loop,
//! emitting a typed progress event after every generated unit.

mod generator;

pub use generator::BookGenerator;
