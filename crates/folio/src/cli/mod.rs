//! Command-line interface module.
//!
//! Provides the argument structure and the generation handler for the folio
//! binary.

mod commands;
mod run;

pub use commands::Cli;
pub use run::run_generation;
