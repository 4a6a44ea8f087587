//! Terminal output: banner and run summary.
//!
//! Formatting lives here so the pipeline stays free of presentation code.

pub mod format;

pub use format::*;
