//! `esg-forecast` library crate.
//!
//! The binary (`esg-forecast`) is a thin wrapper around this library so that
//! the pipeline stages are testable without spawning processes.

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod forecast;
pub mod io;
pub mod logging;
pub mod report;
