//! Support library for the kauwhata CLI binary.
//!
//! Exposes the command pipeline, logging set-up and reporting helpers so
//! doctests and unit tests can drive commands without spawning a process.

pub mod cli;
pub mod logging;
pub mod report;
pub mod run_log;
