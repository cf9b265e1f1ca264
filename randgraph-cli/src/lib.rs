//! Support library for the `randgraph` binary.
//!
//! Exposes argument parsing, input reading, command execution, and report
//! rendering so tests can drive the whole pipeline without spawning a
//! process.

pub mod cli;
pub mod logging;
