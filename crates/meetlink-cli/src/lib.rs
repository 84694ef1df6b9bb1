//! Meetlink command-line front end.
//!
//! The binary in `main.rs` parses [`Cli`], installs logging and calls
//! [`run`]. Handlers live here so integration tests can drive them
//! without spawning a process.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod args;
pub mod commands;
pub mod error;
pub mod logging;
pub mod report;

pub use args::{Cli, Command};
pub use commands::run;
pub use error::CliError;
