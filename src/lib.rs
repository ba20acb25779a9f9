//! `ticket_rust` - file-based ticket tracker behind the `tk` CLI.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`cli`] - Command-line interface and routing using clap
//! - [`format`] - Plain-text output formatting
//! - [`logging`] - Tracing subscriber setup
//! - [`util`] - Environment-derived id generation
//!
//! The core engine — store access, the frontmatter mutation engine,
//! dependency graph analysis, and the query record stream — lives in
//! the `ticket-lib` crate.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod format;
pub mod logging;
pub mod util;

pub use ticket_lib::{Result, TicketError};

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}
