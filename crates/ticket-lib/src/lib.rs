//! `ticket-lib` — core engine for the `tk` ticket tracker.
//!
//! Tickets live as individual Markdown files in a store directory, each
//! with a flat `key: value` frontmatter header. This crate provides the
//! pieces the CLI is built on:
//!
//! - [`store`] - store access, identifier resolution, bulk loading
//! - [`frontmatter`] - in-place header mutation with atomic replace
//! - [`graph`] - readiness, blocking, and dependency tree analysis
//! - [`query`] - header-to-JSON record stream
//! - [`model`] - data types (Ticket, Status, Priority)
//! - [`error`] - error types and handling
//!
//! # Quick Start
//!
//! ```no_run
//! use ticket_lib::{DepGraph, TicketStore, frontmatter};
//!
//! let store = TicketStore::default_location();
//!
//! // Resolve a partial id and mutate one header field
//! let path = store.resolve("5c4").unwrap();
//! frontmatter::write_scalar(&path, "status", "in_progress").unwrap();
//!
//! // Load everything and ask dependency questions
//! let tickets = store.load_all().unwrap();
//! let graph = DepGraph::new(&tickets);
//! let ready: Vec<_> = tickets.iter().filter(|t| graph.is_ready(t)).collect();
//! ```

pub mod error;
pub mod frontmatter;
pub mod graph;
pub mod model;
pub mod query;
pub mod store;

pub use error::{Result, TicketError};
pub use graph::DepGraph;
pub use model::{Priority, Status, Ticket};
pub use store::{NewTicket, TicketStore};
