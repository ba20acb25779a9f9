//! Ready command implementation.

use ticket_lib::{DepGraph, Result, Ticket, TicketStore};

use crate::format::format_ready_line;

/// Execute the ready command: active tickets whose every dependency is
/// closed, sorted by priority then id.
///
/// # Errors
///
/// Returns an error if the store directory exists but cannot be read.
pub fn execute() -> Result<()> {
    let store = TicketStore::default_location();
    let tickets = store.load_all()?;
    let graph = DepGraph::new(&tickets);

    let mut ready: Vec<&Ticket> = tickets.iter().filter(|t| graph.is_ready(t)).collect();
    ready.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.id.cmp(&b.id)));

    for ticket in ready {
        println!("{}", format_ready_line(ticket));
    }

    Ok(())
}
