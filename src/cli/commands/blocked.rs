//! Blocked command implementation.

use ticket_lib::{DepGraph, Result, Ticket, TicketStore};

use crate::format::format_blocked_line;

/// Execute the blocked command: active tickets with at least one
/// unmet dependency, each listed with the deps holding it up.
///
/// # Errors
///
/// Returns an error if the store directory exists but cannot be read.
pub fn execute() -> Result<()> {
    let store = TicketStore::default_location();
    let tickets = store.load_all()?;
    let graph = DepGraph::new(&tickets);

    let mut blocked: Vec<&Ticket> = tickets.iter().filter(|t| graph.is_blocked(t)).collect();
    blocked.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.id.cmp(&b.id)));

    for ticket in blocked {
        let unmet = graph.unmet_deps(ticket);
        println!("{}", format_blocked_line(ticket, &unmet));
    }

    Ok(())
}
