//! List command implementation.

use ticket_lib::{Result, TicketStore};

use crate::cli::ListArgs;
use crate::format::format_list_line;

/// Execute the list command.
///
/// Tickets sort by priority, then id; `--status` filters on the exact
/// status string.
///
/// # Errors
///
/// Returns an error if the store directory exists but cannot be read.
pub fn execute(args: &ListArgs) -> Result<()> {
    let store = TicketStore::default_location();
    let mut tickets = store.load_all()?;
    tickets.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.id.cmp(&b.id)));

    for ticket in &tickets {
        if let Some(status) = &args.status {
            if ticket.status.as_str() != status {
                continue;
            }
        }
        println!("{}", format_list_line(ticket));
    }

    Ok(())
}
