//! Closed command: recently closed tickets by file modification time.

use ticket_lib::store::load_ticket;
use ticket_lib::{Result, TicketStore};

use crate::cli::ClosedArgs;
use crate::format::format_closed_line;

/// Only this many of the most recently modified files are inspected.
const SCAN_CAP: usize = 100;

/// Execute the closed command.
///
/// Walks ticket files newest-first and prints up to `--limit` tickets
/// whose status is closed or done.
///
/// # Errors
///
/// Returns an error if the store directory exists but cannot be read.
pub fn execute(args: &ClosedArgs) -> Result<()> {
    let store = TicketStore::default_location();
    let files = store.files_by_mtime()?;

    let mut shown = 0;
    for path in files.iter().take(SCAN_CAP) {
        if shown >= args.limit {
            break;
        }
        let Ok(ticket) = load_ticket(path) else {
            continue;
        };
        if ticket.status.is_done() {
            println!("{}", format_closed_line(&ticket));
            shown += 1;
        }
    }

    Ok(())
}
