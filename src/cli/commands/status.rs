//! Status command implementation (also backs start/close/reopen).

use ticket_lib::{Result, TicketStore, frontmatter};

/// Execute the status command: rewrite the `status` header field of
/// the resolved ticket in place.
///
/// # Errors
///
/// Returns an error if the id does not resolve or the rewrite fails.
pub fn execute(id: &str, status: &str) -> Result<()> {
    let store = TicketStore::default_location();
    let path = store.resolve(id)?;
    frontmatter::write_scalar(&path, "status", status)
}
