//! Show command implementation.

use ticket_lib::{Result, TicketError, TicketStore};

/// Execute the show command: print the resolved ticket file verbatim.
///
/// # Errors
///
/// Returns an error if the id does not resolve or the file cannot be
/// read.
pub fn execute(id: &str) -> Result<()> {
    let store = TicketStore::default_location();
    let path = store.resolve(id)?;
    let contents =
        std::fs::read_to_string(&path).map_err(|_| TicketError::UnreadableFile { path })?;
    print!("{contents}");
    Ok(())
}
