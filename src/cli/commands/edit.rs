//! Edit command: open the resolved ticket in the user's editor.

use std::process::Command;

use ticket_lib::{Result, TicketError, TicketStore};
use tracing::debug;

/// Execute the edit command.
///
/// # Errors
///
/// Returns an error if the id does not resolve or the editor exits
/// with failure.
pub fn execute(id: &str) -> Result<()> {
    let store = TicketStore::default_location();
    let path = store.resolve(id)?;

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    debug!(%editor, path = %path.display(), "launching editor");

    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .map_err(|_| TicketError::Subprocess {
            name: editor.clone(),
        })?;
    if !status.success() {
        return Err(TicketError::Subprocess { name: editor });
    }
    Ok(())
}
