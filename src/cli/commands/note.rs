//! Add-note command implementation.

use std::io::{IsTerminal, Read};

use chrono::Utc;
use ticket_lib::store::{TIMESTAMP_FORMAT, id_from_path};
use ticket_lib::{Result, TicketError, TicketStore, frontmatter};

/// Execute the add-note command.
///
/// Note text comes from the arguments joined with spaces, or from
/// stdin when no text is given and stdin is not a terminal.
///
/// # Errors
///
/// Returns an error if the id does not resolve, no note text is
/// available, or the rewrite fails.
pub fn execute(id: &str, text: &[String]) -> Result<()> {
    let store = TicketStore::default_location();
    let path = store.resolve(id)?;
    let ticket_id = id_from_path(&path);

    let note = if text.is_empty() {
        let mut stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(TicketError::BadArgument {
                reason: "no note provided".to_string(),
            });
        }
        let mut buf = String::new();
        stdin.read_to_string(&mut buf)?;
        buf.trim_end_matches('\n').to_string()
    } else {
        text.join(" ")
    };

    let timestamp = Utc::now().format(TIMESTAMP_FORMAT).to_string();
    frontmatter::append_note(&path, &timestamp, &note)?;
    println!("Note added to {ticket_id}");
    Ok(())
}
