//! Create command implementation.

use chrono::Utc;
use ticket_lib::{NewTicket, Priority, Result, TicketStore};
use tracing::debug;

use crate::cli::CreateArgs;
use crate::util::id::generate_ticket_id;

/// Execute the create command.
///
/// Prints the new ticket id on stdout.
///
/// # Errors
///
/// Returns an error if the store directory or the ticket file cannot
/// be written.
pub fn execute(args: CreateArgs) -> Result<()> {
    let store = TicketStore::default_location();

    let title = args.title.unwrap_or_else(|| "Untitled".to_string());
    let assignee = args.assignee.or_else(git_user_name).unwrap_or_default();

    let id = generate_ticket_id();
    debug!(%id, "generated ticket id");

    let new = NewTicket {
        id: id.clone(),
        title,
        description: args.description.unwrap_or_default(),
        design: args.design.unwrap_or_default(),
        acceptance: args.acceptance.unwrap_or_default(),
        priority: Priority(args.priority),
        ticket_type: args.ticket_type,
        assignee,
        external_ref: args.external_ref.unwrap_or_default(),
        parent: args.parent.unwrap_or_default(),
    };

    store.create_ticket(&new, Utc::now())?;
    println!("{id}");
    Ok(())
}

/// Default assignee from local git configuration; failure is
/// non-fatal and simply omits the field.
fn git_user_name() -> Option<String> {
    let output = std::process::Command::new("git")
        .args(["config", "user.name"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if name.is_empty() { None } else { Some(name) }
}
