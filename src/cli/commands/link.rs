//! Link commands: symmetric link edges between tickets.
//!
//! Links always change in pairs — both endpoints are rewritten, as
//! two separate file mutations. Asymmetric link state is corruption,
//! not a feature.

use ticket_lib::store::id_from_path;
use ticket_lib::{Result, TicketError, TicketStore, frontmatter};

/// Execute the link command: pairwise-link every given ticket with
/// every other.
///
/// # Errors
///
/// Returns an error if any id fails to resolve or a rewrite fails.
pub fn execute(ids: &[String]) -> Result<()> {
    let store = TicketStore::default_location();

    let mut resolved = Vec::with_capacity(ids.len());
    for id in ids {
        let path = store.resolve(id)?;
        let ticket_id = id_from_path(&path);
        resolved.push((path, ticket_id));
    }

    let mut added = 0;
    for (i, (path, _)) in resolved.iter().enumerate() {
        for (j, (_, other_id)) in resolved.iter().enumerate() {
            if i != j && frontmatter::append_array_value(path, "links", other_id)? {
                added += 1;
            }
        }
    }

    if added == 0 {
        println!("All links already exist");
    } else {
        println!("Added {added} link(s) between {} tickets", resolved.len());
    }
    Ok(())
}

/// Remove a symmetric link from both endpoints.
///
/// # Errors
///
/// Returns `LinkNotFound` when the first endpoint does not carry the
/// link, and resolution/rewrite errors otherwise.
pub fn execute_unlink(id: &str, target_id: &str) -> Result<()> {
    let store = TicketStore::default_location();
    let path_a = store.resolve(id)?;
    let path_b = store.resolve(target_id)?;

    let id_a = id_from_path(&path_a);
    let id_b = id_from_path(&path_b);

    let links = frontmatter::read_array(&path_a, "links")?;
    if !links.iter().any(|l| l == &id_b) {
        return Err(TicketError::LinkNotFound { id: id_b });
    }

    frontmatter::remove_array_value(&path_a, "links", &id_b)?;
    frontmatter::remove_array_value(&path_b, "links", &id_a)?;
    println!("Removed link: {id_a} <-> {id_b}");
    Ok(())
}
