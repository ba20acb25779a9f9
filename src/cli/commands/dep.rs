//! Dependency commands: add an edge, remove one, render the tree.

use ticket_lib::store::id_from_path;
use ticket_lib::{DepGraph, Result, TicketError, TicketStore, frontmatter};

use crate::cli::{DepCommand, DepSubcommand, DepTreeArgs};

/// Execute the dep command.
///
/// # Errors
///
/// Returns an error if an id does not resolve, the edge mutation
/// fails, or the positional form is missing an argument.
pub fn execute(cmd: DepCommand) -> Result<()> {
    if let Some(DepSubcommand::Tree(args)) = cmd.command {
        return execute_tree(&args);
    }
    match (cmd.id, cmd.dep_id) {
        (Some(id), Some(dep_id)) => execute_add(&id, &dep_id),
        _ => Err(TicketError::BadArgument {
            reason: "usage: tk dep <id> <dep-id>".to_string(),
        }),
    }
}

/// Add a dependency edge, idempotently.
fn execute_add(id: &str, dep_id: &str) -> Result<()> {
    let store = TicketStore::default_location();
    let path = store.resolve(id)?;
    let dep_path = store.resolve(dep_id)?;

    let ticket_id = id_from_path(&path);
    let dep_id = id_from_path(&dep_path);

    if frontmatter::append_array_value(&path, "deps", &dep_id)? {
        println!("Added dependency: {ticket_id} -> {dep_id}");
    } else {
        println!("Dependency already exists");
    }
    Ok(())
}

/// Remove a dependency edge; an absent edge is an error.
///
/// # Errors
///
/// Returns `DependencyNotFound` when the ticket does not carry the
/// edge, and resolution/rewrite errors otherwise.
pub fn execute_undep(id: &str, dep_id: &str) -> Result<()> {
    let store = TicketStore::default_location();
    let path = store.resolve(id)?;
    let dep_path = store.resolve(dep_id)?;

    let ticket_id = id_from_path(&path);
    let dep_id = id_from_path(&dep_path);

    let deps = frontmatter::read_array(&path, "deps")?;
    if !deps.iter().any(|d| d == &dep_id) {
        return Err(TicketError::DependencyNotFound { id: dep_id });
    }

    frontmatter::remove_array_value(&path, "deps", &dep_id)?;
    println!("Removed dependency: {ticket_id} -/-> {dep_id}");
    Ok(())
}

fn execute_tree(args: &DepTreeArgs) -> Result<()> {
    let store = TicketStore::default_location();
    let root_path = store.resolve(&args.id)?;
    let root_id = id_from_path(&root_path);

    let tickets = store.load_all()?;
    let graph = DepGraph::new(&tickets);
    print!("{}", graph.render_tree(&root_id, args.full));
    Ok(())
}
