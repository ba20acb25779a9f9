//! `tk` - minimal ticket system with dependency tracking.
//!
//! Tickets are Markdown files with a frontmatter header, one per file
//! in `.tickets/`. Non-invasive design: no database, no daemon, no git
//! hooks.

fn main() {
    if let Err(e) = ticket_rust::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
