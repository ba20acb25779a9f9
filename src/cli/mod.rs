//! Command-line interface for `ticket_rust`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::logging;

/// `tk` - minimal ticket system with dependency tracking.
#[derive(Parser, Debug)]
#[command(name = "tk")]
#[command(
    author,
    version,
    about = "Minimal ticket system with dependency tracking",
    long_about = None,
    after_help = "Tickets are stored as Markdown files in .tickets/. Partial ID \
                  matching is supported (e.g., 'tk show 5c4' matches 'nw-5c46')."
)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new ticket, printing its id
    Create(CreateArgs),

    /// Display a ticket
    Show {
        /// Ticket id (partial ids match)
        id: String,
    },

    /// List tickets
    #[command(alias = "ls")]
    List(ListArgs),

    /// List open/in_progress tickets with all deps resolved
    Ready,

    /// List open/in_progress tickets with unresolved deps
    Blocked,

    /// List recently closed tickets
    Closed(ClosedArgs),

    /// Update ticket status
    Status {
        /// Ticket id (partial ids match)
        id: String,
        /// New status (open|in_progress|closed|...)
        status: String,
    },

    /// Set status to in_progress
    Start {
        /// Ticket id (partial ids match)
        id: String,
    },

    /// Set status to closed
    Close {
        /// Ticket id (partial ids match)
        id: String,
    },

    /// Set status to open
    Reopen {
        /// Ticket id (partial ids match)
        id: String,
    },

    /// Add a dependency, or show the dependency tree
    Dep(DepCommand),

    /// Remove a dependency
    Undep {
        /// Ticket that depends on another
        id: String,
        /// Ticket being depended on
        dep_id: String,
    },

    /// Link tickets together (symmetric)
    Link {
        /// Two or more ticket ids
        #[arg(required = true, num_args = 2..)]
        ids: Vec<String>,
    },

    /// Remove the link between two tickets
    Unlink {
        /// First endpoint
        id: String,
        /// Second endpoint
        target_id: String,
    },

    /// Open a ticket in $EDITOR
    Edit {
        /// Ticket id (partial ids match)
        id: String,
    },

    /// Append a timestamped note (reads stdin when no text is given)
    AddNote {
        /// Ticket id (partial ids match)
        id: String,
        /// Note text; words are joined with spaces
        text: Vec<String>,
    },

    /// Output tickets as JSON records, optionally filtered through jq
    Query {
        /// jq boolean filter expression (e.g., '.status == "open"')
        filter: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Ticket title
    pub title: Option<String>,

    /// Description text
    #[arg(short = 'd', long)]
    pub description: Option<String>,

    /// Design notes
    #[arg(long)]
    pub design: Option<String>,

    /// Acceptance criteria
    #[arg(long)]
    pub acceptance: Option<String>,

    /// Priority (lower sorts first)
    #[arg(short, long, default_value_t = 2)]
    pub priority: i32,

    /// Ticket type (bug|feature|task|epic|chore)
    #[arg(short = 't', long = "type", default_value = "task")]
    pub ticket_type: String,

    /// Assignee (defaults to git user.name)
    #[arg(short, long)]
    pub assignee: Option<String>,

    /// External reference (e.g., gh-123, JIRA-456)
    #[arg(long)]
    pub external_ref: Option<String>,

    /// Parent ticket id
    #[arg(long)]
    pub parent: Option<String>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show tickets with this status
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Args, Debug)]
pub struct ClosedArgs {
    /// Maximum number of tickets to show
    #[arg(long, default_value_t = 20)]
    pub limit: usize,
}

/// `dep <id> <dep-id>` adds an edge; `dep tree [--full] <id>` renders.
#[derive(Args, Debug)]
#[command(args_conflicts_with_subcommands = true)]
pub struct DepCommand {
    #[command(subcommand)]
    pub command: Option<DepSubcommand>,

    /// Ticket that depends on another
    pub id: Option<String>,

    /// Ticket being depended on
    pub dep_id: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum DepSubcommand {
    /// Show the dependency tree for a ticket
    Tree(DepTreeArgs),
}

#[derive(Args, Debug)]
pub struct DepTreeArgs {
    /// Keep positional connectors even when trailing deps are unresolvable
    #[arg(long)]
    pub full: bool,

    /// Root ticket id (partial ids match)
    pub id: String,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn run() -> Result<()> {
    // Usage errors exit 1; help and version render normally and exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(i32::from(e.use_stderr()));
        }
    };
    logging::init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Create(args) => commands::create::execute(args)?,
        Commands::Show { id } => commands::show::execute(&id)?,
        Commands::List(args) => commands::list::execute(&args)?,
        Commands::Ready => commands::ready::execute()?,
        Commands::Blocked => commands::blocked::execute()?,
        Commands::Closed(args) => commands::closed::execute(&args)?,
        Commands::Status { id, status } => commands::status::execute(&id, &status)?,
        Commands::Start { id } => commands::status::execute(&id, "in_progress")?,
        Commands::Close { id } => commands::status::execute(&id, "closed")?,
        Commands::Reopen { id } => commands::status::execute(&id, "open")?,
        Commands::Dep(dep) => commands::dep::execute(dep)?,
        Commands::Undep { id, dep_id } => commands::dep::execute_undep(&id, &dep_id)?,
        Commands::Link { ids } => commands::link::execute(&ids)?,
        Commands::Unlink { id, target_id } => commands::link::execute_unlink(&id, &target_id)?,
        Commands::Edit { id } => commands::edit::execute(&id)?,
        Commands::AddNote { id, text } => commands::note::execute(&id, &text)?,
        Commands::Query { filter } => commands::query::execute(filter.as_deref())?,
    }

    Ok(())
}
