//! Ticket store: directory access, identifier resolution, bulk loading.
//!
//! The store is a flat directory of `<id>.md` files. Identity comes
//! from the file name, dotfiles are invisible, and there is no index —
//! every query re-reads the files it needs.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::{Result, TicketError};
use crate::frontmatter::{is_marker, parse_array_tokens};
use crate::model::{Priority, Status, Ticket};

/// Store directory name, relative to the working directory.
pub const STORE_DIR: &str = ".tickets";

/// Ticket file extension (including the dot).
pub const TICKET_EXT: &str = ".md";

/// Timestamp format used in headers and notes.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Handle to a ticket store directory.
pub struct TicketStore {
    dir: PathBuf,
}

impl TicketStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store at the conventional `.tickets` directory.
    #[must_use]
    pub fn default_location() -> Self {
        Self::new(STORE_DIR)
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the store directory if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the directory cannot be created.
    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    // ========================================================================
    // Resolution and listing
    // ========================================================================

    /// Resolve a possibly-partial identifier to exactly one ticket file.
    ///
    /// An exact `<id>.md` match wins outright, even when the identifier
    /// would also substring-match other files. Otherwise every ticket
    /// file whose name contains the identifier is a candidate.
    ///
    /// # Errors
    ///
    /// `NotFound` with zero candidates, `Ambiguous` with more than one,
    /// `UnreadableStore` if the directory cannot be scanned.
    pub fn resolve(&self, id: &str) -> Result<PathBuf> {
        let exact = self.dir.join(format!("{id}{TICKET_EXT}"));
        if exact.is_file() {
            return Ok(exact);
        }

        let mut matches: Vec<PathBuf> = self
            .ticket_file_names()?
            .into_iter()
            .filter(|name| name.contains(id))
            .map(|name| self.dir.join(name))
            .collect();

        match matches.len() {
            0 => Err(TicketError::NotFound { id: id.to_string() }),
            1 => Ok(matches.remove(0)),
            _ => Err(TicketError::Ambiguous { id: id.to_string() }),
        }
    }

    /// Every ticket file in the store. Order unspecified.
    ///
    /// # Errors
    ///
    /// Returns `UnreadableStore` if the directory cannot be scanned.
    pub fn list_files(&self) -> Result<Vec<PathBuf>> {
        Ok(self
            .ticket_file_names()?
            .into_iter()
            .map(|name| self.dir.join(name))
            .collect())
    }

    /// Ticket files sorted most recently modified first.
    ///
    /// A missing store directory is an empty list; files whose
    /// metadata cannot be read are skipped.
    ///
    /// # Errors
    ///
    /// Returns `UnreadableStore` if the directory exists but cannot be
    /// scanned.
    pub fn files_by_mtime(&self) -> Result<Vec<PathBuf>> {
        let files = match self.list_files() {
            Ok(files) => files,
            Err(TicketError::UnreadableStore { .. }) if !self.dir.exists() => {
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let mut stamped: Vec<(PathBuf, SystemTime)> = files
            .into_iter()
            .filter_map(|path| {
                let mtime = fs::metadata(&path).and_then(|m| m.modified()).ok()?;
                Some((path, mtime))
            })
            .collect();
        stamped.sort_by(|a, b| b.1.cmp(&a.1));
        Ok(stamped.into_iter().map(|(path, _)| path).collect())
    }

    // ========================================================================
    // Bulk loading
    // ========================================================================

    /// Load every ticket into memory for analysis.
    ///
    /// Best-effort: unreadable files are skipped, and a missing store
    /// directory is an empty store.
    ///
    /// # Errors
    ///
    /// Returns `UnreadableStore` if the directory exists but cannot be
    /// scanned.
    pub fn load_all(&self) -> Result<Vec<Ticket>> {
        let files = match self.list_files() {
            Ok(files) => files,
            Err(TicketError::UnreadableStore { .. }) if !self.dir.exists() => {
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let mut tickets = Vec::with_capacity(files.len());
        for path in files {
            match load_ticket(&path) {
                Ok(ticket) => tickets.push(ticket),
                Err(e) => debug!(path = %path.display(), error = %e, "skipping ticket"),
            }
        }
        Ok(tickets)
    }

    // ========================================================================
    // Creation
    // ========================================================================

    /// Write a new ticket file and return its path.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the store directory cannot be created and
    /// `WriteFailed` if the file cannot be written.
    pub fn create_ticket(&self, new: &NewTicket, created: DateTime<Utc>) -> Result<PathBuf> {
        self.ensure_dir()?;
        let path = self.dir.join(format!("{}{TICKET_EXT}", new.id));

        let mut contents = String::new();
        contents.push_str("---\n");
        contents.push_str(&format!("id: {}\n", new.id));
        contents.push_str("status: open\n");
        contents.push_str("deps: []\n");
        contents.push_str("links: []\n");
        contents.push_str(&format!("created: {}\n", created.format(TIMESTAMP_FORMAT)));
        contents.push_str(&format!("type: {}\n", new.ticket_type));
        contents.push_str(&format!("priority: {}\n", new.priority.0));
        if !new.assignee.is_empty() {
            contents.push_str(&format!("assignee: {}\n", new.assignee));
        }
        if !new.external_ref.is_empty() {
            contents.push_str(&format!("external-ref: {}\n", new.external_ref));
        }
        if !new.parent.is_empty() {
            contents.push_str(&format!("parent: {}\n", new.parent));
        }
        contents.push_str("---\n");
        contents.push_str(&format!("# {}\n\n", new.title));
        if !new.description.is_empty() {
            contents.push_str(&format!("{}\n\n", new.description));
        }
        if !new.design.is_empty() {
            contents.push_str(&format!("## Design\n\n{}\n\n", new.design));
        }
        if !new.acceptance.is_empty() {
            contents.push_str(&format!("## Acceptance Criteria\n\n{}\n\n", new.acceptance));
        }

        fs::write(&path, contents).map_err(|_| TicketError::WriteFailed { path: path.clone() })?;
        debug!(path = %path.display(), "created ticket");
        Ok(path)
    }

    fn ticket_file_names(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.dir).map_err(|_| TicketError::UnreadableStore {
            path: self.dir.clone(),
        })?;

        let mut names = Vec::new();
        for entry in entries.flatten() {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if name.starts_with('.') || !name.ends_with(TICKET_EXT) {
                continue;
            }
            names.push(name.to_string());
        }
        Ok(names)
    }
}

/// Fields for a new ticket file. Empty optional fields are omitted
/// from the header entirely.
#[derive(Debug, Clone, Default)]
pub struct NewTicket {
    pub id: String,
    pub title: String,
    pub description: String,
    pub design: String,
    pub acceptance: String,
    pub priority: Priority,
    pub ticket_type: String,
    pub assignee: String,
    pub external_ref: String,
    pub parent: String,
}

/// Derive the ticket id from its file name (extension stripped).
#[must_use]
pub fn id_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Parse one ticket file into a record.
///
/// Single-pass scan with the same header-toggle rule as the mutation
/// engine. Absent fields keep loader defaults (open, priority 2, no
/// title, no deps); the first `# ` body line wins as the title.
///
/// # Errors
///
/// Returns `UnreadableFile` if the file cannot be read.
pub fn load_ticket(path: &Path) -> Result<Ticket> {
    let contents = fs::read_to_string(path).map_err(|_| TicketError::UnreadableFile {
        path: path.to_path_buf(),
    })?;

    let mut ticket = Ticket::new(id_from_path(path));
    let mut in_header = false;
    let mut got_title = false;

    for line in contents.split_inclusive('\n') {
        if is_marker(line) {
            in_header = !in_header;
            continue;
        }
        if in_header {
            if let Some(rest) = line.strip_prefix("status:") {
                ticket.status = Status::from(rest.trim());
            } else if let Some(rest) = line.strip_prefix("priority:") {
                if let Ok(p) = rest.trim().parse::<i32>() {
                    ticket.priority = Priority(p);
                }
            } else if line.starts_with("deps:") {
                ticket.deps = parse_array_tokens(line);
            }
        } else if !got_title && line.starts_with("# ") {
            ticket.title = line[2..].trim_end_matches('\n').to_string();
            got_title = true;
        }
    }

    Ok(ticket)
}
