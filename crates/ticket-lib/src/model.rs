//! Core data types for ticket-lib.

use std::fmt;

/// Ticket lifecycle status.
///
/// The vocabulary is open: unknown strings round-trip as `Custom` and
/// parsing never fails. The graph logic only cares about the literal
/// comparisons `open`/`in_progress` (active) and `closed` (satisfied).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Open,
    InProgress,
    Closed,
    Done,
    Custom(String),
}

impl Status {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Closed => "closed",
            Self::Done => "done",
            Self::Custom(value) => value,
        }
    }

    /// Open or in_progress — the statuses the graph treats as workable.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Open | Self::InProgress)
    }

    /// Closed or done — used by the recently-closed listing.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Closed | Self::Done)
    }
}

impl From<&str> for Status {
    fn from(s: &str) -> Self {
        match s {
            "open" => Self::Open,
            "in_progress" => Self::InProgress,
            "closed" => Self::Closed,
            "done" => Self::Done,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ticket priority: a plain integer display/sort key, lower sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(pub i32);

impl Priority {
    pub const DEFAULT: Self = Self(2);
}

impl Default for Priority {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// A ticket loaded from the store for bulk analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    /// Identity, derived from the file name stem — never re-validated
    /// against the header's own `id` field.
    pub id: String,

    pub status: Status,

    /// First `# ` heading in the body; informational only.
    pub title: String,

    pub priority: Priority,

    /// Ordered dependency ids (directed edges).
    pub deps: Vec<String>,
}

impl Ticket {
    /// A ticket with loader defaults: open, priority 2, no title, no deps.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: Status::Open,
            title: String::new(),
            priority: Priority::default(),
            deps: Vec::new(),
        }
    }
}
