//! Plain-text line formatting for ticket listings.
//!
//! Line shapes:
//! - list:    `{id:<8} [{status}] - {title}` plus ` <- [deps]` when present
//! - ready:   `{id:<8} [P{p}][{status}] - {title}`
//! - blocked: the ready shape plus the unmet dependency list
//! - closed:  `{id:<8} [{status}] - {title}`

use ticket_lib::Ticket;

/// Format a list line, with the dependency list appended when present.
#[must_use]
pub fn format_list_line(ticket: &Ticket) -> String {
    let mut line = format!("{:<8} [{}] - {}", ticket.id, ticket.status, ticket.title);
    if !ticket.deps.is_empty() {
        line.push_str(&format!(" <- [{}]", ticket.deps.join(", ")));
    }
    line
}

/// Format a ready line with the priority badge.
#[must_use]
pub fn format_ready_line(ticket: &Ticket) -> String {
    format!(
        "{:<8} [{}][{}] - {}",
        ticket.id, ticket.priority, ticket.status, ticket.title
    )
}

/// Format a blocked line: the ready shape plus unmet deps.
#[must_use]
pub fn format_blocked_line(ticket: &Ticket, unmet: &[&str]) -> String {
    format!("{} <- [{}]", format_ready_line(ticket), unmet.join(", "))
}

/// Format a recently-closed line.
#[must_use]
pub fn format_closed_line(ticket: &Ticket) -> String {
    format!("{:<8} [{}] - {}", ticket.id, ticket.status, ticket.title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticket_lib::{Priority, Status};

    fn make_ticket() -> Ticket {
        Ticket {
            id: "td-ab12".to_string(),
            status: Status::Open,
            title: "Fix the parser".to_string(),
            priority: Priority::default(),
            deps: vec![],
        }
    }

    #[test]
    fn test_format_list_line_without_deps() {
        let line = format_list_line(&make_ticket());
        assert_eq!(line, "td-ab12  [open] - Fix the parser");
    }

    #[test]
    fn test_format_list_line_with_deps() {
        let mut ticket = make_ticket();
        ticket.deps = vec!["td-cd34".to_string(), "td-ef56".to_string()];
        let line = format_list_line(&ticket);
        assert_eq!(
            line,
            "td-ab12  [open] - Fix the parser <- [td-cd34, td-ef56]"
        );
    }

    #[test]
    fn test_format_ready_line() {
        let line = format_ready_line(&make_ticket());
        assert_eq!(line, "td-ab12  [P2][open] - Fix the parser");
    }

    #[test]
    fn test_format_blocked_line() {
        let mut ticket = make_ticket();
        ticket.status = Status::InProgress;
        let line = format_blocked_line(&ticket, &["td-cd34"]);
        assert_eq!(line, "td-ab12  [P2][in_progress] - Fix the parser <- [td-cd34]");
    }

    #[test]
    fn test_format_closed_line() {
        let mut ticket = make_ticket();
        ticket.status = Status::Done;
        let line = format_closed_line(&ticket);
        assert_eq!(line, "td-ab12  [done] - Fix the parser");
    }

    #[test]
    fn test_long_id_is_not_truncated() {
        let mut ticket = make_ticket();
        ticket.id = "td-aaaa-bbbb".to_string();
        let line = format_closed_line(&ticket);
        assert!(line.starts_with("td-aaaa-bbbb [done]"));
    }
}
