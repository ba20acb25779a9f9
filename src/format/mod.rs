//! Output formatting for `ticket_rust`.

pub mod text;

pub use text::{format_blocked_line, format_closed_line, format_list_line, format_ready_line};
