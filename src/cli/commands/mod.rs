//! Command implementations for the `tk` CLI.

pub mod blocked;
pub mod closed;
pub mod create;
pub mod dep;
pub mod edit;
pub mod link;
pub mod list;
pub mod note;
pub mod query;
pub mod ready;
pub mod show;
pub mod status;
