//! Utility functions for the `tk` CLI.

pub mod id;
