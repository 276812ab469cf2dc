//! Helpers for command output.
pub mod messages;
