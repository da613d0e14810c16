//! Command handlers for the mdfence CLI.
//!
//! Each subcommand has its own module with a public handler function
//! that `main()` dispatches to.

pub mod check;
pub mod completions;
pub mod format;
pub mod init;
pub mod languages;
pub mod server;
pub mod snippet;
pub mod version;
