//! Process exit codes of the `mdfence` binary
//!
//! `check` exits with [`VIOLATIONS_FOUND`] when some fence carries an unrecognized language
//! tag and with [`TOOL_ERROR`] when it could not do its job, so scripts can tell a dirty
//! document from a broken run.

/// Nothing to report
pub const SUCCESS: i32 = 0;

/// At least one unrecognized language tag
pub const VIOLATIONS_FOUND: i32 = 1;

/// Unreadable file or config, bad arguments, rejected input
pub const TOOL_ERROR: i32 = 2;

/// Terminate the process with one of the codes above
pub mod exit {
    pub fn violations_found() -> ! {
        std::process::exit(super::VIOLATIONS_FOUND);
    }

    pub fn tool_error() -> ! {
        std::process::exit(super::TOOL_ERROR);
    }
}
