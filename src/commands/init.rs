//! Handler for the `init` command.

use colored::*;

use mdfence_lib::config::{ConfigError, create_default_config};
use mdfence_lib::exit_codes::exit;

/// Write a default `.mdfence.toml` in the current directory.
pub fn handle_init() {
    let path = ".mdfence.toml";
    match create_default_config(path) {
        Ok(()) => {
            println!("Created default configuration file: {path}");
        }
        Err(ConfigError::FileExists { path }) => {
            eprintln!("{}: Configuration file already exists: {}", "Error".red().bold(), path);
            exit::tool_error();
        }
        Err(e) => {
            eprintln!("{}: Failed to create configuration file: {}", "Error".red().bold(), e);
            exit::tool_error();
        }
    }
}
