//! Handler for the `languages` command.

use colored::*;

use mdfence_lib::exit_codes::exit;
use mdfence_lib::languages::LanguageRegistry;

/// Print the languages a picker offers: the popular set, or the whole catalogue with `all`.
pub fn handle_languages(all: bool, json: bool) {
    let entries = LanguageRegistry::global().list_for_picker(all);

    if json {
        match serde_json::to_string_pretty(entries) {
            Ok(output) => println!("{output}"),
            Err(e) => {
                eprintln!("{}: Failed to serialize languages: {}", "Error".red().bold(), e);
                exit::tool_error();
            }
        }
        return;
    }

    for entry in entries {
        println!("{:<28} {}", entry.canonical_name.bold(), entry.aliases.join(", "));
    }

    if !all {
        println!("\n{} popular languages. Use --all to list all of them.", entries.len());
    }
}
