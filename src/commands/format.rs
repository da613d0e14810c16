//! Handler for the `format` command.

use std::io::{self, Read, Write};

use colored::*;
use futures::executor::block_on;

use mdfence_lib::config::LanguageConfig;
use mdfence_lib::editing::{CommandOutcome, format_code};
use mdfence_lib::editor::{Editor, MemoryEditor};
use mdfence_lib::exit_codes::exit;
use mdfence_lib::languages::LanguageRegistry;

/// Toggle code formatting of stdin and write the result to stdout.
///
/// The whole input, minus its trailing line break, is one selection. `language` is a
/// canonical name or any alias, and is only needed when a fence gets inserted.
pub fn handle_format(language: Option<&str>) {
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        eprintln!("{}: Failed to read stdin: {}", "Error".red().bold(), e);
        exit::tool_error();
    }

    let mut editor = MemoryEditor::new(input.as_str()).with_selection(0..input.trim_end_matches(['\r', '\n']).len());

    if let Some(language) = language {
        let registry = LanguageRegistry::global();
        let Some(entry) = registry.find_by_name(language).or_else(|| registry.resolve(language)) else {
            eprintln!("{}: Unknown language '{}'", "Error".red().bold(), language);
            eprintln!("Run 'mdfence languages --all' to list the known languages");
            exit::tool_error();
        };
        editor = editor.choose_label(entry.canonical_name);
    }

    let config = LanguageConfig {
        all_available_languages: true,
    };
    match block_on(format_code(Some(&mut editor), &config)) {
        Ok(CommandOutcome::Applied) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = stdout.write_all(editor.text().as_bytes()).and_then(|()| stdout.flush()) {
                eprintln!("{}: Failed to write output: {}", "Error".red().bold(), e);
                exit::tool_error();
            }
        }
        Ok(CommandOutcome::Cancelled) => {
            eprintln!(
                "{}: Multi-line input needs a code block language, pass --language",
                "Error".red().bold()
            );
            exit::tool_error();
        }
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            exit::tool_error();
        }
    }
}
