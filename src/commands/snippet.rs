//! Handler for the `snippet` command.

use colored::*;

use mdfence_lib::exit_codes::exit;
use mdfence_lib::snippet::{SelectorKind, SnippetSelector, language_for_path, snippet_builder};

/// Print a code snippet reference for `source`, selecting by id, by line range or the whole file.
pub fn handle_snippet(source: &str, id: Option<String>, range: Option<String>) {
    let (kind, detail) = match (id, range) {
        (Some(id), _) => (SelectorKind::Id, Some(id)),
        (None, Some(range)) => (SelectorKind::Range, Some(range)),
        (None, None) => (SelectorKind::None, None),
    };

    let state = match SnippetSelector::start().choose_kind(Some(kind)) {
        state @ SnippetSelector::AwaitingDetail(_) => state.provide_detail(detail),
        state => state,
    };

    match state {
        SnippetSelector::Done(Some(selector)) => {
            println!("{}", snippet_builder(&language_for_path(source), source, &selector));
        }
        SnippetSelector::AwaitingDetail(SelectorKind::Range) => {
            eprintln!(
                "{}: Invalid line range, expected something like 1-15,18,20",
                "Error".red().bold()
            );
            exit::tool_error();
        }
        _ => {
            eprintln!("{}: The id or range must not be empty", "Error".red().bold());
            exit::tool_error();
        }
    }
}
