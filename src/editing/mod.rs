//! Editor commands
//!
//! Each command takes the active editor, or `None` when nothing has focus, and performs at
//! most one document transaction. Dismissing a prompt ends the command without touching the
//! document.

pub mod format_code;
pub mod insert_language;
pub mod insert_snippet;

use thiserror::Error;

use crate::config::LanguageConfig;
use crate::editor::{ChoiceItem, ChoicePrompt, EditError, Editor};
use crate::languages::{LanguageEntry, LanguageRegistry};

pub use format_code::format_code;
pub use insert_language::insert_language_identifier;
pub use insert_snippet::insert_snippet_reference;

pub const FORMAT_CODE_COMMAND: &str = "formatCode";
pub const INSERT_LANGUAGE_COMMAND: &str = "insertLanguageIdentifier";
pub const INSERT_SNIPPET_COMMAND: &str = "insertSnippetReference";

/// Commands the language server can execute
pub const EXECUTABLE_COMMANDS: &[&str] = &[FORMAT_CODE_COMMAND, INSERT_LANGUAGE_COMMAND];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The document was changed
    Applied,
    /// The user dismissed a prompt; the document is untouched
    Cancelled,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("No active editor. Abandoning command.")]
    NoActiveEditor,

    #[error("The {command} command only works in Markdown documents, not \"{language_id}\"")]
    NotMarkdown { command: &'static str, language_id: String },

    #[error("Nothing is selected. Abandoning command.")]
    NoSelection,

    #[error(transparent)]
    EditRejected(#[from] EditError),
}

/// Whether the editor's document is Markdown
pub fn is_markdown<E: Editor>(editor: &E) -> bool {
    editor.language_id().eq_ignore_ascii_case("markdown")
}

pub(crate) fn ensure_markdown<E: Editor>(editor: &E, command: &'static str) -> Result<(), CommandError> {
    if is_markdown(editor) {
        Ok(())
    } else {
        Err(CommandError::NotMarkdown {
            command,
            language_id: editor.language_id().to_string(),
        })
    }
}

/// The language picker for the configured view of the catalogue
pub fn language_prompt(languages: &[LanguageEntry], placeholder: &str) -> ChoicePrompt {
    ChoicePrompt {
        placeholder: placeholder.to_string(),
        items: languages
            .iter()
            .map(|entry| ChoiceItem {
                label: entry.canonical_name.to_string(),
                description: entry.picker_description(),
            })
            .collect(),
    }
}

/// Ask the user for a language. `None` when the picker is dismissed.
pub(crate) async fn pick_language<E: Editor>(
    editor: &mut E,
    config: &LanguageConfig,
    placeholder: &str,
) -> Option<&'static LanguageEntry> {
    let languages = LanguageRegistry::global().configured(config);
    let index = editor.choose(&language_prompt(languages, placeholder)).await?;
    languages.get(index)
}
