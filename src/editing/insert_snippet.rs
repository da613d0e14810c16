//! Insert a code snippet reference at the current selection

use crate::editing::{CommandError, CommandOutcome, INSERT_SNIPPET_COMMAND, ensure_markdown};
use crate::editor::{ChoiceItem, ChoicePrompt, Editor, TextEdit};
use crate::snippet::{SelectorKind, SnippetSelector, language_for_path, snippet_builder};

pub const SELECTOR_PLACEHOLDER: &str = "Select how to reference the code";
pub const INVALID_RANGE_WARNING: &str = "Line ranges look like 1-15,18,20. Please try again.";

fn selector_prompt() -> ChoicePrompt {
    ChoicePrompt {
        placeholder: SELECTOR_PLACEHOLDER.to_string(),
        items: SelectorKind::ALL
            .iter()
            .map(|kind| ChoiceItem {
                label: kind.label().to_string(),
                description: kind.description().to_string(),
            })
            .collect(),
    }
}

/// Ask how to select code from `source` and replace the primary selection with the reference.
///
/// `source` is the path written into the reference, relative to the document. Its extension
/// decides the snippet language.
pub async fn insert_snippet_reference<E: Editor>(
    editor: Option<&mut E>,
    source: &str,
) -> Result<CommandOutcome, CommandError> {
    let editor = editor.ok_or(CommandError::NoActiveEditor)?;
    ensure_markdown(editor, INSERT_SNIPPET_COMMAND)?;

    let target = editor
        .selections()
        .into_iter()
        .next()
        .map_or_else(|| editor.cursor()..editor.cursor(), |selection| selection.range);

    let mut state = SnippetSelector::start();
    while !state.is_done() {
        state = match state {
            SnippetSelector::AwaitingSelectorKind => {
                let choice = editor.choose(&selector_prompt()).await;
                state.choose_kind(choice.and_then(|index| SelectorKind::ALL.get(index).copied()))
            }
            SnippetSelector::AwaitingDetail(kind) => {
                let prompt = kind.detail_prompt().unwrap_or_default();
                let next = state.provide_detail(editor.input(prompt).await);
                if next == SnippetSelector::AwaitingDetail(kind) {
                    editor.warn(INVALID_RANGE_WARNING).await;
                }
                next
            }
            SnippetSelector::Done(_) => state,
        };
    }

    let SnippetSelector::Done(Some(selector)) = state else {
        log::debug!("Snippet reference abandoned");
        return Ok(CommandOutcome::Cancelled);
    };

    let reference = snippet_builder(&language_for_path(source), source, &selector);
    match editor.apply_edits(vec![TextEdit::new(target, reference)]).await {
        Ok(()) => Ok(CommandOutcome::Applied),
        Err(e) => {
            log::warn!("Snippet reference edit rejected: {e}");
            editor
                .warn("Could not insert the snippet reference.")
                .await;
            Err(e.into())
        }
    }
}
