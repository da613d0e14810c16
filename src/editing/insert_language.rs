//! Replace a range with a language alias chosen from the picker

use std::ops::Range;

use crate::config::LanguageConfig;
use crate::editing::{CommandError, CommandOutcome, INSERT_LANGUAGE_COMMAND, ensure_markdown, pick_language};
use crate::editor::{Editor, TextEdit};

pub const LANGUAGE_PLACEHOLDER: &str = "Select a language identifier";
pub const NO_SELECTION_WARNING: &str = "Please first make a selection to insert a language identifier.";

/// Replace `range`, or the primary selection when no range is given, with the default alias of
/// the language the user picks.
///
/// Quick fixes pass the range of the offending tag. Dismissing the picker ends the command
/// quietly.
pub async fn insert_language_identifier<E: Editor>(
    editor: Option<&mut E>,
    range: Option<Range<usize>>,
    config: &LanguageConfig,
) -> Result<CommandOutcome, CommandError> {
    let editor = editor.ok_or(CommandError::NoActiveEditor)?;
    ensure_markdown(editor, INSERT_LANGUAGE_COMMAND)?;

    let target = match range {
        Some(range) => range,
        None => match editor.selections().into_iter().next().filter(|s| !s.is_empty()) {
            Some(selection) => selection.range,
            None => {
                editor.warn(NO_SELECTION_WARNING).await;
                return Err(CommandError::NoSelection);
            }
        },
    };

    let Some(entry) = pick_language(editor, config, LANGUAGE_PLACEHOLDER).await else {
        log::debug!("Language picker dismissed");
        return Ok(CommandOutcome::Cancelled);
    };

    let alias = entry.default_alias();
    log::debug!("Inserting language identifier {alias:?} at {target:?}");
    match editor.apply_edits(vec![TextEdit::new(target, alias)]).await {
        Ok(()) => Ok(CommandOutcome::Applied),
        Err(e) => {
            log::warn!("Language identifier edit rejected: {e}");
            editor
                .warn("Could not insert the language identifier.")
                .await;
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::compute_diagnostics;
    use crate::editor::{MemoryEditor, PromptAnswer};
    use futures::executor::block_on;

    const CONFIG: LanguageConfig = LanguageConfig {
        all_available_languages: false,
    };

    #[test]
    fn test_quick_fix_range_is_replaced() {
        let text = "```frobnicate\ncode\n```\n";
        let range = compute_diagnostics(text)[0].range.clone();
        let mut editor = MemoryEditor::new(text).choose_label("JavaScript");

        let outcome = block_on(insert_language_identifier(Some(&mut editor), Some(range), &CONFIG));
        assert_eq!(outcome, Ok(CommandOutcome::Applied));
        assert_eq!(editor.text(), "```javascript\ncode\n```\n");
        assert!(compute_diagnostics(editor.text()).is_empty());
    }

    #[test]
    fn test_uses_selection_without_range() {
        let mut editor = MemoryEditor::new("```pyhton\nx\n```").with_selection(3..9).choose_label("Python");
        block_on(insert_language_identifier(Some(&mut editor), None, &CONFIG)).unwrap();
        assert_eq!(editor.text(), "```python\nx\n```");
    }

    #[test]
    fn test_empty_selection_warns() {
        let mut editor = MemoryEditor::new("```\nx\n```").with_cursor(3);
        let result = block_on(insert_language_identifier(Some(&mut editor), None, &CONFIG));
        assert_eq!(result, Err(CommandError::NoSelection));
        assert_eq!(
            editor.messages(),
            &[NO_SELECTION_WARNING.to_string()]
        );
        assert!(editor.prompts().is_empty());
    }

    #[test]
    fn test_dismissed_picker_is_silent() {
        let text = "```nope\nx\n```";
        let mut editor = MemoryEditor::new(text).answer_choice(PromptAnswer::Dismiss);
        let result = block_on(insert_language_identifier(Some(&mut editor), Some(3..7), &CONFIG));
        assert_eq!(result, Ok(CommandOutcome::Cancelled));
        assert_eq!(editor.text(), text);
        assert!(editor.messages().is_empty());
    }

    #[test]
    fn test_full_catalogue_picker() {
        let all = LanguageConfig {
            all_available_languages: true,
        };
        let mut editor = MemoryEditor::new("```x\n\n```").choose_label("Zephir");
        block_on(insert_language_identifier(Some(&mut editor), Some(3..4), &all)).unwrap();
        assert_eq!(editor.prompts()[0].items.len(), crate::languages::LanguageRegistry::global().entries().len());
        assert_eq!(editor.text(), "```zephir\n\n```");
    }

    #[test]
    fn test_no_active_editor() {
        let result = block_on(insert_language_identifier::<MemoryEditor>(None, Some(0..1), &CONFIG));
        assert_eq!(result, Err(CommandError::NoActiveEditor));
    }
}
