//! Toggle code formatting over the current selections

use crate::config::LanguageConfig;
use crate::editing::{CommandError, CommandOutcome, FORMAT_CODE_COMMAND, ensure_markdown, pick_language};
use crate::editor::{Editor, TextEdit};
use crate::fence::formatter::{classify, toggle};
use crate::utils::line_ending::{line_end, line_start};

pub const LANGUAGE_PLACEHOLDER: &str = "Select a programming language for the code block";
pub const NO_LANGUAGE_WARNING: &str = "No code language selected. Abandoning command.";
pub const EDIT_FAILED_WARNING: &str = "Could not format selections. Abandoning command.";
pub const NO_SELECTION_WARNING: &str = "Please first make a selection to format as code.";

/// Format or unformat every non-empty selection as code.
///
/// When all selections are bare cursors, an empty inline code span is inserted at the primary
/// cursor. Otherwise each selection is toggled on its own, sharing one language tag, and all
/// replacements go to the editor as a single transaction. The language picker is shown once,
/// and only if some selection is multi-line text that is not fenced yet.
pub async fn format_code<E: Editor>(
    editor: Option<&mut E>,
    config: &LanguageConfig,
) -> Result<CommandOutcome, CommandError> {
    let editor = editor.ok_or(CommandError::NoActiveEditor)?;
    ensure_markdown(editor, FORMAT_CODE_COMMAND)?;

    let selections: Vec<_> = editor.selections().into_iter().filter(|s| !s.is_empty()).collect();
    if selections.is_empty() {
        return insert_empty_inline_code(editor).await;
    }

    let needs_language = {
        let text = editor.text();
        selections
            .iter()
            .any(|s| classify(s.text(text), s.is_single_line(text)).needs_language())
    };

    let language = if needs_language {
        match pick_language(editor, config, LANGUAGE_PLACEHOLDER).await {
            Some(entry) => entry.default_alias(),
            None => {
                log::info!("Language picker dismissed, nothing formatted");
                editor.warn(NO_LANGUAGE_WARNING).await;
                return Ok(CommandOutcome::Cancelled);
            }
        }
    } else {
        ""
    };

    let edits: Vec<TextEdit> = {
        let text = editor.text();
        selections
            .iter()
            .map(|s| TextEdit::new(s.range.clone(), toggle(s.text(text), s.is_single_line(text), language)))
            .collect()
    };
    log::debug!("Toggling {} selection(s) with language {language:?}", edits.len());

    commit(editor, edits).await
}

/// Insert "``" at the cursor, replacing the characters on either side of it with themselves
async fn insert_empty_inline_code<E: Editor>(editor: &mut E) -> Result<CommandOutcome, CommandError> {
    let (anchor, replacement, inner_cursor) = {
        let text = editor.text();
        let mut cursor = editor.cursor().min(text.len());
        while !text.is_char_boundary(cursor) {
            cursor -= 1;
        }

        let start = text[line_start(text, cursor)..cursor]
            .chars()
            .next_back()
            .map_or(cursor, |c| cursor - c.len_utf8());
        let end = text[cursor..line_end(text, cursor).max(cursor)]
            .chars()
            .next()
            .map_or(cursor, |c| cursor + c.len_utf8());

        let replacement = format!("{}{}{}", &text[start..cursor], toggle("", true, ""), &text[cursor..end]);
        (start..end, replacement, cursor + 1)
    };

    let outcome = commit(editor, vec![TextEdit::new(anchor, replacement)]).await?;
    editor.set_cursor(inner_cursor);
    Ok(outcome)
}

async fn commit<E: Editor>(editor: &mut E, edits: Vec<TextEdit>) -> Result<CommandOutcome, CommandError> {
    match editor.apply_edits(edits).await {
        Ok(()) => Ok(CommandOutcome::Applied),
        Err(e) => {
            log::warn!("Format transaction rejected: {e}");
            editor.warn(EDIT_FAILED_WARNING).await;
            Err(CommandError::EditRejected(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{MemoryEditor, PromptAnswer};
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    const CONFIG: LanguageConfig = LanguageConfig {
        all_available_languages: false,
    };

    fn run(editor: &mut MemoryEditor) -> Result<CommandOutcome, CommandError> {
        block_on(format_code(Some(editor), &CONFIG))
    }

    #[test]
    fn test_no_active_editor() {
        let result = block_on(format_code::<MemoryEditor>(None, &CONFIG));
        assert_eq!(result, Err(CommandError::NoActiveEditor));
    }

    #[test]
    fn test_single_line_selection_toggles_without_prompt() {
        let mut editor = MemoryEditor::new("call foo() now").with_selection(5..10);
        assert_eq!(run(&mut editor), Ok(CommandOutcome::Applied));
        assert_eq!(editor.text(), "call `foo()` now");
        assert!(editor.prompts().is_empty());

        let mut editor = MemoryEditor::new("call `foo()` now").with_selection(5..12);
        run(&mut editor).unwrap();
        assert_eq!(editor.text(), "call foo() now");
    }

    #[test]
    fn test_multi_line_selection_prompts_for_language() {
        let text = "Intro\nfn main() {}\nlet x = 1;\nOutro";
        let mut editor = MemoryEditor::new(text).with_selection(6..29).choose_label("Rust");
        assert_eq!(run(&mut editor), Ok(CommandOutcome::Applied));
        assert_eq!(editor.prompts().len(), 1);
        assert_eq!(editor.prompts()[0].placeholder, LANGUAGE_PLACEHOLDER);
        assert_eq!(editor.text(), "Intro\n\n```rust\nfn main() {}\nlet x = 1;\n```\n\nOutro");
    }

    #[test]
    fn test_fenced_block_unformats_without_prompt() {
        let text = "```rust\nfn main() {}\n```";
        let mut editor = MemoryEditor::new(text).with_selection(0..text.len());
        run(&mut editor).unwrap();
        assert!(editor.prompts().is_empty());
        assert_eq!(editor.text(), "\nfn main() {}\n");
    }

    #[test]
    fn test_dismissed_picker_leaves_document_untouched() {
        let text = "a\nb";
        let mut editor = MemoryEditor::new(text)
            .with_selection(0..3)
            .answer_choice(PromptAnswer::Dismiss);
        assert_eq!(run(&mut editor), Ok(CommandOutcome::Cancelled));
        assert_eq!(editor.text(), text);
        assert_eq!(editor.transactions(), 0);
        assert_eq!(
            editor.messages(),
            &[NO_LANGUAGE_WARNING.to_string()]
        );
    }

    #[test]
    fn test_multi_cursor_shares_one_language_and_one_transaction() {
        let text = "x = 1\ny = 2\n\nsome word\n\nfoo\nbar";
        let first = 0..11;
        let word = text.find("word").unwrap();
        let last = text.find("foo").unwrap()..text.len();
        let mut editor = MemoryEditor::new(text)
            .with_selections([first, word..word + 4, last])
            .choose_label("Python");

        run(&mut editor).unwrap();
        assert_eq!(editor.prompts().len(), 1);
        assert_eq!(editor.transactions(), 1);
        assert_eq!(
            editor.text(),
            "\n```python\nx = 1\ny = 2\n```\n\n\nsome `word`\n\n\n```python\nfoo\nbar\n```\n"
        );
    }

    #[test]
    fn test_multi_cursor_failure_is_atomic() {
        let text = "one\ntwo\n\nthree\nfour\n\nfive";
        let mut editor = MemoryEditor::new(text)
            .with_selections([0..3, 9..19, 21..25])
            .choose_label("Bash")
            .fail_next_edit();

        let result = run(&mut editor);
        assert!(matches!(result, Err(CommandError::EditRejected(_))));
        assert_eq!(editor.text(), text);
        assert_eq!(
            editor.messages(),
            &[EDIT_FAILED_WARNING.to_string()]
        );
    }

    #[test]
    fn test_bare_cursor_inserts_empty_inline_code() {
        let mut editor = MemoryEditor::new("abcd").with_cursor(2);
        assert_eq!(run(&mut editor), Ok(CommandOutcome::Applied));
        assert_eq!(editor.text(), "ab``cd");
        assert_eq!(editor.cursor(), 3);
        assert!(editor.prompts().is_empty());
    }

    #[test]
    fn test_bare_cursor_at_line_edges() {
        let mut editor = MemoryEditor::new("ab\ncd").with_cursor(3);
        run(&mut editor).unwrap();
        assert_eq!(editor.text(), "ab\n``cd");
        assert_eq!(editor.cursor(), 4);

        let mut editor = MemoryEditor::new("ab\r\ncd").with_cursor(2);
        run(&mut editor).unwrap();
        assert_eq!(editor.text(), "ab``\r\ncd");

        let mut editor = MemoryEditor::new("").with_cursor(0);
        run(&mut editor).unwrap();
        assert_eq!(editor.text(), "``");
    }

    #[test]
    fn test_not_markdown() {
        let mut editor = MemoryEditor::new("x").with_language_id("plaintext").with_selection(0..1);
        assert!(matches!(run(&mut editor), Err(CommandError::NotMarkdown { .. })));
        assert_eq!(editor.text(), "x");
    }
}
