use mdfence_lib::{LanguageConfig, LanguageRegistry};
use mdfence_lib::analysis::{compute_diagnostics, provide_actions};
use mdfence_lib::editing::format_code::EDIT_FAILED_WARNING;
use mdfence_lib::editing::{
    CommandError, CommandOutcome, format_code, insert_language_identifier, insert_snippet_reference,
};
use mdfence_lib::editor::{EditError, Editor, MemoryEditor, PromptAnswer};
use pretty_assertions::assert_eq;

const POPULAR: LanguageConfig = LanguageConfig {
    all_available_languages: false,
};

const DOCUMENT: &str = "Call `init` first.\n\nuse std::io;\nfn main() {}\n\nThen run cargo test.\n";

fn range_of(text: &str, needle: &str) -> std::ops::Range<usize> {
    let start = text.find(needle).unwrap();
    start..start + needle.len()
}

#[tokio::test]
async fn test_multi_cursor_format_is_one_transaction() {
    let selections = [
        range_of(DOCUMENT, "`init`"),
        range_of(DOCUMENT, "use std::io;\nfn main() {}"),
        range_of(DOCUMENT, "cargo test"),
    ];
    let mut editor = MemoryEditor::new(DOCUMENT)
        .with_selections(selections)
        .choose_label("Rust");

    let outcome = format_code(Some(&mut editor), &POPULAR).await;

    assert_eq!(outcome, Ok(CommandOutcome::Applied));
    assert_eq!(editor.transactions(), 1);
    assert_eq!(editor.prompts().len(), 1);
    assert_eq!(
        editor.into_text(),
        "Call init first.\n\n\n```rust\nuse std::io;\nfn main() {}\n```\n\n\nThen run `cargo test`.\n"
    );
}

#[tokio::test]
async fn test_failed_transaction_leaves_document_untouched() {
    let selections = [
        range_of(DOCUMENT, "`init`"),
        range_of(DOCUMENT, "use std::io;\nfn main() {}"),
        range_of(DOCUMENT, "cargo test"),
    ];
    let mut editor = MemoryEditor::new(DOCUMENT)
        .with_selections(selections)
        .choose_label("Rust")
        .fail_next_edit();

    let outcome = format_code(Some(&mut editor), &POPULAR).await;

    assert!(matches!(outcome, Err(CommandError::EditRejected(EditError::Rejected(_)))));
    assert_eq!(editor.transactions(), 0);
    assert_eq!(
        editor.messages(),
        &[EDIT_FAILED_WARNING.to_string()]
    );
    assert_eq!(editor.into_text(), DOCUMENT);
}

#[tokio::test]
async fn test_quick_fix_drives_language_insertion() {
    let text = "# Setup\n\n```shell-script\necho hi\n```\n";
    let diagnostics = compute_diagnostics(text);
    let actions = provide_actions(&diagnostics);
    assert_eq!(actions.len(), 1);

    let bash = LanguageRegistry::global()
        .configured(&POPULAR)
        .iter()
        .position(|entry| entry.canonical_name == "Bash")
        .unwrap();
    let mut editor = MemoryEditor::new(text).answer_choice(PromptAnswer::Index(bash));

    let outcome = insert_language_identifier(Some(&mut editor), Some(actions[0].target_range().clone()), &POPULAR).await;

    assert_eq!(outcome, Ok(CommandOutcome::Applied));
    assert_eq!(editor.text(), "# Setup\n\n```bash\necho hi\n```\n");
    assert!(compute_diagnostics(editor.text()).is_empty());
}

#[tokio::test]
async fn test_commands_refuse_other_documents() {
    let mut editor = MemoryEditor::new("print('hi')")
        .with_language_id("python")
        .with_selection(0..11);

    let outcome = format_code(Some(&mut editor), &POPULAR).await;

    assert_eq!(
        outcome,
        Err(CommandError::NotMarkdown {
            command: "formatCode",
            language_id: "python".to_string(),
        })
    );
    assert_eq!(editor.text(), "print('hi')");
}

#[tokio::test]
async fn test_snippet_reference_replaces_selection() {
    let text = "See the sample:\n\nPLACEHOLDER\n";
    let mut editor = MemoryEditor::new(text)
        .with_selection(range_of(text, "PLACEHOLDER"))
        .answer_choice(PromptAnswer::Index(1))
        .answer_input(Some("1-10,x"))
        .answer_input(Some("1-10, 12"));

    let outcome = insert_snippet_reference(Some(&mut editor), "../code/sample.py").await;

    assert_eq!(outcome, Ok(CommandOutcome::Applied));
    assert_eq!(editor.messages().len(), 1);
    assert_eq!(
        editor.text(),
        "See the sample:\n\n:::code language=\"python\" source=\"../code/sample.py\" range=\"1-10, 12\":::\n"
    );
}
