//! LSP type definitions and conversions for mdfence
//!
//! The analysis layer works in byte offsets. Everything crossing the protocol boundary is
//! converted here with a [`LineIndex`] of the document.

use std::collections::HashMap;
use std::ops::Range as ByteRange;

use serde::{Deserialize, Serialize};
use tower_lsp::lsp_types::*;

use crate::analysis;
use crate::editing::FORMAT_CODE_COMMAND;
use crate::utils::line_index::{LineCol, LineIndex};

pub const DIAGNOSTIC_SOURCE: &str = "mdfence";
pub const DIAGNOSTIC_CODE: &str = "unrecognized-language";
pub const TOGGLE_FORMATTING_TITLE: &str = "Toggle code formatting";

/// Configuration for the mdfence LSP server, sent as `initializationOptions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MdfenceLspConfig {
    /// Path to an mdfence configuration file
    pub config_path: Option<String>,
    /// Publish diagnostics for unrecognized language tags
    pub enable_diagnostics: bool,
    /// Overrides `[languages] all-available-languages` from the config file
    pub all_available_languages: Option<bool>,
}

impl Default for MdfenceLspConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            enable_diagnostics: true,
            all_available_languages: None,
        }
    }
}

/// Arguments of `formatCode` and `insertLanguageIdentifier` in `workspace/executeCommand`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandArguments {
    pub uri: Url,
    /// Explicit target, as passed by quick fixes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
    /// The client's selections, primary first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selections: Vec<Range>,
}

/// Read `{"markdown": {"allAvailableLanguages": bool}}` from `workspace/didChangeConfiguration`
pub fn all_languages_setting(settings: &serde_json::Value) -> Option<bool> {
    settings
        .get("markdown")
        .and_then(|markdown| markdown.get("allAvailableLanguages"))
        .and_then(serde_json::Value::as_bool)
}

pub fn to_position(line_col: LineCol) -> Position {
    Position {
        line: line_col.line,
        character: line_col.character,
    }
}

pub fn to_lsp_range(index: &LineIndex<'_>, range: &ByteRange<usize>) -> Range {
    let (start, end) = index.range_of(range);
    Range {
        start: to_position(start),
        end: to_position(end),
    }
}

pub fn to_byte_range(index: &LineIndex<'_>, range: &Range) -> ByteRange<usize> {
    index.offset_range(
        LineCol::new(range.start.line, range.start.character),
        LineCol::new(range.end.line, range.end.character),
    )
}

pub fn to_offset(index: &LineIndex<'_>, position: Position) -> usize {
    index.offset_of(LineCol::new(position.line, position.character))
}

/// Convert an mdfence diagnostic to an LSP diagnostic
pub fn diagnostic_to_lsp(diagnostic: &analysis::Diagnostic, index: &LineIndex<'_>) -> Diagnostic {
    Diagnostic {
        range: to_lsp_range(index, &diagnostic.range),
        severity: Some(DiagnosticSeverity::WARNING),
        code: Some(NumberOrString::String(DIAGNOSTIC_CODE.to_string())),
        source: Some(DIAGNOSTIC_SOURCE.to_string()),
        message: diagnostic.message.clone(),
        related_information: None,
        tags: None,
        code_description: None,
        data: None,
    }
}

/// Convert a quick fix. The action carries a command, not an edit.
pub fn quick_fix_to_lsp(action: &analysis::CodeAction, uri: &Url, index: &LineIndex<'_>) -> CodeAction {
    let arguments = CommandArguments {
        uri: uri.clone(),
        range: Some(to_lsp_range(index, action.target_range())),
        selections: Vec::new(),
    };

    CodeAction {
        title: action.title.clone(),
        kind: Some(CodeActionKind::QUICKFIX),
        diagnostics: Some(vec![diagnostic_to_lsp(&action.diagnostic, index)]),
        edit: None,
        command: Some(Command {
            title: action.command.title.to_string(),
            command: action.command.command.to_string(),
            arguments: serde_json::to_value(arguments).ok().map(|value| vec![value]),
        }),
        is_preferred: Some(true),
        disabled: None,
        data: None,
    }
}

/// A refactor action running `formatCode` over `range`
pub fn toggle_formatting_action(uri: &Url, range: Range) -> CodeAction {
    let arguments = CommandArguments {
        uri: uri.clone(),
        range: None,
        selections: vec![range],
    };

    CodeAction {
        title: TOGGLE_FORMATTING_TITLE.to_string(),
        kind: Some(CodeActionKind::REFACTOR),
        diagnostics: None,
        edit: None,
        command: Some(Command {
            title: TOGGLE_FORMATTING_TITLE.to_string(),
            command: FORMAT_CODE_COMMAND.to_string(),
            arguments: serde_json::to_value(arguments).ok().map(|value| vec![value]),
        }),
        is_preferred: None,
        disabled: None,
        data: None,
    }
}

pub fn completion_to_lsp(item: &analysis::CompletionItem, index: &LineIndex<'_>) -> CompletionItem {
    CompletionItem {
        label: item.label.to_string(),
        kind: Some(CompletionItemKind::VALUE),
        detail: Some(item.insert_text.to_string()),
        documentation: Some(Documentation::MarkupContent(MarkupContent {
            kind: MarkupKind::Markdown,
            value: item.documentation.clone(),
        })),
        sort_text: Some(item.sort_text.to_string()),
        filter_text: Some(item.insert_text.to_string()),
        text_edit: Some(CompletionTextEdit::Edit(TextEdit {
            range: to_lsp_range(index, &item.replace_range),
            new_text: item.insert_text.to_string(),
        })),
        ..Default::default()
    }
}

/// A workspace edit replacing byte ranges of one document
pub fn workspace_edit(uri: &Url, index: &LineIndex<'_>, edits: &[crate::editor::TextEdit]) -> WorkspaceEdit {
    let text_edits = edits
        .iter()
        .map(|edit| TextEdit {
            range: to_lsp_range(index, &edit.range),
            new_text: edit.new_text.clone(),
        })
        .collect();

    let mut changes = HashMap::new();
    changes.insert(uri.clone(), text_edits);

    WorkspaceEdit {
        changes: Some(changes),
        document_changes: None,
        change_annotations: None,
    }
}
