//! Editor capabilities over the LSP client
//!
//! `window/showMessageRequest` serves as the picker and `workspace/applyEdit` as the
//! transaction. LSP has no free-text prompt, so `input` is always dismissed.

use std::collections::HashMap;

use tower_lsp::Client;
use tower_lsp::lsp_types::{MessageActionItem, MessageType, Url};

use crate::editor::{ChoicePrompt, EditError, Editor, Selection, TextEdit, apply_to_text, validate_edits};
use crate::lsp::types::workspace_edit;
use crate::utils::line_index::LineIndex;

/// A snapshot of one open document, editable through the client
pub struct LspEditor {
    client: Client,
    uri: Url,
    text: String,
    language_id: String,
    selections: Vec<Selection>,
    cursor: usize,
}

impl LspEditor {
    pub fn new(client: Client, uri: Url, text: String, language_id: String, selections: Vec<Selection>) -> Self {
        let cursor = selections.first().map_or(0, |selection| selection.range.end);
        Self {
            client,
            uri,
            text,
            language_id,
            selections,
            cursor,
        }
    }
}

impl Editor for LspEditor {
    fn text(&self) -> &str {
        &self.text
    }

    fn language_id(&self) -> &str {
        &self.language_id
    }

    fn selections(&self) -> Vec<Selection> {
        self.selections.clone()
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_cursor(&mut self, offset: usize) {
        // The client moves its own cursor after an applied edit
        self.cursor = offset.min(self.text.len());
    }

    async fn apply_edits(&mut self, edits: Vec<TextEdit>) -> Result<(), EditError> {
        validate_edits(&self.text, &edits)?;
        let edit = workspace_edit(&self.uri, &LineIndex::new(&self.text), &edits);

        match self.client.apply_edit(edit).await {
            Ok(response) if response.applied => {
                self.text = apply_to_text(&self.text, &edits)?;
                Ok(())
            }
            Ok(response) => Err(EditError::Rejected(
                response
                    .failure_reason
                    .unwrap_or_else(|| "client did not apply the edit".to_string()),
            )),
            Err(e) => Err(EditError::Rejected(e.to_string())),
        }
    }

    async fn choose(&mut self, prompt: &ChoicePrompt) -> Option<usize> {
        let actions = prompt
            .items
            .iter()
            .map(|item| MessageActionItem {
                title: item.label.clone(),
                properties: HashMap::new(),
            })
            .collect();

        match self
            .client
            .show_message_request(MessageType::INFO, prompt.placeholder.clone(), Some(actions))
            .await
        {
            Ok(Some(chosen)) => prompt.items.iter().position(|item| item.label == chosen.title),
            Ok(None) => None,
            Err(e) => {
                log::warn!("Choice request failed: {e}");
                None
            }
        }
    }

    async fn input(&mut self, prompt: &str) -> Option<String> {
        log::debug!("Free text input is not available over LSP, dismissing {prompt:?}");
        None
    }

    async fn warn(&mut self, message: &str) {
        self.client.show_message(MessageType::WARNING, message).await;
    }
}
