//! In-memory editor
//!
//! Holds one document, answers prompts from a script and records everything it was asked to
//! show. The CLI drives editor commands through it, and so do the tests.

use std::collections::VecDeque;

use super::{ChoicePrompt, EditError, Editor, Selection, TextEdit, apply_to_text};

/// A scripted reply to the next choice prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAnswer {
    /// Pick the item at this position
    Index(usize),
    /// Pick the item with this label
    Label(String),
    /// Close the prompt without picking
    Dismiss,
}

#[derive(Debug, Clone)]
pub struct MemoryEditor {
    text: String,
    language_id: String,
    selections: Vec<Selection>,
    cursor: usize,
    choice_answers: VecDeque<PromptAnswer>,
    input_answers: VecDeque<Option<String>>,
    fail_next_edit: bool,
    prompts: Vec<ChoicePrompt>,
    messages: Vec<String>,
    transactions: usize,
}

impl MemoryEditor {
    /// A Markdown document with the cursor at the start
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language_id: "markdown".to_string(),
            selections: Vec::new(),
            cursor: 0,
            choice_answers: VecDeque::new(),
            input_answers: VecDeque::new(),
            fail_next_edit: false,
            prompts: Vec::new(),
            messages: Vec::new(),
            transactions: 0,
        }
    }

    pub fn with_language_id(mut self, language_id: impl Into<String>) -> Self {
        self.language_id = language_id.into();
        self
    }

    /// Replace the selections. The primary selection comes first.
    pub fn with_selections(mut self, selections: impl IntoIterator<Item = std::ops::Range<usize>>) -> Self {
        self.selections = selections.into_iter().map(Selection::new).collect();
        if let Some(primary) = self.selections.first() {
            self.cursor = primary.range.end;
        }
        self
    }

    pub fn with_selection(self, range: std::ops::Range<usize>) -> Self {
        self.with_selections([range])
    }

    /// A single bare cursor
    pub fn with_cursor(mut self, offset: usize) -> Self {
        self.selections = vec![Selection::cursor(offset)];
        self.cursor = offset;
        self
    }

    pub fn answer_choice(mut self, answer: PromptAnswer) -> Self {
        self.choice_answers.push_back(answer);
        self
    }

    /// Answer the next choice prompt with the item labelled `label`
    pub fn choose_label(self, label: &str) -> Self {
        self.answer_choice(PromptAnswer::Label(label.to_string()))
    }

    pub fn answer_input(mut self, answer: Option<&str>) -> Self {
        self.input_answers.push_back(answer.map(str::to_string));
        self
    }

    /// Make the next transaction fail without touching the document
    pub fn fail_next_edit(mut self) -> Self {
        self.fail_next_edit = true;
        self
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Choice prompts shown so far
    pub fn prompts(&self) -> &[ChoicePrompt] {
        &self.prompts
    }

    /// Warnings posted so far
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Number of transactions that were applied
    pub fn transactions(&self) -> usize {
        self.transactions
    }
}

impl Editor for MemoryEditor {
    fn text(&self) -> &str {
        &self.text
    }

    fn language_id(&self) -> &str {
        &self.language_id
    }

    fn selections(&self) -> Vec<Selection> {
        if self.selections.is_empty() {
            vec![Selection::cursor(self.cursor)]
        } else {
            self.selections.clone()
        }
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_cursor(&mut self, offset: usize) {
        self.cursor = offset.min(self.text.len());
        self.selections = vec![Selection::cursor(self.cursor)];
    }

    async fn apply_edits(&mut self, edits: Vec<TextEdit>) -> Result<(), EditError> {
        if std::mem::take(&mut self.fail_next_edit) {
            return Err(EditError::Rejected("transaction failed".to_string()));
        }

        self.text = apply_to_text(&self.text, &edits)?;
        self.transactions += 1;

        // Like a host editor, leave a bare cursor after the last replacement
        let shift: isize = edits
            .iter()
            .map(|edit| edit.new_text.len() as isize - edit.range.len() as isize)
            .sum();
        if let Some(last) = edits.iter().max_by_key(|edit| edit.range.start) {
            let end = (last.range.end as isize + shift).max(0) as usize;
            self.set_cursor(end);
        }
        Ok(())
    }

    async fn choose(&mut self, prompt: &ChoicePrompt) -> Option<usize> {
        self.prompts.push(prompt.clone());
        match self.choice_answers.pop_front()? {
            PromptAnswer::Index(index) => (index < prompt.items.len()).then_some(index),
            PromptAnswer::Label(label) => prompt.items.iter().position(|item| item.label == label),
            PromptAnswer::Dismiss => None,
        }
    }

    async fn input(&mut self, prompt: &str) -> Option<String> {
        log::debug!("Input requested: {prompt}");
        self.input_answers.pop_front().flatten()
    }

    async fn warn(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
