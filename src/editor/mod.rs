//! Host editor capabilities
//!
//! Editor commands only talk to the host through [`Editor`]: read the text and selections,
//! ask the user to pick from a list or type a value, post a message, and replace ranges in
//! one transaction. The language server and the in-memory editor used by the CLI and the
//! tests both implement it.

pub mod memory;

use std::future::Future;
use std::ops::Range;

use thiserror::Error;

pub use memory::{MemoryEditor, PromptAnswer};

/// A selection in byte offsets. An empty range is a bare cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub range: Range<usize>,
}

impl Selection {
    pub fn new(range: Range<usize>) -> Self {
        Self { range }
    }

    pub fn cursor(offset: usize) -> Self {
        Self { range: offset..offset }
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    pub fn text<'a>(&self, document: &'a str) -> &'a str {
        document.get(self.range.clone()).unwrap_or_default()
    }

    /// The selection does not cross a line break
    pub fn is_single_line(&self, document: &str) -> bool {
        !self.text(document).contains('\n')
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Range<usize>,
    pub new_text: String,
}

impl TextEdit {
    pub fn new(range: Range<usize>, new_text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceItem {
    pub label: String,
    pub description: String,
}

/// A cancelable pick-one prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoicePrompt {
    pub placeholder: String,
    pub items: Vec<ChoiceItem>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("Edit range {start}..{end} is outside the document")]
    OutOfBounds { start: usize, end: usize },
    #[error("Edit range {start}..{end} does not fall on character boundaries")]
    NotCharBoundary { start: usize, end: usize },
    #[error("Edits overlap at byte {0}")]
    Overlapping(usize),
    #[error("Editor rejected the edit: {0}")]
    Rejected(String),
}

/// The narrow view of a host editor that commands depend on
pub trait Editor: Send {
    /// Full text of the active document
    fn text(&self) -> &str;

    /// Language of the active document, e.g. "markdown"
    fn language_id(&self) -> &str;

    /// Current selections, primary first. Empty selections are bare cursors.
    fn selections(&self) -> Vec<Selection>;

    /// Byte offset of the primary cursor
    fn cursor(&self) -> usize;

    fn set_cursor(&mut self, offset: usize);

    /// Replace every range in one transaction. Either all edits land or none do.
    fn apply_edits(&mut self, edits: Vec<TextEdit>) -> impl Future<Output = Result<(), EditError>> + Send;

    /// Ask the user to pick an item. `None` when the prompt is dismissed.
    fn choose(&mut self, prompt: &ChoicePrompt) -> impl Future<Output = Option<usize>> + Send;

    /// Ask the user for free text. `None` when the prompt is dismissed.
    fn input(&mut self, prompt: &str) -> impl Future<Output = Option<String>> + Send;

    /// Post a non-blocking warning
    fn warn(&mut self, message: &str) -> impl Future<Output = ()> + Send;
}

/// Check a batch of edits against `text` and return them ordered by position
pub fn validate_edits<'e>(text: &str, edits: &'e [TextEdit]) -> Result<Vec<&'e TextEdit>, EditError> {
    let mut ordered: Vec<&TextEdit> = edits.iter().collect();
    ordered.sort_by_key(|edit| (edit.range.start, edit.range.end));

    for edit in &ordered {
        let Range { start, end } = edit.range;
        if start > end || end > text.len() {
            return Err(EditError::OutOfBounds { start, end });
        }
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            return Err(EditError::NotCharBoundary { start, end });
        }
    }

    if let Some(pair) = ordered.windows(2).find(|pair| pair[0].range.end > pair[1].range.start) {
        return Err(EditError::Overlapping(pair[1].range.start));
    }

    Ok(ordered)
}

/// Apply a batch of edits to `text`, all or nothing
pub fn apply_to_text(text: &str, edits: &[TextEdit]) -> Result<String, EditError> {
    let ordered = validate_edits(text, edits)?;

    let mut result = String::with_capacity(text.len() + edits.iter().map(|e| e.new_text.len()).sum::<usize>());
    let mut copied_to = 0;
    for edit in ordered {
        result.push_str(&text[copied_to..edit.range.start]);
        result.push_str(&edit.new_text);
        copied_to = edit.range.end;
    }
    result.push_str(&text[copied_to..]);
    Ok(result)
}
