//! Toggle text between plain, inline code and fenced code block
//!
//! These functions are pure: they see a selection's text and return its replacement.
//! Deciding which selections to touch and when to ask for a language happens in
//! [`crate::editing::format_code`].

use crate::fence::scanner::FENCE_DELIMITER;
use crate::utils::line_ending::{detect_line_ending, trim_line_breaks};

/// What a selection currently looks like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Single-line text that is not wrapped in backticks
    PlainInline,
    /// Single-line text wrapped in single backticks
    InlineCode,
    /// Multi-line text that is not a fenced block
    PlainBlock,
    /// Multi-line text that already is a fenced block
    FencedBlock,
}

impl Classification {
    pub fn is_formatted(self) -> bool {
        matches!(self, Classification::InlineCode | Classification::FencedBlock)
    }

    /// Formatting this selection inserts a fence, which needs a language tag
    pub fn needs_language(self) -> bool {
        self == Classification::PlainBlock
    }
}

/// Classify a selection. Surrounding whitespace is ignored.
pub fn classify(text: &str, is_single_line: bool) -> Classification {
    let trimmed = text.trim();
    match (is_single_line, is_single_line_code(trimmed, is_single_line)) {
        (true, true) => Classification::InlineCode,
        (true, false) => Classification::PlainInline,
        (false, true) => Classification::FencedBlock,
        (false, false) => Classification::PlainBlock,
    }
}

fn is_single_line_code(trimmed: &str, is_single_line: bool) -> bool {
    if is_single_line {
        is_inline_code(trimmed)
    } else {
        is_fenced_block(trimmed)
    }
}

/// `text` starts and ends with a single backtick
pub fn is_inline_code(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('`') && text.ends_with('`') && !text.starts_with(FENCE_DELIMITER)
}

/// `text` is "```", an optional tag, a line break, a body and a closing "```"
pub fn is_fenced_block(text: &str) -> bool {
    text.strip_prefix(FENCE_DELIMITER)
        .and_then(|rest| rest.strip_suffix(FENCE_DELIMITER))
        .is_some_and(|inner| inner.contains('\n'))
}

/// Toggle a selection's formatting.
///
/// Single-line selections toggle inline code and ignore `language`. Multi-line selections
/// are unwrapped when already fenced, otherwise wrapped in a fence tagged with `language`
/// (which may be empty). Line breaks written by the formatter follow the selection's own
/// line ending.
pub fn toggle(selection_text: &str, is_single_line: bool, language: &str) -> String {
    let trimmed = selection_text.trim();
    let eol = detect_line_ending(selection_text).as_str();

    match classify(trimmed, is_single_line) {
        Classification::InlineCode => trimmed[1..trimmed.len() - 1].to_string(),
        Classification::PlainInline => format!("`{trimmed}`"),
        Classification::FencedBlock => {
            let inner = &trimmed[FENCE_DELIMITER.len()..trimmed.len() - FENCE_DELIMITER.len()];
            // Drop the tag line
            let body = inner.find('\n').map_or("", |idx| &inner[idx + 1..]);
            format!("{eol}{}{eol}", trim_line_breaks(body))
        }
        Classification::PlainBlock => {
            format!("{eol}{FENCE_DELIMITER}{language}{eol}{trimmed}{eol}{FENCE_DELIMITER}{eol}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_inline_format_and_unformat() {
        assert_eq!(toggle("let x", true, ""), "`let x`");
        assert_eq!(toggle("  let x  ", true, ""), "`let x`");
        assert_eq!(toggle("`let x`", true, ""), "let x");
        assert_eq!(toggle("``", true, ""), "");
    }

    #[test]
    fn test_inline_ignores_language() {
        assert_eq!(toggle("value", true, "rust"), "`value`");
    }

    #[test]
    fn test_block_format_with_language() {
        assert_eq!(
            toggle("fn main() {\n}\n", false, "rust"),
            "\n```rust\nfn main() {\n}\n```\n"
        );
    }

    #[test]
    fn test_block_format_without_language() {
        assert_eq!(toggle("a\nb", false, ""), "\n```\na\nb\n```\n");
    }

    #[test]
    fn test_block_unformat() {
        assert_eq!(toggle("```rust\nfn main() {}\n```", false, ""), "\nfn main() {}\n");
        assert_eq!(toggle("\n```\n\n  indented\n\n```\n", false, ""), "\n  indented\n");
    }

    #[test]
    fn test_block_uses_crlf_when_selection_does() {
        assert_eq!(toggle("a\r\nb", false, "text"), "\r\n```text\r\na\r\nb\r\n```\r\n");
        assert_eq!(toggle("```text\r\na\r\nb\r\n```", false, ""), "\r\na\r\nb\r\n");
    }

    #[test]
    fn test_block_toggle_round_trip() {
        let body = "SELECT *\nFROM users;";
        let formatted = toggle(body, false, "sql");
        let restored = toggle(&formatted, false, "");
        assert_eq!(trim_line_breaks(&restored), body);
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("x", true), Classification::PlainInline);
        assert_eq!(classify(" `x` ", true), Classification::InlineCode);
        assert_eq!(classify("a\nb", false), Classification::PlainBlock);
        assert_eq!(classify("```\na\n```", false), Classification::FencedBlock);
        assert!(Classification::PlainBlock.needs_language());
        assert!(!Classification::FencedBlock.needs_language());
        assert!(Classification::InlineCode.is_formatted());
    }

    #[test]
    fn test_fence_detection_edge_cases() {
        assert!(!is_fenced_block("```"));
        assert!(!is_fenced_block("```code```"));
        assert!(is_fenced_block("```\n```"));
        assert!(!is_inline_code("`"));
        assert!(!is_inline_code("```a```"));
    }
}
