//! Unrecognized language tag diagnostics
//!
//! Every terminated fence whose opening tag is not a registered alias yields one warning
//! covering exactly the tag. The full set is recomputed from the text each time; callers
//! replace whatever they published before.

use std::ops::Range;

use serde::Serialize;

use crate::fence::scanner::fence_blocks;
use crate::languages::LanguageRegistry;
use crate::utils::line_index::{LineCol, LineIndex};

pub const UNRECOGNIZED_LANGUAGE_MESSAGE: &str = "unrecognized code-fence language identifier";

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Diagnostic {
    /// Byte range of the offending tag
    pub range: Range<usize>,
    pub message: String,
    /// The tag as written
    pub tag: String,
}

impl Diagnostic {
    fn unrecognized_language(range: Range<usize>, tag: &str) -> Self {
        Self {
            range,
            message: UNRECOGNIZED_LANGUAGE_MESSAGE.to_string(),
            tag: tag.to_string(),
        }
    }

    /// Start and end of the diagnostic as line/column pairs
    pub fn positions(&self, index: &LineIndex<'_>) -> (LineCol, LineCol) {
        index.range_of(&self.range)
    }

    /// Whether this diagnostic touches `range`, ends inclusive
    pub fn intersects(&self, range: &Range<usize>) -> bool {
        self.range.start <= range.end && range.start <= self.range.end
    }
}

/// Diagnostics for `text` against the built-in language registry
pub fn compute_diagnostics(text: &str) -> Vec<Diagnostic> {
    compute_diagnostics_with(text, LanguageRegistry::global())
}

/// Diagnostics for `text` against `registry`
pub fn compute_diagnostics_with(text: &str, registry: &LanguageRegistry) -> Vec<Diagnostic> {
    let diagnostics: Vec<Diagnostic> = fence_blocks(text)
        // An unclosed trailing fence is tolerated and left alone
        .filter(|block| block.is_terminated())
        .map(|block| block.opening)
        .filter(|opening| opening.has_tag() && !registry.is_valid_alias(opening.tag))
        .map(|opening| Diagnostic::unrecognized_language(opening.tag_range.clone(), opening.tag))
        .collect();

    log::debug!("Found {} unrecognized fence tags", diagnostics.len());
    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tag_is_flagged_precisely() {
        let text = "```frobnicate\ncode\n```";
        let diagnostics = compute_diagnostics(text);
        assert_eq!(diagnostics.len(), 1);

        let diagnostic = &diagnostics[0];
        assert_eq!(&text[diagnostic.range.clone()], "frobnicate");
        assert_eq!(diagnostic.range, 3..13);
        assert_eq!(diagnostic.message, UNRECOGNIZED_LANGUAGE_MESSAGE);
        assert_eq!(diagnostic.tag, "frobnicate");
    }

    #[test]
    fn test_untagged_fence_is_silent() {
        assert!(compute_diagnostics("```\ncode\n```").is_empty());
    }

    #[test]
    fn test_known_tags_are_silent() {
        let text = "```rust\nfn a() {}\n```\n\n```PowerShell\nGet-Item\n```\n";
        assert!(compute_diagnostics(text).is_empty());
    }

    #[test]
    fn test_closing_fences_are_never_flagged() {
        // Text after a closing delimiter on the same line is not a tag
        let text = "```\ncode\n```nonsense\n";
        assert!(compute_diagnostics(text).is_empty());
    }

    #[test]
    fn test_multiple_blocks() {
        let text = "```foo\na\n```\n\n```bash\nls\n```\n\n```bar\r\nb\r\n```\r\n";
        let tags: Vec<_> = compute_diagnostics(text).into_iter().map(|d| d.tag).collect();
        assert_eq!(tags, vec!["foo", "bar"]);
    }

    #[test]
    fn test_unterminated_trailing_fence_is_excluded() {
        let text = "```rust\nfn a() {}\n```\n\n```frobnicate\nstill typing";
        assert!(compute_diagnostics(text).is_empty());
    }

    #[test]
    fn test_positions() {
        let text = "# Title\n\n```nope\nx\n```\n";
        let diagnostics = compute_diagnostics(text);
        let index = LineIndex::new(text);
        let (start, end) = diagnostics[0].positions(&index);
        assert_eq!(start, LineCol::new(2, 3));
        assert_eq!(end, LineCol::new(2, 7));
    }

    #[test]
    fn test_intersects() {
        let diagnostic = Diagnostic::unrecognized_language(3..7, "nope");
        assert!(diagnostic.intersects(&(0..3)));
        assert!(diagnostic.intersects(&(5..5)));
        assert!(diagnostic.intersects(&(7..20)));
        assert!(!diagnostic.intersects(&(8..20)));
    }
}
