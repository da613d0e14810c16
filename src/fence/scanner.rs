//! Triple-backtick delimiter scanner
//!
//! The scanner does not parse Markdown. It walks the raw text for non-overlapping
//! occurrences of "```" and assigns roles by parity: the 1st, 3rd, 5th... occurrence opens a
//! fence and the 2nd, 4th, 6th... closes one. Every consumer (diagnostics, completions,
//! quick fixes) relies on this single rule, so it lives here and nowhere else.
//!
//! An odd number of delimiters leaves the final fence open. It is still emitted as an
//! `Opening` span; [`fence_blocks`] reports it as an unterminated block that runs to the end
//! of the document.

use std::ops::Range;

use serde::Serialize;

pub const FENCE_DELIMITER: &str = "```";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FenceRole {
    Opening,
    Closing,
}

/// One delimiter occurrence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FenceSpan<'a> {
    /// Byte offset of the first backtick
    pub start: usize,
    /// Byte offset just past the third backtick
    pub end: usize,
    pub role: FenceRole,
    /// Language tag of an opening fence, empty for untagged and closing fences
    pub tag: &'a str,
    /// Where the tag sits in the text. Empty and positioned at `end` when there is no tag.
    pub tag_range: Range<usize>,
}

impl FenceSpan<'_> {
    pub fn is_opening(&self) -> bool {
        self.role == FenceRole::Opening
    }

    pub fn has_tag(&self) -> bool {
        !self.tag.is_empty()
    }

    /// Delimiter plus tag, the region an editor treats as "the fence"
    pub fn header_range(&self) -> Range<usize> {
        self.start..self.tag_range.end
    }
}

/// Lazy iterator over the delimiters of a text
#[derive(Debug, Clone)]
pub struct FenceScanner<'a> {
    text: &'a str,
    cursor: usize,
    seen: usize,
}

impl<'a> FenceScanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, cursor: 0, seen: 0 }
    }
}

impl<'a> Iterator for FenceScanner<'a> {
    type Item = FenceSpan<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let found = self.text.get(self.cursor..)?.find(FENCE_DELIMITER)?;
        let start = self.cursor + found;
        let end = start + FENCE_DELIMITER.len();
        self.cursor = end;

        let role = if self.seen % 2 == 0 {
            FenceRole::Opening
        } else {
            FenceRole::Closing
        };
        self.seen += 1;

        let tag_range = match role {
            FenceRole::Opening => end..end + tag_len(&self.text[end..]),
            FenceRole::Closing => end..end,
        };

        Some(FenceSpan {
            start,
            end,
            role,
            tag: &self.text[tag_range.clone()],
            tag_range,
        })
    }
}

/// Length of the run of non-newline, non-backtick characters at the start of `rest`
fn tag_len(rest: &str) -> usize {
    rest.find(['\n', '\r', '`']).unwrap_or(rest.len())
}

/// Scan `text` for fence delimiters
pub fn scan(text: &str) -> FenceScanner<'_> {
    FenceScanner::new(text)
}

/// The span whose header (delimiter plus tag) contains `offset`, ends inclusive
pub fn span_at(text: &str, offset: usize) -> Option<FenceSpan<'_>> {
    scan(text)
        .take_while(|span| span.start <= offset)
        .find(|span| offset <= span.header_range().end)
}

/// An opening delimiter and the closing delimiter paired with it by parity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceBlock<'a> {
    pub opening: FenceSpan<'a>,
    pub closing: Option<FenceSpan<'a>>,
}

impl FenceBlock<'_> {
    pub fn is_terminated(&self) -> bool {
        self.closing.is_some()
    }

    /// Byte range covered by the block. An unterminated block runs to `text_len`.
    pub fn range(&self, text_len: usize) -> Range<usize> {
        let end = self.closing.as_ref().map_or(text_len, |closing| closing.end);
        self.opening.start..end
    }
}

/// Pair delimiters into blocks
pub fn fence_blocks(text: &str) -> impl Iterator<Item = FenceBlock<'_>> {
    let mut spans = scan(text);
    std::iter::from_fn(move || {
        let opening = spans.next()?;
        let closing = spans.next();
        if closing.is_none() {
            log::debug!("Fence at byte {} is never closed", opening.start);
        }
        Some(FenceBlock { opening, closing })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_tagged_block() {
        let text = "```rust\nfn main() {}\n```";
        let spans: Vec<_> = scan(text).collect();
        assert_eq!(spans.len(), 2);

        assert_eq!(spans[0].role, FenceRole::Opening);
        assert_eq!(spans[0].start, 0);
        assert_eq!(spans[0].end, 3);
        assert_eq!(spans[0].tag, "rust");
        assert_eq!(&text[spans[0].tag_range.clone()], "rust");

        assert_eq!(spans[1].role, FenceRole::Closing);
        assert_eq!(spans[1].start, 21);
        assert_eq!(spans[1].tag, "");
    }

    #[test]
    fn test_tag_excludes_line_terminators() {
        let spans: Vec<_> = scan("```python\r\nx = 1\r\n```\r\n").collect();
        assert_eq!(spans[0].tag, "python");
        assert_eq!(spans[0].tag_range, 3..9);
    }

    #[test]
    fn test_untagged_fence_has_empty_tag() {
        let spans: Vec<_> = scan("```\ncode\n```").collect();
        assert!(!spans[0].has_tag());
        assert_eq!(spans[0].tag_range, 3..3);
    }

    #[test]
    fn test_tag_keeps_whole_info_run() {
        let spans: Vec<_> = scan("```js title=\"a\"\n```").collect();
        assert_eq!(spans[0].tag, "js title=\"a\"");
    }

    #[test]
    fn test_roles_alternate() {
        let text = "```a\n```\n\n```b\n```\n\n```\n```\n";
        let roles: Vec<_> = scan(text).map(|s| s.role).collect();
        assert_eq!(
            roles,
            vec![
                FenceRole::Opening,
                FenceRole::Closing,
                FenceRole::Opening,
                FenceRole::Closing,
                FenceRole::Opening,
                FenceRole::Closing,
            ]
        );
        let tags: Vec<_> = scan(text).filter(|s| s.is_opening()).map(|s| s.tag).collect();
        assert_eq!(tags, vec!["a", "b", ""]);
    }

    #[test]
    fn test_long_backtick_runs_do_not_overlap() {
        // Four backticks: the first three form a delimiter, the fourth is left over
        let spans: Vec<_> = scan("````md\n````").collect();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].start, 0);
        assert_eq!(spans[0].tag, "");
        assert_eq!(spans[1].start, 7);
    }

    #[test]
    fn test_inline_fence_on_one_line() {
        let spans: Vec<_> = scan("say ```hi``` now").collect();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].tag, "hi");
        assert_eq!(spans[1].start, 9);
    }

    #[test]
    fn test_unterminated_fence_is_emitted() {
        let text = "```rust\nfn a() {}\n```\n\n```toml\nkey = 1\n";
        let spans: Vec<_> = scan(text).collect();
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[2].role, FenceRole::Opening);
        assert_eq!(spans[2].tag, "toml");

        let blocks: Vec<_> = fence_blocks(text).collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].is_terminated());
        assert!(!blocks[1].is_terminated());
        assert_eq!(blocks[1].range(text.len()).end, text.len());
    }

    #[test]
    fn test_no_delimiters() {
        assert_eq!(scan("").count(), 0);
        assert_eq!(scan("plain `code` text").count(), 0);
    }

    #[test]
    fn test_span_at() {
        let text = "```rust\nfn main() {}\n```\n";
        let opening = span_at(text, 5).unwrap();
        assert!(opening.is_opening());
        assert!(span_at(text, 3).unwrap().is_opening());
        assert!(span_at(text, 7).unwrap().is_opening());
        assert!(span_at(text, 10).is_none());

        let closing = span_at(text, 22).unwrap();
        assert_eq!(closing.role, FenceRole::Closing);
    }

    #[test]
    fn test_multibyte_text_offsets_stay_on_boundaries() {
        let text = "héllo ```ü\nx\n```";
        let spans: Vec<_> = scan(text).collect();
        assert_eq!(spans[0].tag, "ü");
        assert_eq!(&text[spans[0].tag_range.clone()], "ü");
    }
}
