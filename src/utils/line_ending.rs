//! Line ending detection for text produced by the formatter

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

/// Detect the dominant line ending of `content`.
///
/// Mixed content resolves to whichever ending occurs more often; ties and text without
/// any line break resolve to LF.
pub fn detect_line_ending(content: &str) -> LineEnding {
    let crlf_count = content.matches("\r\n").count();
    let lf_count = content.matches('\n').count() - crlf_count;

    if crlf_count > lf_count {
        LineEnding::Crlf
    } else {
        LineEnding::Lf
    }
}

/// Strip leading and trailing line breaks, leaving indentation and other whitespace alone
pub fn trim_line_breaks(content: &str) -> &str {
    content.trim_matches(['\r', '\n'])
}

/// Byte offset where the line containing `offset` starts
pub fn line_start(content: &str, offset: usize) -> usize {
    content[..offset].rfind('\n').map_or(0, |idx| idx + 1)
}

/// Byte offset where the line containing `offset` ends, excluding its terminator
pub fn line_end(content: &str, offset: usize) -> usize {
    let end = content[offset..]
        .find('\n')
        .map_or(content.len(), |idx| offset + idx);
    if end > offset && content.as_bytes()[end - 1] == b'\r' && end < content.len() {
        end - 1
    } else {
        end
    }
}
