//! Language tag completion inside opening fences

use std::ops::Range;

use serde::Serialize;

use crate::config::LanguageConfig;
use crate::fence::scanner::span_at;
use crate::languages::{LanguageEntry, LanguageRegistry};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionItem {
    /// Canonical language name
    pub label: &'static str,
    /// Default alias, inserted over `replace_range`
    pub insert_text: &'static str,
    pub sort_text: &'static str,
    /// Markdown usage note with a sample block
    pub documentation: String,
    /// The fence's current tag, replaced on accept
    pub replace_range: Range<usize>,
}

/// Completions for a cursor at byte offset `cursor`.
///
/// Returns `None` unless the cursor sits on the delimiter or tag of an opening fence.
pub fn provide_completions(text: &str, cursor: usize, config: &LanguageConfig) -> Option<Vec<CompletionItem>> {
    provide_completions_with(text, cursor, LanguageRegistry::global(), config)
}

pub fn provide_completions_with(
    text: &str,
    cursor: usize,
    registry: &LanguageRegistry,
    config: &LanguageConfig,
) -> Option<Vec<CompletionItem>> {
    let span = span_at(text, cursor)?;
    if !span.is_opening() {
        log::debug!("Cursor at {cursor} is on a closing fence, no completions");
        return None;
    }

    let items = registry
        .configured(config)
        .iter()
        .map(|entry| completion_item(entry, span.tag_range.clone()))
        .collect();
    Some(items)
}

fn completion_item(entry: &LanguageEntry, replace_range: Range<usize>) -> CompletionItem {
    let alias = entry.default_alias();
    CompletionItem {
        label: entry.canonical_name,
        insert_text: alias,
        sort_text: alias,
        documentation: format!(
            "{}\n\nSample:\n\n````markdown\n```{alias}\n// some code...\n```\n````",
            entry.picker_description()
        ),
        replace_range,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POPULAR: LanguageConfig = LanguageConfig {
        all_available_languages: false,
    };

    #[test]
    fn test_completions_after_opening_delimiter() {
        let text = "Intro\n\n```\ncode\n```\n";
        let cursor = text.find("```").unwrap() + 3;
        let items = provide_completions(text, cursor, &POPULAR).unwrap();
        assert_eq!(items.len(), LanguageRegistry::global().list_for_picker(false).len());
        assert!(items.iter().all(|item| item.replace_range == (cursor..cursor)));
    }

    #[test]
    fn test_completions_inside_tag_replace_the_tag() {
        let text = "```ru\ncode\n```\n";
        let items = provide_completions(text, 4, &POPULAR).unwrap();
        let rust = items.iter().find(|item| item.label == "Rust").unwrap();
        assert_eq!(rust.insert_text, "rust");
        assert_eq!(rust.replace_range, 3..5);
    }

    #[test]
    fn test_no_completions_on_closing_fence() {
        let text = "```rust\ncode\n```\n";
        let closing = text.rfind("```").unwrap();
        assert!(provide_completions(text, closing + 1, &POPULAR).is_none());
        assert!(provide_completions(text, closing + 3, &POPULAR).is_none());
    }

    #[test]
    fn test_no_completions_outside_fences() {
        let text = "plain\n```rust\ncode\n```\n";
        assert!(provide_completions(text, 2, &POPULAR).is_none());
        assert!(provide_completions(text, text.find("code").unwrap(), &POPULAR).is_none());
    }

    #[test]
    fn test_all_languages_config() {
        let all = LanguageConfig {
            all_available_languages: true,
        };
        let items = provide_completions("```", 3, &all).unwrap();
        assert_eq!(items.len(), LanguageRegistry::global().entries().len());
        assert!(items.windows(2).all(|w| w[0].label <= w[1].label));
    }

    #[test]
    fn test_documentation_contains_sample() {
        let items = provide_completions("```", 3, &POPULAR).unwrap();
        let bash = items.iter().find(|item| item.label == "Bash").unwrap();
        assert!(bash.documentation.starts_with("Use the \"Bash\" language identifier (alias: bash)."));
        assert!(bash.documentation.contains("```bash\n// some code...\n```"));
    }
}
