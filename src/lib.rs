//! Fenced code block tooling for Markdown
//!
//! mdfence checks the language tags of fenced code blocks against a catalogue of known
//! languages, completes tags after an opening fence, offers quick fixes for unknown tags and
//! toggles selections between plain text, inline code and fenced blocks. The analysis is
//! pure and works on byte offsets; editor commands talk to the host through
//! [`editor::Editor`].

pub mod analysis;
pub mod config;
pub mod editing;
pub mod editor;
pub mod exit_codes;
pub mod fence;
pub mod language_data;
pub mod languages;
pub mod snippet;
pub mod utils;

#[cfg(feature = "native")]
pub mod lsp;

pub use analysis::{CodeAction, CompletionItem, Diagnostic, compute_diagnostics, provide_actions, provide_completions};
pub use config::{Config, LanguageConfig};
pub use fence::{FenceRole, FenceSpan, scan, toggle};
pub use languages::{LanguageEntry, LanguageRegistry};
