//! Document analysis for editor integrations: diagnostics, quick fixes and completions.
//!
//! Everything here is a function of the document text. Nothing is cached between calls.

pub mod completion;
pub mod diagnostics;
pub mod quick_fix;

pub use completion::{CompletionItem, provide_completions};
pub use diagnostics::{Diagnostic, UNRECOGNIZED_LANGUAGE_MESSAGE, compute_diagnostics};
pub use quick_fix::{BoundCommand, CodeAction, provide_actions};
