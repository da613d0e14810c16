//! Quick fixes for unrecognized language tags
//!
//! Each diagnostic gets exactly one action. The action does not carry an edit: it binds the
//! language-insertion command to the tag range, so the language picker runs only when the
//! user invokes it.

use std::ops::Range;

use serde::Serialize;

use crate::analysis::diagnostics::Diagnostic;
use crate::editing::INSERT_LANGUAGE_COMMAND;

/// A command invocation attached to an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundCommand {
    pub command: &'static str,
    pub title: &'static str,
    pub tooltip: &'static str,
    /// Range passed to the command as its argument
    pub range: Range<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeAction {
    pub title: String,
    pub command: BoundCommand,
    /// The diagnostic this action resolves
    pub diagnostic: Diagnostic,
}

impl CodeAction {
    pub fn target_range(&self) -> &Range<usize> {
        &self.command.range
    }
}

/// One quick fix per diagnostic, in diagnostic order
pub fn provide_actions(diagnostics: &[Diagnostic]) -> Vec<CodeAction> {
    diagnostics.iter().map(action_for).collect()
}

fn action_for(diagnostic: &Diagnostic) -> CodeAction {
    CodeAction {
        title: format!(
            "Click to fix \"{}\" unrecognized code-fence language identifier",
            diagnostic.tag
        ),
        command: BoundCommand {
            command: INSERT_LANGUAGE_COMMAND,
            title: "Insert language identifier",
            tooltip: "Select from the available language identifiers.",
            range: diagnostic.range.clone(),
        },
        diagnostic: diagnostic.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::diagnostics::compute_diagnostics;

    #[test]
    fn test_one_action_per_diagnostic() {
        let text = "```foo\na\n```\n```rust\nb\n```\n```bar\nc\n```\n";
        let diagnostics = compute_diagnostics(text);
        let actions = provide_actions(&diagnostics);
        assert_eq!(actions.len(), 2);

        for (action, diagnostic) in actions.iter().zip(&diagnostics) {
            assert_eq!(action.target_range(), &diagnostic.range);
            assert_eq!(action.command.command, "insertLanguageIdentifier");
            assert_eq!(&action.diagnostic, diagnostic);
        }
    }

    #[test]
    fn test_title_names_the_tag() {
        let actions = provide_actions(&compute_diagnostics("```frobnicate\nx\n```"));
        assert_eq!(
            actions[0].title,
            "Click to fix \"frobnicate\" unrecognized code-fence language identifier"
        );
    }

    #[test]
    fn test_no_diagnostics_no_actions() {
        assert!(provide_actions(&[]).is_empty());
    }
}
