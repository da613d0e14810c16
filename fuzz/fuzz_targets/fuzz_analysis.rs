#![no_main]

//! Fuzz target for the fence analysis:
//! scanning, diagnostics and completions must not panic on any input, and every
//! diagnostic range must slice the text at character boundaries.

use libfuzzer_sys::fuzz_target;
use mdfence_lib::config::LanguageConfig;
use mdfence_lib::fence::{FenceRole, scan};
use mdfence_lib::utils::LineIndex;
use mdfence_lib::{compute_diagnostics, provide_completions};

fuzz_target!(|data: (&str, u16)| {
    let (content, cursor) = data;
    if content.len() > 50_000 {
        return;
    }

    for (i, span) in scan(content).enumerate() {
        let expected = if i % 2 == 0 { FenceRole::Opening } else { FenceRole::Closing };
        assert_eq!(span.role, expected, "Roles must alternate");
    }

    let index = LineIndex::new(content);
    for diagnostic in compute_diagnostics(content) {
        let tag = content.get(diagnostic.range.clone()).expect("diagnostic range on char boundaries");
        assert_eq!(tag, diagnostic.tag);
        let (start, end) = diagnostic.positions(&index);
        assert!(start.line <= end.line);
    }

    let cursor = usize::from(cursor).min(content.len());
    let _ = provide_completions(content, cursor, &LanguageConfig::default());
});
