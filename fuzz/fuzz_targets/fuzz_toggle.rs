#![no_main]

//! Fuzz target that verifies toggle idempotency:
//! formatting and then unformatting a selection gives back its trimmed text.

use libfuzzer_sys::fuzz_target;
use mdfence_lib::fence::toggle;

fuzz_target!(|data: (&str, bool)| {
    let (text, as_block) = data;
    if text.contains(['`', '\r']) || text.trim().is_empty() {
        return;
    }

    if as_block {
        let formatted = toggle(text, false, "rust");
        let unformatted = toggle(&formatted, false, "rust");
        assert_eq!(unformatted, format!("\n{}\n", text.trim()), "Block toggle is not reversible");
    } else if !text.contains('\n') {
        let formatted = toggle(text, true, "");
        assert_eq!(toggle(&formatted, true, ""), text.trim(), "Inline toggle is not reversible");
    }
});
