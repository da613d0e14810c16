//! Fenced code detection and formatting

pub mod formatter;
pub mod scanner;

pub use formatter::{Classification, classify, toggle};
pub use scanner::{FenceBlock, FenceRole, FenceScanner, FenceSpan, fence_blocks, scan, span_at};
