pub mod line_ending;
pub mod line_index;

pub use line_ending::{LineEnding, detect_line_ending};
pub use line_index::{LineCol, LineIndex};
