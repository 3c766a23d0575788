//! CPD Tokens Infrastructure Layer

mod glob_pattern;
mod token_line_index;

pub use glob_pattern::GlobPathPattern;
pub use token_line_index::{InMemoryTokenLineIndex, LineOccurrence, TokenLineIndexStats};
