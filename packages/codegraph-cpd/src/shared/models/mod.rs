//! Shared models

mod input_file;
mod text_range;

pub use input_file::InputFile;
pub use text_range::{TextPointer, TextRange};
