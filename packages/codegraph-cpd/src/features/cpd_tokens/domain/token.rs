//! Token as delivered by a scanner

use crate::shared::models::TextRange;

/// One lexical token: where it sits and its (possibly normalized) text
///
/// Only the range and image feed the line being built; the token itself
/// is not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub range: TextRange,
    pub image: String,
}

impl Token {
    pub fn new(range: TextRange, image: impl Into<String>) -> Self {
        Self {
            range,
            image: image.into(),
        }
    }

    pub fn line(&self) -> u32 {
        self.range.start().line
    }
}
