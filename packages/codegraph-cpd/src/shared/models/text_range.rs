//! Source location types
//!
//! Positions are (line, line offset) pairs. Ranges are validated on
//! construction so that every `TextRange` in circulation has start <= end.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CpdError, Result};

/// Single position in a source file
///
/// Ordered by line, then by offset within the line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct TextPointer {
    pub line: u32,
    pub line_offset: u32,
}

impl TextPointer {
    pub fn new(line: u32, line_offset: u32) -> Self {
        Self { line, line_offset }
    }
}

impl fmt::Display for TextPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.line_offset)
    }
}

/// Start/end pair of positions in a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TextRange {
    start: TextPointer,
    end: TextPointer,
}

impl TextRange {
    /// Create a range, rejecting `start > end`
    pub fn new(start: TextPointer, end: TextPointer) -> Result<Self> {
        if start > end {
            return Err(CpdError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Shorthand for `new` from raw coordinates
    pub fn from_coords(
        start_line: u32,
        start_offset: u32,
        end_line: u32,
        end_offset: u32,
    ) -> Result<Self> {
        Self::new(
            TextPointer::new(start_line, start_offset),
            TextPointer::new(end_line, end_offset),
        )
    }

    pub fn start(&self) -> TextPointer {
        self.start
    }

    pub fn end(&self) -> TextPointer {
        self.end
    }

    /// True if this range ends at or before `other` starts
    pub fn precedes(&self, other: &TextRange) -> bool {
        self.end <= other.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
