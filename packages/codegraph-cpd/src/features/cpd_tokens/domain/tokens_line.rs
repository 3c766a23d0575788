//! Line-level token aggregate

use std::fmt;

use serde::Serialize;

/// All tokens of one source line, concatenated
///
/// Units are token ordinals within the file, 0-based and half-open:
/// a line holding the 4th and 5th tokens covers `[3, 5)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokensLine {
    start_unit: usize,
    end_unit: usize,
    line: u32,
    value: String,
}

impl TokensLine {
    /// Only the aggregator builds lines; `end_unit > start_unit` holds by construction
    pub(crate) fn new(start_unit: usize, end_unit: usize, line: u32, value: String) -> Self {
        debug_assert!(end_unit > start_unit, "empty unit range for line {line}");
        Self {
            start_unit,
            end_unit,
            line,
            value,
        }
    }

    pub fn start_unit(&self) -> usize {
        self.start_unit
    }

    pub fn end_unit(&self) -> usize {
        self.end_unit
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Number of tokens that contributed to this line
    pub fn unit_count(&self) -> usize {
        self.end_unit - self.start_unit
    }

    /// FNV-1a hash of the line text
    ///
    /// Stable across runs and platforms, so it can key a persisted index.
    pub fn hash_code(&self) -> u64 {
        const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
        const FNV_PRIME: u64 = 0x100000001b3;

        let mut hash = FNV_OFFSET_BASIS;
        for byte in self.value.as_bytes() {
            hash ^= *byte as u64;
            hash = hash.wrapping_mul(FNV_PRIME);
        }
        hash
    }
}

impl fmt::Display for TokensLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TokensLine(line {}, units [{}, {}), {:?})",
            self.line, self.start_unit, self.end_unit, self.value
        )
    }
}
