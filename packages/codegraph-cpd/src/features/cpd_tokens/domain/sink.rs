//! Duplication sink port

use std::sync::Arc;

use crate::errors::Result;
use crate::shared::models::InputFile;

use super::tokens_line::TokensLine;

/// Finalized lines of one file, frozen at finalize time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTokenLines {
    pub file: InputFile,
    pub lines: Arc<[TokensLine]>,
}

impl FileTokenLines {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TokensLine> {
        self.lines.iter()
    }

    /// Total tokens covered by the emitted lines
    pub fn unit_count(&self) -> usize {
        self.lines.iter().map(TokensLine::unit_count).sum()
    }
}

/// Receiver of finalized token lines (duplication index, storage, ...)
///
/// Each file is stored at most once, as a whole. Excluded and aborted
/// sessions never reach the sink.
pub trait DuplicationSink: Send + Sync {
    fn store(&self, lines: FileTokenLines) -> Result<()>;
}
