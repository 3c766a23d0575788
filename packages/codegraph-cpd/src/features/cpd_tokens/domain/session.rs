//! Token Aggregator
//!
//! Groups an ordered token stream for one file into [`TokensLine`] records.
//!
//! ```text
//! TokenAggregator::on_file(file)      → FileTokenSession (exclusion resolved)
//!   session.add_token(range, image)*  → ordering checked, tokens grouped per line
//!   session.finish() / save(sink)     → FileTokenLines (or nothing if excluded)
//! ```
//!
//! A session can only be obtained by binding a file, so submitting tokens
//! before a file is selected cannot be expressed. Finalizing consumes the
//! session.

use std::sync::Arc;

use crate::errors::{CpdError, Result};
use crate::shared::models::{InputFile, TextRange};

use super::exclusion::{ExclusionDecision, ExclusionResolver};
use super::sink::{DuplicationSink, FileTokenLines};
use super::token::Token;
use super::tokens_line::TokensLine;

/// Entry point: binds files to fresh sessions
#[derive(Debug, Clone)]
pub struct TokenAggregator {
    resolver: ExclusionResolver,
}

impl TokenAggregator {
    pub fn new(resolver: ExclusionResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &ExclusionResolver {
        &self.resolver
    }

    /// Select a file; the exclusion decision is computed here, once
    pub fn on_file(&self, file: InputFile) -> FileTokenSession {
        let decision = self.resolver.resolve(&file);
        FileTokenSession::new(file, decision)
    }
}

/// Result of [`FileTokenSession::save`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Stored { lines: usize },
    Excluded,
}

/// In-progress aggregation for exactly one file
#[derive(Debug)]
pub struct FileTokenSession {
    file: InputFile,
    decision: ExclusionDecision,
    lines: Vec<TokensLine>,
    /// `None` until the first token arrives
    current_line: Option<u32>,
    line_start_unit: usize,
    unit_count: usize,
    buffer: String,
    last_range: Option<TextRange>,
    aborted: bool,
}

impl FileTokenSession {
    fn new(file: InputFile, decision: ExclusionDecision) -> Self {
        Self {
            file,
            decision,
            lines: Vec::new(),
            current_line: None,
            line_start_unit: 0,
            unit_count: 0,
            buffer: String::new(),
            last_range: None,
            aborted: false,
        }
    }

    pub fn file(&self) -> &InputFile {
        &self.file
    }

    pub fn decision(&self) -> &ExclusionDecision {
        &self.decision
    }

    pub fn is_excluded(&self) -> bool {
        self.decision.is_excluded()
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    /// Tokens accepted so far (always 0 for excluded files)
    pub fn unit_count(&self) -> usize {
        self.unit_count
    }

    /// Submit the next token in source order
    ///
    /// Excluded files accept anything without validation. An ordering
    /// violation aborts the session; every later call fails.
    pub fn add_token(&mut self, range: TextRange, image: &str) -> Result<()> {
        if self.aborted {
            return Err(self.aborted_error());
        }
        if self.decision.is_excluded() {
            return Ok(());
        }

        if let Some(previous) = self.last_range {
            if !previous.precedes(&range) {
                self.aborted = true;
                tracing::warn!(
                    path = %self.file.path,
                    %previous,
                    current = %range,
                    "cpd: tokens out of order, session aborted"
                );
                return Err(CpdError::OutOfOrder {
                    file: self.file.path.clone(),
                    previous,
                    current: range,
                });
            }
        }

        let line = range.start().line;
        if self.current_line != Some(line) {
            self.flush();
            self.current_line = Some(line);
            self.line_start_unit = self.unit_count;
        }

        self.buffer.push_str(image);
        self.unit_count += 1;
        self.last_range = Some(range);
        Ok(())
    }

    pub fn add(&mut self, token: &Token) -> Result<()> {
        self.add_token(token.range, &token.image)
    }

    /// Submit a batch, stopping at the first error
    pub fn add_tokens<'a, I>(&mut self, tokens: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Token>,
    {
        for token in tokens {
            self.add(token)?;
        }
        Ok(())
    }

    /// Flush the pending line and freeze the output
    ///
    /// Returns `None` for excluded files.
    pub fn finish(mut self) -> Result<Option<FileTokenLines>> {
        if self.aborted {
            return Err(self.aborted_error());
        }
        if self.decision.is_excluded() {
            tracing::debug!(path = %self.file.path, "cpd: excluded file finalized, nothing emitted");
            return Ok(None);
        }

        self.flush();
        tracing::debug!(
            path = %self.file.path,
            lines = self.lines.len(),
            tokens = self.unit_count,
            "cpd: file finalized"
        );

        let lines: Arc<[TokensLine]> = self.lines.into();
        Ok(Some(FileTokenLines {
            file: self.file,
            lines,
        }))
    }

    /// Finalize and hand the lines to `sink`
    pub fn save(self, sink: &dyn DuplicationSink) -> Result<SaveOutcome> {
        match self.finish()? {
            Some(output) => {
                let lines = output.len();
                sink.store(output)?;
                Ok(SaveOutcome::Stored { lines })
            }
            None => Ok(SaveOutcome::Excluded),
        }
    }

    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let Some(line) = self.current_line else {
            return;
        };

        let value = std::mem::take(&mut self.buffer);
        tracing::trace!(
            line,
            start_unit = self.line_start_unit,
            end_unit = self.unit_count,
            "cpd: line flushed"
        );
        self.lines
            .push(TokensLine::new(self.line_start_unit, self.unit_count, line, value));
    }

    fn aborted_error(&self) -> CpdError {
        CpdError::precondition(format!(
            "session for {} was aborted by an ordering violation",
            self.file.path
        ))
    }
}
