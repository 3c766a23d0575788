//! Common test utilities for codegraph-cpd
//!
//! Shared builders, sinks, and helpers for unit and integration tests.

#![allow(dead_code)]

use codegraph_cpd::errors::Result;
use codegraph_cpd::features::cpd_tokens::{DuplicationSink, FileTokenLines, Token};
use codegraph_cpd::shared::models::TextRange;
use parking_lot::Mutex;

/// Token on a single line, `col..col + image.len()`
pub fn token_at(line: u32, col: u32, image: &str) -> Token {
    let end = col + image.len().max(1) as u32;
    Token::new(TextRange::from_coords(line, col, line, end).unwrap(), image)
}

/// Builds well-ordered token streams line by line
pub struct TokenStreamBuilder {
    line: u32,
    col: u32,
    tokens: Vec<Token>,
}

impl TokenStreamBuilder {
    pub fn new() -> Self {
        Self {
            line: 1,
            col: 0,
            tokens: Vec::new(),
        }
    }

    /// Next token on the current line, separated by one column
    pub fn token(mut self, image: &str) -> Self {
        let token = token_at(self.line, self.col, image);
        self.col = token.range.end().line_offset + 1;
        self.tokens.push(token);
        self
    }

    pub fn tokens(mut self, images: &[&str]) -> Self {
        for image in images {
            self = self.token(image);
        }
        self
    }

    pub fn newline(self) -> Self {
        let next = self.line + 1;
        self.at_line(next)
    }

    pub fn at_line(mut self, line: u32) -> Self {
        assert!(line >= self.line, "builder only moves forward");
        if line != self.line {
            self.line = line;
            self.col = 0;
        }
        self
    }

    pub fn build(self) -> Vec<Token> {
        self.tokens
    }
}

/// (line, text, start_unit, end_unit) for compact assertions
pub fn triples(lines: &FileTokenLines) -> Vec<(u32, String, usize, usize)> {
    lines
        .iter()
        .map(|l| (l.line(), l.value().to_string(), l.start_unit(), l.end_unit()))
        .collect()
}

/// Sink that records every stored file
#[derive(Default)]
pub struct RecordingSink {
    stored: Mutex<Vec<FileTokenLines>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stored(&self) -> Vec<FileTokenLines> {
        self.stored.lock().clone()
    }

    pub fn store_count(&self) -> usize {
        self.stored.lock().len()
    }
}

impl DuplicationSink for RecordingSink {
    fn store(&self, lines: FileTokenLines) -> Result<()> {
        self.stored.lock().push(lines);
        Ok(())
    }
}

/// Install a test subscriber once; later calls are ignored
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
