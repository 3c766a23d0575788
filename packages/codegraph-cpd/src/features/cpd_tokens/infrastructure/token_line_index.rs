//! Token Line Index - in-memory duplication sink
//!
//! Inverted index from line-text hash to every place that line occurs.
//! Repeated hashes are the seeds a clone matcher extends into duplicated
//! blocks.
//!
//! # Layout
//!
//! - `files`: path → frozen lines (one store per file)
//! - `by_hash`: FNV-1a of line text → occurrences, in store order

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::errors::{CpdError, Result};
use crate::features::cpd_tokens::domain::{DuplicationSink, FileTokenLines, TokensLine};

/// Where a hashed line was seen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOccurrence {
    pub path: Arc<str>,
    pub line: u32,
    pub start_unit: usize,
    pub end_unit: usize,
}

/// Index statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenLineIndexStats {
    pub files: usize,
    pub lines: usize,
    pub unique_hashes: usize,
    /// Hash buckets holding more than one occurrence
    pub hash_collisions: usize,
    pub avg_duplicates: f64,
}

#[derive(Default)]
struct IndexState {
    files: FxHashMap<Arc<str>, Arc<[TokensLine]>>,
    by_hash: FxHashMap<u64, Vec<LineOccurrence>>,
    total_lines: usize,
}

/// Thread-safe in-memory [`DuplicationSink`]
#[derive(Default)]
pub struct InMemoryTokenLineIndex {
    state: RwLock<IndexState>,
}

impl InMemoryTokenLineIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.state.read().files.contains_key(path)
    }

    pub fn lines_for(&self, path: &str) -> Option<Arc<[TokensLine]>> {
        self.state.read().files.get(path).cloned()
    }

    pub fn occurrences(&self, hash: u64) -> Vec<LineOccurrence> {
        self.state
            .read()
            .by_hash
            .get(&hash)
            .cloned()
            .unwrap_or_default()
    }

    /// Hashes seen at least twice, sorted for stable output
    pub fn repeated_hashes(&self) -> Vec<u64> {
        let state = self.state.read();
        let mut hashes: Vec<u64> = state
            .by_hash
            .iter()
            .filter(|(_, occ)| occ.len() > 1)
            .map(|(hash, _)| *hash)
            .collect();
        hashes.sort_unstable();
        hashes
    }

    pub fn stats(&self) -> TokenLineIndexStats {
        let state = self.state.read();
        let unique_hashes = state.by_hash.len();
        let hash_collisions = state.by_hash.values().filter(|v| v.len() > 1).count();
        let avg_duplicates = if unique_hashes > 0 {
            state.total_lines as f64 / unique_hashes as f64
        } else {
            0.0
        };

        TokenLineIndexStats {
            files: state.files.len(),
            lines: state.total_lines,
            unique_hashes,
            hash_collisions,
            avg_duplicates,
        }
    }

    /// Stats as pretty JSON, for reports
    pub fn stats_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.stats())
    }
}

impl DuplicationSink for InMemoryTokenLineIndex {
    fn store(&self, output: FileTokenLines) -> Result<()> {
        let mut state = self.state.write();
        let path: Arc<str> = Arc::from(output.file.path.as_str());

        if state.files.contains_key(&path) {
            return Err(CpdError::sink(format!("lines for {path} already stored")));
        }

        for line in output.lines.iter() {
            state
                .by_hash
                .entry(line.hash_code())
                .or_default()
                .push(LineOccurrence {
                    path: Arc::clone(&path),
                    line: line.line(),
                    start_unit: line.start_unit(),
                    end_unit: line.end_unit(),
                });
        }
        state.total_lines += output.lines.len();

        tracing::debug!(path = %path, lines = output.lines.len(), "cpd: lines indexed");
        state.files.insert(path, output.lines);
        Ok(())
    }
}
