//! Glob-based path exclusion patterns
//!
//! `*` and `?` stay within one path segment, `**` spans directories.

use std::sync::Arc;

use globset::{GlobBuilder, GlobMatcher};

use crate::config::{ConfigError, ConfigResult};
use crate::features::cpd_tokens::domain::PathPattern;
use crate::shared::models::InputFile;

#[derive(Debug, Clone)]
pub struct GlobPathPattern {
    source: String,
    matcher: GlobMatcher,
}

impl GlobPathPattern {
    pub fn new(pattern: &str) -> ConfigResult<Self> {
        let trimmed = pattern.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyPattern);
        }

        let glob = GlobBuilder::new(trimmed)
            .literal_separator(true)
            .build()
            .map_err(|e| ConfigError::InvalidPattern {
                pattern: trimmed.to_string(),
                reason: e.kind().to_string(),
            })?;

        Ok(Self {
            source: trimmed.to_string(),
            matcher: glob.compile_matcher(),
        })
    }

    /// Compile a list of patterns, failing on the first invalid one
    pub fn compile_all<S: AsRef<str>>(patterns: &[S]) -> ConfigResult<Vec<Arc<dyn PathPattern>>> {
        patterns
            .iter()
            .map(|p| Self::new(p.as_ref()).map(|g| Arc::new(g) as Arc<dyn PathPattern>))
            .collect()
    }
}

impl PathPattern for GlobPathPattern {
    fn matches(&self, file: &InputFile) -> bool {
        self.matcher.is_match(&file.path)
    }

    fn pattern(&self) -> &str {
        &self.source
    }
}
