//! Flat `cpd.*` property settings
//!
//! | key                   | meaning                                 |
//! |-----------------------|-----------------------------------------|
//! | `cpd.skip`            | global default skip                     |
//! | `cpd.<language>.skip` | per-language override (presence counts) |
//! | `cpd.exclusions`      | comma-separated exclusion globs         |
//!
//! Booleans are true only for a case-insensitive `true`.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::error::ConfigResult;
use crate::features::cpd_tokens::domain::{ExclusionResolver, SkipSettings};
use crate::features::cpd_tokens::infrastructure::GlobPathPattern;

pub const SKIP_KEY: &str = "cpd.skip";
pub const EXCLUSIONS_KEY: &str = "cpd.exclusions";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySettings {
    values: FxHashMap<String, String>,
}

impl PropertySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `key=value` lines; blank lines and `#` comments are ignored
    pub fn parse(text: &str) -> Self {
        let mut settings = Self::new();
        for line in text.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                settings.set(key, value);
            }
        }
        settings
    }

    pub fn set(&mut self, key: &str, value: &str) -> &mut Self {
        self.values
            .insert(key.trim().to_string(), value.trim().to_string());
        self
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.get(key)
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }

    /// Comma-separated values, trimmed, empty entries dropped
    pub fn get_list(&self, key: &str) -> Vec<String> {
        self.get(key)
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn language_skip_key(language: &str) -> String {
        format!("cpd.{language}.skip")
    }

    pub fn exclusions(&self) -> Vec<String> {
        self.get_list(EXCLUSIONS_KEY)
    }

    /// Build a resolver from these settings and `cpd.exclusions`
    pub fn resolver(&self) -> ConfigResult<ExclusionResolver> {
        let patterns = GlobPathPattern::compile_all(self.exclusions().as_slice())?;
        Ok(ExclusionResolver::new(Arc::new(self.clone()), patterns))
    }
}

impl SkipSettings for PropertySettings {
    fn language_skip(&self, language: &str) -> Option<bool> {
        let key = Self::language_skip_key(language);
        self.has_key(&key).then(|| self.get_bool(&key))
    }

    fn default_skip(&self) -> bool {
        self.get_bool(SKIP_KEY)
    }
}
