//! File identity handed to the token aggregator

use serde::{Deserialize, Serialize};

use crate::shared::ports::Language;

/// A source file selected for tokenization
///
/// `path` is relative to the project root and uses forward slashes.
/// `language` is the lowercase key used to look up skip settings
/// (`java`, `python`, ...). Files with no language are only subject to
/// path exclusions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputFile {
    pub path: String,
    pub language: Option<String>,
}

impl InputFile {
    pub fn new(path: impl Into<String>, language: Option<&str>) -> Self {
        Self {
            path: normalize_path(path.into()),
            language: language.map(|l| l.to_ascii_lowercase()),
        }
    }

    /// File with a known language key
    pub fn with_language(path: impl Into<String>, language: &str) -> Self {
        Self::new(path, Some(language))
    }

    /// Infer the language from the file extension
    pub fn detect(path: impl Into<String>) -> Self {
        let path = normalize_path(path.into());
        let language = Language::from_file_path(&path).map(|l| l.name().to_string());
        Self { path, language }
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

fn normalize_path(path: String) -> String {
    if path.contains('\\') {
        path.replace('\\', "/")
    } else {
        path
    }
}
