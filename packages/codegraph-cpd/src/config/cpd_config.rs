//! YAML v1 exclusion configuration
//!
//! ```yaml
//! version: 1
//! skip: false
//! languages:
//!   java:
//!     skip: true
//! exclusions:
//!   - "**/generated/**"
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::validation::{is_valid_language_key, Validatable};
use crate::features::cpd_tokens::domain::{ExclusionResolver, PathPattern, SkipSettings};
use crate::features::cpd_tokens::infrastructure::GlobPathPattern;

pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// Per-language settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageSettings {
    /// Override of the global `skip`; absent means "use the global default"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<bool>,
}

/// Exclusion configuration document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CpdConfig {
    #[serde(default)]
    pub version: Option<u32>,

    /// Global default skip for languages without an override
    #[serde(default)]
    pub skip: bool,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub languages: BTreeMap<String, LanguageSettings>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclusions: Vec<String>,
}

impl Default for CpdConfig {
    fn default() -> Self {
        Self {
            version: Some(1),
            skip: false,
            languages: BTreeMap::new(),
            exclusions: Vec::new(),
        }
    }
}

impl CpdConfig {
    /// Load and validate a YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml_str(&content)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            languages = config.languages.len(),
            exclusions = config.exclusions.len(),
            "cpd: configuration loaded"
        );
        Ok(config)
    }

    /// Parse and validate YAML text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let config: CpdConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    // Builder-style helpers

    pub fn with_default_skip(mut self, skip: bool) -> Self {
        self.skip = skip;
        self
    }

    pub fn with_language_skip(mut self, language: impl Into<String>, skip: bool) -> Self {
        self.languages
            .entry(language.into())
            .or_default()
            .skip = Some(skip);
        self
    }

    pub fn with_exclusion(mut self, pattern: impl Into<String>) -> Self {
        self.exclusions.push(pattern.into());
        self
    }

    /// Compile `exclusions` into path patterns
    pub fn exclusion_patterns(&self) -> ConfigResult<Vec<Arc<dyn PathPattern>>> {
        GlobPathPattern::compile_all(self.exclusions.as_slice())
    }

    /// Validate and build a resolver backed by this configuration
    pub fn resolver(&self) -> ConfigResult<ExclusionResolver> {
        self.validate()?;
        let patterns = self.exclusion_patterns()?;
        Ok(ExclusionResolver::new(Arc::new(self.clone()), patterns))
    }
}

impl SkipSettings for CpdConfig {
    fn language_skip(&self, language: &str) -> Option<bool> {
        self.languages.get(language).and_then(|l| l.skip)
    }

    fn default_skip(&self) -> bool {
        self.skip
    }
}

impl Validatable for CpdConfig {
    fn validate(&self) -> ConfigResult<()> {
        let version = self.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        if let Some(key) = self.languages.keys().find(|k| !is_valid_language_key(k)) {
            return Err(ConfigError::InvalidLanguageKey(key.clone()));
        }

        for pattern in &self.exclusions {
            GlobPathPattern::new(pattern)?;
        }

        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "CpdConfig"
    }
}
