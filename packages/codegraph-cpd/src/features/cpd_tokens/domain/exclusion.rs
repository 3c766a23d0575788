//! Exclusion Resolver
//!
//! Decides once per file whether CPD output is dropped. Two independent
//! sources can exclude a file:
//!
//! 1. Language skip: a per-language override wins when present, otherwise
//!    the global default applies. Files without a language skip this step.
//! 2. Path patterns: any match excludes the file, whatever the language
//!    decision was.
//!
//! Exclusion is monotonic; nothing re-includes an excluded file.

use std::fmt;
use std::sync::Arc;

use crate::shared::models::InputFile;

// ═══════════════════════════════════════════════════════════════════════════
// Ports
// ═══════════════════════════════════════════════════════════════════════════

/// Skip configuration lookup
pub trait SkipSettings: Send + Sync {
    /// Per-language override, `None` when the key is not configured
    fn language_skip(&self, language: &str) -> Option<bool>;

    /// Global default used when no override exists
    fn default_skip(&self) -> bool;
}

/// Compiled path exclusion pattern
pub trait PathPattern: Send + Sync + fmt::Debug {
    fn matches(&self, file: &InputFile) -> bool;

    /// Source text of the pattern, for diagnostics
    fn pattern(&self) -> &str;
}

/// Settings that never skip anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSkip;

impl SkipSettings for NoSkip {
    fn language_skip(&self, _language: &str) -> Option<bool> {
        None
    }

    fn default_skip(&self) -> bool {
        false
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Decision
// ═══════════════════════════════════════════════════════════════════════════

/// Where a language skip came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipSource {
    LanguageOverride,
    GlobalDefault,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExclusionReason {
    LanguageSkipped {
        language: String,
        source: SkipSource,
    },
    PathPattern {
        pattern: String,
    },
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExclusionReason::LanguageSkipped {
                language,
                source: SkipSource::LanguageOverride,
            } => write!(f, "language '{language}' skipped by override"),
            ExclusionReason::LanguageSkipped {
                language,
                source: SkipSource::GlobalDefault,
            } => write!(f, "language '{language}' skipped by global default"),
            ExclusionReason::PathPattern { pattern } => {
                write!(f, "path matches exclusion '{pattern}'")
            }
        }
    }
}

/// Per-file exclusion decision, fixed for the life of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExclusionDecision {
    Included,
    Excluded(ExclusionReason),
}

impl ExclusionDecision {
    pub fn is_excluded(&self) -> bool {
        matches!(self, ExclusionDecision::Excluded(_))
    }

    pub fn reason(&self) -> Option<&ExclusionReason> {
        match self {
            ExclusionDecision::Included => None,
            ExclusionDecision::Excluded(reason) => Some(reason),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Resolver
// ═══════════════════════════════════════════════════════════════════════════

/// Immutable, cheaply cloneable exclusion resolver
#[derive(Clone)]
pub struct ExclusionResolver {
    settings: Arc<dyn SkipSettings>,
    patterns: Arc<[Arc<dyn PathPattern>]>,
}

impl ExclusionResolver {
    pub fn new(settings: Arc<dyn SkipSettings>, patterns: Vec<Arc<dyn PathPattern>>) -> Self {
        Self {
            settings,
            patterns: patterns.into(),
        }
    }

    /// Resolver that includes every file
    pub fn include_all() -> Self {
        Self::new(Arc::new(NoSkip), Vec::new())
    }

    pub fn patterns(&self) -> &[Arc<dyn PathPattern>] {
        &self.patterns
    }

    pub fn resolve(&self, file: &InputFile) -> ExclusionDecision {
        let decision = match self.language_skip(file) {
            Some(reason) => ExclusionDecision::Excluded(reason),
            None => match self.matching_pattern(file) {
                Some(pattern) => ExclusionDecision::Excluded(ExclusionReason::PathPattern {
                    pattern: pattern.to_string(),
                }),
                None => ExclusionDecision::Included,
            },
        };

        match decision.reason() {
            Some(reason) => tracing::debug!(
                path = %file.path,
                language = ?file.language,
                %reason,
                "cpd: file excluded"
            ),
            None => tracing::debug!(
                path = %file.path,
                language = ?file.language,
                "cpd: file included"
            ),
        }

        decision
    }

    fn language_skip(&self, file: &InputFile) -> Option<ExclusionReason> {
        let language = file.language()?;

        let (skip, source) = match self.settings.language_skip(language) {
            Some(skip) => (skip, SkipSource::LanguageOverride),
            None => (self.settings.default_skip(), SkipSource::GlobalDefault),
        };

        skip.then(|| ExclusionReason::LanguageSkipped {
            language: language.to_string(),
            source,
        })
    }

    fn matching_pattern(&self, file: &InputFile) -> Option<&str> {
        self.patterns
            .iter()
            .find(|p| p.matches(file))
            .map(|p| p.pattern())
    }
}

impl fmt::Debug for ExclusionResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExclusionResolver")
            .field("default_skip", &self.settings.default_skip())
            .field("patterns", &self.patterns)
            .finish()
    }
}
