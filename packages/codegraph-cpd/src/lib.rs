/*
 * Codegraph CPD - Copy/Paste Detection token aggregation
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (TextRange, InputFile, Language)
 * - config/      : Exclusion settings (YAML v1, flat properties)
 * - features/    : Vertical slices (cpd_tokens)
 *
 * Per file:
 * - Exclusion decided once at bind time
 * - Tokens grouped into TokensLine records in source order
 * - Finalized lines handed to a DuplicationSink
 */

#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::module_inception)] // Module naming intentional

pub mod config;
pub mod errors;
pub mod features;
pub mod shared;

pub use config::{ConfigError, ConfigResult, CpdConfig, PropertySettings};
pub use errors::{CpdError, Result};
pub use features::cpd_tokens::{
    CpdBatchOutput, CpdTokensInput, CpdTokensOutput, CpdTokensStats, CpdTokensUseCase,
    CpdTokensUseCaseImpl, DuplicationSink, ExclusionDecision, ExclusionReason, ExclusionResolver,
    FileTokenLines, FileTokenSession, GlobPathPattern, InMemoryTokenLineIndex, PathPattern,
    SaveOutcome, SkipSettings, SkipSource, Token, TokenAggregator, TokensLine,
};
pub use shared::models::{InputFile, TextPointer, TextRange};
pub use shared::ports::Language;
