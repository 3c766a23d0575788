//! CPD Tokens
//!
//! Turns per-file token streams into line-level records for duplicate code
//! detection:
//! - Exclusion decided once per file (language skip settings, path globs)
//! - Tokens grouped by source line, strict ordering enforced
//! - Finalized lines handed to a duplication sink
//!
//! # Hexagonal Architecture
//!
//! ```text
//! External (scanner / indexer)
//!           ↓
//! application/ (UseCase - entry point)
//!           ↓
//! domain/ (TokenAggregator, ExclusionResolver, TokensLine)
//!           ↓
//! infrastructure/ (glob patterns, in-memory index)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use codegraph_cpd::features::cpd_tokens::{
//!     CpdTokensInput, CpdTokensUseCase, CpdTokensUseCaseImpl, InMemoryTokenLineIndex,
//! };
//!
//! let usecase = CpdTokensUseCaseImpl::from_config(&config, Arc::new(InMemoryTokenLineIndex::new()))?;
//! let output = usecase.tokenize_file(CpdTokensInput { file, tokens })?;
//! ```

pub mod application; // UseCase layer (entry point)
pub mod domain;
pub mod infrastructure;

// Re-export application layer (primary interface)
pub use application::{
    CpdBatchOutput, CpdBatchStats, CpdTokensInput, CpdTokensOutput, CpdTokensStats,
    CpdTokensUseCase, CpdTokensUseCaseImpl,
};

// Re-export domain types
pub use domain::{
    DuplicationSink, ExclusionDecision, ExclusionReason, ExclusionResolver, FileTokenLines,
    FileTokenSession, NoSkip, PathPattern, SaveOutcome, SkipSettings, SkipSource, Token,
    TokenAggregator, TokensLine,
};

pub use infrastructure::{
    GlobPathPattern, InMemoryTokenLineIndex, LineOccurrence, TokenLineIndexStats,
};
