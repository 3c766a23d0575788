//! CPD Tokens Domain Models

mod exclusion;
mod session;
mod sink;
mod token;
mod tokens_line;

pub use exclusion::{
    ExclusionDecision, ExclusionReason, ExclusionResolver, NoSkip, PathPattern, SkipSettings,
    SkipSource,
};
pub use session::{FileTokenSession, SaveOutcome, TokenAggregator};
pub use sink::{DuplicationSink, FileTokenLines};
pub use token::Token;
pub use tokens_line::TokensLine;
