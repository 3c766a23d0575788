//! CPD Tokens UseCase Implementation

use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;

use crate::config::CpdConfig;
use crate::errors::{CpdError, Result};
use crate::features::cpd_tokens::domain::{
    DuplicationSink, ExclusionResolver, SaveOutcome, Token, TokenAggregator,
};
use crate::shared::models::InputFile;

/// Input for one file: identity plus its tokens in source order
#[derive(Debug, Clone)]
pub struct CpdTokensInput {
    pub file: InputFile,
    pub tokens: Vec<Token>,
}

/// Output for one file
#[derive(Debug, Clone)]
pub struct CpdTokensOutput {
    pub path: String,
    pub outcome: SaveOutcome,
    pub stats: CpdTokensStats,
}

/// Per-file statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpdTokensStats {
    pub tokens_submitted: usize,
    pub lines_emitted: usize,
    pub excluded: bool,
    pub execution_time_ms: u64,
}

impl CpdTokensStats {
    fn from_outcome(outcome: SaveOutcome, tokens_submitted: usize, elapsed_ms: u64) -> Self {
        let mut stats = Self {
            tokens_submitted,
            execution_time_ms: elapsed_ms,
            ..Default::default()
        };

        match outcome {
            SaveOutcome::Stored { lines } => stats.lines_emitted = lines,
            SaveOutcome::Excluded => stats.excluded = true,
        }

        stats
    }
}

/// Output for a batch of files
#[derive(Debug)]
pub struct CpdBatchOutput {
    pub outputs: Vec<CpdTokensOutput>,
    /// Files that failed, with the error that stopped them
    pub failures: Vec<(String, CpdError)>,
    pub stats: CpdBatchStats,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpdBatchStats {
    pub files: usize,
    pub stored: usize,
    pub excluded: usize,
    pub failed: usize,
    pub lines_emitted: usize,
    pub execution_time_ms: u64,
}

impl CpdBatchStats {
    fn from_results(
        outputs: &[CpdTokensOutput],
        failures: &[(String, CpdError)],
        elapsed_ms: u64,
    ) -> Self {
        let mut stats = Self {
            files: outputs.len() + failures.len(),
            failed: failures.len(),
            execution_time_ms: elapsed_ms,
            ..Default::default()
        };

        for output in outputs {
            match output.outcome {
                SaveOutcome::Stored { lines } => {
                    stats.stored += 1;
                    stats.lines_emitted += lines;
                }
                SaveOutcome::Excluded => stats.excluded += 1,
            }
        }

        stats
    }
}

/// CPD Tokens UseCase Trait
pub trait CpdTokensUseCase: Send + Sync {
    /// Aggregate and store one file
    fn tokenize_file(&self, input: CpdTokensInput) -> Result<CpdTokensOutput>;

    /// Aggregate and store many files in parallel; one failure does not stop the others
    fn tokenize_files(&self, inputs: Vec<CpdTokensInput>) -> CpdBatchOutput;
}

/// CPD Tokens UseCase Implementation
pub struct CpdTokensUseCaseImpl {
    aggregator: TokenAggregator,
    sink: Arc<dyn DuplicationSink>,
}

impl CpdTokensUseCaseImpl {
    pub fn new(resolver: ExclusionResolver, sink: Arc<dyn DuplicationSink>) -> Self {
        Self {
            aggregator: TokenAggregator::new(resolver),
            sink,
        }
    }

    /// Build from a validated YAML configuration
    pub fn from_config(config: &CpdConfig, sink: Arc<dyn DuplicationSink>) -> Result<Self> {
        Ok(Self::new(config.resolver()?, sink))
    }

    pub fn aggregator(&self) -> &TokenAggregator {
        &self.aggregator
    }
}

impl CpdTokensUseCase for CpdTokensUseCaseImpl {
    fn tokenize_file(&self, input: CpdTokensInput) -> Result<CpdTokensOutput> {
        let start = Instant::now();
        let tokens_submitted = input.tokens.len();
        let path = input.file.path.clone();

        let mut session = self.aggregator.on_file(input.file);
        session.add_tokens(&input.tokens)?;
        let outcome = session.save(self.sink.as_ref())?;

        let elapsed = start.elapsed();
        let stats =
            CpdTokensStats::from_outcome(outcome, tokens_submitted, elapsed.as_millis() as u64);

        Ok(CpdTokensOutput {
            path,
            outcome,
            stats,
        })
    }

    fn tokenize_files(&self, inputs: Vec<CpdTokensInput>) -> CpdBatchOutput {
        let start = Instant::now();

        let results: Vec<std::result::Result<CpdTokensOutput, (String, CpdError)>> = inputs
            .into_par_iter()
            .map(|input| {
                let path = input.file.path.clone();
                self.tokenize_file(input).map_err(|e| (path, e))
            })
            .collect();

        let mut outputs = Vec::with_capacity(results.len());
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(output) => outputs.push(output),
                Err((path, err)) => {
                    tracing::warn!(path = %path, error = %err, "cpd: file failed");
                    failures.push((path, err));
                }
            }
        }

        let elapsed = start.elapsed();
        let stats = CpdBatchStats::from_results(&outputs, &failures, elapsed.as_millis() as u64);
        tracing::info!(
            files = stats.files,
            stored = stats.stored,
            excluded = stats.excluded,
            failed = stats.failed,
            lines = stats.lines_emitted,
            elapsed_ms = stats.execution_time_ms,
            "cpd: batch complete"
        );

        CpdBatchOutput {
            outputs,
            failures,
            stats,
        }
    }
}
