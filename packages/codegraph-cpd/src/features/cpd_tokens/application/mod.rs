//! CPD Tokens Application Layer (UseCase)

mod cpd_usecase;

pub use cpd_usecase::{
    CpdBatchOutput, CpdBatchStats, CpdTokensInput, CpdTokensOutput, CpdTokensStats,
    CpdTokensUseCase, CpdTokensUseCaseImpl,
};
