//! Feature modules (vertical slices)

pub mod cpd_tokens;
