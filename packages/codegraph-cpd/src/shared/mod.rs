//! Shared module - Common types used across features

pub mod models;
pub mod ports;

pub use models::*;
