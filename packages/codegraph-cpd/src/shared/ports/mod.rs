//! Shared ports

mod language;

pub use language::Language;
