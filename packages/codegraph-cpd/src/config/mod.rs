//! CPD Configuration
//!
//! Two ways to describe which files are excluded from duplication analysis:
//!
//! - [`CpdConfig`]: versioned YAML document (`version: 1`)
//! - [`PropertySettings`]: flat `cpd.*` keys, as found in build properties
//!
//! # Examples
//!
//! ```rust,ignore
//! use codegraph_cpd::config::{CpdConfig, PropertySettings};
//!
//! let config = CpdConfig::from_yaml("cpd.yaml")?;
//! let resolver = config.resolver()?;
//!
//! let props = PropertySettings::new()
//!     .with("cpd.java.skip", "true")
//!     .with("cpd.exclusions", "**/generated/**, vendor/**");
//! let resolver = props.resolver()?;
//! ```

pub mod cpd_config;
pub mod error;
pub mod properties;
pub mod validation;

// Re-exports
pub use cpd_config::{CpdConfig, LanguageSettings, SUPPORTED_VERSIONS};
pub use error::{ConfigError, ConfigResult};
pub use properties::{PropertySettings, EXCLUSIONS_KEY, SKIP_KEY};
pub use validation::Validatable;
