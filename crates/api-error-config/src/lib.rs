#![allow(clippy::must_use_candidate)]

pub mod fallback;
mod loader;
pub mod validation;

use serde::Deserialize;

pub use fallback::*;
pub use validation::*;

/// Error handler configuration shared by every adapter
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HandlerConfig {
    /// How schema-validation failures are tagged
    #[serde(default)]
    pub validation: ValidationConfig,
    /// What unrecognized errors turn into
    #[serde(default)]
    pub fallback: FallbackConfig,
}
