use api_error_core::ValidationType;
use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

/// Tagging of schema-validation failures caught by the adapters
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidationConfig {
    /// Validation domain reported for failures, as its wire tag (e.g. `VALIDATION_USER`)
    #[serde_as(as = "DisplayFromStr")]
    #[serde(default = "default_kind")]
    pub kind: ValidationType,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self { kind: default_kind() }
    }
}

const fn default_kind() -> ValidationType {
    ValidationType::User
}
