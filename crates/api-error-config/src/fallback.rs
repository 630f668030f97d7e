use api_error_core::UNEXPECTED_ERROR_MESSAGE;
use serde::Deserialize;

/// Response policy for errors no adapter recognizes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FallbackConfig {
    /// Message sent with the generic 500 body
    #[serde(default = "default_message")]
    pub message: String,
    /// Send the caught error's own message instead of `message`
    #[serde(default)]
    pub expose_error_message: bool,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            message: default_message(),
            expose_error_message: false,
        }
    }
}

fn default_message() -> String {
    UNEXPECTED_ERROR_MESSAGE.to_string()
}
