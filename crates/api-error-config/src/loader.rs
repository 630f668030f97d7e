use std::path::Path;

use crate::HandlerConfig;

impl HandlerConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, TOML parsing fails, or
    /// validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml(&raw)
    }

    /// Parse and validate configuration from a TOML string
    ///
    /// # Errors
    ///
    /// Returns an error if TOML parsing or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(raw).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is usable
    ///
    /// # Errors
    ///
    /// Returns an error if the fallback message is blank
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.fallback.message.trim().is_empty() {
            anyhow::bail!("fallback.message must not be empty");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use api_error_core::ValidationType;

    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = HandlerConfig::from_toml("").unwrap();

        assert_eq!(config, HandlerConfig::default());
        assert_eq!(config.validation.kind, ValidationType::User);
        assert_eq!(config.fallback.message, "An unexpected error occurred");
        assert!(!config.fallback.expose_error_message);
    }

    #[test]
    fn deserialize_full_config() {
        let toml = r#"
            [validation]
            kind = "VALIDATION"

            [fallback]
            message = "Something broke"
            expose_error_message = true
        "#;

        let config = HandlerConfig::from_toml(toml).unwrap();
        assert_eq!(config.validation.kind, ValidationType::Validation);
        assert_eq!(config.fallback.message, "Something broke");
        assert!(config.fallback.expose_error_message);
    }

    #[test]
    fn rejects_unknown_validation_tag() {
        let toml = r#"
            [validation]
            kind = "VALIDATION_INVOICE"
        "#;

        assert!(HandlerConfig::from_toml(toml).is_err());
    }

    #[test]
    fn rejects_unknown_fields() {
        let toml = r#"
            [fallback]
            msg = "typo"
        "#;

        assert!(HandlerConfig::from_toml(toml).is_err());
    }

    #[test]
    fn rejects_blank_fallback_message() {
        let toml = r#"
            [fallback]
            message = "   "
        "#;

        let error = HandlerConfig::from_toml(toml).unwrap_err();
        assert!(error.to_string().contains("fallback.message"));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[validation]\nkind = \"VALIDATION_EMAIL\"").unwrap();

        let config = HandlerConfig::load(file.path()).unwrap();
        assert_eq!(config.validation.kind, ValidationType::Email);
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let error = HandlerConfig::load(&dir.path().join("missing.toml")).unwrap_err();

        assert!(error.to_string().contains("failed to read config file"));
    }
}
