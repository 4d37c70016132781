use crate::domain::model::{Money, ValidationPolicy, DEFAULT_COST, DEFAULT_TITLE};
use crate::domain::ports::SettingsProvider;
use crate::utils::error::{Result, ShippingError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Shipping method settings loaded from a TOML file. Every section and field
/// is optional; accessors fall back to the built-in defaults, so an empty
/// file is a valid configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub method: Option<MethodConfig>,
    pub rate: Option<RateConfig>,
    pub validation: Option<ValidationConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MethodConfig {
    pub enabled: Option<bool>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateConfig {
    pub cost: Option<Money>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationConfig {
    pub policy: Option<ValidationPolicy>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ShippingError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ShippingError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    // Replaces ${VAR_NAME} placeholders with environment values; unknown
    // variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        crate::utils::validation::validate_non_empty_string("method.title", self.title())?;
        crate::utils::validation::validate_range("rate.cost", self.cost().major(), 0.0, 100_000.0)?;
        Ok(())
    }
}

impl SettingsProvider for TomlConfig {
    fn enabled(&self) -> bool {
        self.method.as_ref().and_then(|m| m.enabled).unwrap_or(true)
    }

    fn title(&self) -> &str {
        self.method
            .as_ref()
            .and_then(|m| m.title.as_deref())
            .unwrap_or(DEFAULT_TITLE)
    }

    fn cost(&self) -> Money {
        self.rate.as_ref().and_then(|r| r.cost).unwrap_or(DEFAULT_COST)
    }

    fn validation_policy(&self) -> ValidationPolicy {
        self.validation
            .as_ref()
            .and_then(|v| v.policy)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.enabled());
        assert_eq!(config.title(), "Custom Shipping");
        assert_eq!(config.cost(), Money::from_cents(1000));
        assert_eq!(config.validation_policy(), ValidationPolicy::Strict);
        assert!(config.validate_config().is_ok());
    }

    #[test]
    fn test_full_config_parses() {
        let config = TomlConfig::from_toml_str(
            r#"
[method]
enabled = false
title = "Store Pickup"

[rate]
cost = 7.50

[validation]
policy = "permissive"
"#,
        )
        .unwrap();

        assert!(!config.enabled());
        assert_eq!(config.title(), "Store Pickup");
        assert_eq!(config.cost(), Money::from_cents(750));
        assert_eq!(config.validation_policy(), ValidationPolicy::Permissive);
    }

    #[test]
    fn test_invalid_policy_is_rejected() {
        let result = TomlConfig::from_toml_str("[validation]\npolicy = \"lenient\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_cost_is_rejected() {
        let result = TomlConfig::from_toml_str("[rate]\ncost = -3.0\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_title_fails_validation() {
        let config = TomlConfig::from_toml_str("[method]\ntitle = \"  \"\n").unwrap();
        assert!(config.validate_config().is_err());
    }
}
