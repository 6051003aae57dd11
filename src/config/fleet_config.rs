use crate::domain::model::BicycleSeed;
use crate::utils::error::{HireError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_price, validate_unique_ids, Validate,
};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_CURRENCY: &str = "KES";

/// 車隊設定，可由 TOML 檔載入：
///
/// ```toml
/// currency = "KES"
///
/// [[bicycles]]
/// id = "B001"
/// price_per_hour = 100.0
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FleetConfig {
    pub currency: Option<String>,
    #[serde(default)]
    pub bicycles: Vec<BicycleSeed>,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            currency: Some(DEFAULT_CURRENCY.to_string()),
            bicycles: vec![
                BicycleSeed::new("B001", 100.0),
                BicycleSeed::new("B002", 150.0),
                BicycleSeed::new("B003", 120.0),
                BicycleSeed::new("B004", 200.0),
            ],
        }
    }
}

impl FleetConfig {
    /// 從 TOML 檔案載入車隊
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading fleet from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| HireError::ConfigError {
            message: format!("cannot read fleet file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn currency(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }

    pub fn validate_config(&self) -> Result<()> {
        if self.bicycles.is_empty() {
            return Err(HireError::ConfigError {
                message: "fleet must contain at least one bicycle".to_string(),
            });
        }

        if let Some(currency) = &self.currency {
            validate_non_empty_string("currency", currency)?;
        }

        for seed in &self.bicycles {
            validate_non_empty_string("bicycles.id", &seed.id)?;
            validate_positive_price("bicycles.price_per_hour", seed.price_per_hour)?;
        }

        validate_unique_ids("bicycles.id", self.bicycles.iter().map(|s| s.id.as_str()))
    }
}

impl Validate for FleetConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_fleet() {
        let config = FleetConfig::default();

        assert_eq!(config.currency(), "KES");
        assert_eq!(config.bicycles.len(), 4);
        assert_eq!(config.bicycles[0], BicycleSeed::new("B001", 100.0));
        assert_eq!(config.bicycles[3], BicycleSeed::new("B004", 200.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_fleet_toml() {
        let toml_content = r#"
currency = "EUR"

[[bicycles]]
id = "city-1"
price_per_hour = 4.5

[[bicycles]]
id = "city-2"
price_per_hour = 6.0
"#;

        let config = FleetConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.currency(), "EUR");
        assert_eq!(config.bicycles.len(), 2);
        assert_eq!(config.bicycles[1].id, "city-2");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_currency_defaults_when_missing() {
        let toml_content = r#"
[[bicycles]]
id = "B001"
price_per_hour = 100.0
"#;

        let config = FleetConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.currency(), DEFAULT_CURRENCY);
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let err = FleetConfig::from_toml_str("[[bicycles]\nid = ").unwrap_err();
        assert!(matches!(err, HireError::TomlError(_)));
    }

    #[test]
    fn test_config_validation() {
        let empty = FleetConfig::from_toml_str("currency = \"KES\"").unwrap();
        assert!(matches!(empty.validate(), Err(HireError::ConfigError { .. })));

        let zero_price = FleetConfig {
            currency: None,
            bicycles: vec![BicycleSeed::new("B001", 0.0)],
        };
        assert!(zero_price.validate().is_err());

        let duplicate = FleetConfig {
            currency: None,
            bicycles: vec![
                BicycleSeed::new("B001", 100.0),
                BicycleSeed::new("B001", 120.0),
            ],
        };
        assert!(matches!(
            duplicate.validate(),
            Err(HireError::InvalidConfigValueError { .. })
        ));

        let blank_currency = FleetConfig {
            currency: Some(" ".to_string()),
            bicycles: vec![BicycleSeed::new("B001", 100.0)],
        };
        assert!(blank_currency.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[[bicycles]]\nid = \"B010\"\nprice_per_hour = 90.0\n")
            .unwrap();

        let config = FleetConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.bicycles, vec![BicycleSeed::new("B010", 90.0)]);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = FleetConfig::from_file("/definitely/not/here/fleet.toml").unwrap_err();
        assert!(matches!(err, HireError::ConfigError { .. }));
    }
}
