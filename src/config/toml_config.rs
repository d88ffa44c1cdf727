use crate::core::colors::ColorNames;
use crate::utils::error::{CardError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Presentation settings for derived card text, read from TOML:
///
/// ```toml
/// [colors]
/// white = "White"
/// blue = "Blue"
/// all = "every color"
/// ```
///
/// Keys left out keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub colors: ColorNames,
}

impl DisplayConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CardError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CardError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<()> {
        let colors = &self.colors;
        validate_non_empty_string("colors.white", &colors.white)?;
        validate_non_empty_string("colors.blue", &colors.blue)?;
        validate_non_empty_string("colors.black", &colors.black)?;
        validate_non_empty_string("colors.red", &colors.red)?;
        validate_non_empty_string("colors.green", &colors.green)?;
        validate_non_empty_string("colors.all", &colors.all)?;
        Ok(())
    }
}
