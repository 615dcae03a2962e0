//! Configuration management

use crate::core::{DeviceId, DeviceSpec, Error, Period, Result, Tariff, TariffPreset};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub calculator: CalculatorConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Config {
    /// Get the default configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("powercost-calculator").join("config.toml"))
    }

    /// Load configuration from the given file, falling back to defaults when it does not exist.
    /// Loading never writes to disk.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a TOML document
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the given file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Check rates, presets and catalog entries
    pub fn validate(&self) -> Result<()> {
        if self.general.chart_height < 2 {
            return Err(Error::Config("general.chart_height must be at least 2".to_string()));
        }

        check_rate("pricing.renewable_rate", self.pricing.renewable_rate)?;
        check_rate("pricing.fossil_rate", self.pricing.fossil_rate)?;

        let mut preset_ids = HashSet::new();
        for preset in &self.pricing.presets {
            if preset.id.trim().is_empty() {
                return Err(Error::Config("Preset id must not be empty".to_string()));
            }
            if !preset_ids.insert(preset.id.to_ascii_lowercase()) {
                return Err(Error::Config(format!("Duplicate preset id: {}", preset.id)));
            }
            check_rate(&format!("preset {}", preset.id), preset.rate_per_kwh)?;
        }

        let mut device_ids = HashSet::new();
        for device in &self.catalog.devices {
            let id = device.id.as_str();
            if id.trim().is_empty() {
                return Err(Error::Config("Device id must not be empty".to_string()));
            }
            if !device_ids.insert(DeviceId::match_key(id)) {
                return Err(Error::Config(format!("Duplicate device id: {}", id)));
            }
            if !device.yearly_usage_kwh.is_finite() || device.yearly_usage_kwh < 0.0 {
                return Err(Error::Config(format!("Invalid yearly usage for {}", id)));
            }
            if let Some(watts) = device.rated_power_watts {
                if !watts.is_finite() || watts < 0.0 {
                    return Err(Error::Config(format!("Invalid rated power for {}", id)));
                }
            }
        }

        Ok(())
    }
}

fn check_rate(name: &str, rate: f64) -> Result<()> {
    if rate.is_finite() && rate >= 0.0 {
        Ok(())
    } else {
        Err(Error::Config(format!("{} must be a non-negative number", name)))
    }
}

/// General display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Colored table output
    #[serde(default = "default_true")]
    pub color: bool,
    /// Height of the trend chart in rows
    #[serde(default = "default_chart_height")]
    pub chart_height: usize,
}

fn default_true() -> bool { true }
fn default_chart_height() -> usize { 8 }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            color: true,
            chart_height: default_chart_height(),
        }
    }
}

/// Pricing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Currency code (EUR, USD, GBP, etc.)
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Currency symbol
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Initial renewable price per kWh
    #[serde(default = "default_renewable_rate")]
    pub renewable_rate: f64,
    /// Initial fossil price per kWh
    #[serde(default = "default_fossil_rate")]
    pub fossil_rate: f64,
    /// Fixed price presets, the only way to change a rate at runtime
    #[serde(default = "default_presets")]
    pub presets: Vec<TariffPreset>,
}

fn default_currency() -> String { "EUR".to_string() }
fn default_currency_symbol() -> String { "\u{20AC}".to_string() } // Euro sign
fn default_renewable_rate() -> f64 { 0.94 }
fn default_fossil_rate() -> f64 { 1.29 }

fn default_presets() -> Vec<TariffPreset> {
    vec![
        TariffPreset::new("renewable", Tariff::Renewable, default_renewable_rate()),
        TariffPreset::new("fossil", Tariff::Fossil, default_fossil_rate()),
        TariffPreset::new("renewable-low", Tariff::Renewable, 0.06),
        TariffPreset::new("fossil-low", Tariff::Fossil, 0.10),
    ]
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            currency_symbol: default_currency_symbol(),
            renewable_rate: default_renewable_rate(),
            fossil_rate: default_fossil_rate(),
            presets: default_presets(),
        }
    }
}

/// Calculator settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Period selected at start and after a reset
    #[serde(default)]
    pub default_period: Period,
}

/// Device catalog override
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// When non-empty, replaces the built-in device list
    #[serde(default)]
    pub devices: Vec<DeviceSpec>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.pricing.renewable_rate, 0.94);
        assert_eq!(config.pricing.fossil_rate, 1.29);
        assert_eq!(config.pricing.presets.len(), 4);
        assert_eq!(config.calculator.default_period, Period::Month);
        assert_eq!(config.general.chart_height, 8);
        assert!(config.catalog.devices.is_empty());
    }

    #[test]
    fn test_partial_document() {
        let config = Config::parse(
            r#"
            [pricing]
            fossil_rate = 0.10

            [calculator]
            default_period = "10years"

            [[catalog.devices]]
            id = "pump"
            name = "Pumpe"
            yearly_usage_kwh = 120.0
            "#,
        )
        .unwrap();

        assert_eq!(config.pricing.fossil_rate, 0.10);
        assert_eq!(config.pricing.renewable_rate, 0.94);
        assert_eq!(config.calculator.default_period, Period::Decade);
        assert_eq!(config.catalog.devices.len(), 1);
        assert_eq!(config.catalog.devices[0].rated_power_watts, None);
    }

    #[test]
    fn test_rejects_negative_rate() {
        let result = Config::parse("[pricing]\nrenewable_rate = -1.0\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_rejects_duplicate_devices() {
        let result = Config::parse(
            r#"
            [[catalog.devices]]
            id = "tv"
            name = "Fernseher"
            yearly_usage_kwh = 100.0

            [[catalog.devices]]
            id = "TV"
            name = "Zweitfernseher"
            yearly_usage_kwh = 80.0
            "#,
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_rejects_ids_that_resolve_alike() {
        let result = Config::parse(
            r#"
            [[catalog.devices]]
            id = "heat-pump"
            name = "Heizung"
            yearly_usage_kwh = 4380.0

            [[catalog.devices]]
            id = "heat_pump"
            name = "Zweite Heizung"
            yearly_usage_kwh = 2000.0
            "#,
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_rejects_duplicate_presets() {
        let result = Config::parse(
            r#"
            [[pricing.presets]]
            id = "green"
            tariff = "renewable"
            rate_per_kwh = 0.3

            [[pricing.presets]]
            id = "green"
            tariff = "fossil"
            rate_per_kwh = 0.4
            "#,
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = std::env::temp_dir().join(format!("powercost-config-{}", std::process::id()));
        let path = dir.join("config.toml");

        let mut config = Config::default();
        config.pricing.renewable_rate = 0.5;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.pricing.renewable_rate, 0.5);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_is_not_created() {
        let path = std::env::temp_dir().join("powercost-missing").join("config.toml");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.pricing.fossil_rate, 1.29);
        assert!(!path.exists());
    }
}
