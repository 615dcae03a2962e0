//! Pricing engine for electricity cost calculation
//!
//! Holds the renewable and fossil price per kWh. Prices only change through
//! the fixed presets from the configuration.

use crate::core::{Error, PricingConfig, Result, Tariff, TariffPreset, TariffRates};

/// Pricing engine that calculates electricity costs for both tariffs
#[derive(Debug, Clone)]
pub struct PricingEngine {
    rates: TariffRates,
    presets: Vec<TariffPreset>,
    currency: String,
    currency_symbol: String,
}

impl PricingEngine {
    /// Create a new pricing engine with the given configuration
    pub fn new(config: &PricingConfig) -> Self {
        Self {
            rates: TariffRates {
                renewable: config.renewable_rate,
                fossil: config.fossil_rate,
            },
            presets: config.presets.clone(),
            currency: config.currency.clone(),
            currency_symbol: config.currency_symbol.clone(),
        }
    }

    pub fn rates(&self) -> TariffRates {
        self.rates
    }

    /// Get the rate per kWh for a tariff
    pub fn rate(&self, tariff: Tariff) -> f64 {
        self.rates.get(tariff)
    }

    /// Apply a preset by id (case-insensitive).
    /// Returns whether the rate actually changed.
    pub fn apply_preset(&mut self, id: &str) -> Result<bool> {
        let preset = self.find_preset(id)?.clone();
        let previous = self.rates.get(preset.tariff);
        if previous == preset.rate_per_kwh {
            return Ok(false);
        }

        self.rates.set(preset.tariff, preset.rate_per_kwh);
        log::debug!(
            "Preset {} set {} rate {} -> {}",
            preset.id,
            preset.tariff,
            previous,
            preset.rate_per_kwh
        );
        Ok(true)
    }

    pub fn find_preset(&self, id: &str) -> Result<&TariffPreset> {
        let wanted = id.trim();
        self.presets
            .iter()
            .find(|preset| preset.id.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownPreset(wanted.to_string()))
    }

    pub fn presets(&self) -> &[TariffPreset] {
        &self.presets
    }

    /// Get the currency code
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Get the currency symbol
    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }
}
