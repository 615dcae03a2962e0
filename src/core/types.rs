//! Common types used across the application

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hours in a (non-leap) year, used to turn yearly consumption into an hourly average
pub const HOURS_PER_YEAR: f64 = 8760.0;

/// Identifier of a catalog device (e.g. "fridge")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key two ids or user inputs are compared by: case-insensitive, `-` same as `_`
    pub fn match_key(input: &str) -> String {
        input.trim().to_ascii_lowercase().replace('-', "_")
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A household device in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceSpec {
    pub id: DeviceId,
    /// Display name
    pub name: String,
    /// Nameplate power in watts, informational only
    #[serde(default)]
    pub rated_power_watts: Option<f64>,
    /// Average consumption per year in kWh
    pub yearly_usage_kwh: f64,
}

impl DeviceSpec {
    pub fn new(
        id: &str,
        name: &str,
        rated_power_watts: Option<f64>,
        yearly_usage_kwh: f64,
    ) -> Self {
        Self {
            id: DeviceId::new(id),
            name: name.to_string(),
            rated_power_watts,
            yearly_usage_kwh,
        }
    }

    /// Average draw in kWh per hour derived from the yearly figure
    pub fn hourly_usage_kwh(&self) -> f64 {
        self.yearly_usage_kwh / HOURS_PER_YEAR
    }
}

/// Energy source a price applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tariff {
    Renewable,
    Fossil,
}

impl fmt::Display for Tariff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tariff::Renewable => f.write_str("renewable"),
            Tariff::Fossil => f.write_str("fossil"),
        }
    }
}

/// Evaluation window for the cost figures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Month,
    Year,
    #[serde(alias = "10years")]
    Decade,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Month, Period::Year, Period::Decade];

    /// Number of hours in the window (30 days, 365 days, 10 × 365 days)
    pub fn hours(self) -> f64 {
        match self {
            Period::Month => 720.0,
            Period::Year => 8760.0,
            Period::Decade => 87600.0,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Period::Month => "month",
            Period::Year => "year",
            Period::Decade => "decade",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "month" => Ok(Period::Month),
            "year" => Ok(Period::Year),
            "decade" | "10years" => Ok(Period::Decade),
            other => Err(Error::UnknownPeriod(other.to_string())),
        }
    }
}

/// A fixed action that sets one tariff to one price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TariffPreset {
    pub id: String,
    pub tariff: Tariff,
    pub rate_per_kwh: f64,
}

impl TariffPreset {
    pub fn new(id: &str, tariff: Tariff, rate_per_kwh: f64) -> Self {
        Self {
            id: id.to_string(),
            tariff,
            rate_per_kwh,
        }
    }
}

/// Current price per kWh for both tariffs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TariffRates {
    pub renewable: f64,
    pub fossil: f64,
}

impl TariffRates {
    pub fn get(&self, tariff: Tariff) -> f64 {
        match tariff {
            Tariff::Renewable => self.renewable,
            Tariff::Fossil => self.fossil,
        }
    }

    pub fn set(&mut self, tariff: Tariff, rate_per_kwh: f64) {
        match tariff {
            Tariff::Renewable => self.renewable = rate_per_kwh,
            Tariff::Fossil => self.fossil = rate_per_kwh,
        }
    }
}

/// Derived consumption and cost figures
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Metrics {
    /// Average consumption of the selection in kWh per hour
    pub hourly_usage_kwh: f64,
    /// Consumption over the selected period in kWh
    pub period_usage_kwh: f64,
    pub renewable_cost: f64,
    pub fossil_cost: f64,
    /// Fossil cost minus renewable cost, negative when renewable is dearer
    pub savings: f64,
}

/// A selected device as shown in the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedDevice {
    pub id: DeviceId,
    pub name: String,
    pub quantity: u32,
    pub yearly_usage_kwh: f64,
}

/// Dashboard snapshot returned to the front end
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardData {
    pub period: Period,
    /// Hours in the selected period
    pub hours: f64,
    pub rates: TariffRates,
    pub currency: String,
    pub currency_symbol: String,
    pub devices: Vec<SelectedDevice>,
    pub metrics: Metrics,
    /// Last six savings values, oldest first
    pub savings_history: Vec<f64>,
    /// Unix timestamp of the snapshot
    pub generated_at: i64,
}
