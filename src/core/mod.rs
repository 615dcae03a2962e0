//! Core module - Configuration, errors, and common types

mod config;
mod error;
mod types;

pub use config::{CalculatorConfig, CatalogConfig, Config, GeneralConfig, PricingConfig};
pub use error::{Error, Result};
pub use types::{
    DashboardData, DeviceId, DeviceSpec, Metrics, Period, SelectedDevice, Tariff, TariffPreset,
    TariffRates, HOURS_PER_YEAR,
};
