//! Cost calculator state
//!
//! `CostCalculator` owns the selection, tariff prices, period and the
//! savings window. Every mutation that changes state triggers one
//! recomputation of the metrics, and the new savings value is pushed into
//! the window. Mutations that change nothing (decrementing an absent device,
//! re-applying the current price, re-selecting the current period) do not
//! recompute.

mod derive;
mod selection;
mod series;

pub use derive::derive_metrics;
pub use selection::Selection;
pub use series::{SavingsSeries, SAVINGS_WINDOW};

use crate::catalog::Catalog;
use crate::core::{
    Config, DashboardData, DeviceId, Metrics, Period, Result, SelectedDevice, TariffRates,
};
use crate::pricing::PricingEngine;

pub struct CostCalculator {
    catalog: Catalog,
    pricing: PricingEngine,
    initial_pricing: PricingEngine,
    default_period: Period,
    selection: Selection,
    period: Period,
    metrics: Metrics,
    history: SavingsSeries,
}

impl CostCalculator {
    pub fn new(catalog: Catalog, pricing: PricingEngine, period: Period) -> Self {
        let selection = Selection::new();
        let metrics = derive_metrics(&selection, &catalog, pricing.rates(), period);
        Self {
            catalog,
            initial_pricing: pricing.clone(),
            pricing,
            default_period: period,
            selection,
            period,
            metrics,
            history: SavingsSeries::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Catalog::from_config(&config.catalog),
            PricingEngine::new(&config.pricing),
            config.calculator.default_period,
        )
    }

    /// Add one unit of a device and return its new quantity.
    /// Ids missing from the catalog are ignored and report zero.
    pub fn increment(&mut self, id: &DeviceId) -> u32 {
        if self.catalog.get(id).is_none() {
            log::warn!("Ignoring unknown device {}", id);
            return 0;
        }
        let quantity = self.selection.increment(id);
        log::debug!("{} -> {}", id, quantity);
        self.recompute();
        quantity
    }

    /// Remove one unit of a device if any is selected, returning the quantity left
    pub fn decrement(&mut self, id: &DeviceId) -> u32 {
        match self.selection.decrement(id) {
            Some(quantity) => {
                log::debug!("{} -> {}", id, quantity);
                self.recompute();
                quantity
            }
            None => {
                log::debug!("{} already at zero", id);
                0
            }
        }
    }

    /// Apply a tariff preset. Returns whether a price changed.
    pub fn apply_preset(&mut self, id: &str) -> Result<bool> {
        let changed = self.pricing.apply_preset(id)?;
        if changed {
            self.recompute();
        }
        Ok(changed)
    }

    /// Select the evaluation period. Returns whether it changed.
    pub fn set_period(&mut self, period: Period) -> bool {
        if period == self.period {
            return false;
        }
        log::debug!("Period {} -> {}", self.period, period);
        self.period = period;
        self.recompute();
        true
    }

    /// Start over: empty selection, initial prices and period, zeroed history
    pub fn reset(&mut self) {
        self.selection.clear();
        self.pricing = self.initial_pricing.clone();
        self.period = self.default_period;
        self.history.reset();
        self.metrics = self.derive();
        log::debug!("Calculator reset");
    }

    fn derive(&self) -> Metrics {
        derive_metrics(&self.selection, &self.catalog, self.pricing.rates(), self.period)
    }

    fn recompute(&mut self) {
        self.metrics = self.derive();
        self.history.push(self.metrics.savings);
        log::debug!(
            "Recomputed: usage {:.6} kWh/h, savings {:.2}",
            self.metrics.hourly_usage_kwh,
            self.metrics.savings
        );
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn pricing(&self) -> &PricingEngine {
        &self.pricing
    }

    pub fn rates(&self) -> TariffRates {
        self.pricing.rates()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn quantity(&self, id: &DeviceId) -> u32 {
        self.selection.quantity(id)
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    pub fn history(&self) -> &SavingsSeries {
        &self.history
    }

    /// Snapshot of the current state for rendering or export
    pub fn dashboard(&self) -> DashboardData {
        let devices = self
            .catalog
            .iter()
            .filter_map(|device| {
                let quantity = self.selection.quantity(&device.id);
                (quantity > 0).then(|| SelectedDevice {
                    id: device.id.clone(),
                    name: device.name.clone(),
                    quantity,
                    yearly_usage_kwh: device.yearly_usage_kwh,
                })
            })
            .collect();

        DashboardData {
            period: self.period,
            hours: self.period.hours(),
            rates: self.pricing.rates(),
            currency: self.pricing.currency().to_string(),
            currency_symbol: self.pricing.currency_symbol().to_string(),
            devices,
            metrics: self.metrics,
            savings_history: self.history.values().to_vec(),
            generated_at: chrono::Utc::now().timestamp(),
        }
    }
}

impl Default for CostCalculator {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
