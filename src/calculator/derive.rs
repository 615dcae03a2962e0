//! Consumption and cost derivation
//!
//! Consumption is the average hourly draw derived from each device's yearly
//! usage (`yearly_usage_kwh / 8760 × quantity`). Rated power is not used here.

use crate::calculator::Selection;
use crate::catalog::Catalog;
use crate::core::{Metrics, Period, TariffRates};

/// Compute usage, cost per tariff and savings for a selection
pub fn derive_metrics(
    selection: &Selection,
    catalog: &Catalog,
    rates: TariffRates,
    period: Period,
) -> Metrics {
    let hourly_usage_kwh: f64 = selection
        .iter()
        .filter_map(|(id, quantity)| {
            catalog
                .get(id)
                .map(|device| device.hourly_usage_kwh() * f64::from(quantity))
        })
        .sum();

    let period_usage_kwh = hourly_usage_kwh * period.hours();
    let renewable_cost = period_usage_kwh * rates.renewable;
    let fossil_cost = period_usage_kwh * rates.fossil;

    Metrics {
        hourly_usage_kwh,
        period_usage_kwh,
        renewable_cost,
        fossil_cost,
        savings: fossil_cost - renewable_cost,
    }
}
