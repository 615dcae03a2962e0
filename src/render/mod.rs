//! Terminal rendering of the calculator dashboard

mod chart;

pub use chart::{render_chart, render_sparkline};

use crate::calculator::{CostCalculator, SavingsSeries};
use crate::core::{GeneralConfig, Period, Tariff};
use crate::i18n::I18n;
use comfy_table::{modifiers, presets, Attribute, Cell, CellAlignment, Color, Table};

/// Renders calculator state with the display locale
pub struct Renderer<'a> {
    i18n: &'a I18n,
    color: bool,
    chart_height: usize,
}

impl<'a> Renderer<'a> {
    pub fn new(i18n: &'a I18n, config: &GeneralConfig) -> Self {
        Self {
            i18n,
            color: config.color,
            chart_height: config.chart_height,
        }
    }

    fn new_table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL_CONDENSED)
            .apply_modifier(modifiers::UTF8_ROUND_CORNERS);
        if self.color {
            table.enforce_styling();
        } else {
            table.force_no_tty();
        }
        table
    }

    /// Full dashboard: devices, metrics, chart, prices and period selector
    pub fn dashboard(&self, calculator: &CostCalculator) -> String {
        [
            self.i18n.get("app.title"),
            format!(
                "{}\n{}",
                self.i18n.get("devices.title"),
                self.devices_table(calculator)
            ),
            self.metrics_table(calculator).to_string(),
            self.chart(calculator),
            self.prices_line(calculator),
            self.period_selector(calculator.period()),
        ]
        .join("\n\n")
    }

    /// One row per catalog device with its live quantity
    pub fn devices_table(&self, calculator: &CostCalculator) -> Table {
        let mut table = self.new_table();
        table.set_header(vec![
            self.i18n.get("devices.id"),
            self.i18n.get("devices.name"),
            format!(
                "{} ({})",
                self.i18n.get("devices.yearly_usage"),
                self.i18n.get("unit.kwh_per_year")
            ),
            format!(
                "{} ({})",
                self.i18n.get("devices.rated_power"),
                self.i18n.get("unit.watts")
            ),
            self.i18n.get("devices.quantity"),
        ]);

        for device in calculator.catalog().iter() {
            let quantity = calculator.quantity(&device.id);
            let rated_power = device
                .rated_power_watts
                .map_or_else(|| "-".to_string(), |watts| format!("{:.0}", watts));
            table.add_row(vec![
                Cell::new(&device.id).add_attribute(Attribute::Dim),
                Cell::new(&device.name),
                Cell::new(format!("{:.0}", device.yearly_usage_kwh))
                    .set_alignment(CellAlignment::Right),
                Cell::new(rated_power).set_alignment(CellAlignment::Right),
                Cell::new(format!("{} {}", quantity, self.i18n.get("devices.units")))
                    .set_alignment(CellAlignment::Right)
                    .fg(if quantity > 0 { Color::Green } else { Color::Reset }),
            ]);
        }
        table
    }

    /// Consumption, cost per tariff and savings for the current period
    pub fn metrics_table(&self, calculator: &CostCalculator) -> Table {
        let metrics = calculator.metrics();
        let symbol = calculator.pricing().currency_symbol();
        let period = self.i18n.period_label(calculator.period());
        let hourly = format!(
            "{} {}",
            format_usage(metrics.hourly_usage_kwh),
            self.i18n.get("unit.kwh_per_hour")
        );
        let in_period = format!(
            "{} {}",
            format_usage(metrics.period_usage_kwh),
            self.i18n.get("unit.kwh")
        );

        let mut table = self.new_table();
        table.set_header(vec![self.i18n.get("metrics.title"), String::new()]);
        table.add_row(vec![
            Cell::new(self.i18n.get("metrics.total_usage")),
            Cell::new(hourly).set_alignment(CellAlignment::Right),
        ]);
        table.add_row(vec![
            Cell::new(format!("{} ({})", self.i18n.get("metrics.period_usage"), period)),
            Cell::new(in_period).set_alignment(CellAlignment::Right),
        ]);
        table.add_row(vec![
            Cell::new(self.i18n.get("metrics.renewable_cost")),
            Cell::new(format_money(metrics.renewable_cost, symbol))
                .set_alignment(CellAlignment::Right),
        ]);
        table.add_row(vec![
            Cell::new(self.i18n.get("metrics.fossil_cost")),
            Cell::new(format_money(metrics.fossil_cost, symbol))
                .set_alignment(CellAlignment::Right),
        ]);
        table.add_row(vec![
            Cell::new(format!("{} ({})", self.i18n.get("metrics.savings"), period))
                .add_attribute(Attribute::Bold),
            Cell::new(format_money(metrics.savings, symbol))
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Bold)
                .fg(if metrics.savings >= 0.0 { Color::Green } else { Color::Red }),
        ]);
        table
    }

    /// Trend chart over the savings window
    pub fn chart(&self, calculator: &CostCalculator) -> String {
        let history = calculator.history();
        format!(
            "{} ({})  {}\n{}",
            self.i18n.get("chart.title"),
            calculator.pricing().currency_symbol(),
            render_sparkline(history.values()),
            render_chart(history.values(), &SavingsSeries::labels(), self.chart_height),
        )
    }

    pub fn prices_line(&self, calculator: &CostCalculator) -> String {
        let symbol = calculator.pricing().currency_symbol();
        let per_kwh = self.i18n.get("unit.per_kwh");
        format!(
            "{}: {}: {} {}{} | {}: {} {}{}",
            self.i18n.get("prices.title"),
            self.i18n.get("prices.renewable"),
            calculator.pricing().rate(Tariff::Renewable),
            symbol,
            per_kwh,
            self.i18n.get("prices.fossil"),
            calculator.pricing().rate(Tariff::Fossil),
            symbol,
            per_kwh,
        )
    }

    /// Period buttons, the active one in brackets
    pub fn period_selector(&self, active: Period) -> String {
        let buttons: Vec<String> = Period::ALL
            .iter()
            .map(|&period| {
                let label = self.i18n.period_label(period);
                if period == active {
                    format!("[{}]", label)
                } else {
                    format!(" {} ", label)
                }
            })
            .collect();
        format!("{}: {}", self.i18n.get("period.title"), buttons.join(" "))
    }

    /// Preset list, marking presets whose price is currently in effect
    pub fn presets_table(&self, calculator: &CostCalculator) -> Table {
        let pricing = calculator.pricing();
        let mut table = self.new_table();
        table.set_header(vec![
            self.i18n.get("presets.id"),
            self.i18n.get("presets.tariff"),
            format!(
                "{} ({}{})",
                self.i18n.get("presets.rate"),
                pricing.currency_symbol(),
                self.i18n.get("unit.per_kwh")
            ),
            String::new(),
        ]);

        for preset in pricing.presets() {
            let active = pricing.rate(preset.tariff) == preset.rate_per_kwh;
            let tariff = match preset.tariff {
                Tariff::Renewable => self.i18n.get("prices.renewable"),
                Tariff::Fossil => self.i18n.get("prices.fossil"),
            };
            let marker = if active {
                self.i18n.get("presets.active")
            } else {
                String::new()
            };
            table.add_row(vec![
                Cell::new(&preset.id),
                Cell::new(tariff),
                Cell::new(preset.rate_per_kwh).set_alignment(CellAlignment::Right),
                Cell::new(marker).fg(Color::Green),
            ]);
        }
        table
    }

    pub fn help(&self) -> String {
        let mut lines = vec![format!("{}:", self.i18n.get("help.title"))];
        let commands = [
            "add", "remove", "period", "preset", "reset", "show", "devices", "presets", "quit",
        ];
        for key in commands {
            lines.push(format!("  {}", self.i18n.get(&format!("help.{}", key))));
        }
        lines.join("\n")
    }
}

/// Money with two decimals and the currency symbol
pub fn format_money(value: f64, symbol: &str) -> String {
    format!("{:.2} {}", value, symbol)
}

/// Energy with three decimals
pub fn format_usage(kwh: f64) -> String {
    format!("{:.3}", kwh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DeviceId;

    fn plain() -> GeneralConfig {
        GeneralConfig {
            color: false,
            chart_height: 4,
        }
    }

    #[test]
    fn test_format() {
        assert_eq!(format_money(2.0137, "\u{20AC}"), "2.01 \u{20AC}");
        assert_eq!(format_money(-0.5, "$"), "-0.50 $");
        assert_eq!(format_usage(70.0 / 8760.0), "0.008");
    }

    #[test]
    fn test_dashboard_mentions_costs() {
        let i18n = I18n::new();
        let renderer = Renderer::new(&i18n, &plain());
        let mut calculator = CostCalculator::default();
        calculator.increment(&DeviceId::new("fridge"));

        let dashboard = renderer.dashboard(&calculator);
        assert!(dashboard.contains("5.41 \u{20AC}"));
        assert!(dashboard.contains("7.42 \u{20AC}"));
        assert!(dashboard.contains("2.01 \u{20AC}"));
        assert!(dashboard.contains("1 Ger\u{00E4}te"));
        assert!(dashboard.contains("[1 Monat]"));
        assert!(dashboard.contains("W\u{00E4}hlen Sie Ger\u{00E4}te\n"));
        assert!(!dashboard.contains('\u{1b}'));
    }

    #[test]
    fn test_period_selector_highlights_active() {
        let i18n = I18n::new();
        let renderer = Renderer::new(&i18n, &plain());

        let selector = renderer.period_selector(Period::Year);
        assert!(selector.contains("[1 Jahr]"));
        assert!(selector.contains(" 1 Monat "));
        assert!(selector.contains(" 10 Jahre "));
    }

    #[test]
    fn test_presets_table_marks_active() {
        let i18n = I18n::new();
        let renderer = Renderer::new(&i18n, &plain());
        let calculator = CostCalculator::default();

        let table = renderer.presets_table(&calculator).to_string();
        let active_rows = table.lines().filter(|line| line.contains("aktiv")).count();
        assert_eq!(active_rows, 2);
    }

    #[test]
    fn test_help_lists_commands() {
        let i18n = I18n::new();
        let help = Renderer::new(&i18n, &plain()).help();
        assert_eq!(help.lines().count(), 10);
        assert!(help.contains("preset <vorgabe>"));
    }
}
