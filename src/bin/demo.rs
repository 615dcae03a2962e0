//! PowerCost Calculator - Demo CLI
//!
//! Walks through a scripted session: one fridge for a month, a switch to a
//! yearly view, price presets, and the savings window filling up.

use powercost_calculator_lib::calculator::CostCalculator;
use powercost_calculator_lib::core::{Config, DeviceId, Period, Tariff};
use powercost_calculator_lib::i18n::I18n;
use powercost_calculator_lib::render::{format_money, format_usage, Renderer};

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("==============================================");
    println!("   PowerCost Calculator - Demo");
    println!("==============================================\n");

    let config = Config::default();
    let i18n = I18n::new();
    let renderer = Renderer::new(&i18n, &config.general);
    let mut calculator = CostCalculator::from_config(&config);
    let symbol = calculator.pricing().currency_symbol().to_string();

    // 1. Prices
    println!("[1/5] Initial prices");
    println!(
        "      Renewable: {:.2} {}/kWh, Fossil: {:.2} {}/kWh\n",
        calculator.rates().get(Tariff::Renewable),
        symbol,
        calculator.rates().get(Tariff::Fossil),
        symbol
    );

    // 2. One fridge for a month
    println!("[2/5] Adding one fridge (70 kWh/year), period: month");
    calculator.increment(&DeviceId::new("fridge"));
    print_metrics(&calculator, &symbol);

    // 3. Yearly view
    println!("[3/5] Switching to a yearly period");
    calculator.set_period(Period::Year);
    print_metrics(&calculator, &symbol);

    // 4. More devices
    println!("[4/5] Adding a TV, a laptop and a kettle");
    for id in ["tv", "laptop", "kettle"] {
        calculator.increment(&DeviceId::new(id));
    }
    print_metrics(&calculator, &symbol);

    // 5. Cheap fossil preset
    println!("[5/5] Applying the fossil-low preset");
    match calculator.apply_preset("fossil-low") {
        Ok(_) => print_metrics(&calculator, &symbol),
        Err(e) => println!("      Could not apply preset: {}\n", e),
    }

    println!("=== Savings window (oldest first) ===\n");
    for (index, value) in calculator.history().values().iter().enumerate() {
        println!("  {}: {}", index, format_money(*value, &symbol));
    }
    println!();

    println!("{}", renderer.dashboard(&calculator));
}

fn print_metrics(calculator: &CostCalculator, symbol: &str) {
    let metrics = calculator.metrics();
    println!("      Hourly usage:   {} kWh", format_usage(metrics.hourly_usage_kwh));
    println!("      Renewable cost: {}", format_money(metrics.renewable_cost, symbol));
    println!("      Fossil cost:    {}", format_money(metrics.fossil_cost, symbol));
    println!("      Savings:        {}\n", format_money(metrics.savings, symbol));
}
