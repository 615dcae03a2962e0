use powercost_calculator_lib::calculator::{CostCalculator, SAVINGS_WINDOW};
use powercost_calculator_lib::core::{Config, DeviceId, Error, Period, Tariff};
use powercost_calculator_lib::session::{Outcome, Session};

fn run(session: &mut Session, lines: &[&str]) -> Vec<Option<Outcome>> {
    lines
        .iter()
        .map(|line| session.handle_line(line).unwrap())
        .collect()
}

#[test]
fn test_fridge_month_then_year() {
    let mut session = Session::new(CostCalculator::default());
    run(&mut session, &["+ fridge"]);

    let month = session.calculator().metrics();
    assert!((month.renewable_cost - 5.41).abs() < 0.005);
    assert!((month.fossil_cost - 7.42).abs() < 0.005);
    assert!((month.savings - 2.01).abs() < 0.005);

    assert_eq!(session.handle_line("period year").unwrap(), Some(Outcome::Changed));
    let year = session.calculator().metrics();
    assert!((year.fossil_cost / month.fossil_cost - 8760.0 / 720.0).abs() < 1e-9);
    assert!((year.savings / month.savings - 8760.0 / 720.0).abs() < 1e-9);
}

#[test]
fn test_window_holds_last_six_savings() {
    let mut session = Session::new(CostCalculator::default());
    let mut expected = Vec::new();
    let script = [
        "+ fridge",
        "+ tv",
        "+ oven",
        "period year",
        "- tv",
        "+ kettle",
        "period decade",
        "preset fossil-low",
    ];
    for line in script {
        assert_eq!(session.handle_line(line).unwrap(), Some(Outcome::Changed));
        expected.push(session.calculator().metrics().savings);
    }

    let history = session.calculator().history().values();
    assert_eq!(history.len(), SAVINGS_WINDOW);
    assert_eq!(history[..], expected[expected.len() - SAVINGS_WINDOW..]);
}

#[test]
fn test_decrement_clamps_at_zero() {
    let mut session = Session::new(CostCalculator::default());
    let outcomes = run(&mut session, &["+ dryer", "+ dryer", "- dryer", "- dryer", "- dryer"]);

    assert_eq!(outcomes[4], Some(Outcome::Unchanged));
    assert_eq!(session.calculator().quantity(&DeviceId::new("dryer")), 0);
    assert_eq!(session.calculator().metrics().savings, 0.0);
}

#[test]
fn test_errors_leave_state_untouched() {
    let mut session = Session::new(CostCalculator::default());
    run(&mut session, &["+ laptop"]);
    let before = *session.calculator().history();

    assert!(matches!(session.handle_line("+ jacuzzi"), Err(Error::UnknownDevice(_))));
    assert!(matches!(session.handle_line("preset coal"), Err(Error::UnknownPreset(_))));
    assert!(matches!(session.handle_line("period week"), Err(Error::UnknownPeriod(_))));
    assert!(matches!(session.handle_line("jump"), Err(Error::InvalidCommand(_))));

    assert_eq!(session.calculator().history(), &before);
}

#[test]
fn test_reset_restores_config_defaults() {
    let config = Config::parse(
        r#"
        [pricing]
        renewable_rate = 0.06
        fossil_rate = 0.10

        [calculator]
        default_period = "year"
        "#,
    )
    .unwrap();
    let mut session = Session::new(CostCalculator::from_config(&config));
    run(&mut session, &["+ stove", "preset renewable", "period month", "reset"]);

    let calculator = session.calculator();
    assert!(calculator.selection().is_empty());
    assert_eq!(calculator.period(), Period::Year);
    assert_eq!(calculator.rates().get(Tariff::Renewable), 0.06);
    assert_eq!(calculator.history().values(), &[0.0; SAVINGS_WINDOW]);
}

#[test]
fn test_custom_catalog() {
    let config = Config::parse(
        r#"
        [[catalog.devices]]
        id = "heat_pump"
        name = "Wärmepumpe"
        rated_power_watts = 3000.0
        yearly_usage_kwh = 4380.0
        "#,
    )
    .unwrap();
    let mut session = Session::new(CostCalculator::from_config(&config));
    run(&mut session, &["+ heat-pump"]);

    // 4380 kWh per year is 0.5 kWh per hour
    let metrics = session.calculator().metrics();
    assert!((metrics.hourly_usage_kwh - 0.5).abs() < 1e-12);
    assert!((metrics.renewable_cost - 0.5 * 720.0 * 0.94).abs() < 1e-9);
    assert!(matches!(session.handle_line("+ fridge"), Err(Error::UnknownDevice(_))));
}

#[test]
fn test_dashboard_json() {
    let mut session = Session::new(CostCalculator::default());
    run(&mut session, &["+ fridge", "period 10years"]);

    let json = serde_json::to_value(session.calculator().dashboard()).unwrap();
    assert_eq!(json["period"], "decade");
    assert_eq!(json["hours"], 87600.0);
    assert_eq!(json["devices"][0]["id"], "fridge");
    assert_eq!(json["savings_history"].as_array().unwrap().len(), SAVINGS_WINDOW);
}
