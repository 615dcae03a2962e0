//! German translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "Stromverbrauch & Kosten-Simulation".into());

    // Devices
    t.insert("devices.title".into(), "W\u{00E4}hlen Sie Ger\u{00E4}te".into());
    t.insert("devices.id".into(), "Kennung".into());
    t.insert("devices.name".into(), "Ger\u{00E4}t".into());
    t.insert("devices.yearly_usage".into(), "Durchschnittlicher Verbrauch".into());
    t.insert("devices.rated_power".into(), "Nennleistung".into());
    t.insert("devices.quantity".into(), "Anzahl".into());
    t.insert("devices.units".into(), "Ger\u{00E4}te".into());

    // Metrics
    t.insert(
        "metrics.title".into(),
        "Vergleich zwischen Erneuerbaren und Fossilen Energien".into(),
    );
    t.insert("metrics.total_usage".into(), "Gesamtverbrauch".into());
    t.insert("metrics.period_usage".into(), "Verbrauch im Zeitraum".into());
    t.insert("metrics.renewable_cost".into(), "Stromkosten (Erneuerbare Energie)".into());
    t.insert("metrics.fossil_cost".into(), "Stromkosten (Fossile Energie)".into());
    t.insert("metrics.savings".into(), "Ersparnisse bei Erneuerbarer Energie".into());

    // Chart
    t.insert("chart.title".into(), "Ersparnisse (Erneuerbar vs Fossil)".into());

    // Prices
    t.insert("prices.title".into(), "Energiepreise".into());
    t.insert("prices.renewable".into(), "Erneuerbar".into());
    t.insert("prices.fossil".into(), "Fossil".into());
    t.insert("presets.id".into(), "Vorgabe".into());
    t.insert("presets.tariff".into(), "Tarif".into());
    t.insert("presets.rate".into(), "Preis".into());
    t.insert("presets.active".into(), "aktiv".into());

    // Period
    t.insert("period.title".into(), "Zeitraum".into());
    t.insert("period.month".into(), "1 Monat".into());
    t.insert("period.year".into(), "1 Jahr".into());
    t.insert("period.decade".into(), "10 Jahre".into());

    // Units
    t.insert("unit.kwh".into(), "kWh".into());
    t.insert("unit.kwh_per_hour".into(), "kWh pro Stunde".into());
    t.insert("unit.kwh_per_year".into(), "kWh/Jahr".into());
    t.insert("unit.watts".into(), "W".into());
    t.insert("unit.per_kwh".into(), "/kWh".into());

    // Interactive session
    t.insert("session.prompt".into(), "> ".into());
    t.insert("session.bye".into(), "Auf Wiedersehen".into());
    t.insert("session.error".into(), "Fehler".into());
    t.insert("session.unchanged".into(), "Keine \u{00C4}nderung".into());
    t.insert("help.title".into(), "Befehle".into());
    t.insert(
        "help.add".into(),
        "add|+ <ger\u{00E4}t>        Ein Ger\u{00E4}t hinzuf\u{00FC}gen".into(),
    );
    t.insert("help.remove".into(), "remove|- <ger\u{00E4}t>     Ein Ger\u{00E4}t entfernen".into());
    t.insert("help.period".into(), "period <month|year|decade>  Zeitraum w\u{00E4}hlen".into());
    t.insert("help.preset".into(), "preset <vorgabe>      Preisvorgabe anwenden".into());
    t.insert("help.reset".into(), "reset                 Neu beginnen".into());
    t.insert("help.show".into(), "show                  \u{00DC}bersicht anzeigen".into());
    t.insert("help.devices".into(), "devices               Ger\u{00E4}teliste anzeigen".into());
    t.insert("help.presets".into(), "presets               Preisvorgaben anzeigen".into());
    t.insert("help.quit".into(), "quit                  Beenden".into());

    t
}
