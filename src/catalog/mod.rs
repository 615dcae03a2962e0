//! Device catalog
//!
//! The catalog is fixed once the calculator starts: either the built-in list
//! of household devices or the list given in the configuration file.

use crate::core::{CatalogConfig, DeviceId, DeviceSpec, Error, Result};

/// Ordered, read-only list of devices
#[derive(Debug, Clone)]
pub struct Catalog {
    devices: Vec<DeviceSpec>,
}

impl Catalog {
    /// Built-in household devices (rated power in W, average consumption in kWh per year)
    pub fn builtin() -> Self {
        Self {
            devices: vec![
                DeviceSpec::new("computer", "Computer", Some(200.0), 200.0),
                DeviceSpec::new("fridge", "K\u{00FC}hlschrank", Some(100.0), 70.0),
                DeviceSpec::new("washing_machine", "Waschmaschine", Some(500.0), 150.0),
                DeviceSpec::new("dryer", "Trockner", Some(2500.0), 200.0),
                DeviceSpec::new("dishwasher", "Geschirrsp\u{00FC}ler", Some(1800.0), 250.0),
                DeviceSpec::new("tv", "Fernseher", Some(100.0), 100.0),
                DeviceSpec::new("laptop", "Laptop", Some(50.0), 50.0),
                DeviceSpec::new("microwave", "Mikrowelle", Some(800.0), 40.0),
                DeviceSpec::new("vacuum_cleaner", "Staubsauger", Some(800.0), 30.0),
                DeviceSpec::new("kettle", "Wasserkocher", Some(2000.0), 70.0),
                DeviceSpec::new("coffee_machine", "Kaffeemaschine", Some(800.0), 50.0),
                DeviceSpec::new("toaster", "Toaster", Some(1000.0), 10.0),
                DeviceSpec::new("hair_dryer", "Haartrockner", Some(1200.0), 20.0),
                DeviceSpec::new("heater", "Heizl\u{00FC}fter", Some(2000.0), 200.0),
                DeviceSpec::new("air_conditioner", "Klimaanlage", Some(2000.0), 400.0),
                DeviceSpec::new("stove", "Elektroherd", Some(3000.0), 500.0),
                DeviceSpec::new("oven", "Backofen", Some(2000.0), 300.0),
            ],
        }
    }

    /// Catalog from configuration, or the built-in one when the config lists no devices
    pub fn from_config(config: &CatalogConfig) -> Self {
        if config.devices.is_empty() {
            Self::builtin()
        } else {
            log::debug!("Using {} devices from config", config.devices.len());
            Self {
                devices: config.devices.clone(),
            }
        }
    }

    pub fn get(&self, id: &DeviceId) -> Option<&DeviceSpec> {
        self.devices.iter().find(|device| &device.id == id)
    }

    /// Resolve user input to a catalog id.
    /// Matching ignores case and treats `-` and `_` alike.
    pub fn resolve(&self, input: &str) -> Result<DeviceId> {
        let wanted = DeviceId::match_key(input);
        self.devices
            .iter()
            .find(|device| DeviceId::match_key(device.id.as_str()) == wanted)
            .map(|device| device.id.clone())
            .ok_or_else(|| Error::UnknownDevice(input.trim().to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeviceSpec> {
        self.devices.iter()
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
