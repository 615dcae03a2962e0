//! Display strings
//!
//! The calculator has a single fixed display locale (German).

mod de;

use crate::core::Period;
use std::collections::HashMap;

/// Translation table for the display locale
pub struct I18n {
    translations: HashMap<String, String>,
}

impl I18n {
    pub fn new() -> Self {
        Self {
            translations: de::get_translations(),
        }
    }

    /// Get a translated string by key, or the key itself when missing
    pub fn get(&self, key: &str) -> String {
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    pub fn period_label(&self, period: Period) -> String {
        self.get(&format!("period.{}", period.key()))
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new()
    }
}
