//! Chosen quantity per device

use crate::core::DeviceId;
use std::collections::BTreeMap;

/// Device quantities. Devices with quantity zero have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    quantities: BTreeMap<DeviceId, u32>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit, returning the new quantity
    pub fn increment(&mut self, id: &DeviceId) -> u32 {
        let quantity = self.quantities.entry(id.clone()).or_insert(0);
        *quantity = quantity.saturating_add(1);
        *quantity
    }

    /// Remove one unit if any is selected.
    /// Returns the new quantity, or `None` when there was nothing to remove.
    pub fn decrement(&mut self, id: &DeviceId) -> Option<u32> {
        let quantity = self.quantities.get_mut(id)?;
        *quantity -= 1;
        let remaining = *quantity;
        if remaining == 0 {
            self.quantities.remove(id);
        }
        Some(remaining)
    }

    pub fn quantity(&self, id: &DeviceId) -> u32 {
        self.quantities.get(id).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DeviceId, u32)> {
        self.quantities.iter().map(|(id, quantity)| (id, *quantity))
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    pub fn clear(&mut self) {
        self.quantities.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_creates_entry() {
        let mut selection = Selection::new();
        let tv = DeviceId::new("tv");

        assert_eq!(selection.quantity(&tv), 0);
        assert_eq!(selection.increment(&tv), 1);
        assert_eq!(selection.increment(&tv), 2);
        assert_eq!(selection.quantity(&tv), 2);
    }

    #[test]
    fn test_decrement_never_goes_negative() {
        let tv = DeviceId::new("tv");

        for start in 0..5u32 {
            let mut selection = Selection::new();
            for _ in 0..start {
                selection.increment(&tv);
            }
            for _ in 0..start {
                assert!(selection.decrement(&tv).is_some());
            }
            assert_eq!(selection.decrement(&tv), None);
            assert_eq!(selection.quantity(&tv), 0);
        }
    }

    #[test]
    fn test_zero_quantity_is_absent() {
        let mut selection = Selection::new();
        let kettle = DeviceId::new("kettle");

        selection.increment(&kettle);
        assert_eq!(selection.decrement(&kettle), Some(0));
        assert!(selection.is_empty());
        assert_eq!(selection.iter().count(), 0);
    }
}
