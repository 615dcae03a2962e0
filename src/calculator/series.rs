//! Rolling window of recent savings values

/// Number of values kept for the trend chart
pub const SAVINGS_WINDOW: usize = 6;

/// Fixed-size FIFO of savings values, oldest first
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavingsSeries {
    values: [f64; SAVINGS_WINDOW],
}

impl SavingsSeries {
    pub fn new() -> Self {
        Self {
            values: [0.0; SAVINGS_WINDOW],
        }
    }

    /// Append a value at the tail, evicting the oldest one
    pub fn push(&mut self, savings: f64) {
        self.values.rotate_left(1);
        self.values[SAVINGS_WINDOW - 1] = savings;
    }

    pub fn values(&self) -> &[f64; SAVINGS_WINDOW] {
        &self.values
    }

    pub fn latest(&self) -> f64 {
        self.values[SAVINGS_WINDOW - 1]
    }

    /// Fixed x-axis labels "0".."5"
    pub fn labels() -> [String; SAVINGS_WINDOW] {
        std::array::from_fn(|index| index.to_string())
    }

    pub fn reset(&mut self) {
        self.values = [0.0; SAVINGS_WINDOW];
    }
}

impl Default for SavingsSeries {
    fn default() -> Self {
        Self::new()
    }
}
