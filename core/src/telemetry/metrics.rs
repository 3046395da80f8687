use serde::Serialize;

/// Counters describing one assembly run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AssemblyMetrics {
    pub fixed_entries: usize,
    pub sensor_entries: usize,
    pub skipped_slots: usize,
    pub custom_labels: usize,
}

impl AssemblyMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_fixed(&mut self) {
        self.fixed_entries += 1;
    }

    pub fn record_sensor_entry(&mut self) {
        self.sensor_entries += 1;
    }

    pub fn record_skipped(&mut self) {
        self.skipped_slots += 1;
    }

    pub fn record_custom_label(&mut self) {
        self.custom_labels += 1;
    }

    pub fn total_entries(&self) -> usize {
        self.fixed_entries + self.sensor_entries
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
