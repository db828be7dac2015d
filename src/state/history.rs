//! Append-only time series of the current run.

use super::simulation::SimulationState;

/// One (biomass, substrate) pair recorded after a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistorySample {
    pub biomass_g_per_L: f64,
    pub substrate_g_per_L: f64,
}

impl From<SimulationState> for HistorySample {
    fn from(state: SimulationState) -> Self {
        Self {
            biomass_g_per_L: state.biomass_g_per_L,
            substrate_g_per_L: state.substrate_g_per_L,
        }
    }
}

/// Samples since the last reset, oldest first
///
/// Grows without bound while a run continues; the plot decides how much of it
/// to show.
#[derive(Debug, Clone, Default)]
pub struct HistoryBuffer {
    samples: Vec<HistorySample>,
    /// Running max of both series, kept in step with `samples`
    peak: f64,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, sample: HistorySample) {
        self.peak = self.peak.max(sample.biomass_g_per_L.max(sample.substrate_g_per_L));
        self.samples.push(sample);
    }

    pub fn clear(&mut self) {
        self.samples.clear();
        self.peak = 0.0;
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[HistorySample] {
        &self.samples
    }

    pub fn last(&self) -> Option<&HistorySample> {
        self.samples.last()
    }

    /// Largest value across both series (0 when empty)
    pub fn peak(&self) -> f64 {
        self.peak
    }
}
