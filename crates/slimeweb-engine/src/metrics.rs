//! Per-frame population and timing metrics.
//!
//! [`StepMetrics`] summarizes the most recent `tick()` or `step_frame()`
//! call so a HUD or a headless driver can report population dynamics
//! without walking the particle store.

/// Counters collected across the sub-steps of one frame or tick call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Sub-steps executed.
    pub sub_steps: u32,
    /// Offspring committed across all sub-steps.
    pub births: usize,
    /// Particles removed across all sub-steps.
    pub deaths: usize,
    /// Live population after the last sub-step.
    pub population: usize,
    /// Wall-clock time for the whole call, in microseconds.
    pub total_us: u64,
}

impl StepMetrics {
    /// Net population change over the call.
    pub fn net_growth(&self) -> i64 {
        self.births as i64 - self.deaths as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.sub_steps, 0);
        assert_eq!(m.births, 0);
        assert_eq!(m.deaths, 0);
        assert_eq!(m.population, 0);
        assert_eq!(m.total_us, 0);
    }

    #[test]
    fn net_growth_can_be_negative() {
        let m = StepMetrics {
            births: 2,
            deaths: 5,
            ..StepMetrics::default()
        };
        assert_eq!(m.net_growth(), -3);
    }
}
