//! Synthetic frequency sweeps used as demo input

use ndarray::Array1;

use crate::constants::{SWEEP_MAX_FREQ, SWEEP_MIN_FREQ, SWEEP_STEP};
use crate::error::RollError;

/// A linear frequency sweep, one frequency per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    /// First frequency in Hz (default: 200.0)
    pub min_freq: f32,

    /// Upper bound in Hz, excluded (default: 3000.0)
    pub max_freq: f32,

    /// Increment per frame in Hz (default: 20.0)
    pub step: f32,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            min_freq: SWEEP_MIN_FREQ,
            max_freq: SWEEP_MAX_FREQ,
            step: SWEEP_STEP,
        }
    }
}

/// Builds `min_freq, min_freq + step, ...` up to but excluding `max_freq`.
///
/// # Errors
///
/// Returns `RollError::InvalidSweep` unless `min_freq > 0` and `step > 0`, both finite.
pub fn frequency_sweep(config: &SweepConfig) -> Result<Array1<f32>, RollError> {
    let SweepConfig { min_freq, max_freq, step } = *config;

    if !(min_freq.is_finite() && min_freq > 0.0) {
        return Err(RollError::InvalidSweep(format!("min_freq must be > 0, got {}", min_freq)));
    }
    if !(step.is_finite() && step > 0.0) {
        return Err(RollError::InvalidSweep(format!("step must be > 0, got {}", step)));
    }

    Ok((0..)
        .map(|i| min_freq + i as f32 * step)
        .take_while(|&freq| freq < max_freq)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sweep_matches_demo_range() {
        let sweep = frequency_sweep(&SweepConfig::default()).unwrap();
        assert_eq!(sweep.len(), 140);
        assert_eq!(sweep[0], 200.0);
        assert_eq!(sweep[139], 2980.0);
    }

    #[test]
    fn empty_when_max_not_above_min() {
        let config = SweepConfig { min_freq: 500.0, max_freq: 500.0, step: 10.0 };
        assert!(frequency_sweep(&config).unwrap().is_empty());
    }

    #[test]
    fn rejects_bad_bounds() {
        let zero_step = SweepConfig { step: 0.0, ..SweepConfig::default() };
        let zero_freq = SweepConfig { min_freq: 0.0, ..SweepConfig::default() };
        assert!(matches!(frequency_sweep(&zero_step), Err(RollError::InvalidSweep(_))));
        assert!(matches!(frequency_sweep(&zero_freq), Err(RollError::InvalidSweep(_))));
    }
}
