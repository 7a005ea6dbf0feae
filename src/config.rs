//! Configuration parameters for roll encoding

use crate::constants::{DEFAULT_BINS_PER_SEMITONE, DEFAULT_SMOOTH_BINS, N_SEMITONES};
use crate::error::RollError;

/// Roll encoding configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollConfig {
    /// Number of bins per semitone (default: 1)
    /// The roll spans 128 semitones, so it has `128 * bins_per_semitone` bins
    pub bins_per_semitone: usize,

    /// Half-width of the triangular kernel, in bins (default: 1.0)
    pub smooth_bins: f32,
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            bins_per_semitone: DEFAULT_BINS_PER_SEMITONE,
            smooth_bins: DEFAULT_SMOOTH_BINS,
        }
    }
}

impl RollConfig {
    /// Build a validated configuration.
    pub fn new(bins_per_semitone: usize, smooth_bins: f32) -> Result<Self, RollError> {
        let config = Self {
            bins_per_semitone,
            smooth_bins,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the preconditions the encoder relies on.
    pub fn validate(&self) -> Result<(), RollError> {
        if self.bins_per_semitone == 0
            || N_SEMITONES.checked_mul(self.bins_per_semitone).is_none()
        {
            return Err(RollError::InvalidBinsPerSemitone(self.bins_per_semitone));
        }
        if !self.smooth_bins.is_finite() || self.smooth_bins <= 0.0 {
            return Err(RollError::InvalidSmoothBins(self.smooth_bins));
        }
        Ok(())
    }

    /// Size of the trailing bin axis.
    pub fn n_bins(&self) -> usize {
        N_SEMITONES * self.bins_per_semitone
    }
}
