//! Error types for roll encoding

use thiserror::Error;

/// Errors that can occur while building or rendering a roll
#[derive(Debug, Error)]
pub enum RollError {
    /// `bins_per_semitone` is zero or too large to size the bin axis
    #[error("bins_per_semitone must be >= 1 and fit the bin axis, got {0}")]
    InvalidBinsPerSemitone(usize),

    /// `smooth_bins` is not a finite, strictly positive number
    #[error("smooth_bins must be finite and > 0, got {0}")]
    InvalidSmoothBins(f32),

    /// An array could not be broadcast to the roll shape
    #[error("cannot broadcast shape {from:?} to {to:?}")]
    Broadcast { from: Vec<usize>, to: Vec<usize> },

    /// A roll must have at least one axis, the trailing bin axis
    #[error("roll has no bin axis")]
    MissingBinAxis,

    /// An array could not be built with the requested shape
    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),

    /// Sweep bounds cannot produce positive frequencies
    #[error("invalid sweep: {0}")]
    InvalidSweep(String),

    /// Drawing the roll failed
    #[error("plot error: {0}")]
    Plot(String),
}
