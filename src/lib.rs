//! # Pitch Roll
//!
//! Converts a pitch track into a soft piano roll: one triangular pulse per frame over
//! `128 * bins_per_semitone` pitch bins, plus the frequency/pitch conversions used to
//! prepare the input. Pitch 60 is 440 Hz.
//!
//! ```
//! use ndarray::arr1;
//! use pitch_roll::{conversion::freq_to_pitch_array, encoding::roll::pitch_to_roll, RollConfig};
//!
//! let pitch = freq_to_pitch_array(&arr1(&[440.0f32, 880.0]));
//! let roll = pitch_to_roll(&pitch, &RollConfig::default())?;
//! assert_eq!(roll.shape(), &[2, 128]);
//! # Ok::<(), pitch_roll::RollError>(())
//! ```

pub mod config;
pub mod constants;
pub mod conversion;
pub mod error;
pub mod sweep;
pub mod encoding {
    pub mod helpers {
        pub mod ported {
            pub mod numpy;
        }
    }
    pub mod decode;
    pub mod kernel;
    pub mod roll;
}
pub mod render {
    pub mod plot;
}

pub use config::RollConfig;
pub use error::RollError;
