use ndarray::{Array, ArrayBase, Data, Dimension};

use crate::constants::{REFERENCE_FREQUENCY, REFERENCE_PITCH, SEMITONES_PER_OCTAVE};

/// Converts a frequency in Hz to the corresponding pitch, with 440 Hz at pitch 60.
///
/// # Arguments
///
/// * `freq` - A frequency in Hz. Must be strictly positive; zero gives `-inf`
///   and negative values give `NaN`. No clamping is performed.
///
/// # Returns
///
/// * The corresponding pitch.
pub fn freq_to_pitch(freq: f32) -> f32 {
    SEMITONES_PER_OCTAVE * (freq / REFERENCE_FREQUENCY).log2() + REFERENCE_PITCH
}

/// Converts a pitch to the corresponding frequency in Hz.
///
/// # Arguments
///
/// * `pitch` - A pitch, with 60 at 440 Hz.
///
/// # Returns
///
/// * The corresponding frequency in Hz.
pub fn pitch_to_freq(pitch: f32) -> f32 {
    REFERENCE_FREQUENCY * 2.0f32.powf((pitch - REFERENCE_PITCH) / SEMITONES_PER_OCTAVE)
}

/// Element-wise [`freq_to_pitch`] over an array of any shape.
pub fn freq_to_pitch_array<S, D>(freq: &ArrayBase<S, D>) -> Array<f32, D>
where
    S: Data<Elem = f32>,
    D: Dimension,
{
    freq.mapv(freq_to_pitch)
}

/// Element-wise [`pitch_to_freq`] over an array of any shape.
pub fn pitch_to_freq_array<S, D>(pitch: &ArrayBase<S, D>) -> Array<f32, D>
where
    S: Data<Elem = f32>,
    D: Dimension,
{
    pitch.mapv(pitch_to_freq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{arr1, arr2};

    #[test]
    fn reference_frequency_maps_to_sixty() {
        assert_abs_diff_eq!(freq_to_pitch(440.0), 60.0, epsilon = 1e-6);
        assert_abs_diff_eq!(pitch_to_freq(60.0), 440.0, epsilon = 1e-4);
    }

    #[test]
    fn octave_is_twelve_semitones() {
        assert_abs_diff_eq!(freq_to_pitch(880.0), 72.0, epsilon = 1e-5);
        assert_abs_diff_eq!(freq_to_pitch(220.0), 48.0, epsilon = 1e-5);
        assert_abs_diff_eq!(pitch_to_freq(84.0), 1760.0, epsilon = 1e-2);
    }

    #[test]
    fn conversions_are_inverse() {
        for pitch in [-30.0f32, 0.0, 12.5, 60.0, 99.9, 127.0, 200.0] {
            assert_abs_diff_eq!(freq_to_pitch(pitch_to_freq(pitch)), pitch, epsilon = 1e-3);
        }
        for freq in [8.0f32, 27.5, 200.0, 440.0, 2999.0, 12_000.0] {
            let back = pitch_to_freq(freq_to_pitch(freq));
            assert_abs_diff_eq!(back / freq, 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn non_positive_frequency_is_not_finite() {
        assert_eq!(freq_to_pitch(0.0), f32::NEG_INFINITY);
        assert!(freq_to_pitch(-440.0).is_nan());
    }

    #[test]
    fn array_conversion_keeps_shape_and_input() {
        let freq = arr2(&[[440.0f32, 880.0], [220.0, 110.0]]);
        let pitch = freq_to_pitch_array(&freq);

        assert_eq!(pitch.shape(), &[2, 2]);
        assert_abs_diff_eq!(pitch[[0, 1]], 72.0, epsilon = 1e-5);
        assert_abs_diff_eq!(pitch[[1, 1]], 36.0, epsilon = 1e-5);
        assert_eq!(freq[[0, 0]], 440.0);

        let back = pitch_to_freq_array(&pitch);
        for (&a, &b) in back.iter().zip(freq.iter()) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-2);
        }
    }

    #[test]
    fn array_conversion_matches_scalar() {
        let pitch = arr1(&[59.5f32, 61.25, 70.0]);
        let freq = pitch_to_freq_array(&pitch);
        for (&f, &p) in freq.iter().zip(pitch.iter()) {
            assert_eq!(f, pitch_to_freq(p));
        }
    }
}
