use crate::config::RollConfig;

/// Value of the triangular kernel at a bin.
///
/// # Arguments
///
/// * `bin` - Bin index.
/// * `center` - Kernel center, in bins.
/// * `smooth_bins` - Half-width of the kernel, in bins.
///
/// # Returns
///
/// * `max(0, 1 - |bin - center| / smooth_bins)`, which is 1 at the center and 0 from
///   `smooth_bins` bins away on either side.
pub fn tent(bin: f32, center: f32, smooth_bins: f32) -> f32 {
    (1.0 - (bin - center).abs() / smooth_bins).max(0.0).min(1.0)
}

/// Computes one roll row for a single pitch value, bin by bin.
///
/// # Arguments
///
/// * `pitch` - Pitch value.
/// * `config` - Roll configuration. Assumed valid.
///
/// # Returns
///
/// * A row of `config.n_bins()` activations in `[0, 1]`.
pub fn tent_row(pitch: f32, config: &RollConfig) -> Vec<f32> {
    let center = pitch * config.bins_per_semitone as f32;
    (0..config.n_bins())
        .map(|bin| tent(bin as f32, center, config.smooth_bins))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tent_peaks_at_center_and_vanishes_at_half_width() {
        assert_eq!(tent(10.0, 10.0, 2.0), 1.0);
        assert_eq!(tent(9.0, 10.0, 2.0), 0.5);
        assert_eq!(tent(11.0, 10.0, 2.0), 0.5);
        assert_eq!(tent(8.0, 10.0, 2.0), 0.0);
        assert_eq!(tent(13.0, 10.0, 2.0), 0.0);
    }

    #[test]
    fn row_is_scaled_by_resolution() {
        let config = RollConfig::new(2, 1.0).unwrap();
        let row = tent_row(60.0, &config);
        assert_eq!(row.len(), 256);
        assert_eq!(row[120], 1.0);
        assert_eq!(row.iter().filter(|&&v| v > 0.0).count(), 1);
    }

    #[test]
    fn nan_pitch_gives_a_silent_row() {
        let row = tent_row(f32::NAN, &RollConfig::default());
        assert!(row.iter().all(|&v| v == 0.0));
    }
}
