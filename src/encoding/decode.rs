use ndarray::{Array, ArrayBase, Axis, Data, Dimension, RemoveAxis};

use crate::error::RollError;

use super::helpers::ported::numpy::arg_max;

fn bin_axis<S, D>(roll: &ArrayBase<S, D>) -> Result<Axis, RollError>
where
    S: Data<Elem = f32>,
    D: Dimension,
{
    match roll.ndim() {
        0 => Err(RollError::MissingBinAxis),
        n => Ok(Axis(n - 1)),
    }
}

/// Returns the most active bin of every roll row.
///
/// # Arguments
///
/// * `roll` - Roll of shape S + (f,).
///
/// # Returns
///
/// * An array of shape S with the peak bin of each row, or `None` where the row is silent.
pub fn peak_bins<S, D>(
    roll: &ArrayBase<S, D>,
) -> Result<Array<Option<usize>, D::Smaller>, RollError>
where
    S: Data<Elem = f32>,
    D: Dimension + RemoveAxis,
{
    let axis = bin_axis(roll)?;
    Ok(roll.map_axis(axis, |row| {
        arg_max(row.iter()).filter(|&bin| row[bin] > 0.0)
    }))
}

/// Recovers the pitch of every roll row from its activation-weighted centroid.
///
/// For a pulse that lies entirely inside the bin range and has an integer half-width
/// this returns the encoded pitch, up to rounding. Clipped pulses are biased toward the range.
///
/// # Arguments
///
/// * `roll` - Roll of shape S + (f,).
/// * `bins_per_semitone` - Resolution the roll was encoded with.
///
/// # Returns
///
/// * An array of shape S with the pitch of each row, or `None` where the row is silent.
pub fn roll_to_pitch<S, D>(
    roll: &ArrayBase<S, D>,
    bins_per_semitone: usize,
) -> Result<Array<Option<f32>, D::Smaller>, RollError>
where
    S: Data<Elem = f32>,
    D: Dimension + RemoveAxis,
{
    if bins_per_semitone == 0 {
        return Err(RollError::InvalidBinsPerSemitone(bins_per_semitone));
    }
    let axis = bin_axis(roll)?;
    let scale = bins_per_semitone as f32;

    Ok(roll.map_axis(axis, |row| {
        let (weighted, total) = row
            .iter()
            .enumerate()
            .fold((0.0f32, 0.0f32), |(weighted, total), (bin, &value)| {
                (weighted + bin as f32 * value, total + value)
            });

        if total > 0.0 {
            Some(weighted / total / scale)
        } else {
            None
        }
    }))
}
